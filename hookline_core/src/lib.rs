//! `hookline_core` is the core library for hookline, a toolkit for filling
//! copywriting templates and browsing a library of copywriting hooks. It
//! extracts placeholders from template text, proposes example values for
//! them, renders templates with user supplied values and answers queries over
//! a hook library.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Template text
//!   → Extractor (finds `{name}` / `{{name}}` placeholders, first-seen order)
//!   → Synthesizer (proposes preview values from an ordered rule table)
//!   → Renderer (substitutes values, then re-flows the copy for reading)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `hookline.toml`: placeholder
//!   syntax, missing variable policy, layout and hook library path.
//!
//! ## Key Types
//!
//! - [`PlaceholderSyntax`]: Single (`{name}`) or double (`{{name}}`) brace
//!   placeholders, with [`migrate`] converting between them.
//! - [`Renderer`]: Substitutes values according to a [`MissingPolicy`] and
//!   [`Layout`].
//! - [`Template`]: Named template content tagged with a [`TemplateKind`].
//! - [`HookLibrary`]: Read-only, explicitly constructed collection of
//!   [`Hook`]s.
//! - [`Coverage`]: Which variables a set of values leaves missing or unused.
//!
//! Values usually come from `name=value` assignments ([`parse_assignment`]) or
//! a flat JSON object ([`load_values`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use hookline_core::HookCategory;
//! use hookline_core::HookLibrary;
//! use hookline_core::PlaceholderSyntax;
//! use hookline_core::extract_variables;
//! use hookline_core::render;
//!
//! let template = "Olá {nome}, sua oferta de {desconto}% expira em {prazo}";
//! assert_eq!(
//! 	extract_variables(template, PlaceholderSyntax::Single),
//! 	["nome", "desconto", "prazo"]
//! );
//!
//! let values = HashMap::from([
//! 	("nome".to_string(), "Ana".to_string()),
//! 	("desconto".to_string(), "50".to_string()),
//! 	("prazo".to_string(), "hoje".to_string()),
//! ]);
//! assert_eq!(
//! 	render(template, &values),
//! 	"Olá Ana, sua oferta de 50% expira em hoje"
//! );
//!
//! let library = HookLibrary::builtin();
//! let urgent = library.by_category(HookCategory::Urgency);
//! assert!(urgent.iter().all(|hook| hook.category == HookCategory::Urgency));
//! ```

pub use config::*;
pub use coverage::*;
pub use error::*;
pub use example::*;
pub use extract::*;
pub use hooks::*;
pub use render::*;
pub use syntax::*;
pub use template::*;
pub use values::*;

mod builtin_hooks;
pub mod config;
mod coverage;
#[allow(unused_assignments)]
mod error;
mod example;
mod extract;
mod hooks;
mod render;
mod syntax;
mod template;
mod values;

#[cfg(test)]
mod __fixtures;
