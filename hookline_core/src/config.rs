use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::HookLibrary;
use crate::HooklineError;
use crate::HooklineResult;
use crate::Layout;
use crate::MissingPolicy;
use crate::PlaceholderSyntax;
use crate::Renderer;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"hookline.toml",
	".hookline.toml",
	".config/hookline.toml",
];

/// Configuration loaded from a `hookline.toml` file.
///
/// ```toml
/// [placeholders]
/// syntax = "double"
/// missing = "keep"
///
/// [render]
/// layout = "reflow"
///
/// [hooks]
/// path = "hooks.yaml"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct HooklineConfig {
	/// Placeholder spelling and the policy for placeholders without values.
	#[serde(default)]
	pub placeholders: PlaceholdersConfig,
	/// Post-processing applied to rendered output.
	#[serde(default)]
	pub render: RenderConfig,
	/// Where to load the hook library from.
	#[serde(default)]
	pub hooks: HooksConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaceholdersConfig {
	/// Syntax used when a command is not told otherwise. When unset the syntax
	/// is detected from each template.
	#[serde(default)]
	pub syntax: Option<PlaceholderSyntax>,
	/// Defaults to `keep`.
	#[serde(default)]
	pub missing: MissingPolicy,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderConfig {
	#[serde(default)]
	pub layout: Layout,
}

#[derive(Debug, Default, Deserialize)]
pub struct HooksConfig {
	/// A JSON, TOML or YAML hook library relative to the config root. When
	/// absent the bundled library is used.
	#[serde(default)]
	pub path: Option<PathBuf>,
}

impl HooklineConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> HooklineResult<Option<HooklineConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			tracing::debug!(root = %root.display(), "no config file found");
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: HooklineConfig =
			toml::from_str(&content).map_err(|e| HooklineError::ConfigParse(e.to_string()))?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// The configured syntax, falling back to what `content` is written in.
	pub fn syntax_for(&self, content: &str) -> PlaceholderSyntax {
		self.placeholders
			.syntax
			.unwrap_or_else(|| PlaceholderSyntax::detect(content))
	}

	/// The renderer described by the `[placeholders]` and `[render]` tables.
	/// An unset syntax renders double brace placeholders.
	pub fn renderer(&self) -> Renderer {
		Renderer::new(self.placeholders.syntax.unwrap_or_default())
			.with_missing(self.placeholders.missing)
			.with_layout(self.render.layout)
	}

	/// The configured hook library, or the bundled one when none is set.
	pub fn hook_library(&self, root: &Path) -> HooklineResult<HookLibrary> {
		match &self.hooks.path {
			Some(path) => HookLibrary::load(&root.join(path)),
			None => Ok(HookLibrary::builtin()),
		}
	}
}
