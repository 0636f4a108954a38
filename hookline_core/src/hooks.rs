use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use derive_more::Deref;
use serde::Deserialize;
use serde::Serialize;

use crate::HooklineError;
use crate::HooklineResult;
use crate::PlaceholderSyntax;
use crate::builtin_hooks::BUILTIN_HOOKS;
use crate::example::fold_accents;
use crate::extract_variables;
use crate::render;

/// The rhetorical family a hook belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookCategory {
	#[serde(rename = "Curiosidade")]
	Curiosity,
	#[serde(rename = "Autoridade")]
	Authority,
	#[serde(rename = "Urgência")]
	Urgency,
	#[serde(rename = "Storytelling")]
	Storytelling,
	#[serde(rename = "Prova Social")]
	SocialProof,
}

impl HookCategory {
	/// Every category in display order.
	pub const ALL: [HookCategory; 5] = [
		Self::Curiosity,
		Self::Authority,
		Self::Urgency,
		Self::Storytelling,
		Self::SocialProof,
	];

	/// The label shown to users, e.g. `Prova Social`.
	pub fn label(self) -> &'static str {
		match self {
			Self::Curiosity => "Curiosidade",
			Self::Authority => "Autoridade",
			Self::Urgency => "Urgência",
			Self::Storytelling => "Storytelling",
			Self::SocialProof => "Prova Social",
		}
	}
}

impl Display for HookCategory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.label())
	}
}

impl FromStr for HookCategory {
	type Err = HooklineError;

	/// Accepts the label in any case, with or without accents, and with `-`
	/// or `_` in place of spaces: `Urgência`, `urgencia`, `prova-social`.
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let wanted = normalize_category(value);
		Self::ALL
			.into_iter()
			.find(|category| normalize_category(category.label()) == wanted)
			.ok_or_else(|| HooklineError::UnknownCategory(value.to_string()))
	}
}

fn normalize_category(value: &str) -> String {
	fold_accents(&value.trim().to_lowercase()).replace(['-', '_'], " ")
}

/// A reusable opening line formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
	pub id: String,
	pub category: HookCategory,
	/// The formula with single brace placeholders, e.g. `Só até {data}`.
	pub text: String,
	/// The formula filled in with realistic values.
	pub example: String,
	#[serde(default)]
	pub tags: Vec<String>,
}

impl Hook {
	/// The placeholders in the hook's formula.
	pub fn variables(&self) -> Vec<String> {
		extract_variables(&self.text, PlaceholderSyntax::Single)
	}

	/// Fill the formula with `values`, leaving unknown placeholders in place.
	#[allow(clippy::implicit_hasher)]
	pub fn fill(&self, values: &HashMap<String, String>) -> String {
		render(&self.text, values)
	}

	fn matches_query(&self, query: &str) -> bool {
		self.text.to_lowercase().contains(query)
			|| self.example.to_lowercase().contains(query)
			|| self.tags.iter().any(|tag| tag.to_lowercase().contains(query))
	}
}

/// Read-only collection of hooks.
///
/// The library is an ordinary value: construct the bundled one with
/// [`HookLibrary::builtin`], load one from disk with [`HookLibrary::load`], or
/// build one from any list of hooks. All queries preserve insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct HookLibrary(Vec<Hook>);

impl HookLibrary {
	pub fn new(hooks: Vec<Hook>) -> Self {
		Self(hooks)
	}

	/// The hooks that ship with hookline.
	pub fn builtin() -> Self {
		let hooks = BUILTIN_HOOKS
			.iter()
			.map(|record| {
				Hook {
					id: record.id.to_string(),
					category: record.category,
					text: record.text.to_string(),
					example: record.example.to_string(),
					tags: record.tags.iter().map(ToString::to_string).collect(),
				}
			})
			.collect();

		Self(hooks)
	}

	/// Load a library from a JSON, TOML or YAML file. JSON and YAML files hold
	/// a list of hooks; TOML files hold a `[[hooks]]` array of tables.
	pub fn load(path: &Path) -> HooklineResult<Self> {
		let display = path.display().to_string();
		let content = std::fs::read_to_string(path).map_err(|e| {
			HooklineError::HookLibrary {
				path: display.clone(),
				reason: e.to_string(),
			}
		})?;
		let format = path
			.extension()
			.and_then(|e| e.to_str())
			.unwrap_or("")
			.to_ascii_lowercase();

		let hooks = parse_library(&content, &format, &display)?;
		let mut seen = HashSet::new();
		for hook in &hooks {
			if !seen.insert(hook.id.as_str()) {
				return Err(HooklineError::DuplicateHook {
					id: hook.id.clone(),
					path: display,
				});
			}
		}

		let path = &display;
		tracing::debug!(path = %path, hooks = hooks.len(), "loaded hook library");
		Ok(Self(hooks))
	}

	/// Every hook in `category`.
	pub fn by_category(&self, category: HookCategory) -> Vec<&Hook> {
		self.0
			.iter()
			.filter(|hook| hook.category == category)
			.collect()
	}

	/// Hooks whose formula, example or any tag contains `query`, ignoring
	/// case. An empty query matches every hook.
	pub fn search(&self, query: &str) -> Vec<&Hook> {
		let query = query.to_lowercase();
		self.0
			.iter()
			.filter(|hook| hook.matches_query(&query))
			.collect()
	}

	pub fn get(&self, id: &str) -> Option<&Hook> {
		self.0.iter().find(|hook| hook.id == id)
	}

	/// The categories present in the library, in display order.
	pub fn categories(&self) -> Vec<HookCategory> {
		HookCategory::ALL
			.into_iter()
			.filter(|category| self.0.iter().any(|hook| hook.category == *category))
			.collect()
	}

	pub fn into_inner(self) -> Vec<Hook> {
		self.0
	}
}

#[derive(Deserialize)]
struct TomlLibrary {
	#[serde(default)]
	hooks: Vec<Hook>,
}

fn parse_library(content: &str, format: &str, path_display: &str) -> HooklineResult<Vec<Hook>> {
	let library_error = |reason: String| {
		HooklineError::HookLibrary {
			path: path_display.to_string(),
			reason,
		}
	};

	match format {
		"json" => serde_json::from_str(content).map_err(|e| library_error(e.to_string())),
		"toml" => {
			toml::from_str::<TomlLibrary>(content)
				.map(|library| library.hooks)
				.map_err(|e| library_error(e.to_string()))
		}
		"yaml" | "yml" => serde_yaml_ng::from_str(content).map_err(|e| library_error(e.to_string())),
		other => Err(HooklineError::UnsupportedLibraryFormat(other.to_string())),
	}
}
