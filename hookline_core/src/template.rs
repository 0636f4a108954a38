use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::HooklineError;
use crate::HooklineResult;
use crate::PlaceholderSyntax;
use crate::extract_variables;

/// The channel a template was written for. Used as a hint when proposing
/// example values and campaign briefs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
	#[default]
	Social,
	Email,
	Ad,
	Blog,
	Landing,
}

impl Display for TemplateKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Social => "social",
			Self::Email => "email",
			Self::Ad => "ad",
			Self::Blog => "blog",
			Self::Landing => "landing",
		};
		write!(f, "{name}")
	}
}

impl FromStr for TemplateKind {
	type Err = HooklineError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"social" => Ok(Self::Social),
			"email" => Ok(Self::Email),
			"ad" => Ok(Self::Ad),
			"blog" => Ok(Self::Blog),
			"landing" => Ok(Self::Landing),
			other => Err(HooklineError::UnknownTemplateKind(other.to_string())),
		}
	}
}

/// A block of marketing copy with zero or more placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
	pub name: String,
	#[serde(default)]
	pub kind: TemplateKind,
	pub content: String,
}

impl Template {
	pub fn new(name: impl Into<String>, kind: TemplateKind, content: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind,
			content: content.into(),
		}
	}

	/// Read a template from disk. The file stem becomes the template name.
	pub fn read(path: &Path, kind: TemplateKind) -> HooklineResult<Self> {
		if !path.is_file() {
			return Err(HooklineError::TemplateNotFound(path.display().to_string()));
		}

		let content = std::fs::read_to_string(path)?;
		let name = path
			.file_stem()
			.and_then(|stem| stem.to_str())
			.unwrap_or_default()
			.to_string();

		Ok(Self::new(name, kind, content))
	}

	/// The syntax the content appears to be written in.
	pub fn syntax(&self) -> PlaceholderSyntax {
		PlaceholderSyntax::detect(&self.content)
	}

	pub fn variables(&self, syntax: PlaceholderSyntax) -> Vec<String> {
		extract_variables(&self.content, syntax)
	}
}
