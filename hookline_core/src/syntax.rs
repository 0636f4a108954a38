use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Captures;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use crate::HooklineError;

static SINGLE_BRACE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\{([^}]+)\}").unwrap_or_else(|e| panic!("{e}")));
static DOUBLE_BRACE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").unwrap_or_else(|e| panic!("{e}")));
/// Single brace placeholders outside of double brace ones. Group 1 only
/// captures for single brace matches.
static SINGLE_BRACE_OUTSIDE_DOUBLE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\{\{[^}]+\}\}|\{([^}]+)\}").unwrap_or_else(|e| panic!("{e}"))
});

/// The spelling used for placeholders inside template text.
///
/// Two syntaxes exist in stored content: the legacy single brace form used by
/// the hook library and copy templates (`{nome}`) and the double brace form
/// used by email templates (`{{ userName }}`). Double braces are canonical;
/// [`migrate`] converts between the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderSyntax {
	/// `{name}`
	Single,
	/// `{{name}}` with optional whitespace inside the braces.
	#[default]
	Double,
}

impl PlaceholderSyntax {
	pub(crate) fn pattern(self) -> &'static Regex {
		match self {
			Self::Single => &SINGLE_BRACE,
			Self::Double => &DOUBLE_BRACE,
		}
	}

	/// Extract the variable name from a pattern match. Double brace names are
	/// trimmed so `{{ name }}` and `{{name}}` refer to the same variable.
	pub(crate) fn name_from<'h>(self, captures: &Captures<'h>) -> &'h str {
		let name = captures.get(1).map_or("", |m| m.as_str());
		match self {
			Self::Single => name,
			Self::Double => name.trim(),
		}
	}

	/// Spell out a placeholder for `name` in this syntax.
	pub fn placeholder(self, name: &str) -> String {
		match self {
			Self::Single => format!("{{{name}}}"),
			Self::Double => format!("{{{{{name}}}}}"),
		}
	}

	/// Guess the syntax used by `text`. Any double brace placeholder makes
	/// the whole text double brace.
	pub fn detect(text: &str) -> Self {
		if DOUBLE_BRACE.is_match(text) {
			Self::Double
		} else {
			Self::Single
		}
	}
}

impl Display for PlaceholderSyntax {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Single => write!(f, "single"),
			Self::Double => write!(f, "double"),
		}
	}
}

impl FromStr for PlaceholderSyntax {
	type Err = HooklineError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"single" => Ok(Self::Single),
			"double" => Ok(Self::Double),
			other => Err(HooklineError::UnknownSyntax(other.to_string())),
		}
	}
}

/// Rewrite every placeholder recognized under `from` into the `to` spelling.
/// Text outside of placeholders is left untouched, and so are double brace
/// placeholders when migrating from single braces, which makes mixed files
/// safe to migrate in either direction.
pub fn migrate(text: &str, from: PlaceholderSyntax, to: PlaceholderSyntax) -> String {
	if from == to {
		return text.to_string();
	}

	let pattern: &Regex = match from {
		PlaceholderSyntax::Single => &SINGLE_BRACE_OUTSIDE_DOUBLE,
		PlaceholderSyntax::Double => from.pattern(),
	};

	pattern
		.replace_all(text, |captures: &Captures<'_>| {
			if captures.get(1).is_none() {
				return captures[0].to_string();
			}
			to.placeholder(from.name_from(captures))
		})
		.into_owned()
}
