use std::collections::HashMap;
use std::collections::HashSet;

use serde::Serialize;

use crate::PlaceholderSyntax;
use crate::extract_variables;

/// How well a set of values covers the variables of a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Coverage {
	/// Variables without a non-blank value, in first-seen order.
	pub missing: Vec<String>,
	/// Supplied keys the template never references, sorted.
	pub unused: Vec<String>,
}

impl Coverage {
	/// Returns true when every variable has a value. Unused keys do not count
	/// against coverage.
	pub fn is_complete(&self) -> bool {
		self.missing.is_empty()
	}

	/// Returns true if any supplied key is not referenced by the template.
	pub fn has_unused(&self) -> bool {
		!self.unused.is_empty()
	}
}

/// Compare the variables referenced by `text` with the supplied `values`.
#[allow(clippy::implicit_hasher)]
pub fn check_coverage(
	text: &str,
	values: &HashMap<String, String>,
	syntax: PlaceholderSyntax,
) -> Coverage {
	let variables = extract_variables(text, syntax);

	let missing = variables
		.iter()
		.filter(|name| {
			values
				.get(name.as_str())
				.is_none_or(|value| value.trim().is_empty())
		})
		.cloned()
		.collect();

	let referenced: HashSet<&str> = variables.iter().map(String::as_str).collect();
	let mut unused: Vec<String> = values
		.keys()
		.filter(|key| !referenced.contains(key.as_str()))
		.cloned()
		.collect();
	unused.sort();

	Coverage { missing, unused }
}
