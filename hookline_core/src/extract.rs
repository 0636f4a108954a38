use std::collections::HashSet;
use std::ops::Range;

use serde::Serialize;

use crate::PlaceholderSyntax;

/// A single placeholder occurrence inside template text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
	/// The variable name, e.g. `nome` for `{nome}`.
	pub name: String,
	/// The matched text including braces, e.g. `{{ nome }}`.
	pub raw: String,
	/// Byte range of `raw` within the template.
	pub span: Range<usize>,
}

impl Placeholder {
	/// 1-indexed line and column of the placeholder within `text`.
	pub fn line_column(&self, text: &str) -> (usize, usize) {
		let before = &text[..self.span.start.min(text.len())];
		let line = before.matches('\n').count() + 1;
		let column = before
			.rfind('\n')
			.map_or(before, |idx| &before[idx + 1..])
			.chars()
			.count() + 1;

		(line, column)
	}
}

/// Find every placeholder occurrence in `text`, duplicates included, in the
/// order they appear.
pub fn find_placeholders(text: &str, syntax: PlaceholderSyntax) -> Vec<Placeholder> {
	syntax
		.pattern()
		.captures_iter(text)
		.filter_map(|captures| {
			let whole = captures.get(0)?;
			let name = syntax.name_from(&captures);
			if name.is_empty() {
				return None;
			}
			Some(Placeholder {
				name: name.to_string(),
				raw: whole.as_str().to_string(),
				span: whole.range(),
			})
		})
		.collect()
}

/// Return the unique variable names referenced by `text` in first-seen order.
///
/// An opening brace without a matching close is plain text, and nested braces
/// are not supported: the first `}` ends the name. Double brace placeholders
/// holding only whitespace are ignored.
pub fn extract_variables(text: &str, syntax: PlaceholderSyntax) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut variables = Vec::new();

	for captures in syntax.pattern().captures_iter(text) {
		let name = syntax.name_from(&captures);
		if !name.is_empty() && seen.insert(name) {
			variables.push(name.to_string());
		}
	}

	variables
}
