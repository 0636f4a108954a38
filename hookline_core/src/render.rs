use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::LazyLock;

use miette::LabeledSpan;
use miette::NamedSource;
use regex::Captures;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use crate::HooklineError;
use crate::HooklineResult;
use crate::Placeholder;
use crate::PlaceholderSyntax;
use crate::Template;

/// Uppercase letters that open a new sentence in Portuguese copy.
const SENTENCE_START: &str = "A-ZÁÀÂÃÉÊÍÓÔÕÚÇ";

fn compile(pattern: &str) -> Regex {
	Regex::new(pattern).unwrap_or_else(|e| panic!("invalid layout pattern `{pattern}`: {e}"))
}

static SECTION_HEADER: LazyLock<Regex> =
	LazyLock::new(|| compile(r"(?i)(slide|seção|parte)\s*([0-9]+)[:\-.]?\s*"));
static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^[0-9]+\.\s*"));
static DASHED_ITEM: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^[-*]\s*"));
static BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^•\s*"));
static SENTENCE_BREAK: LazyLock<Regex> =
	LazyLock::new(|| compile(&format!(r"([.!?])\s*([{SENTENCE_START}])")));
static COLON_BREAK: LazyLock<Regex> =
	LazyLock::new(|| compile(&format!(r":\s*([{SENTENCE_START}])")));
static HORIZONTAL_SPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"[ \t]+"));
static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| compile(r"\n{3,}"));
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| compile(r"\n\s*\n"));

/// What to do with a placeholder that has no value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
	/// Leave the placeholder text in the output.
	#[default]
	Keep,
	/// Fail with a diagnostic listing every placeholder without a value.
	Error,
}

/// Whether rendered output is re-flowed for readability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
	/// Apply [`normalize`] after substitution.
	#[default]
	Reflow,
	/// Return the substituted text as is. Use this for HTML bodies.
	Preserve,
}

/// Substitutes values into templates according to a fixed set of options.
///
/// ```rust
/// use std::collections::HashMap;
///
/// use hookline_core::PlaceholderSyntax;
/// use hookline_core::Renderer;
///
/// let values = HashMap::from([("nome".to_string(), "Ana".to_string())]);
/// let output = Renderer::new(PlaceholderSyntax::Double)
/// 	.render("Olá {{ nome }}!", &values)
/// 	.unwrap();
/// assert_eq!(output, "Olá Ana!");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
	pub syntax: PlaceholderSyntax,
	pub missing: MissingPolicy,
	pub layout: Layout,
}

impl Renderer {
	pub fn new(syntax: PlaceholderSyntax) -> Self {
		Self {
			syntax,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_missing(mut self, missing: MissingPolicy) -> Self {
		self.missing = missing;
		self
	}

	#[must_use]
	pub fn with_layout(mut self, layout: Layout) -> Self {
		self.layout = layout;
		self
	}

	/// Render anonymous template text.
	#[allow(clippy::implicit_hasher)]
	pub fn render(&self, text: &str, values: &HashMap<String, String>) -> HooklineResult<String> {
		self.render_source("template", text, values)
	}

	/// Render a [`Template`]; diagnostics refer to it by name.
	#[allow(clippy::implicit_hasher)]
	pub fn render_template(
		&self,
		template: &Template,
		values: &HashMap<String, String>,
	) -> HooklineResult<String> {
		self.render_source(&template.name, &template.content, values)
	}

	fn render_source(
		&self,
		source_name: &str,
		text: &str,
		values: &HashMap<String, String>,
	) -> HooklineResult<String> {
		let (substituted, missing) = substitute(text, values, self.syntax);
		tracing::debug!(
			template = source_name,
			supplied = values.len(),
			missing = missing.len(),
			"substituted placeholders"
		);

		if self.missing == MissingPolicy::Error && !missing.is_empty() {
			return Err(missing_variables_error(source_name, text, &missing));
		}

		Ok(match self.layout {
			Layout::Reflow => normalize(&substituted),
			Layout::Preserve => substituted,
		})
	}
}

/// Render single brace `text` with `values`, keeping placeholders that have no
/// value and re-flowing the result.
#[allow(clippy::implicit_hasher)]
pub fn render(text: &str, values: &HashMap<String, String>) -> String {
	let (substituted, _) = substitute(text, values, PlaceholderSyntax::Single);
	normalize(&substituted)
}

/// Replace every placeholder that has a non-blank value in one left to right
/// pass. Values are trimmed and never re-scanned. Returns the new text and the
/// placeholders that were left in place.
fn substitute(
	text: &str,
	values: &HashMap<String, String>,
	syntax: PlaceholderSyntax,
) -> (String, Vec<Placeholder>) {
	let mut missing = Vec::new();
	let substituted = syntax
		.pattern()
		.replace_all(text, |captures: &Captures<'_>| {
			let name = syntax.name_from(captures);
			let whole = &captures[0];
			if let Some(value) = values
				.get(name)
				.map(|value| value.trim())
				.filter(|value| !value.is_empty())
			{
				return value.to_string();
			}

			if !name.is_empty() {
				if let Some(m) = captures.get(0) {
					missing.push(Placeholder {
						name: name.to_string(),
						raw: whole.to_string(),
						span: m.range(),
					});
				}
			}
			whole.to_string()
		})
		.into_owned();

	(substituted, missing)
}

fn missing_variables_error(
	source_name: &str,
	text: &str,
	missing: &[Placeholder],
) -> HooklineError {
	let mut seen = HashSet::new();
	let names = missing
		.iter()
		.filter(|placeholder| seen.insert(placeholder.name.as_str()))
		.map(|placeholder| placeholder.name.clone())
		.collect();
	let labels = missing
		.iter()
		.map(|placeholder| {
			LabeledSpan::new_with_span(
				Some(format!("no value for `{}`", placeholder.name)),
				placeholder.span.clone(),
			)
		})
		.collect();

	HooklineError::MissingVariables {
		names,
		source_code: NamedSource::new(source_name, text.to_string()),
		labels,
	}
}

/// Re-flow copy for reading. The steps run in order:
///
/// 1. Escaped `\n` sequences and `\r\n` / `\r` line endings become `\n`.
/// 2. `Slide N`, `Seção N` and `Parte N` headers get a marker on their own
///    line.
/// 3. Numbered, dashed, starred and bulleted list items become `• ` bullets.
/// 4. Sentence ending punctuation followed by an uppercase letter starts a
///    new paragraph; a colon followed by an uppercase letter starts a new
///    line.
/// 5. Horizontal whitespace and blank lines are collapsed and the result is
///    trimmed.
pub fn normalize(text: &str) -> String {
	let text = text
		.replace("\\n", "\n")
		.replace("\r\n", "\n")
		.replace('\r', "\n");

	let text = SECTION_HEADER.replace_all(&text, |captures: &Captures<'_>| {
		let word = match captures[1].to_lowercase().as_str() {
			"slide" => "Slide",
			"parte" => "Parte",
			_ => "Seção",
		};
		format!("\n\n📍 {word} {}:\n", &captures[2])
	});

	let text = NUMBERED_ITEM.replace_all(&text, "\n• ");
	let text = DASHED_ITEM.replace_all(&text, "\n• ");
	let text = BULLET_ITEM.replace_all(&text, "\n• ");

	let text = SENTENCE_BREAK.replace_all(&text, "${1}\n\n${2}");
	let text = COLON_BREAK.replace_all(&text, ":\n${1}");

	let text = HORIZONTAL_SPACE.replace_all(&text, " ");
	let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
	let text = text.trim();
	let text = BLANK_LINES.replace_all(text, "\n\n");

	text.trim().to_string()
}
