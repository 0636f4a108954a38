use miette::Diagnostic;
use miette::LabeledSpan;
use miette::NamedSource;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum HooklineError {
	#[error(transparent)]
	#[diagnostic(code(hookline::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(hookline::config_parse),
		help("check that hookline.toml is valid TOML with [placeholders], [render] and/or [hooks] sections")
	)]
	ConfigParse(String),

	#[error("failed to load hook library `{path}`: {reason}")]
	#[diagnostic(code(hookline::hook_library))]
	HookLibrary { path: String, reason: String },

	#[error("unsupported hook library format: `{0}`")]
	#[diagnostic(
		code(hookline::unsupported_format),
		help("supported formats: json, toml, yaml, yml")
	)]
	UnsupportedLibraryFormat(String),

	#[error("duplicate hook id `{id}` in `{path}`")]
	#[diagnostic(
		code(hookline::duplicate_hook),
		help("each hook id must be unique within a library")
	)]
	DuplicateHook { id: String, path: String },

	#[error("unknown hook category: `{0}`")]
	#[diagnostic(
		code(hookline::unknown_category),
		help("available categories: Curiosidade, Autoridade, Urgência, Storytelling, Prova Social")
	)]
	UnknownCategory(String),

	#[error("unknown placeholder syntax: `{0}`")]
	#[diagnostic(code(hookline::unknown_syntax), help("use `single` or `double`"))]
	UnknownSyntax(String),

	#[error("template file not found: {0}")]
	#[diagnostic(
		code(hookline::template_not_found),
		help("pass the path to an existing template file")
	)]
	TemplateNotFound(String),

	#[error("unknown hook id `{0}`")]
	#[diagnostic(
		code(hookline::unknown_hook),
		help("run `hookline hooks list` to see the available ids")
	)]
	UnknownHook(String),

	#[error("unknown template kind: `{0}`")]
	#[diagnostic(
		code(hookline::unknown_kind),
		help("available kinds: social, email, ad, blog, landing")
	)]
	UnknownTemplateKind(String),

	#[error("invalid variable assignment `{0}`")]
	#[diagnostic(
		code(hookline::invalid_assignment),
		help("assignments take the form `name=value`")
	)]
	InvalidAssignment(String),

	#[error("failed to read values file `{path}`: {reason}")]
	#[diagnostic(
		code(hookline::values_file),
		help("values files hold a flat JSON object of strings, e.g. {{\"nome\": \"Ana\"}}")
	)]
	ValuesFile { path: String, reason: String },

	#[error("{} variable(s) without a value: {}", .names.len(), .names.join(", "))]
	#[diagnostic(
		code(hookline::missing_variables),
		help("supply a value for every placeholder or render with the `keep` missing policy")
	)]
	MissingVariables {
		names: Vec<String>,
		#[source_code]
		source_code: NamedSource<String>,
		#[label(collection)]
		labels: Vec<LabeledSpan>,
	},
}

pub type HooklineResult<T> = Result<T, HooklineError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
