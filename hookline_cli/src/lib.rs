use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use hookline_core::HookCategory;
use hookline_core::PlaceholderSyntax;
use hookline_core::TemplateKind;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Fill copywriting templates and browse a library of copywriting hooks.",
	long_about = "hookline fills marketing copy templates with your own values and ships a \
	              library of proven opening lines (hooks).\n\nTemplates use `{{name}}` \
	              placeholders, or the legacy `{name}` spelling.\n\nQuick start:\n  hookline \
	              init               Create a hookline.toml\n  hookline vars post.txt      List \
	              the variables of a template\n  hookline render post.txt    Fill a template \
	              with --var name=value\n  hookline hooks list         Browse the hook library"
)]
pub struct HooklineCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory holding `hookline.toml`. Defaults to the current directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `hookline.toml` in the project root.
	///
	/// If the file already exists, this command is a no-op and exits
	/// successfully.
	Init,
	/// List the variables a template references, in first-seen order.
	Vars {
		/// The template file to inspect.
		file: PathBuf,

		/// Placeholder syntax, `single` or `double`. Detected from the file
		/// when neither this flag nor the config sets it.
		#[arg(long)]
		syntax: Option<PlaceholderSyntax>,

		/// Output format.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Fill a template with values and print the result.
	///
	/// Placeholders without a value are kept as written unless `--strict` is
	/// set, in which case rendering fails and every missing placeholder is
	/// reported.
	Render {
		/// The template file to render.
		file: PathBuf,

		#[command(flatten)]
		values: ValuesArgs,

		/// Fail when any placeholder has no value.
		#[arg(long, default_value_t = false)]
		strict: bool,

		/// Print the substituted text without re-flowing paragraphs and
		/// lists. Use this for HTML bodies.
		#[arg(long, default_value_t = false)]
		preserve_layout: bool,

		/// Placeholder syntax, `single` or `double`.
		#[arg(long)]
		syntax: Option<PlaceholderSyntax>,
	},
	/// Propose example values for every variable in a template.
	Examples {
		/// The template file to inspect.
		file: PathBuf,

		/// What the template is written for: social, email, ad, blog or
		/// landing. Refines the campaign brief.
		#[arg(long, default_value_t = TemplateKind::Social)]
		kind: TemplateKind,

		/// Also print a campaign brief that fits the template.
		#[arg(long, default_value_t = false)]
		brief: bool,

		/// Placeholder syntax, `single` or `double`.
		#[arg(long)]
		syntax: Option<PlaceholderSyntax>,

		/// Output format.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Check that the supplied values cover every variable of a template.
	///
	/// Exits with status 1 when any variable is missing. Supplied values the
	/// template never uses are reported but do not fail the check.
	Check {
		/// The template file to check.
		file: PathBuf,

		#[command(flatten)]
		values: ValuesArgs,

		/// Placeholder syntax, `single` or `double`.
		#[arg(long)]
		syntax: Option<PlaceholderSyntax>,

		/// Output format.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Rewrite a template's placeholders into another syntax.
	///
	/// Prints the migrated template unless `--write` or `--diff` is given.
	Migrate {
		/// The template file to migrate.
		file: PathBuf,

		/// The syntax to migrate to, `single` or `double`.
		#[arg(long)]
		to: PlaceholderSyntax,

		/// The syntax to migrate from. Defaults to the one `--to` does not
		/// name. Placeholders already in the target syntax are left alone, so
		/// files mixing both spellings migrate cleanly.
		#[arg(long)]
		from: Option<PlaceholderSyntax>,

		/// Overwrite the file in place.
		#[arg(long, default_value_t = false)]
		write: bool,

		/// Show a diff of the changes instead of the migrated text.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// Browse the hook library.
	Hooks {
		#[command(subcommand)]
		command: HooksCommand,
	},
}

#[derive(Subcommand)]
pub enum HooksCommand {
	/// List hooks, optionally limited to one category.
	List {
		/// Curiosidade, Autoridade, Urgência, Storytelling or Prova Social.
		/// Accents and case are ignored.
		#[arg(long, short)]
		category: Option<HookCategory>,

		/// Output format.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Find hooks whose formula, example or tags contain a query.
	Search {
		query: String,

		/// Output format.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Show a single hook, optionally filled with values.
	Show {
		id: String,

		#[command(flatten)]
		values: ValuesArgs,

		/// Output format.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

/// Where variable values come from. `--var` assignments override entries in
/// the values file.
#[derive(Args, Debug, Default)]
pub struct ValuesArgs {
	/// A `name=value` assignment. Repeat for more variables.
	#[arg(long = "var", value_name = "NAME=VALUE")]
	pub vars: Vec<String>,

	/// A JSON object mapping variable names to values.
	#[arg(long, value_name = "FILE")]
	pub values: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
