use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use hookline_cli::Commands;
use hookline_cli::HooklineCli;
use hookline_cli::HooksCommand;
use hookline_cli::OutputFormat;
use hookline_cli::ValuesArgs;
use hookline_core::Hook;
use hookline_core::HookCategory;
use hookline_core::HookLibrary;
use hookline_core::HooklineConfig;
use hookline_core::HooklineError;
use hookline_core::HooklineResult;
use hookline_core::Layout;
use hookline_core::MissingPolicy;
use hookline_core::PlaceholderSyntax;
use hookline_core::Renderer;
use hookline_core::Template;
use hookline_core::TemplateKind;
use hookline_core::campaign_brief;
use hookline_core::check_coverage;
use hookline_core::find_placeholders;
use hookline_core::load_values;
use hookline_core::migrate;
use hookline_core::parse_assignment;
use hookline_core::suggest_examples;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

type CliResult = Result<(), Box<dyn std::error::Error>>;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,dimmed) => {
		if color_enabled() {
			format!("{}", $text.dimmed())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = HooklineCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Vars {
			file,
			syntax,
			format,
		}) => run_vars(&args, file, *syntax, *format),
		Some(Commands::Render {
			file,
			values,
			strict,
			preserve_layout,
			syntax,
		}) => run_render(&args, file, values, *strict, *preserve_layout, *syntax),
		Some(Commands::Examples {
			file,
			kind,
			brief,
			syntax,
			format,
		}) => run_examples(&args, file, *kind, *brief, *syntax, *format),
		Some(Commands::Check {
			file,
			values,
			syntax,
			format,
		}) => run_check(&args, file, values, *syntax, *format),
		Some(Commands::Migrate {
			file,
			to,
			from,
			write,
			diff,
		}) => run_migrate(file, *to, *from, *write, *diff),
		Some(Commands::Hooks { command }) => run_hooks(&args, command),
		None => {
			eprintln!("No subcommand specified. Run `hookline --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<HooklineError>() {
			Ok(hookline_err) => {
				let report: miette::Report = (*hookline_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr so rendered output on stdout stays clean. `RUST_LOG` refines
/// the default level.
fn init_tracing(verbose: bool) {
	let level = if verbose {
		tracing::Level::DEBUG
	} else {
		tracing::Level::WARN
	};

	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_ansi(color_enabled())
		.with_target(false)
		.with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
		.init();
}

fn resolve_root(args: &HooklineCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &HooklineCli) -> HooklineResult<(PathBuf, HooklineConfig)> {
	let root = resolve_root(args);
	let config = HooklineConfig::load(&root)?.unwrap_or_default();
	Ok((root, config))
}

/// Values from `--values` first, then `--var` assignments on top.
fn collect_values(args: &ValuesArgs) -> HooklineResult<HashMap<String, String>> {
	let mut values = match &args.values {
		Some(path) => load_values(path)?,
		None => HashMap::new(),
	};

	for raw in &args.vars {
		let (name, value) = parse_assignment(raw)?;
		values.insert(name, value);
	}

	Ok(values)
}

fn print_section(title: &str) {
	println!();
	println!("{}", colored!(title, bold));
}

fn print_field(label: &str, value: impl std::fmt::Display) {
	println!("{label:<24} {value}");
}

fn run_init(args: &HooklineCli) -> CliResult {
	let root = resolve_root(args);
	let config_path = root.join("hookline.toml");

	if let Some(existing) = HooklineConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	let sample_config = "# hookline configuration\n\n[placeholders]\n# `double` for {{name}}, \
	                     `single` for {name}. Detected per template when unset.\n# syntax = \
	                     \"double\"\n# `keep` leaves placeholders without a value in place, \
	                     `error` fails rendering.\nmissing = \"keep\"\n\n[render]\n# `reflow` \
	                     re-flows sentences, headers and lists; `preserve` keeps the text as \
	                     is.\nlayout = \"reflow\"\n\n# Use your own hook library instead of the \
	                     bundled one (json, toml or yaml).\n# [hooks]\n# path = \"hooks.yaml\"\n";

	std::fs::write(&config_path, sample_config)?;
	println!("Created {}", config_path.display());
	println!();
	println!("Next steps:");
	println!("  1. Write a template with placeholders, e.g. `Olá {{{{nome}}}}!`");
	println!("  2. Run `hookline vars <file>` to list its variables");
	println!("  3. Run `hookline render <file> --var nome=Ana` to fill it");

	Ok(())
}

fn run_vars(
	args: &HooklineCli,
	file: &Path,
	syntax: Option<PlaceholderSyntax>,
	format: OutputFormat,
) -> CliResult {
	let (_, config) = load_config(args)?;
	let template = Template::read(file, TemplateKind::default())?;
	let syntax = syntax.unwrap_or_else(|| config.syntax_for(&template.content));
	let variables = template.variables(syntax);

	match format {
		OutputFormat::Json => {
			let output = serde_json::json!({
				"file": file.display().to_string(),
				"syntax": syntax.to_string(),
				"variables": variables,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			if variables.is_empty() {
				println!("No variables found.");
			}
			for variable in &variables {
				println!("{variable}");
			}
		}
	}

	Ok(())
}

fn run_render(
	args: &HooklineCli,
	file: &Path,
	values: &ValuesArgs,
	strict: bool,
	preserve_layout: bool,
	syntax: Option<PlaceholderSyntax>,
) -> CliResult {
	let (_, config) = load_config(args)?;
	let template = Template::read(file, TemplateKind::default())?;
	let values = collect_values(values)?;

	let mut renderer = Renderer {
		syntax: syntax.unwrap_or_else(|| config.syntax_for(&template.content)),
		..config.renderer()
	};
	if strict {
		renderer = renderer.with_missing(MissingPolicy::Error);
	}
	if preserve_layout {
		renderer = renderer.with_layout(Layout::Preserve);
	}

	let output = renderer.render_template(&template, &values)?;
	println!("{output}");

	let coverage = check_coverage(&template.content, &values, renderer.syntax);
	if !coverage.is_complete() {
		eprintln!(
			"{} no value for {}",
			colored!("warning:", yellow),
			coverage.missing.join(", ")
		);
	}

	Ok(())
}

fn run_examples(
	args: &HooklineCli,
	file: &Path,
	kind: TemplateKind,
	brief: bool,
	syntax: Option<PlaceholderSyntax>,
	format: OutputFormat,
) -> CliResult {
	let (_, config) = load_config(args)?;
	let template = Template::read(file, kind)?;
	let syntax = syntax.unwrap_or_else(|| config.syntax_for(&template.content));
	let suggestions = suggest_examples(&template, syntax);
	let brief = brief.then(|| campaign_brief(&template));

	match format {
		OutputFormat::Json => {
			let output = serde_json::json!({
				"file": file.display().to_string(),
				"kind": kind.to_string(),
				"variables": suggestions,
				"brief": brief,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			if suggestions.is_empty() {
				println!("No variables found.");
			}
			for suggestion in &suggestions {
				print_field(&suggestion.label, &suggestion.example);
				if let Some(options) = suggestion.options {
					println!("{:<24} {}", "", colored!(options.join(", "), dimmed));
				}
			}
			if let Some(brief) = brief {
				print_section("Campaign brief");
				println!("{brief}");
			}
		}
	}

	Ok(())
}

fn run_check(
	args: &HooklineCli,
	file: &Path,
	values: &ValuesArgs,
	syntax: Option<PlaceholderSyntax>,
	format: OutputFormat,
) -> CliResult {
	let (_, config) = load_config(args)?;
	let template = Template::read(file, TemplateKind::default())?;
	let values = collect_values(values)?;
	let syntax = syntax.unwrap_or_else(|| config.syntax_for(&template.content));
	let coverage = check_coverage(&template.content, &values, syntax);

	match format {
		OutputFormat::Json => {
			let output = serde_json::json!({
				"ok": coverage.is_complete(),
				"missing": coverage.missing,
				"unused": coverage.unused,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			if coverage.is_complete() {
				println!("Check passed: every variable has a value.");
			} else {
				eprintln!("Check failed.");
				eprintln!("  missing variables: {}", coverage.missing.len());
				eprintln!();
				eprintln!("Missing:");
				let placeholders = find_placeholders(&template.content, syntax);
				for name in &coverage.missing {
					let Some(first) = placeholders.iter().find(|p| &p.name == name) else {
						continue;
					};
					let (line, column) = first.line_column(&template.content);
					eprintln!(
						"  `{}` at {}:{line}:{column}",
						colored!(name, red),
						file.display()
					);
				}
			}

			if coverage.has_unused() {
				eprintln!(
					"{} unused values: {}",
					colored!("warning:", yellow),
					coverage.unused.join(", ")
				);
			}
		}
	}

	if !coverage.is_complete() {
		process::exit(1);
	}

	Ok(())
}

fn run_migrate(
	file: &Path,
	to: PlaceholderSyntax,
	from: Option<PlaceholderSyntax>,
	write: bool,
	show_diff: bool,
) -> CliResult {
	let template = Template::read(file, TemplateKind::default())?;
	// Placeholders already written in the target syntax are left alone, so
	// the source is whichever syntax `to` is not.
	let from = from.unwrap_or(match to {
		PlaceholderSyntax::Single => PlaceholderSyntax::Double,
		PlaceholderSyntax::Double => PlaceholderSyntax::Single,
	});
	let migrated = migrate(&template.content, from, to);
	tracing::debug!(%from, %to, file = %file.display(), "migrating placeholders");

	if show_diff {
		print_diff(&template.content, &migrated);
	}

	if write {
		if migrated == template.content {
			println!("Already uses {to} placeholders: {}", file.display());
		} else {
			std::fs::write(file, &migrated)?;
			println!(
				"{} {} to {to} placeholders",
				colored!("Migrated", green),
				file.display()
			);
		}
	} else if !show_diff {
		print!("{migrated}");
	}

	Ok(())
}

fn run_hooks(args: &HooklineCli, command: &HooksCommand) -> CliResult {
	let (root, config) = load_config(args)?;
	let library = config.hook_library(&root)?;

	match command {
		HooksCommand::List { category, format } => run_hooks_list(&library, *category, *format),
		HooksCommand::Search { query, format } => run_hooks_search(&library, query, *format),
		HooksCommand::Show { id, values, format } => run_hooks_show(&library, id, values, *format),
	}
}

fn run_hooks_list(
	library: &HookLibrary,
	category: Option<HookCategory>,
	format: OutputFormat,
) -> CliResult {
	let categories = match category {
		Some(category) => vec![category],
		None => library.categories(),
	};

	if format == OutputFormat::Json {
		let hooks: Vec<&Hook> = categories
			.iter()
			.flat_map(|category| library.by_category(*category))
			.collect();
		println!("{}", serde_json::to_string(&hooks)?);
		return Ok(());
	}

	for category in categories {
		let hooks = library.by_category(category);
		print_section(&format!("{category} ({})", hooks.len()));
		for hook in hooks {
			print_hook_line(hook);
		}
	}

	Ok(())
}

fn run_hooks_search(library: &HookLibrary, query: &str, format: OutputFormat) -> CliResult {
	let hooks = library.search(query);

	if format == OutputFormat::Json {
		println!("{}", serde_json::to_string(&hooks)?);
		return Ok(());
	}

	if hooks.is_empty() {
		println!("No hooks match `{query}`.");
		return Ok(());
	}

	for hook in hooks {
		print_hook_line(hook);
	}

	Ok(())
}

fn run_hooks_show(
	library: &HookLibrary,
	id: &str,
	values: &ValuesArgs,
	format: OutputFormat,
) -> CliResult {
	let hook = library
		.get(id)
		.ok_or_else(|| HooklineError::UnknownHook(id.to_string()))?;
	let values = collect_values(values)?;
	let filled = (!values.is_empty()).then(|| hook.fill(&values));

	match format {
		OutputFormat::Json => {
			let output = serde_json::json!({
				"id": hook.id,
				"category": hook.category,
				"text": hook.text,
				"example": hook.example,
				"tags": hook.tags,
				"variables": hook.variables(),
				"filled": filled,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			print_field("id", &hook.id);
			print_field("category", hook.category);
			print_field("text", &hook.text);
			print_field("example", &hook.example);
			print_field("tags", hook.tags.join(", "));
			print_field("variables", hook.variables().join(", "));
			if let Some(filled) = filled {
				print_section("Filled");
				println!("{filled}");
			}
		}
	}

	Ok(())
}

fn print_hook_line(hook: &Hook) {
	println!(
		"  {} {}",
		colored!(format!("{:<14}", hook.id), bold),
		hook.text
	);
	println!("  {:<14} {}", "", colored!(&hook.example, dimmed));
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				print!("{}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				print!("{}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				print!(" {change}");
			}
		}
	}
}
