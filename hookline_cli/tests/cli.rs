use clap::Parser;
use hookline_cli::Commands;
use hookline_cli::HooklineCli;
use hookline_cli::HooksCommand;
use hookline_cli::OutputFormat;
use hookline_core::AnyEmptyResult;
use hookline_core::HookCategory;
use hookline_core::PlaceholderSyntax;
use hookline_core::TemplateKind;
use rstest::rstest;
use similar_asserts::assert_eq;

#[test]
fn parses_render_values() -> AnyEmptyResult {
	let cli = HooklineCli::try_parse_from([
		"hookline",
		"render",
		"post.txt",
		"--var",
		"nome=Ana",
		"--var",
		"prazo=hoje",
		"--values",
		"values.json",
		"--strict",
		"--syntax",
		"single",
	])?;

	let Some(Commands::Render {
		file,
		values,
		strict,
		preserve_layout,
		syntax,
	}) = cli.command
	else {
		panic!("expected the render command");
	};
	assert_eq!(file.to_str(), Some("post.txt"));
	assert_eq!(values.vars, ["nome=Ana", "prazo=hoje"]);
	assert_eq!(
		values.values.as_deref().and_then(|path| path.to_str()),
		Some("values.json")
	);
	assert!(strict);
	assert!(!preserve_layout);
	assert_eq!(syntax, Some(PlaceholderSyntax::Single));

	Ok(())
}

#[test]
fn parses_examples_defaults() -> AnyEmptyResult {
	let cli = HooklineCli::try_parse_from(["hookline", "examples", "ad.txt", "--kind", "ad"])?;

	let Some(Commands::Examples {
		kind,
		brief,
		format,
		..
	}) = cli.command
	else {
		panic!("expected the examples command");
	};
	assert_eq!(kind, TemplateKind::Ad);
	assert!(!brief);
	assert_eq!(format, OutputFormat::Text);

	Ok(())
}

#[rstest]
#[case("Autoridade", HookCategory::Authority)]
#[case("urgência", HookCategory::Urgency)]
#[case("PROVA_SOCIAL", HookCategory::SocialProof)]
fn parses_hook_categories(#[case] raw: &str, #[case] expected: HookCategory) -> AnyEmptyResult {
	let cli = HooklineCli::try_parse_from([
		"hookline",
		"--no-color",
		"hooks",
		"list",
		"-c",
		raw,
		"--format",
		"json",
	])?;
	assert!(cli.no_color);

	let Some(Commands::Hooks {
		command: HooksCommand::List { category, format },
	}) = cli.command
	else {
		panic!("expected the hooks list command");
	};
	assert_eq!(category, Some(expected));
	assert_eq!(format, OutputFormat::Json);

	Ok(())
}

#[test]
fn migrate_requires_a_target_syntax() {
	assert!(HooklineCli::try_parse_from(["hookline", "migrate", "post.txt"]).is_err());
}
