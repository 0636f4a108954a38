mod common;

use hookline_core::AnyEmptyResult;
use serde_json::Value;

#[test]
fn lists_variables_in_first_seen_order() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = common::write_file(
		tmp.path(),
		"post.txt",
		"{prazo}: {nome}, aproveite {desconto}% até {prazo}\n",
	)?;

	common::hookline_cmd()
		.arg("vars")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("prazo\nnome\ndesconto\n");

	Ok(())
}

#[test]
fn detects_double_brace_templates() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = common::write_file(
		tmp.path(),
		"email.html",
		"<p>Olá {{ userName }}</p><a href=\"{{loginUrl}}\">{{ userName }}</a>",
	)?;

	let output = common::hookline_cmd()
		.arg("vars")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.arg("--format")
		.arg("json")
		.output()?;
	assert!(output.status.success());

	let json: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(json["syntax"], "double");
	assert_eq!(json["variables"], serde_json::json!(["userName", "loginUrl"]));

	Ok(())
}

#[test]
fn syntax_flag_overrides_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("hookline.toml"),
		"[placeholders]\nsyntax = \"double\"\n",
	)?;
	let file = common::write_file(tmp.path(), "hook.txt", "Só até {data}")?;

	common::hookline_cmd()
		.arg("vars")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("No variables found.\n");

	common::hookline_cmd()
		.arg("vars")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.arg("--syntax")
		.arg("single")
		.assert()
		.success()
		.stdout("data\n");

	Ok(())
}

#[test]
fn unknown_syntax_is_rejected() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = common::write_file(tmp.path(), "hook.txt", "Só até {data}")?;

	common::hookline_cmd()
		.arg("vars")
		.arg(&file)
		.arg("--syntax")
		.arg("triple")
		.assert()
		.failure()
		.stderr(predicates::str::contains("unknown placeholder syntax"));

	Ok(())
}

#[test]
fn missing_template_file_is_an_error() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::hookline_cmd()
		.arg("vars")
		.arg(tmp.path().join("nope.txt"))
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("template file not found"))
		.stderr(predicates::str::contains("hookline::template_not_found"));

	Ok(())
}
