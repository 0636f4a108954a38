mod common;

use hookline_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use serde_json::Value;

#[test]
fn lists_every_category() {
	common::hookline_cmd()
		.args(["hooks", "list"])
		.assert()
		.success()
		.stdout(predicates::str::contains("Curiosidade (12)"))
		.stdout(predicates::str::contains("Prova Social (12)"))
		.stdout(predicates::str::contains("social_12"));
}

#[test]
fn lists_one_category_ignoring_accents() {
	common::hookline_cmd()
		.args(["hooks", "list", "--category", "urgencia"])
		.assert()
		.success()
		.stdout(predicates::str::contains("Urgência (12)"))
		.stdout(predicates::str::contains("urgency_1 "))
		.stdout(predicates::str::contains("curiosity_1 ").not());
}

#[test]
fn lists_category_as_json() -> AnyEmptyResult {
	let output = common::hookline_cmd()
		.args(["hooks", "list", "--category", "prova-social", "--format", "json"])
		.output()?;
	assert!(output.status.success());

	let json: Value = serde_json::from_slice(&output.stdout)?;
	let hooks = json.as_array().ok_or("expected an array")?;
	assert_eq!(hooks.len(), 12);
	assert!(hooks.iter().all(|hook| hook["category"] == "Prova Social"));
	assert_eq!(hooks[0]["id"], "social_1");

	Ok(())
}

#[test]
fn unknown_category_is_rejected() {
	common::hookline_cmd()
		.args(["hooks", "list", "--category", "humor"])
		.assert()
		.failure()
		.stderr(predicates::str::contains("unknown hook category"));
}

#[test]
fn searches_text_examples_and_tags() {
	common::hookline_cmd()
		.args(["hooks", "search", "LGPD"])
		.assert()
		.success()
		.stdout(predicates::str::contains("urgency_9"));

	common::hookline_cmd()
		.args(["hooks", "search", "ponto-virada"])
		.assert()
		.success()
		.stdout(predicates::str::contains("story_2"));
}

#[test]
fn search_without_matches() {
	common::hookline_cmd()
		.args(["hooks", "search", "inexistente"])
		.assert()
		.success()
		.stdout("No hooks match `inexistente`.\n");
}

#[test]
fn shows_and_fills_a_hook() {
	common::hookline_cmd()
		.args(["hooks", "show", "urgency_1"])
		.args(["--var", "data=sexta-feira", "--var", "oferta=Curso completo"])
		.args(["--var", "desconto=50"])
		.assert()
		.success()
		.stdout(predicates::str::contains("data, oferta, desconto"))
		.stdout(predicates::str::contains(
			"Só até sexta-feira:\nCurso completo com 50% de desconto",
		));
}

#[test]
fn show_json_includes_variables() -> AnyEmptyResult {
	let output = common::hookline_cmd()
		.args(["hooks", "show", "story_2", "--format", "json"])
		.output()?;
	assert!(output.status.success());

	let json: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(json["category"], "Storytelling");
	assert_eq!(json["variables"], serde_json::json!(["situação"]));
	assert!(json["filled"].is_null());

	Ok(())
}

#[test]
fn unknown_hook_id_is_an_error() {
	common::hookline_cmd()
		.args(["hooks", "show", "story_99"])
		.assert()
		.code(2)
		.stderr(predicates::str::contains("unknown hook id `story_99`"))
		.stderr(predicates::str::contains("hookline::unknown_hook"));
}

#[test]
fn uses_configured_hook_library() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("hooks.yaml"),
		"- id: custom_1\n  category: Curiosidade\n  text: Por que {nicho} funciona?\n  example: \
		 Por que storytelling funciona?\n",
	)?;
	std::fs::write(
		tmp.path().join("hookline.toml"),
		"[hooks]\npath = \"hooks.yaml\"\n",
	)?;

	common::hookline_cmd()
		.args(["hooks", "list", "--path"])
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Curiosidade (1)"))
		.stdout(predicates::str::contains("custom_1"))
		.stdout(predicates::str::contains("Urgência").not());

	Ok(())
}

#[test]
fn broken_hook_library_is_reported() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("hooks.csv"), "id,category\n")?;
	std::fs::write(
		tmp.path().join("hookline.toml"),
		"[hooks]\npath = \"hooks.csv\"\n",
	)?;

	common::hookline_cmd()
		.args(["hooks", "search", "x", "--path"])
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("unsupported hook library format"));

	Ok(())
}
