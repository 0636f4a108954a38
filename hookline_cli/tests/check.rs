mod common;

use hookline_core::AnyEmptyResult;
use serde_json::Value;

#[test]
fn check_passes_when_every_variable_has_a_value() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = common::write_file(tmp.path(), "offer.txt", common::OFFER_TEMPLATE)?;

	common::hookline_cmd()
		.arg("check")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.args(["--var", "nome=Ana", "--var", "desconto=50", "--var", "prazo=hoje"])
		.assert()
		.success()
		.stdout(predicates::str::contains("Check passed"));

	Ok(())
}

#[test]
fn check_fails_when_variables_are_missing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = common::write_file(tmp.path(), "offer.txt", common::OFFER_TEMPLATE)?;

	common::hookline_cmd()
		.arg("check")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.args(["--var", "nome=Ana", "--var", "prazo=  "])
		.assert()
		.code(1)
		.stderr(predicates::str::contains("Check failed"))
		.stderr(predicates::str::contains("missing variables: 2"))
		.stderr(predicates::str::contains("`desconto` at"))
		.stderr(predicates::str::contains("offer.txt:1:"));

	Ok(())
}

#[test]
fn check_reports_unused_values_without_failing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = common::write_file(tmp.path(), "hook.txt", "Só até {data}")?;

	common::hookline_cmd()
		.arg("check")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.args(["--var", "data=sexta", "--var", "bonus=sim"])
		.assert()
		.success()
		.stderr(predicates::str::contains("unused values: bonus"));

	Ok(())
}

#[test]
fn check_json_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = common::write_file(tmp.path(), "offer.txt", common::OFFER_TEMPLATE)?;

	let output = common::hookline_cmd()
		.arg("check")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.args(["--var", "nome=Ana", "--var", "extra=1", "--format", "json"])
		.output()?;
	assert_eq!(output.status.code(), Some(1));

	let json: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(json["ok"], false);
	assert_eq!(json["missing"], serde_json::json!(["desconto", "prazo"]));
	assert_eq!(json["unused"], serde_json::json!(["extra"]));

	Ok(())
}
