mod common;

use hookline_core::AnyEmptyResult;

#[test]
fn prints_migrated_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = common::write_file(tmp.path(), "hook.txt", "Só até {data}: {oferta}\n")?;

	common::hookline_cmd()
		.arg("migrate")
		.arg(&file)
		.args(["--to", "double"])
		.assert()
		.success()
		.stdout("Só até {{data}}: {{oferta}}\n");

	assert_eq!(std::fs::read_to_string(&file)?, "Só até {data}: {oferta}\n");

	Ok(())
}

#[test]
fn writes_migrated_template_in_place() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = common::write_file(tmp.path(), "email.txt", "Olá {{ nome }}!\n")?;

	common::hookline_cmd()
		.arg("migrate")
		.arg(&file)
		.args(["--to", "single", "--write"])
		.assert()
		.success()
		.stdout(predicates::str::contains("Migrated"));

	assert_eq!(std::fs::read_to_string(&file)?, "Olá {nome}!\n");

	common::hookline_cmd()
		.arg("migrate")
		.arg(&file)
		.args(["--to", "single", "--write"])
		.assert()
		.success()
		.stdout(predicates::str::contains("Already uses single placeholders"));

	Ok(())
}

#[test]
fn shows_a_diff() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = common::write_file(
		tmp.path(),
		"hook.txt",
		"Atenção\nSó até {data}\n",
	)?;

	common::hookline_cmd()
		.arg("migrate")
		.arg(&file)
		.args(["--to", "double", "--diff"])
		.assert()
		.success()
		.stdout(" Atenção\n-Só até {data}\n+Só até {{data}}\n");

	Ok(())
}

#[test]
fn migrates_mixed_files_in_either_direction() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = common::write_file(tmp.path(), "mixed.txt", "{{ a }} e {b}\n")?;

	common::hookline_cmd()
		.arg("migrate")
		.arg(&file)
		.args(["--from", "single", "--to", "double"])
		.assert()
		.success()
		.stdout("{{ a }} e {{b}}\n");

	common::hookline_cmd()
		.arg("migrate")
		.arg(&file)
		.args(["--to", "double"])
		.assert()
		.success()
		.stdout("{{ a }} e {{b}}\n");

	common::hookline_cmd()
		.arg("migrate")
		.arg(&file)
		.args(["--from", "double", "--to", "single"])
		.assert()
		.success()
		.stdout("{a} e {b}\n");

	common::hookline_cmd()
		.arg("migrate")
		.arg(&file)
		.args(["--to", "double", "--write"])
		.assert()
		.success()
		.stdout(predicates::str::contains("Migrated"));

	assert_eq!(std::fs::read_to_string(&file)?, "{{ a }} e {{b}}\n");

	Ok(())
}
