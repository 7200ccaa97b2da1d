use assert_cmd::Command;
use predicates::prelude::*;

fn lexform() -> Command {
    Command::cargo_bin("lexform").unwrap()
}

#[test]
fn test_extract_legal_from_stdin() {
    lexform()
        .args(["extract", "legal"])
        .write_stdin("Décret exécutif n° 21-123 du 15/03/2021 signé par le Ministre")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"Décret exécutif\""))
        .stdout(predicate::str::contains("\"reference\": \"21-123\""))
        .stdout(predicate::str::contains("\"publicationDate\": \"2021-03-15\""))
        .stdout(predicate::str::contains("\"authority\": \"Ministère de la Justice\""));
}

#[test]
fn test_extract_procedure_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.txt");
    std::fs::write(&input, "Demande de permis de conduire — secteur Transport").unwrap();

    lexform()
        .args(["extract", "procedure", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type:        Demande"))
        .stdout(predicate::str::contains("Sector:      Transport"));
}

#[test]
fn test_extract_prefill_values() {
    lexform()
        .args(["extract", "procedure", "--prefill"])
        .write_stdin("Licence de transport")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Licence de transport\""))
        .stdout(predicate::str::contains("\"type\": \"Licence\""));
}

#[test]
fn test_extract_missing_file() {
    lexform()
        .args(["extract", "legal", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_schema_for_template() {
    lexform()
        .args(["schema", "--family", "legal", "--template", "loi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"titre\""))
        .stdout(predicate::str::contains("\"type\": \"select\""))
        .stdout(predicate::str::contains("Banque d'Algérie"));
}

#[test]
fn test_schema_unknown_template_is_empty() {
    lexform()
        .args(["schema", "--family", "procedure", "--template", "inconnu"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_schema_csv_from_text() {
    lexform()
        .args(["schema", "--from-text", "-", "--format", "csv"])
        .write_stdin("Nom\nDate de naissance\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,name,label,type,required"))
        .stdout(predicate::str::contains("ocr_field_1,date_de_naissance,Date de naissance,date,false"));
}

#[test]
fn test_schema_requires_a_source() {
    lexform().arg("schema").assert().failure();
}

#[test]
fn test_catalog_listing() {
    lexform()
        .args(["catalog", "--family", "procedure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("urbanisme"))
        .stdout(predicate::str::contains("constitution").not());
}

#[test]
fn test_config_init_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let path = path.to_str().unwrap();

    lexform()
        .args(["--config", path, "config", "init"])
        .assert()
        .success();

    lexform()
        .args(["--config", path, "config", "set", "extraction.min_title_length", "3"])
        .assert()
        .success();

    lexform()
        .args(["--config", path, "config", "get", "extraction.min_title_length"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n"));

    lexform()
        .args(["--config", path, "extract", "legal", "--format", "text"])
        .write_stdin("Loi\nCode")
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:       Code"));
}

#[test]
fn test_batch_writes_json_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "Arrêté du 01/02/2020").unwrap();
    std::fs::write(dir.path().join("b.txt"), "Ordonnance n° 75-58").unwrap();
    let out = dir.path().join("out");
    let pattern = format!("{}/*.txt", dir.path().display());

    lexform()
        .args(["batch", "legal", &pattern, "--output-dir"])
        .arg(&out)
        .assert()
        .success();

    let a = std::fs::read_to_string(out.join("a.json")).unwrap();
    assert!(a.contains("\"publicationDate\": \"2020-02-01\""));
    let b = std::fs::read_to_string(out.join("b.json")).unwrap();
    assert!(b.contains("\"reference\": \"75-58\""));
}
