use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn graymap_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn carves_one_seam_to_stdout() {
    let file = graymap_file("P2\n2 2\n9\n1 2\n3 4\n");
    Command::cargo_bin("pgmseam")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout("P2\n1 2\n9\n2\n4\n");
}

#[test]
fn carves_the_requested_number_of_seams() {
    let file = graymap_file("P2\n3 2\n9\n0 0 0\n0 0 0\n");
    Command::cargo_bin("pgmseam")
        .unwrap()
        .arg(file.path())
        .args(&["-n", "2"])
        .assert()
        .success()
        .stdout("P2\n1 2\n9\n0\n0\n");
}

#[test]
fn maps_go_to_stderr_and_the_result_to_stdout() {
    let file = graymap_file("P2\n2 2\n9\n1 2\n3 4\n");
    Command::cargo_bin("pgmseam")
        .unwrap()
        .arg(file.path())
        .arg("--maps")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("P2\n1 2\n"))
        .stderr(predicate::str::contains("cumulative energy:"));
}

#[test]
fn a_missing_file_is_an_error() {
    Command::cargo_bin("pgmseam")
        .unwrap()
        .arg("no-such-graymap.pgm")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn a_color_image_magic_is_an_error() {
    let file = graymap_file("P3\n2 2\n9\n1 2 3 4\n");
    Command::cargo_bin("pgmseam")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("only supported format is 'P2'"));
}

#[test]
fn carving_away_every_column_is_an_error() {
    let file = graymap_file("P2\n2 2\n9\n1 2\n3 4\n");
    Command::cargo_bin("pgmseam")
        .unwrap()
        .arg(file.path())
        .args(&["-n", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot remove 2 seams"));
}
