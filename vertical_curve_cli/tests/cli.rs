use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn elevation_command_defaults() {
    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args(["elevation"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Elevation at station 1025.0 is 500.671875",
        ));
}

#[test]
fn elevation_command_with_parameters() {
    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args([
            "elevation",
            "100",
            "--pvi-station",
            "100",
            "--pvi-elevation",
            "-12.5",
            "--initial-grade",
            "-0.04",
            "--final-grade",
            "0.02",
            "--length",
            "80",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Elevation at station 100.0 is -12.5"));
}

#[test]
fn zero_length_fails() {
    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args(["elevation", "1025", "--length", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid parameter `length`"));
}

#[test]
fn profile_command_stdout() {
    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args(["profile", "--count", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "900.000,495.750\n1000.000,500.000\n1100.000,501.750",
        ));
}

#[test]
fn profile_command_rejects_single_sample() {
    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args(["profile", "--count", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sample_count"));
}

#[test]
fn profile_command_to_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("profile.csv");

    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args([
            "profile",
            "--start",
            "950",
            "--end",
            "1050",
            "--output",
            output.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    output.assert(predicate::path::exists());
    let contents = std::fs::read_to_string(output.path()).unwrap();
    assert_eq!(contents.lines().count(), 200);
    assert!(contents.starts_with("950,"));
    dir.close().unwrap();
}

#[test]
fn plot_command() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("curve.svg");

    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args([
            "plot",
            "1025",
            output.path().to_str().unwrap(),
            "--theme",
            "classic-blue",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Elevation at station 1025.0 is 500.671875",
        ))
        .stdout(predicate::str::contains("Wrote"));

    output.assert(predicate::path::exists());
    let svg = std::fs::read_to_string(output.path()).unwrap();
    assert!(svg.contains("#1f77b4"));
    dir.close().unwrap();
}

#[test]
fn plot_command_unknown_theme() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("curve.svg");

    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args([
            "plot",
            "1025",
            output.path().to_str().unwrap(),
            "--theme",
            "neon",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme neon"));

    output.assert(predicate::path::missing());
    dir.close().unwrap();
}

#[test]
fn curve_file_option() {
    let file = assert_fs::NamedTempFile::new("curve.json").unwrap();
    file.write_str(
        r#"{ "pvi_station": 0.0, "pvi_elevation": 10.0, "initial_grade": 0.0,
             "final_grade": 0.04, "length": 100.0 }"#,
    )
    .unwrap();

    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args(["elevation", "50", "--curve", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Elevation at station 50.0 is 10.5"));
}

#[test]
fn info_command() {
    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args(["info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Curve type: crest"))
        .stdout(predicate::str::contains("K value: 40.000"))
        .stdout(predicate::str::contains("BVC: station 900.000, elevation 495.750"))
        .stdout(predicate::str::contains(
            "High point: station 1100.000, elevation 501.750",
        ))
        .stdout(predicate::str::contains(
            "Zero grade point: station 1120.000, elevation 501.800 (beyond curve ends)",
        ));
}

#[test]
fn themes_command() {
    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args(["themes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("solarized-dark\tSolarized Dark"));
}

#[test]
fn info_command_turning_point_on_curve() {
    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args(["info", "--final-grade", "-0.05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("High point: station 1075.000"))
        .stdout(predicate::str::contains("Zero grade point: station 1075.000"))
        .stdout(predicate::str::contains("beyond curve ends").not());
}

#[test]
fn profile_command_rejects_huge_count() {
    Command::cargo_bin("vertical_curve_cli")
        .unwrap()
        .args(["profile", "--count", "18446744073709551615"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid parameter `sample_count`"));
}
