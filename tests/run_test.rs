//! End-to-end runs of the generator

use birdhouse::{load_parameters, run, Cli};
use birdhouse_core::BirdhouseParameters;
use clap::Parser;

#[test]
fn test_default_run_writes_eight_files() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("construction_files");
    let cli = Cli::parse_from(["birdhouse", "--output", output.to_str().unwrap()]);

    let summary = run(&cli).unwrap();
    assert_eq!(summary.dxf_files.len(), 8);
    assert_eq!(summary.preview_parts, 0);
    assert!(output.join("front_plate.dxf").is_file());
    assert!(output.join("roof_right.dxf").is_file());
}

#[test]
fn test_run_with_params_and_preview() {
    let dir = tempfile::tempdir().unwrap();
    let params_path = dir.path().join("house.toml");
    BirdhouseParameters {
        wall_thickness: 3.0,
        ..Default::default()
    }
    .save_to_file(&params_path)
    .unwrap();

    let output = dir.path().join("out");
    let preview = dir.path().join("preview");
    let cli = Cli::parse_from([
        "birdhouse",
        "--params",
        params_path.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--preview",
        preview.to_str().unwrap(),
    ]);

    let summary = run(&cli).unwrap();
    assert_eq!(summary.preview_parts, 9);
    assert!(preview.join("preview.json").is_file());
    assert!(preview.join("side_right.stl").is_file());
}

#[test]
fn test_save_params_writes_effective_parameters() {
    let dir = tempfile::tempdir().unwrap();
    let saved = dir.path().join("saved.json");
    let cli = Cli::parse_from([
        "birdhouse",
        "--output",
        dir.path().join("out").to_str().unwrap(),
        "--save-params",
        saved.to_str().unwrap(),
    ]);

    run(&cli).unwrap();
    let loaded = load_parameters(Some(&saved)).unwrap();
    assert_eq!(loaded, BirdhouseParameters::default());
}

#[test]
fn test_invalid_params_abort_before_export() {
    let dir = tempfile::tempdir().unwrap();
    let params_path = dir.path().join("bad.json");
    std::fs::write(&params_path, r#"{ "width": 5.0 }"#).unwrap();

    let output = dir.path().join("out");
    let cli = Cli::parse_from([
        "birdhouse",
        "--params",
        params_path.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    assert!(run(&cli).is_err());
    assert!(!output.exists());
}
