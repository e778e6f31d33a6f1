//! Integration tests for the CSV pipeline

#[path = "support/mod.rs"]
mod support;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sheetconv::{
    convert_csv_directory, convert_workbook_directory, ConversionConfig, ConversionErrorKind,
    Verbosity,
};
use std::fs;
use std::path::Path;
use support::{num, text, write_workbook, XSheet};
use tempfile::tempdir;

const PEOPLE_JSON: &str = "{\n  \"0\": {\n    \"name\": \"Kim\",\n    \"age\": 30\n  },\n  \"1\": {\n    \"name\": \"Lee\",\n    \"age\": 25\n  }\n}";

fn config_for(input: &Path, output: &Path) -> ConversionConfig {
    ConversionConfig::new()
        .with_input_dir(input)
        .with_output_dir(output)
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_people_scenario() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("people.csv"), "name,age\nKim,30\nLee,25\n").unwrap();

    let summary =
        convert_csv_directory(&config_for(input.path(), output.path()), Verbosity::quiet())
            .unwrap();

    assert_eq!(summary.files_converted, 1);
    assert_eq!(
        fs::read_to_string(output.path().join("people.json")).unwrap(),
        PEOPLE_JSON
    );
}

#[test]
fn test_row_keys_and_columns_match_input() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    let mut csv = String::from("id,label,weight\n");
    for i in 0..25 {
        csv.push_str(&format!("{},item{},{}.5\n", i, i, i));
    }
    fs::write(input.path().join("items.csv"), csv).unwrap();

    convert_csv_directory(&config_for(input.path(), output.path()), Verbosity::quiet()).unwrap();

    let value = read_json(&output.path().join("items.json"));
    let rows = value.as_object().unwrap();
    let keys: Vec<String> = rows.keys().cloned().collect();
    let expected: Vec<String> = (0..25).map(|i| i.to_string()).collect();
    assert_eq!(keys, expected);

    for (index, row) in rows.values().enumerate() {
        let columns: Vec<&String> = row.as_object().unwrap().keys().collect();
        assert_eq!(columns, vec!["id", "label", "weight"]);
        assert_eq!(row["id"], json!(index));
        assert_eq!(row["label"], json!(format!("item{}", index)));
        assert_eq!(row["weight"], json!(index as f64 + 0.5));
    }
}

#[test]
fn test_round_trip_reconstructs_rows() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let source = "city,population,capital\nSeoul,9500000,true\nBusan,3300000,false\nDaegu,,false\n";
    fs::write(input.path().join("cities.csv"), source).unwrap();

    convert_csv_directory(&config_for(input.path(), output.path()), Verbosity::quiet()).unwrap();

    let value = read_json(&output.path().join("cities.json"));
    let rebuilt: Vec<String> = value
        .as_object()
        .unwrap()
        .values()
        .map(|row| {
            row.as_object()
                .unwrap()
                .values()
                .map(|cell| match cell {
                    Value::Null => String::new(),
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();

    let original: Vec<&str> = source.lines().skip(1).collect();
    assert_eq!(rebuilt, original);
}

#[test]
fn test_conversion_is_idempotent() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(
        input.path().join("mixed.csv"),
        "a,b,c\n1,x,true\n2,,false\n3,z,\n",
    )
    .unwrap();
    let config = config_for(input.path(), output.path());

    convert_csv_directory(&config, Verbosity::quiet()).unwrap();
    let first = fs::read(output.path().join("mixed.json")).unwrap();
    convert_csv_directory(&config, Verbosity::quiet()).unwrap();
    let second = fs::read(output.path().join("mixed.json")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_header_only_file_writes_empty_object() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("empty.csv"), "name,age\n").unwrap();

    convert_csv_directory(&config_for(input.path(), output.path()), Verbosity::quiet()).unwrap();

    assert_eq!(
        fs::read_to_string(output.path().join("empty.json")).unwrap(),
        "{}"
    );
}

#[test]
fn test_bad_file_does_not_stop_the_batch() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("a_people.csv"), "name,age\nKim,30\nLee,25\n").unwrap();
    fs::write(input.path().join("b_broken.csv"), b"name\n\xc3\x28\n").unwrap();
    fs::write(input.path().join("c_ragged.csv"), "a,b\n1,2,3\n").unwrap();
    fs::write(input.path().join("d_more.csv"), "x\n1\n").unwrap();

    let summary =
        convert_csv_directory(&config_for(input.path(), output.path()), Verbosity::quiet())
            .unwrap();

    assert_eq!(summary.files_found, 4);
    assert_eq!(summary.files_converted, 2);
    assert_eq!(summary.files_failed, 2);
    assert_eq!(
        fs::read_to_string(output.path().join("a_people.json")).unwrap(),
        PEOPLE_JSON
    );
    assert!(output.path().join("d_more.json").exists());
    assert!(!output.path().join("b_broken.json").exists());
    assert!(!output.path().join("c_ragged.json").exists());
}

#[test]
fn test_no_csv_files_is_an_error() {
    let input = tempdir().unwrap();
    let output = input.path().join("json_output");
    fs::write(input.path().join("readme.txt"), "nothing here").unwrap();

    let err = convert_csv_directory(&config_for(input.path(), &output), Verbosity::quiet())
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        Some(ConversionErrorKind::NoInputFiles { .. })
    ));
    assert!(output.is_dir());
}

#[test]
fn test_non_ascii_is_written_verbatim() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(
        input.path().join("menu.csv"),
        "이름,café\n비빔밥,crème brûlée\n",
    )
    .unwrap();

    convert_csv_directory(&config_for(input.path(), output.path()), Verbosity::quiet()).unwrap();

    let written = fs::read_to_string(output.path().join("menu.json")).unwrap();
    assert_eq!(
        written,
        "{\n  \"0\": {\n    \"이름\": \"비빔밥\",\n    \"café\": \"crème brûlée\"\n  }\n}"
    );
}

#[test]
fn test_uppercase_extension_and_duplicate_headers() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("Dupes.CSV"), "a,a,\n1,2,3\n").unwrap();

    convert_csv_directory(&config_for(input.path(), output.path()), Verbosity::quiet()).unwrap();

    assert_eq!(
        read_json(&output.path().join("Dupes.json")),
        json!({"0": {"a": 1, "a.1": 2, "Unnamed: 2": 3}})
    );
}

#[test]
fn test_sheet_overwrites_csv_with_same_name() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("shared.csv"), "v\n1\n").unwrap();
    write_workbook(
        &input.path().join("book.xlsx"),
        &[XSheet::new("shared", vec![vec![text("v")], vec![num(2.0)]])],
    );
    let config = config_for(input.path(), output.path());

    convert_csv_directory(&config, Verbosity::quiet()).unwrap();
    assert_eq!(read_json(&output.path().join("shared.json")), json!({"0": {"v": 1}}));

    convert_workbook_directory(&config, Verbosity::quiet()).unwrap();
    assert_eq!(read_json(&output.path().join("shared.json")), json!({"0": {"v": 2}}));
}

#[test]
fn test_recursive_scan_picks_up_nested_files() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let nested = input.path().join("2024");
    fs::create_dir_all(&nested).unwrap();
    fs::write(input.path().join("top.csv"), "v\n1\n").unwrap();
    fs::write(nested.join("inner.csv"), "v\n2\n").unwrap();

    let flat = convert_csv_directory(&config_for(input.path(), output.path()), Verbosity::quiet())
        .unwrap();
    assert_eq!(flat.files_found, 1);
    assert!(!output.path().join("inner.json").exists());

    let config = config_for(input.path(), output.path()).with_recursive(true);
    let deep = convert_csv_directory(&config, Verbosity::quiet()).unwrap();
    assert_eq!(deep.files_found, 2);
    assert_eq!(read_json(&output.path().join("inner.json")), json!({"0": {"v": 2}}));
}

#[test]
fn test_in_memory_conversion_matches_file_output() {
    let rendered = sheetconv::csv_to_json_string("name,age\nKim,30\nLee,25\n").unwrap();
    assert_eq!(rendered, PEOPLE_JSON);
}

#[test]
fn test_missing_markers_become_null() {
    let rendered = sheetconv::csv_to_json_string("name,age\nKim,30\nNA,NA\n").unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(&rendered).unwrap(),
        json!({"0": {"name": "Kim", "age": 30}, "1": {"name": null, "age": null}})
    );
}

#[test]
fn test_empty_file_is_reported_and_skipped() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("a_blank.csv"), "").unwrap();
    fs::write(input.path().join("b_people.csv"), "name,age\nKim,30\nLee,25\n").unwrap();

    let summary =
        convert_csv_directory(&config_for(input.path(), output.path()), Verbosity::quiet())
            .unwrap();

    assert_eq!(summary.files_converted, 1);
    assert_eq!(summary.files_failed, 1);
    assert!(!output.path().join("a_blank.json").exists());
    assert_eq!(
        fs::read_to_string(output.path().join("b_people.json")).unwrap(),
        PEOPLE_JSON
    );
}
