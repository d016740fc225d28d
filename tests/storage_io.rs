use lifex_rs::models::Country;
use lifex_rs::{Analyzer, storage};
use std::fs;
use std::path::PathBuf;

fn sample(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| Country {
            name: format!("Country{i}"),
            region: "West".into(),
            population: 1_000 + i as u64,
            income_group: "High".into(),
            life_expectancy: [70.0 + i as f64, 72.0 + i as f64, 75.0 + i as f64],
        })
        .collect()
}

#[test]
fn save_csv_and_json() {
    let rows = sample(3);
    let tmp = std::env::temp_dir();

    let csv_path: PathBuf = tmp.join("lifex_rs_test.csv");
    storage::save_csv(&rows, &csv_path).unwrap();
    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    assert!(csv_txt.starts_with("country,region,"));
    assert_eq!(csv_txt.lines().count(), 1 + rows.len());
    fs::remove_file(&csv_path).ok();

    let json_path: PathBuf = tmp.join("lifex_rs_test.json");
    storage::save_json(&rows, &json_path).unwrap();
    let json_txt = fs::read_to_string(&json_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json_txt).unwrap();
    assert!(v.as_array().unwrap().len() == rows.len());
    fs::remove_file(&json_path).ok();
}

// An exported CSV uses the input column order, so it must load back into an
// identical collection.
#[test]
fn exported_csv_round_trips_through_the_loader() {
    let rows = sample(4);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.csv");
    storage::save_csv(&rows, &path).unwrap();

    let mut analyzer = Analyzer::new();
    let n = analyzer.load_from_path(&path).unwrap();
    assert_eq!(n, rows.len());
    assert_eq!(analyzer.countries(), rows.as_slice());
}
