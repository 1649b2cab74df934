//! Integration tests for table IO, statistics persistence and config loading.

use std::io::Write;

use zscore_scaler::config::{load_scaler_config, ScalerConfig};
use zscore_scaler::io::{
    load_statistics, read_csv, read_table, save_statistics, write_table, TableReaderConfig,
};
use zscore_scaler::logging::init_logging;
use zscore_scaler::math::Array2;
use zscore_scaler::preprocessing::{Fittable, StandardScaler, Transformable};

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[test]
fn read_csv_with_header() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "a,b\n1,10\n2,20\n3,30\n");

    let table = read_csv(&path).unwrap();
    assert_eq!(table.column_names, vec!["a", "b"]);
    assert_eq!(table.x.shape(), (3, 2));
    assert_eq!(table.x.row_slice(2), &[3.0, 30.0]);
}

#[test]
fn read_tsv_selects_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.tsv", "id\tb\ta\nx\t10\t1\ny\t20\t2\n");

    let config = TableReaderConfig {
        columns: Some(vec!["a".to_string(), "B".to_string()]),
        ..TableReaderConfig::tsv()
    };
    let table = read_table(&path, &config).unwrap();
    assert_eq!(table.column_names, vec!["a", "b"]);
    assert_eq!(table.x.to_rows(), vec![vec![1.0, 10.0], vec![2.0, 20.0]]);
}

#[test]
fn read_without_header_names_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "1,2\n3,4\n");

    let config = TableReaderConfig {
        has_headers: false,
        ..TableReaderConfig::default()
    };
    let table = read_table(&path, &config).unwrap();
    assert_eq!(table.column_names, vec!["column_0", "column_1"]);
    assert_eq!(table.x.shape(), (2, 2));
}

#[test]
fn read_reports_bad_cell() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "a,b\n1,2\n3,oops\n");

    let err = read_csv(&path).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("'b'"), "{}", msg);
    assert!(msg.contains("row 2"), "{}", msg);
}

#[test]
fn read_rejects_ragged_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "a,b\n1,2\n3\n");

    let err = read_csv(&path).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Row 2 has 1 columns, expected 2"), "{}", msg);
}

#[test]
fn read_without_header_rejects_ragged_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.csv", "1,2,3\n4,5\n");

    let config = TableReaderConfig {
        has_headers: false,
        ..TableReaderConfig::default()
    };
    let msg = format!("{:#}", read_table(&path, &config).unwrap_err());
    assert!(msg.contains("Row 2 has 2 columns, expected 3"), "{}", msg);
}

#[test]
fn read_missing_file_errors() {
    assert!(read_csv("/nonexistent/path/data.csv").is_err());
}

#[test]
fn write_then_read_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let x = Array2::from_rows(vec![vec![0.1, -2.5], vec![1e-8, 3.0]]).unwrap();
    let names = vec!["left".to_string(), "right".to_string()];

    write_table(&path, &x, Some(names.as_slice()), b',').unwrap();
    let table = read_csv(&path).unwrap();
    assert_eq!(table.column_names, names);
    assert_eq!(table.x, x);
}

#[test]
fn write_rejects_wrong_name_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let x = Array2::from_rows(vec![vec![1.0, 2.0]]).unwrap();
    let names = vec!["only".to_string()];
    assert!(write_table(&path, &x, Some(names.as_slice()), b',').is_err());
}

// ---------------------------------------------------------------------------
// Statistics persistence
// ---------------------------------------------------------------------------

#[test]
fn saved_statistics_rebuild_an_equivalent_scaler() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scaler.json");
    let x = Array2::from_rows(vec![vec![1.0, 10.0], vec![2.0, 25.0], vec![4.0, 30.0]]).unwrap();

    let mut scaler = StandardScaler::new();
    scaler.fit(&x).unwrap();
    save_statistics(&path, scaler.statistics().unwrap()).unwrap();

    let loaded = load_statistics(&path).unwrap();
    assert_eq!(&loaded, scaler.statistics().unwrap());

    let restored = StandardScaler::from_statistics(*scaler.config(), loaded).unwrap();
    assert_eq!(restored.transform(&x).unwrap(), scaler.transform(&x).unwrap());
}

#[test]
fn load_statistics_rejects_inconsistent_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "bad.json",
        r#"{"mean": [0.0, 1.0], "spread": [1.0], "n_samples_seen": 4}"#,
    );
    assert!(load_statistics(&path).is_err());
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn scaler_config_default_values() {
    let cfg = ScalerConfig::default();
    assert!(cfg.with_mean);
    assert!(cfg.with_std);
}

#[test]
fn scaler_config_round_trips_json() {
    let cfg = ScalerConfig::new(false, true);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("with_mean"));
    let cfg2: ScalerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn load_config_fills_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "config.json", r#"{"with_std": false}"#);

    let cfg = load_scaler_config(&path).unwrap();
    assert!(cfg.with_mean);
    assert!(!cfg.with_std);
}

#[test]
fn loaded_config_drives_a_new_scaler() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "config.json", r#"{"with_mean": false}"#);

    let cfg = load_scaler_config(&path).unwrap();
    let mut scaler = StandardScaler::with_config(cfg);
    assert_eq!(*scaler.config(), ScalerConfig::new(false, true));

    // mean 2, spread 1: without centering the values are only divided by 1
    let x = Array2::from_rows(vec![vec![1.0], vec![3.0]]).unwrap();
    scaler.fit(&x).unwrap();
    let z = scaler.transform(&x).unwrap();
    assert_eq!(z.to_rows(), vec![vec![1.0], vec![3.0]]);

    let mut centered = StandardScaler::with_config(ScalerConfig::default());
    centered.fit(&x).unwrap();
    assert_eq!(centered.transform(&x).unwrap().to_rows(), vec![vec![-1.0], vec![1.0]]);
}

#[test]
fn load_config_rejects_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "config.json", "{ not json");
    assert!(load_scaler_config(&path).is_err());
}
