use chrono::NaiveDate;
use fuelog::mirror::NoMirror;
use fuelog::model::{FuelLogEntry, Reading, Settings};
use fuelog::store::backend::StorageBackend;
use fuelog::store::fs::FileStore;
use fuelog::store::fs_backend::{FsBackend, LOGS_FILE, SETTINGS_FILE};
use fuelog::store::LogStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

fn entry(odo_start: f64, odo_end: f64) -> FuelLogEntry {
    FuelLogEntry::new(Reading {
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        fuel_brand: "Petronas".to_string(),
        amount_paid: 71.75,
        litres: 35.0,
        odo_start,
        odo_end,
        notes: "full tank".to_string(),
    })
}

#[test]
fn test_fs_backend_missing_files_read_as_empty() {
    let (_dir, backend) = setup();
    assert!(backend.load_entries().unwrap().is_empty());
    assert_eq!(backend.load_settings().unwrap(), None);
}

#[test]
fn test_fs_backend_entries_round_trip() {
    let (_dir, backend) = setup();
    let entries = vec![entry(50_000.0, 50_450.0), entry(50_450.0, 50_900.0)];

    backend.save_entries(&entries).unwrap();
    assert_eq!(backend.load_entries().unwrap(), entries);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.save_entries(&[entry(0.0, 100.0)]).unwrap();
    backend.save_settings(&Settings::default()).unwrap();

    assert!(backend.root().join(LOGS_FILE).exists());
    assert!(backend.root().join(SETTINGS_FILE).exists());

    // Verify NO .tmp files are left behind
    for dir_entry in fs::read_dir(backend.root()).unwrap() {
        let path = dir_entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_writes_camel_case_json() {
    let (_dir, backend) = setup();
    backend.save_entries(&[entry(0.0, 100.0)]).unwrap();

    let raw = fs::read_to_string(backend.root().join(LOGS_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value[0];
    assert_eq!(first["fuelBrand"], "Petronas");
    assert_eq!(first["odoStart"], 0.0);
    assert_eq!(first["kmPerLiter"], 2.86);
    assert!(first["timestamp"].is_i64());
}

#[test]
fn test_fs_backend_corrupt_logs_are_an_error() {
    let (_dir, backend) = setup();
    fs::create_dir_all(backend.root()).unwrap();
    fs::write(backend.root().join(LOGS_FILE), "[{\"id\":").unwrap();

    assert!(backend.load_entries().is_err());
}

#[test]
fn test_file_store_corrupt_logs_list_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(LOGS_FILE), "not json at all").unwrap();

    let store = FileStore::<NoMirror>::open(dir.path().to_path_buf(), NoMirror);
    assert!(store.list().is_empty());
}

#[test]
fn test_file_store_corrupt_settings_read_as_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(SETTINGS_FILE), "[1, 2").unwrap();

    let store = FileStore::<NoMirror>::open(dir.path().to_path_buf(), NoMirror);
    assert_eq!(store.settings(), Settings::default());
}

#[test]
fn test_file_store_reads_entries_written_by_another_client() {
    let dir = TempDir::new().unwrap();
    let raw = r#"[
        {"id": "a", "date": "2024-01-01", "fuelBrand": "Shell", "amountRM": 80,
         "litres": 40, "odoStart": 1000, "odoEnd": 1400, "distance": 400,
         "kmPerRM": 5, "kmPerLiter": 10, "timestamp": 1704067200000},
        {"id": "b", "date": "2024-01-08", "fuelBrand": "Petronas", "amountRM": 70,
         "litres": 35, "odoStart": 1400, "odoEnd": 1820, "distance": 420,
         "kmPerRM": 6, "kmPerLiter": 12, "notes": "", "timestamp": 1704672000000}
    ]"#;
    fs::write(dir.path().join(LOGS_FILE), raw).unwrap();

    let store = FileStore::<NoMirror>::open(dir.path().to_path_buf(), NoMirror);
    let ids: Vec<String> = store.list().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn test_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = FileStore::<NoMirror>::open(dir.path().to_path_buf(), NoMirror);
        store.append(entry(0.0, 300.0)).unwrap();
        store
            .save_settings(&Settings {
                remote_mirroring_enabled: true,
                remote_endpoint_url: "https://x.example".to_string(),
            })
            .unwrap();
    }

    let store = FileStore::<NoMirror>::open(dir.path().to_path_buf(), NoMirror);
    assert_eq!(store.list().len(), 1);
    assert!(store.settings().remote_mirroring_enabled);
}
