mod common;

use std::fs;

use common::*;
use finance_core::{
    compute_financial_view,
    errors::FinanceError,
    storage::EntryStore,
    utils::persistence::{load_entries_from_path, save_entries_to_path},
};
use tempfile::tempdir;

#[test]
fn stored_snapshot_produces_same_view() {
    let (store, _) = setup_test_env();
    let entries = household();
    store.save("household", &entries).expect("save snapshot");

    let loaded = store.load("household").expect("load snapshot");
    assert_eq!(loaded, entries);
    assert_eq!(
        compute_financial_view(&loaded, today()),
        compute_financial_view(&entries, today())
    );
}

#[test]
fn overwriting_a_snapshot_replaces_its_contents() {
    let (store, _) = setup_test_env();
    store.save("monthly", &household()).expect("first save");
    store
        .save("monthly", &[account("Checking", "checking", 1.0)])
        .expect("second save");
    assert_eq!(store.load("monthly").expect("load").len(), 1);
    assert_eq!(store.list().expect("list"), vec!["monthly"]);
}

#[test]
fn unknown_snapshot_reports_not_found() {
    let (store, _) = setup_test_env();
    match store.load("nothing-here") {
        Err(FinanceError::NotFound(message)) => assert!(message.contains("nothing-here")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn corrupt_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").expect("write");
    assert!(matches!(
        load_entries_from_path(&path),
        Err(FinanceError::Serde(_))
    ));
}

#[test]
fn camel_case_entry_files_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("entries.json");
    fs::write(
        &path,
        r#"[{
            "id": "8f14e45f-ceea-467f-a0e6-3b1f0c2d9a11",
            "title": "Checking",
            "metadata": { "itemType": "account", "accountType": "checking", "balance": 75 },
            "createdAt": "2024-05-01T09:00:00Z",
            "updatedAt": "2024-05-01T09:00:00Z"
        }]"#,
    )
    .expect("write");

    let entries = load_entries_from_path(&path).expect("load");
    assert_eq!(entries.len(), 1);
    let view = compute_financial_view(&entries, today());
    assert_eq!(view.financial_summary.liquid_assets, 75.0);

    let copy = dir.path().join("copy.json");
    save_entries_to_path(&entries, &copy).expect("save copy");
    assert_eq!(load_entries_from_path(&copy).expect("reload"), entries);
}

#[test]
fn config_thresholds_round_trip_through_disk() {
    let (_, config) = setup_test_env();
    config.set("upcoming_bill_days", "45").expect("set days");
    config.set("locale", "en-GB").expect("set locale");

    let loaded = config.load().expect("load config");
    assert_eq!(loaded.thresholds.upcoming_bill_days, 45);
    assert_eq!(loaded.locale, "en-GB");
    assert!(config.path().ends_with("config/config.json"));
}
