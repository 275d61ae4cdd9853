//! Snapshot import and detection through the CLI data sources

use kindred_cli::cli::SourceArgs;
use kindred_cli::snapshot::SnapshotFile;
use kindred_cli::source::FamilySource;
use kindred_cli::Config;
use kindred_domain::{FamilyId, FamilyStore, MemberId};
use kindred_engine::{DetectionConfig, DetectionRequest, Locale, RelationshipDetectionService};
use kindred_store::SqliteStore;
use std::fs;
use tempfile::TempDir;

const FAMILY: &str = "00000000-0000-0000-0000-0000000000aa";

fn member_id(n: u128) -> MemberId {
    MemberId::from_value(n)
}

fn uuid(n: u128) -> String {
    member_id(n).to_string()
}

/// Grandfather (1) -> father (2) -> son (3), father married to mother (4).
fn snapshot_json() -> String {
    let member = |n: u128, name: &str, gender: &str| {
        format!(
            r#"{{"id": "{}", "family_id": "{}", "name": "{}", "gender": "{}"}}"#,
            uuid(n),
            FAMILY,
            name,
            gender
        )
    };
    let rel = |source: u128, target: u128, kind: &str| {
        format!(
            r#"{{"source": "{}", "target": "{}", "type": "{}", "family_id": "{}", "order": 1}}"#,
            uuid(source),
            uuid(target),
            kind,
            FAMILY
        )
    };

    format!(
        r#"{{"members": [{}, {}, {}, {}], "relationships": [{}, {}, {}, {}]}}"#,
        member(1, "Ong", "male"),
        member(2, "Bo", "male"),
        member(3, "Con", "male"),
        member(4, "Me", "female"),
        rel(1, 2, "father"),
        rel(2, 3, "father"),
        rel(4, 2, "wife"),
        rel(4, 3, "mother"),
    )
}

fn setup() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("family.json");
    let db_path = dir.path().join("family.db");
    fs::write(&json_path, snapshot_json()).unwrap();
    (dir, json_path, db_path)
}

fn family() -> FamilyId {
    FAMILY.parse().unwrap()
}

#[test]
fn test_import_round_trip() {
    let (_dir, json_path, db_path) = setup();

    let (members, relationships) = SnapshotFile::read(&json_path).unwrap().into_parts().unwrap();
    let mut store = SqliteStore::new(&db_path).unwrap();
    store.import(&members, &relationships).unwrap();

    let loaded = store.get_members(family()).unwrap();
    assert_eq!(loaded.len(), 4);
    assert_eq!(store.get_relationships(family()).unwrap().len(), 4);
}

#[test]
fn test_database_and_snapshot_agree() {
    let (_dir, json_path, db_path) = setup();

    let (members, relationships) = SnapshotFile::read(&json_path).unwrap().into_parts().unwrap();
    SqliteStore::new(&db_path).unwrap().import(&members, &relationships).unwrap();

    let config = Config::default();
    let from_db = FamilySource::open(
        &SourceArgs {
            db: Some(db_path),
            snapshot: None,
        },
        &config,
    )
    .unwrap();
    let from_json = FamilySource::open(
        &SourceArgs {
            db: None,
            snapshot: Some(json_path),
        },
        &config,
    )
    .unwrap();

    let detection_config = DetectionConfig::default().with_locale(Locale::Vietnamese);
    let request = DetectionRequest::new(family(), member_id(1), member_id(3)).unwrap();

    let db_result = RelationshipDetectionService::new(from_db, &detection_config)
        .detect(&request)
        .unwrap();
    let json_result = RelationshipDetectionService::new(from_json, &detection_config)
        .detect(&request)
        .unwrap();

    assert_eq!(db_result, json_result);
    assert_eq!(db_result.from_a_to_b, "ông nội");
    assert_eq!(db_result.from_b_to_a, "cháu nội");
}

#[test]
fn test_source_falls_back_to_configured_database() {
    let (_dir, json_path, db_path) = setup();
    let (members, relationships) = SnapshotFile::read(&json_path).unwrap().into_parts().unwrap();
    SqliteStore::new(&db_path).unwrap().import(&members, &relationships).unwrap();

    let mut config = Config::default();
    config.settings.database = Some(db_path);
    let source = FamilySource::open(&SourceArgs::default(), &config).unwrap();

    assert_eq!(source.get_members(family()).unwrap().len(), 4);
}

#[test]
fn test_source_requires_a_location() {
    let result = FamilySource::open(&SourceArgs::default(), &Config::default());
    assert!(result.is_err());
}
