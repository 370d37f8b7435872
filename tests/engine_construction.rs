//! Engine construction: dataset sources, snapshot restore and rebuild.

use nordname::prelude::*;

struct FailingSource;

impl DatasetSource for FailingSource {
    fn load(&self) -> Result<RawDataset, nordname::index::DatasetError> {
        Err(nordname::index::DatasetError::Unavailable(
            "no dataset configured".to_string(),
        ))
    }
}

fn dataset() -> RawDataset {
    let mut dataset = RawDataset::default();
    dataset.first_names.insert(
        "Søren".to_string(),
        NameInfo::with_country(&[("DK", 0.8)]),
    );
    dataset
        .last_names
        .insert("Hansen".to_string(), NameInfo::default());
    dataset
}

#[test]
fn builds_fresh_without_a_snapshot() {
    let source = InMemorySource(dataset());
    let engine = NameMatcher::new(&source, false, "/nonexistent/never-written.idx.gz").unwrap();
    assert_eq!(engine.index().len(), 2);
}

#[test]
fn first_build_writes_a_snapshot_the_second_build_restores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.idx.gz");

    let source = InMemorySource(dataset());
    let built = NameMatcher::new(&source, true, &path).unwrap();
    assert!(path.exists(), "snapshot should be written after a build");

    // The restored engine never touches the dataset source.
    let restored = NameMatcher::new(&FailingSource, true, &path).unwrap();
    assert_eq!(restored.index().len(), built.index().len());

    let from_built = built.smart_search(Some("Soren"), Some("Hanson"), Some("DK"), 10, 70);
    let from_restored = restored.smart_search(Some("Soren"), Some("Hanson"), Some("DK"), 10, 70);
    assert_eq!(from_built, from_restored);
}

#[test]
fn corrupt_snapshot_falls_back_to_a_rebuild() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.idx.gz");
    std::fs::write(&path, b"not a snapshot").unwrap();

    let source = InMemorySource(dataset());
    let engine = NameMatcher::new(&source, true, &path).unwrap();
    assert_eq!(engine.index().len(), 2);
}

#[test]
fn fails_only_when_no_dataset_and_no_snapshot() {
    let err = NameMatcher::new(&FailingSource, false, "/nonexistent/none.idx.gz");
    assert!(err.is_err());

    let missing_snapshot =
        NameMatcher::new(&FailingSource, true, "/nonexistent/none.idx.gz");
    assert!(missing_snapshot.is_err());
}

#[test]
fn json_file_source_feeds_the_engine() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "first_names": {{ "Søren": {{ "country": {{ "DK": 0.8 }} }} }},
            "last_names": {{ "Hansen": {{}} }}
        }}"#
    )
    .unwrap();

    let source = JsonFileSource::new(file.path());
    let engine = NameMatcher::new(&source, false, "/nonexistent/none.idx.gz").unwrap();
    assert!(engine.get_details("Søren").is_some());
}
