//! Integration tests for model reuse and regeneration on disk.

mod common;

use std::fs;

use tempfile::TempDir;
use ticket_triage::analysis::stop_words::StopWordSet;
use ticket_triage::corpus::read_training_data;
use ticket_triage::error::{Result, TriageError};
use ticket_triage::lifecycle::{LifecycleState, ModelLifecycle};
use ticket_triage::ml::classifier::{FileModelStore, ModelStore};

use common::*;

fn lifecycle(store: &FileModelStore) -> ModelLifecycle {
    ModelLifecycle::new(Box::new(store.clone()), orchestrator(4))
}

#[test]
fn test_first_run_trains_and_persists() -> Result<()> {
    let dir = TempDir::new()?;
    let train = write_training_file(dir.path(), TRAINING_TICKETS);
    let stop = write_stop_words_file(dir.path());
    let store = FileModelStore::new(dir.path().join("models/classifier.bin"));

    let (corpus, stop_words) = read_training_data(&train, &stop)?;
    let class_count = corpus.class_count();

    let mut lifecycle = lifecycle(&store);
    let resolved = lifecycle.resolve(corpus, &stop_words)?;

    assert_eq!(resolved.state, LifecycleState::Persisted);
    assert_eq!(resolved.model.learned_class_count(), class_count);
    assert_eq!(store.load()?, resolved.model);
    Ok(())
}

#[test]
fn test_stored_model_is_reused_unchanged() -> Result<()> {
    let dir = TempDir::new()?;
    let train = write_training_file(dir.path(), TRAINING_TICKETS);
    let stop = write_stop_words_file(dir.path());
    let store = FileModelStore::new(dir.path().join("classifier.bin"));

    let (corpus, stop_words) = read_training_data(&train, &stop)?;
    let trained = lifecycle(&store).resolve(corpus, &stop_words)?.model;
    let bytes_before = fs::read(store.path())?;

    // Fewer classes than the stored model covers.
    let train = write_training_file(dir.path(), &TRAINING_TICKETS[..6]);
    let (corpus, stop_words) = read_training_data(&train, &stop)?;
    let mut lifecycle = lifecycle(&store);
    let resolved = lifecycle.resolve(corpus, &stop_words)?;

    assert_eq!(resolved.state, LifecycleState::Reused);
    assert_eq!(resolved.model, trained);
    assert_eq!(resolved.model.document_count(), trained.document_count());
    assert_eq!(fs::read(store.path())?, bytes_before);
    assert!(!lifecycle.history().contains(&LifecycleState::Trained));
    Ok(())
}

#[test]
fn test_new_classes_trigger_retraining() -> Result<()> {
    let dir = TempDir::new()?;
    let stop = write_stop_words_file(dir.path());
    let store = FileModelStore::new(dir.path().join("classifier.bin"));

    // Credit card and Mortgage only.
    let train = write_training_file(dir.path(), &TRAINING_TICKETS[..6]);
    let (corpus, stop_words) = read_training_data(&train, &stop)?;
    let first = lifecycle(&store).resolve(corpus, &stop_words)?;
    assert_eq!(first.model.learned_class_count(), 2);

    let train = write_training_file(dir.path(), TRAINING_TICKETS);
    let (corpus, stop_words) = read_training_data(&train, &stop)?;
    let second = lifecycle(&store).resolve(corpus, &stop_words)?;

    assert_eq!(second.state, LifecycleState::Persisted);
    assert_eq!(second.model.learned_class_count(), 4);
    assert_eq!(store.load()?.learned_class_count(), 4);
    Ok(())
}

#[test]
fn test_corrupt_model_file_is_regenerated() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileModelStore::new(dir.path().join("classifier.bin"));
    fs::write(store.path(), b"not a model")?;

    let mut lifecycle = lifecycle(&store);
    let resolved = lifecycle.resolve(corpus(), &StopWordSet::from_words(STOP_WORDS))?;

    assert_eq!(resolved.state, LifecycleState::Persisted);
    assert_eq!(
        lifecycle.history(),
        &[
            LifecycleState::Unloaded,
            LifecycleState::LoadAttempted,
            LifecycleState::Stale,
            LifecycleState::Trained,
            LifecycleState::Persisted,
        ]
    );
    assert!(store.load().is_ok());
    Ok(())
}

#[test]
fn test_model_with_oversized_length_prefix_is_regenerated() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileModelStore::new(dir.path().join("classifier.bin"));

    let mut bytes = b"TRCM\x01\x00".to_vec();
    bytes.extend_from_slice(&1u64.to_le_bytes());
    bytes.extend_from_slice(&(1u64 << 40).to_le_bytes());
    bytes.extend_from_slice(b"abc");
    fs::write(store.path(), bytes)?;

    let mut lifecycle = lifecycle(&store);
    let resolved = lifecycle.resolve(corpus(), &StopWordSet::from_words(STOP_WORDS))?;

    assert_eq!(resolved.state, LifecycleState::Persisted);
    assert!(lifecycle.history().contains(&LifecycleState::Stale));
    assert_eq!(store.load()?, resolved.model);
    Ok(())
}

#[test]
fn test_unwritable_model_location_is_fatal() -> Result<()> {
    let dir = TempDir::new()?;
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, b"")?;
    let store = FileModelStore::new(blocker.join("classifier.bin"));

    let mut lifecycle = lifecycle(&store);
    let result = lifecycle.resolve(corpus(), &StopWordSet::new());

    assert!(matches!(result, Err(TriageError::Io(_))));
    assert_eq!(lifecycle.state(), LifecycleState::PersistFailed);
    Ok(())
}
