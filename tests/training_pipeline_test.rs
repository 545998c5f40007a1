//! Integration tests for concurrent training and classification.

mod common;

use std::sync::Arc;

use ticket_triage::analysis::normalizer::TextNormalizer;
use ticket_triage::analysis::stop_words::StopWordSet;
use ticket_triage::classification::{ClassificationService, classify};
use ticket_triage::corpus::Corpus;
use ticket_triage::error::Result;
use ticket_triage::training::DEFAULT_WORKER_COUNT;

use common::*;

fn stop_words() -> StopWordSet {
    StopWordSet::from_words(STOP_WORDS)
}

#[test]
fn test_every_submitted_class_is_learned() -> Result<()> {
    let corpus = corpus();
    let classes = corpus.labels();

    let model = orchestrator(DEFAULT_WORKER_COUNT).train(corpus, &classes, &stop_words())?;

    assert_eq!(model.learned_class_count(), classes.len());
    assert_eq!(model.document_count(), classes.len());
    assert!(model.word_count().iter().all(|&words| words > 0));

    Ok(())
}

#[test]
fn test_result_is_independent_of_pool_size() -> Result<()> {
    let normalizer = TextNormalizer::english()?;
    let stop_words = stop_words();

    let mut models = Vec::new();
    for workers in [1, 4, 10] {
        let corpus = corpus();
        let classes = corpus.labels();
        models.push(orchestrator(workers).train(corpus, &classes, &stop_words)?);
    }

    let outcomes: Vec<Vec<String>> = models
        .iter()
        .map(|model| {
            HELD_OUT
                .iter()
                .map(|(text, _)| {
                    classify(text, model.classes(), &stop_words, model, &normalizer)
                        .map(|result| result.label)
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    for model in &models[1..] {
        assert_eq!(model.learned_class_count(), models[0].learned_class_count());
        assert_eq!(model, &models[0]);
    }
    assert_eq!(outcomes[0], outcomes[1]);
    assert_eq!(outcomes[0], outcomes[2]);

    Ok(())
}

#[test]
fn test_repeated_training_is_deterministic() -> Result<()> {
    let stop_words = stop_words();
    let first = {
        let corpus = corpus();
        let classes = corpus.labels();
        orchestrator(10).train(corpus, &classes, &stop_words)?
    };
    let second = {
        let corpus = corpus();
        let classes = corpus.labels();
        orchestrator(10).train(corpus, &classes, &stop_words)?
    };
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_held_out_tickets_are_routed() -> Result<()> {
    let corpus = corpus();
    let classes = corpus.labels();
    let stop_words = stop_words();
    let model = orchestrator(DEFAULT_WORKER_COUNT).train(corpus, &classes, &stop_words)?;

    let service = ClassificationService::new(Arc::new(model), stop_words, TextNormalizer::english()?);

    let mortgage = service.classify("escrow payment on the mortgage went up")?;
    assert_eq!(mortgage.label, "Mortgage");
    assert!(mortgage.strict);

    let report = service.evaluate(HELD_OUT)?;
    assert_eq!(report.total, HELD_OUT.len());
    assert!(report.accuracy >= 0.75, "accuracy {}", report.accuracy);

    Ok(())
}

#[test]
fn test_clear_cut_classification() -> Result<()> {
    let mut corpus = Corpus::new();
    corpus.push("class1", "this is a text");
    corpus.push("class2", "this is another text");
    let classes = corpus.labels();
    let stop_words = StopWordSet::new();

    let model = orchestrator(DEFAULT_WORKER_COUNT).train(corpus, &classes, &stop_words)?;
    let result = classify(
        "this is a text",
        &classes,
        &stop_words,
        &model,
        &TextNormalizer::english()?,
    )?;

    assert_eq!(result.label, "class1");
    Ok(())
}
