//! Command implementations for the ticket-triage CLI.

use std::sync::Arc;

use log::info;

use crate::analysis::lemmatizer::load_lemmatizer;
use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::stop_words::StopWordSet;
use crate::classification::ClassificationService;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{read_corpus, read_training_data};
use crate::error::{Result, TriageError};
use crate::lifecycle::{ModelLifecycle, ResolvedModel};
use crate::ml::classifier::{FileModelStore, ModelStore};
use crate::training::TrainingOrchestrator;

/// Execute a CLI command.
pub fn execute_command(args: TriageArgs) -> Result<()> {
    match &args.command {
        Command::Train(_) => train(&args),
        Command::Classify(classify_args) => classify(classify_args, &args),
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args, &args),
        Command::Inspect(_) => inspect(&args),
    }
}

/// Read the corpus and bring the model up to date with it.
fn resolve_model(args: &TriageArgs) -> Result<(ResolvedModel, StopWordSet, TextNormalizer)> {
    let paths = args.pipeline_paths()?;
    let normalizer = TextNormalizer::new(load_lemmatizer(args.lemma_dict.as_deref()))?;

    let (corpus, stop_words) = read_training_data(&paths.train_data, &paths.stop_words)?;
    let orchestrator = TrainingOrchestrator::new(args.training_config(), normalizer.clone())?;
    let mut lifecycle =
        ModelLifecycle::new(Box::new(FileModelStore::new(&paths.model_file)), orchestrator);

    let resolved = lifecycle.resolve(corpus, &stop_words)?;
    info!("Model {} ({} classes)", resolved.state, resolved.model.classes().len());
    Ok((resolved, stop_words, normalizer))
}

fn train(args: &TriageArgs) -> Result<()> {
    let (resolved, _, _) = resolve_model(args)?;
    let model = &resolved.model;

    output_result(
        "Model ready",
        &TrainSummary {
            state: resolved.state.to_string(),
            model_file: args
                .model_file
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            classes: model.classes().to_vec(),
            learned_classes: model.learned_class_count(),
            documents: model.document_count(),
        },
        args,
    )
}

fn classify(classify_args: &ClassifyArgs, args: &TriageArgs) -> Result<()> {
    let (resolved, stop_words, normalizer) = resolve_model(args)?;
    let service = ClassificationService::new(Arc::new(resolved.model), stop_words, normalizer);

    let results = service.classify_batch(&classify_args.texts)?;
    let classified: Vec<ClassifiedText> = classify_args
        .texts
        .iter()
        .cloned()
        .zip(results)
        .map(|(text, result)| ClassifiedText { text, result })
        .collect();

    output_result("Classification results", &classified, args)
}

fn evaluate(evaluate_args: &EvaluateArgs, args: &TriageArgs) -> Result<()> {
    let (resolved, stop_words, normalizer) = resolve_model(args)?;
    let service = ClassificationService::new(Arc::new(resolved.model), stop_words, normalizer);

    let held_out = read_corpus(&evaluate_args.test_file)?;
    let samples: Vec<(&str, &str)> = held_out
        .iter()
        .flat_map(|(label, documents)| documents.iter().map(move |text| (text.as_str(), label)))
        .collect();
    let report = service.evaluate(&samples)?;

    output_result(
        "Evaluation results",
        &EvaluationSummary {
            test_file: evaluate_args.test_file.display().to_string(),
            total: report.total,
            correct: report.correct,
            accuracy: report.accuracy,
        },
        args,
    )
}

fn inspect(args: &TriageArgs) -> Result<()> {
    let model_file = args
        .model_file
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| TriageError::config(format!("{MODEL_FILE_ENV} is empty")))?;
    let model = FileModelStore::new(model_file).load()?;

    let classes = model
        .classes()
        .iter()
        .zip(model.word_count())
        .map(|(label, vocabulary)| ClassInfo {
            label: label.clone(),
            vocabulary,
        })
        .collect();

    output_result(
        "Stored model",
        &ModelInfo {
            model_file: model_file.display().to_string(),
            finalized: model.is_finalized(),
            learned_classes: model.learned_class_count(),
            documents: model.document_count(),
            classes,
        },
        args,
    )
}
