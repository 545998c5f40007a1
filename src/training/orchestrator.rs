//! Worker pool that turns a corpus into a trained model.

use std::collections::HashMap;
use std::thread;

use crossbeam_channel::unbounded;
use log::{debug, info, warn};

use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::stop_words::StopWordSet;
use crate::corpus::Corpus;
use crate::error::{Result, TriageError};
use crate::ml::classifier::NaiveBayesModel;
use crate::training::config::TrainingConfig;

/// One class worth of documents waiting to be normalized.
#[derive(Debug)]
struct ClassTask {
    label: String,
    documents: Vec<String>,
}

/// Normalized tokens of one class, sent back to the writer.
#[derive(Debug)]
struct ClassTokens {
    label: String,
    tokens: Vec<String>,
    tickets: usize,
}

/// Trains a [`NaiveBayesModel`] with a bounded pool of worker threads.
#[derive(Debug, Clone)]
pub struct TrainingOrchestrator {
    config: TrainingConfig,
    normalizer: TextNormalizer,
}

impl TrainingOrchestrator {
    /// Create an orchestrator after validating its configuration.
    pub fn new(config: TrainingConfig, normalizer: TextNormalizer) -> Result<Self> {
        config.validate()?;
        Ok(TrainingOrchestrator { config, normalizer })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Train a model over `classes`, in that order, from the documents in
    /// `corpus`.
    ///
    /// Every class is learned exactly once; a class with no documents is
    /// learned with an empty token sequence. Corpus labels missing from
    /// `classes` are skipped. The order in which classes are learned depends
    /// on worker scheduling, the resulting model does not.
    pub fn train(
        &self,
        corpus: Corpus,
        classes: &[String],
        stop_words: &StopWordSet,
    ) -> Result<NaiveBayesModel> {
        let mut model = NaiveBayesModel::new(classes.iter().cloned())?;
        info!("Found {} classes", classes.len());

        let mut grouped: HashMap<String, Vec<String>> = corpus.into_classes().into_iter().collect();
        let (task_sender, task_receiver) = unbounded();
        for label in classes {
            let documents = grouped.remove(label).unwrap_or_default();
            task_sender
                .send(ClassTask {
                    label: label.clone(),
                    documents,
                })
                .map_err(|e| TriageError::internal(format!("task queue closed: {e}")))?;
        }
        drop(task_sender);
        for label in grouped.keys() {
            warn!("Skipping class '{label}': not part of the training class list");
        }

        let task_count = classes.len();
        let (result_sender, result_receiver) = unbounded::<Result<ClassTokens>>();
        let normalizer = &self.normalizer;

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.config.worker_count);
            let mut failure: Option<TriageError> = None;

            for worker_id in 0..self.config.worker_count {
                let task_receiver = task_receiver.clone();
                let result_sender = result_sender.clone();
                let spawned = thread::Builder::new()
                    .name(format!("triage-worker-{worker_id}"))
                    .spawn_scoped(scope, move || {
                        for task in task_receiver.iter() {
                            let tickets = task.documents.len();
                            let outcome = normalizer
                                .normalize(&task.documents, stop_words)
                                .map(|tokens| ClassTokens {
                                    label: task.label,
                                    tokens,
                                    tickets,
                                });
                            if result_sender.send(outcome).is_err() {
                                break;
                            }
                        }
                    });
                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        failure = Some(e.into());
                        break;
                    }
                }
            }
            drop(result_sender);

            // Counting barrier: one result per class, learned by this thread only.
            let mut received = 0;
            while received < task_count {
                let Ok(outcome) = result_receiver.recv() else {
                    break;
                };
                received += 1;
                match outcome {
                    Ok(class) if failure.is_none() => {
                        if let Err(e) = model.learn(&class.tokens, &class.label) {
                            failure = Some(e);
                            continue;
                        }
                        info!(
                            "Trained '{}' class with {} tickets",
                            class.label, class.tickets
                        );
                    }
                    Ok(_) => {}
                    Err(e) => {
                        failure.get_or_insert(e);
                    }
                }
            }

            for handle in handles {
                let name = handle.thread().name().unwrap_or("triage-worker").to_string();
                if handle.join().is_err() {
                    failure.get_or_insert(TriageError::ThreadJoinError(format!(
                        "training worker {name} panicked"
                    )));
                }
            }

            if let Some(e) = failure {
                return Err(e);
            }
            if received != task_count {
                return Err(TriageError::internal(format!(
                    "received {received} of {task_count} class results"
                )));
            }
            Ok(())
        })?;

        model.finalize()?;
        debug!(
            "Finalized model with {} classes and vocabulary sizes {:?}",
            model.learned_class_count(),
            model.word_count()
        );
        Ok(model)
    }
}
