//! Reuse-or-regenerate decision for the trained model.
//!
//! ```text
//! Unloaded → LoadAttempted → Reused                          (done)
//!                          → Stale → Trained → Persisted     (done)
//!                                            → PersistFailed (error)
//! ```
//!
//! A stored model is reused when it has learned at least as many classes as
//! the current corpus holds. Content changes that keep the class count are not
//! detected.

use std::fmt;

use log::{debug, info, warn};

use crate::analysis::stop_words::StopWordSet;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::ml::classifier::{ModelStore, NaiveBayesModel};
use crate::training::TrainingOrchestrator;

/// States of the model lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Unloaded,
    LoadAttempted,
    Reused,
    Stale,
    Trained,
    Persisted,
    PersistFailed,
}

impl LifecycleState {
    /// Whether the state ends a run.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LifecycleState::Reused | LifecycleState::Persisted | LifecycleState::PersistFailed
        )
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Unloaded => "unloaded",
            LifecycleState::LoadAttempted => "load-attempted",
            LifecycleState::Reused => "reused",
            LifecycleState::Stale => "stale",
            LifecycleState::Trained => "trained",
            LifecycleState::Persisted => "persisted",
            LifecycleState::PersistFailed => "persist-failed",
        };
        f.write_str(name)
    }
}

/// A model ready for classification and the terminal state that produced it.
#[derive(Debug, Clone)]
pub struct ResolvedModel {
    pub model: NaiveBayesModel,
    pub state: LifecycleState,
}

/// Loads a stored model or trains and persists a new one.
pub struct ModelLifecycle {
    store: Box<dyn ModelStore>,
    orchestrator: TrainingOrchestrator,
    history: Vec<LifecycleState>,
}

impl fmt::Debug for ModelLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelLifecycle")
            .field("store", &self.store.location())
            .field("history", &self.history)
            .finish()
    }
}

impl ModelLifecycle {
    pub fn new(store: Box<dyn ModelStore>, orchestrator: TrainingOrchestrator) -> Self {
        ModelLifecycle {
            store,
            orchestrator,
            history: vec![LifecycleState::Unloaded],
        }
    }

    /// Current state.
    pub fn state(&self) -> LifecycleState {
        self.history
            .last()
            .copied()
            .unwrap_or(LifecycleState::Unloaded)
    }

    /// Every state visited so far, oldest first.
    pub fn history(&self) -> &[LifecycleState] {
        &self.history
    }

    fn transition(&mut self, next: LifecycleState) {
        debug!("Model lifecycle: {} -> {next}", self.state());
        self.history.push(next);
    }

    /// Return a model fit for `corpus`: the stored one when it covers every
    /// corpus class, otherwise a freshly trained and persisted one.
    ///
    /// A load failure only means "no model"; a persist failure is returned as
    /// an error and leaves the lifecycle in [`LifecycleState::PersistFailed`].
    pub fn resolve(&mut self, corpus: Corpus, stop_words: &StopWordSet) -> Result<ResolvedModel> {
        self.history.truncate(1);
        self.transition(LifecycleState::LoadAttempted);

        let loaded = match self.store.load() {
            Ok(model) => Some(model),
            Err(e) => {
                warn!(
                    "Can not read model from file {}: {e}",
                    self.store.location()
                );
                None
            }
        };

        if let Some(model) = loaded {
            if model.learned_class_count() >= corpus.class_count() {
                info!(
                    "Found existing model with [{} classes] learned and [{:?} words] learned for every class",
                    model.learned_class_count(),
                    model.word_count()
                );
                self.transition(LifecycleState::Reused);
                return Ok(ResolvedModel {
                    model,
                    state: LifecycleState::Reused,
                });
            }
            info!(
                "There are more new classes in training data ({} learned, {} in corpus)",
                model.learned_class_count(),
                corpus.class_count()
            );
        }
        self.transition(LifecycleState::Stale);

        info!("Generating new model");
        let classes = corpus.labels();
        let model = self.orchestrator.train(corpus, &classes, stop_words)?;
        self.transition(LifecycleState::Trained);

        if let Err(e) = self.store.save(&model) {
            self.transition(LifecycleState::PersistFailed);
            return Err(e);
        }
        info!("Model saved to {}", self.store.location());
        self.transition(LifecycleState::Persisted);

        Ok(ResolvedModel {
            model,
            state: LifecycleState::Persisted,
        })
    }
}
