//! Ticket classification against a trained model.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::stop_words::StopWordSet;
use crate::error::{Result, TriageError};
use crate::ml::classifier::NaiveBayesModel;

/// Predicted class of one ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Predicted class label.
    pub label: String,
    /// Log-likelihood of the predicted class.
    pub log_score: f64,
    /// Softmax probability of the predicted class, in `[0, 1]`.
    pub confidence: f64,
    /// False when another class scored exactly as high.
    pub strict: bool,
}

/// Accuracy over a labeled evaluation set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
}

/// Classify `text` and map the winning score index onto `known_classes`.
///
/// `known_classes` must list labels in the order the model scores them. An
/// index outside `known_classes` is an error.
pub fn classify(
    text: &str,
    known_classes: &[String],
    stop_words: &StopWordSet,
    model: &NaiveBayesModel,
    normalizer: &TextNormalizer,
) -> Result<ClassificationResult> {
    let tokens = normalizer.normalize(&[text], stop_words)?;
    let outcome = model.score(&tokens)?;

    let label = known_classes.get(outcome.best_index).ok_or_else(|| {
        TriageError::classification(format!(
            "model picked class index {} but only {} classes are known",
            outcome.best_index,
            known_classes.len()
        ))
    })?;
    debug!(
        "Classified {} tokens as '{label}' (strict: {})",
        tokens.len(),
        outcome.strict
    );

    Ok(ClassificationResult {
        label: label.clone(),
        log_score: outcome.scores[outcome.best_index],
        confidence: outcome.confidence(),
        strict: outcome.strict,
    })
}

/// Classifies tickets with a shared trained model.
#[derive(Debug, Clone)]
pub struct ClassificationService {
    model: Arc<NaiveBayesModel>,
    stop_words: StopWordSet,
    normalizer: TextNormalizer,
}

impl ClassificationService {
    pub fn new(
        model: Arc<NaiveBayesModel>,
        stop_words: StopWordSet,
        normalizer: TextNormalizer,
    ) -> Self {
        ClassificationService {
            model,
            stop_words,
            normalizer,
        }
    }

    pub fn model(&self) -> &Arc<NaiveBayesModel> {
        &self.model
    }

    /// Class labels in scoring order.
    pub fn classes(&self) -> &[String] {
        self.model.classes()
    }

    /// Classify a single ticket text.
    pub fn classify(&self, text: &str) -> Result<ClassificationResult> {
        classify(
            text,
            self.model.classes(),
            &self.stop_words,
            &self.model,
            &self.normalizer,
        )
    }

    /// Classify many texts in parallel; results keep the input order.
    pub fn classify_batch<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
    ) -> Result<Vec<ClassificationResult>> {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }

    /// Measure accuracy over `(text, expected label)` pairs.
    pub fn evaluate<T, L>(&self, samples: &[(T, L)]) -> Result<EvaluationReport>
    where
        T: AsRef<str> + Sync,
        L: AsRef<str> + Sync,
    {
        let texts: Vec<&str> = samples.iter().map(|(text, _)| text.as_ref()).collect();
        let predictions = self.classify_batch(&texts)?;

        let correct = predictions
            .iter()
            .zip(samples)
            .filter(|(prediction, (_, expected))| prediction.label == expected.as_ref())
            .count();
        let total = samples.len();
        let accuracy = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        };

        Ok(EvaluationReport {
            total,
            correct,
            accuracy,
        })
    }
}
