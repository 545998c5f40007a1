//! Multinomial Naive Bayes over TF-IDF reweighted term frequencies.
//!
//! Learning accumulates, per class, the raw count of every token and the
//! token's relative frequency within each `learn` call. [`NaiveBayesModel::finalize`]
//! replaces the raw counts with
//!
//! ```text
//! freq(w, c) = Σ ln(1 + tf) · ln(1 + N / total(c))
//! ```
//!
//! where `N` is the number of `learn` calls and the sum runs over every call
//! in which `w` occurred. Scoring is then
//!
//! ```text
//! score(c) = ln(total(c) / Σ total) + Σ_w ln(freq(w, c) / total(c))
//! ```
//!
//! with [`DEFAULT_WORD_PROBABILITY`] standing in for words a class never saw.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

/// Probability assigned to a word that a class has never seen.
pub const DEFAULT_WORD_PROBABILITY: f64 = 1e-11;

/// Per-class learning state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct ClassData {
    /// Raw token counts before finalize, TF-IDF weights after.
    freqs: HashMap<String, f64>,
    /// Relative frequency of a token in each learn call it appeared in.
    term_frequencies: HashMap<String, Vec<f64>>,
    /// Number of tokens learned into this class.
    total: usize,
    /// Number of learn calls for this class.
    documents: usize,
}

impl ClassData {
    fn word_probability(&self, word: &str) -> f64 {
        match self.freqs.get(word) {
            Some(&freq) if self.total > 0 => freq / self.total as f64,
            _ => DEFAULT_WORD_PROBABILITY,
        }
    }
}

/// Result of scoring one token sequence against every class.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreOutcome {
    /// Log-likelihood per class, in model class order.
    pub scores: Vec<f64>,
    /// Index of the highest score (first one on ties).
    pub best_index: usize,
    /// False when another class ties the best score.
    pub strict: bool,
}

impl ScoreOutcome {
    /// Softmax of the log scores: a probability per class summing to one.
    pub fn probabilities(&self) -> Vec<f64> {
        let max = self
            .scores
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if !max.is_finite() {
            let uniform = 1.0 / self.scores.len().max(1) as f64;
            return vec![uniform; self.scores.len()];
        }

        let exps: Vec<f64> = self.scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / sum).collect()
    }

    /// Probability of the best class.
    pub fn confidence(&self) -> f64 {
        self.probabilities()
            .get(self.best_index)
            .copied()
            .unwrap_or(0.0)
    }
}

/// A Naive Bayes text classifier with a fixed, ordered class list.
///
/// The model is not internally synchronized; callers that train from several
/// threads must funnel `learn` calls through one owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    classes: Vec<String>,
    data: Vec<ClassData>,
    learned: usize,
    finalized: bool,
}

impl NaiveBayesModel {
    /// Create an untrained model over `classes`, in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ticket_triage::ml::NaiveBayesModel;
    ///
    /// let mut model = NaiveBayesModel::new(["class1", "class2"]).unwrap();
    /// model.learn(&["this", "be", "a", "text"], "class1").unwrap();
    /// model.learn(&["this", "be", "another", "text"], "class2").unwrap();
    /// model.finalize().unwrap();
    ///
    /// let outcome = model.score(&["this", "be", "a", "text"]).unwrap();
    /// assert_eq!(model.classes()[outcome.best_index], "class1");
    /// ```
    pub fn new<I, S>(classes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
        if classes.is_empty() {
            return Err(TriageError::model("a model needs at least one class"));
        }
        for (i, class) in classes.iter().enumerate() {
            if classes[..i].contains(class) {
                return Err(TriageError::model(format!("duplicate class '{class}'")));
            }
        }

        Ok(NaiveBayesModel {
            data: vec![ClassData::default(); classes.len()],
            classes,
            learned: 0,
            finalized: false,
        })
    }

    /// Learn one token sequence into `label`.
    pub fn learn<S: AsRef<str>>(&mut self, tokens: &[S], label: &str) -> Result<()> {
        if self.finalized {
            return Err(TriageError::model(format!(
                "can not learn '{label}' into a finalized model"
            )));
        }
        let index = self.class_index(label).ok_or_else(|| {
            TriageError::model(format!("'{label}' is not a class of this model"))
        })?;
        let data = &mut self.data[index];

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token.as_ref()).or_insert(0) += 1;
        }
        let length = tokens.len() as f64;
        for (word, count) in counts {
            data.term_frequencies
                .entry(word.to_string())
                .or_default()
                .push(count as f64 / length);
        }

        for token in tokens {
            *data.freqs.entry(token.as_ref().to_string()).or_insert(0.0) += 1.0;
        }
        data.total += tokens.len();
        data.documents += 1;
        self.learned += 1;

        Ok(())
    }

    /// Convert raw term frequencies to TF-IDF weights. Allowed exactly once.
    pub fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Err(TriageError::model("model is already finalized"));
        }

        let learned = self.learned as f64;
        for data in &mut self.data {
            if data.total == 0 {
                continue;
            }
            let idf = (learned / data.total as f64).ln_1p();
            for (word, samples) in data.term_frequencies.drain() {
                let weight = samples.iter().map(|tf| tf.ln_1p() * idf).sum();
                data.freqs.insert(word, weight);
            }
        }
        self.finalized = true;

        Ok(())
    }

    /// Score a token sequence against every class.
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ScoreOutcome> {
        if !self.finalized {
            return Err(TriageError::model("model must be finalized before scoring"));
        }

        let grand_total: usize = self.data.iter().map(|d| d.total).sum();
        let scores: Vec<f64> = self
            .data
            .iter()
            .map(|data| {
                let prior = if grand_total == 0 {
                    1.0 / self.data.len() as f64
                } else {
                    data.total as f64 / grand_total as f64
                };
                tokens
                    .iter()
                    .map(|token| data.word_probability(token.as_ref()).ln())
                    .fold(prior.ln(), |acc, p| acc + p)
            })
            .collect();

        let (best_index, strict) = find_max(&scores);
        Ok(ScoreOutcome {
            scores,
            best_index,
            strict,
        })
    }

    /// Ordered class labels; score indices refer to this order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Position of `label` in the class list.
    pub fn class_index(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    /// Number of distinct classes that received at least one `learn` call.
    pub fn learned_class_count(&self) -> usize {
        self.data.iter().filter(|d| d.documents > 0).count()
    }

    /// Vocabulary size of each class, in class order.
    pub fn word_count(&self) -> Vec<usize> {
        self.data.iter().map(|d| d.freqs.len()).collect()
    }

    /// Number of `learn` calls.
    pub fn document_count(&self) -> usize {
        self.learned
    }

    /// Whether TF-IDF weighting has been applied.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

fn find_max(scores: &[f64]) -> (usize, bool) {
    let mut best = 0;
    let mut strict = true;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if scores[best] < score {
            best = i;
            strict = true;
        } else if scores[best] == score {
            strict = false;
        }
    }
    (best, strict)
}
