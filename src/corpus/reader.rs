//! JSON readers for the training corpus and the stop word list.
//!
//! The training file is an array of search-export records:
//!
//! ```json
//! [{"_source": {"issue": "...", "complaint_what_happened": "...", "product": "..."}}]
//! ```
//!
//! Missing fields read as empty strings. A record is kept only when it has a
//! label and at least one of title or description.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::analysis::stop_words::StopWordSet;
use crate::corpus::{Corpus, Document};
use crate::error::{Result, TriageError};

#[derive(Debug, Default, Deserialize)]
struct TicketSource {
    #[serde(default, rename = "issue")]
    title: String,
    #[serde(default, rename = "complaint_what_happened")]
    description: String,
    #[serde(default, rename = "product")]
    label: String,
}

#[derive(Debug, Deserialize)]
struct TicketRecord {
    #[serde(default, rename = "_source")]
    source: TicketSource,
}

impl TicketRecord {
    fn into_document(self) -> Option<Document> {
        let TicketSource {
            title,
            description,
            label,
        } = self.source;
        if label.is_empty() || (title.is_empty() && description.is_empty()) {
            return None;
        }
        Some(Document::new(label, format!("{title} {description}")))
    }
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path)
        .map_err(|e| TriageError::corpus(format!("can not read {}: {e}", path.display())))?;
    if content.trim().is_empty() {
        return Err(TriageError::corpus(format!(
            "{} is empty",
            path.display()
        )));
    }
    serde_json::from_str(&content).map_err(|e| {
        TriageError::corpus(format!("{} is not a valid json array: {e}", path.display()))
    })
}

/// Read and group the labeled tickets of a training file.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let path = path.as_ref();
    let records: Vec<TicketRecord> = read_json_array(path)?;
    let total = records.len();

    let corpus: Corpus = records
        .into_iter()
        .filter_map(TicketRecord::into_document)
        .collect();

    debug!(
        "Kept {} of {total} records from {}",
        corpus.document_count(),
        path.display()
    );

    if corpus.is_empty() {
        return Err(TriageError::corpus(format!(
            "{} holds no labeled tickets",
            path.display()
        )));
    }
    Ok(corpus)
}

/// Read a flat JSON array of stop words.
pub fn read_stop_words<P: AsRef<Path>>(path: P) -> Result<StopWordSet> {
    let words: Vec<String> = read_json_array(path.as_ref())?;
    Ok(StopWordSet::from_words(words))
}

/// Read the corpus and the stop word set together.
pub fn read_training_data<P: AsRef<Path>, Q: AsRef<Path>>(
    train_data: P,
    stop_words: Q,
) -> Result<(Corpus, StopWordSet)> {
    let corpus = read_corpus(train_data)?;
    let stop_words = read_stop_words(stop_words)?;
    info!(
        "Read {} tickets in {} classes and {} stop words",
        corpus.document_count(),
        corpus.class_count(),
        stop_words.len()
    );
    Ok((corpus, stop_words))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn json_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_corpus_filters_records() {
        let file = json_file(
            r#"[
                {"_source": {"issue": "Late fee", "complaint_what_happened": "charged twice", "product": "Credit card"}},
                {"_source": {"issue": "", "complaint_what_happened": "", "product": "Credit card"}},
                {"_source": {"issue": "No label", "complaint_what_happened": "text", "product": ""}},
                {"_source": {"issue": "Missing description", "product": "Mortgage"}},
                {"_source": {"complaint_what_happened": "only text", "product": "Credit card"}},
                {"_source": {"issue": "No product field"}},
                {}
            ]"#,
        );

        let corpus = read_corpus(file.path()).unwrap();
        assert_eq!(corpus.labels(), vec!["Credit card", "Mortgage"]);
        assert_eq!(
            corpus.documents("Credit card").unwrap(),
            &[
                "Late fee charged twice".to_string(),
                " only text".to_string()
            ]
        );
        assert_eq!(
            corpus.documents("Mortgage").unwrap(),
            &["Missing description ".to_string()]
        );
    }

    #[test]
    fn test_read_corpus_errors() {
        assert!(read_corpus("/nonexistent/train.json").is_err());
        assert!(read_corpus(json_file("").path()).is_err());
        assert!(read_corpus(json_file("{not json").path()).is_err());
        assert!(read_corpus(json_file("{}").path()).is_err());
        // Valid JSON, but nothing usable to train on.
        assert!(read_corpus(json_file("[]").path()).is_err());
    }

    #[test]
    fn test_read_stop_words() {
        let file = json_file(r#"["The", "is", "a"]"#);
        let stop_words = read_stop_words(file.path()).unwrap();
        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("IS"));

        assert!(read_stop_words(json_file("[1, 2]").path()).is_err());
        assert!(read_stop_words("/nonexistent/stop.json").is_err());
    }

    #[test]
    fn test_read_training_data() {
        let train = json_file(r#"[{"_source": {"issue": "a", "product": "x"}}]"#);
        let stop = json_file(r#"[]"#);
        let (corpus, stop_words) = read_training_data(train.path(), stop.path()).unwrap();
        assert_eq!(corpus.class_count(), 1);
        assert!(stop_words.is_empty());
    }
}
