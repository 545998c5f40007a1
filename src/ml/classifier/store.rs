//! Model persistence.
//!
//! A model file is a 4-byte magic, a 2-byte format version and the bincode
//! encoding of the [`NaiveBayesModel`]. Saving writes a temporary file next to
//! the destination and renames it into place, so readers never observe a
//! partially written model.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bincode::Options;
use log::debug;
use tempfile::NamedTempFile;

use crate::error::{Result, TriageError};
use crate::ml::classifier::NaiveBayesModel;

/// Magic bytes at the start of every model file.
pub const MODEL_MAGIC: &[u8; 4] = b"TRCM";

/// Current model file format version.
pub const MODEL_FORMAT_VERSION: u16 = 1;

const HEADER_LEN: usize = MODEL_MAGIC.len() + 2;

/// The encoding of `bincode::serialize_into`, reading at most `limit` bytes.
fn payload_options(limit: usize) -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_limit(limit as u64)
}

/// Loads and saves trained models.
pub trait ModelStore: Send + Sync {
    /// Load the stored model.
    fn load(&self) -> Result<NaiveBayesModel>;

    /// Persist `model`, replacing any previously stored one.
    fn save(&self, model: &NaiveBayesModel) -> Result<()>;

    /// Human readable location, for logs.
    fn location(&self) -> String;
}

/// Stores the model in a single file on the local filesystem.
#[derive(Clone, Debug)]
pub struct FileModelStore {
    path: PathBuf,
}

impl FileModelStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileModelStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl ModelStore for FileModelStore {
    fn load(&self) -> Result<NaiveBayesModel> {
        let bytes = fs::read(&self.path).map_err(|e| {
            TriageError::storage(format!("can not open {}: {e}", self.path.display()))
        })?;

        if bytes.len() < HEADER_LEN {
            return Err(TriageError::storage(format!(
                "{} is too short to be a model file",
                self.path.display()
            )));
        }
        let (header, payload) = bytes.split_at(HEADER_LEN);
        if &header[..4] != MODEL_MAGIC {
            return Err(TriageError::storage(format!(
                "{} is not a model file",
                self.path.display()
            )));
        }
        let version = u16::from_le_bytes([header[4], header[5]]);
        if version != MODEL_FORMAT_VERSION {
            return Err(TriageError::storage(format!(
                "unsupported model format version {version} in {}",
                self.path.display()
            )));
        }

        // Length prefixes are checked against the payload, so a corrupt prefix
        // fails instead of allocating.
        let model: NaiveBayesModel = payload_options(payload.len())
            .deserialize(payload)
            .map_err(|e| TriageError::serialization(format!("corrupt model payload: {e}")))?;
        debug!(
            "Loaded model with {} classes from {}",
            model.classes().len(),
            self.path.display()
        );
        Ok(model)
    }

    fn save(&self, model: &NaiveBayesModel) -> Result<()> {
        let parent_dir = self.parent_dir();
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            writer.write_all(MODEL_MAGIC)?;
            writer.write_all(&MODEL_FORMAT_VERSION.to_le_bytes())?;
            bincode::serialize_into(&mut writer, model)
                .map_err(|e| TriageError::serialization(format!("can not encode model: {e}")))?;
            writer.flush()?;
        }

        temp_file.persist(&self.path).map_err(|e| {
            TriageError::storage(format!("can not write {}: {e}", self.path.display()))
        })?;
        debug!("Saved model to {}", self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
