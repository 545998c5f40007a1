//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TriageArgs};
use crate::classification::ClassificationResult;
use crate::error::Result;

/// Result of the `train` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainSummary {
    pub state: String,
    pub model_file: String,
    pub classes: Vec<String>,
    pub learned_classes: usize,
    pub documents: usize,
}

/// One classified text.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifiedText {
    pub text: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

/// Result of the `evaluate` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub test_file: String,
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
}

/// Per-class details of a stored model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassInfo {
    pub label: String,
    pub vocabulary: usize,
}

/// Result of the `inspect` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_file: String,
    pub finalized: bool,
    pub learned_classes: usize,
    pub documents: usize,
    pub classes: Vec<ClassInfo>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TriageArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TriageArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in render_human(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as `key: value` lines; arrays of objects become
/// blank-line separated blocks.
fn render_human(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}: {}", format_value(val)))
            .collect(),
        serde_json::Value::Array(items) if items.iter().all(|item| item.is_object()) => {
            let mut lines = Vec::new();
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                lines.extend(render_human(item));
            }
            lines
        }
        _ => vec![format_value(value)],
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TriageArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human-readable output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.4}"),
            _ => n.to_string(),
        },
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => {
            let formatted_values = obj
                .iter()
                .map(|(key, val)| format!("{key}={}", format_value(val)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{{{formatted_values}}}")
        }
        serde_json::Value::Null => "null".to_string(),
    }
}
