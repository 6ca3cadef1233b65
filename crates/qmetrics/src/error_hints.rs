use anyhow::Error;
use qmetrics_types::error::PreconditionError;

use crate::commands::{REPORT_ARTIFACT, TABLE_ARTIFACT};

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if let Some(precondition) = err.downcast_ref::<PreconditionError>() {
        match precondition {
            PreconditionError::MissingInput { artifact, .. } if artifact == REPORT_ARTIFACT => {
                push_hint(
                    &mut out,
                    "Copy the PMD XML report (usually target/pmd.xml) to metrics/raw/pmd.xml, or pass `--report <FILE>`.",
                );
            }
            PreconditionError::MissingInput { artifact, .. } if artifact == TABLE_ARTIFACT => {
                push_hint(
                    &mut out,
                    "Save the CK class.csv output as metrics/raw/ck_class.csv, or pass `--table <FILE>`.",
                );
            }
            PreconditionError::MissingInput { .. } => {}
            PreconditionError::NotAFile { .. } => {
                let hint = format!(
                    "{} is a directory; point the flag at a file inside it.",
                    precondition.path().display()
                );
                push_hint(&mut out, &hint);
            }
        }
        push_hint(
            &mut out,
            "Relative paths resolve against `--root` (default: the current directory).",
        );
    }

    if haystack.contains("malformed xml")
        || haystack.contains("unclosed element")
        || haystack.contains("no root element")
    {
        push_hint(
            &mut out,
            "Regenerate the report with PMD's XML renderer (`--format xml`); the file may be truncated.",
        );
    }

    if haystack.contains("failed to load config file") {
        push_hint(
            &mut out,
            "Check `qmetrics.toml` syntax and key names ([paths], [complexity], [coupling]).",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
