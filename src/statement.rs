use std::path::Path;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{Result, TallyError};
use crate::models::{StatementDateRange, TransactionBatch};
use crate::parser::parse_statement_text;

/// A parsed statement together with where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedStatement {
    pub source: String,
    pub checksum: String,
    pub period: StatementDateRange,
    pub batch: TransactionBatch,
}

/// Read statement text that has already been extracted from the source
/// document. PDFs must be converted first (e.g. with `pdftotext -layout`).
pub fn read_statement_text(file_path: &Path) -> Result<String> {
    let is_pdf = file_path
        .extension()
        .map_or(false, |e| e.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        return Err(TallyError::UnsupportedFile(format!(
            "{} is a PDF; extract its text first and pass the .txt file",
            file_path.display()
        )));
    }
    Ok(std::fs::read_to_string(file_path)?)
}

pub fn checksum(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn parse_statement_file(file_path: &Path) -> Result<ParsedStatement> {
    let text = read_statement_text(file_path)?;
    let (period, batch) = parse_statement_text(&text)?;
    Ok(ParsedStatement {
        source: file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string(),
        checksum: checksum(&text),
        period,
        batch,
    })
}
