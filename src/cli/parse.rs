use std::path::PathBuf;
use std::str::FromStr;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::{Result, TallyError};
use crate::fmt::money;
use crate::models::TransactionBatch;
use crate::settings::{expand_home, load_settings, Settings};
use crate::statement::{parse_statement_file, ParsedStatement};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(TallyError::UnknownFormat(other.to_string())),
        }
    }
}

pub fn run(file: &str, format: Option<&str>, output: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let format: OutputFormat = format.unwrap_or(settings.default_format.as_str()).parse()?;
    let parsed = parse_statement_file(&expand_home(file))?;

    let rendered = match format {
        OutputFormat::Table => render_table(&parsed),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&parsed)?),
        OutputFormat::Csv => render_csv(&parsed.batch)?,
    };

    match output {
        Some(path) => {
            let path = resolve_output(path, &settings);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, rendered)?;
            println!(
                "Wrote {} transactions to {}",
                parsed.batch.len(),
                path.display()
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn resolve_output(path: &str, settings: &Settings) -> PathBuf {
    let path = expand_home(path);
    if path.is_absolute() {
        path
    } else {
        PathBuf::from(&settings.data_dir).join("exports").join(path)
    }
}

fn render_table(parsed: &ParsedStatement) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Amount"]);
    for txn in parsed.batch.iter() {
        let amount = if txn.amount < 0.0 {
            Cell::new(money(txn.amount).green())
        } else {
            Cell::new(money(txn.amount))
        };
        table.add_row(vec![
            Cell::new(txn.date),
            Cell::new(&txn.description),
            amount,
        ]);
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Total".bold()),
        Cell::new(money(parsed.batch.total())),
    ]);

    format!(
        "Statement {} to {} ({} transactions)\n{table}\n",
        parsed.period.start_date,
        parsed.period.end_date,
        parsed.batch.len()
    )
}

/// `date,description,amount` rows for a downstream categorizer.
fn render_csv(batch: &TransactionBatch) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["date", "description", "amount"])?;
    for txn in batch.iter() {
        wtr.write_record([
            txn.date.to_string(),
            txn.description,
            format!("{:.2}", txn.amount),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| TallyError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatementDateRange, Transaction};
    use chrono::NaiveDate;

    fn sample() -> ParsedStatement {
        let d = |m, day| NaiveDate::from_ymd_opt(2019, m, day).unwrap();
        let batch: TransactionBatch = vec![
            Transaction {
                date: d(3, 22),
                description: "TIM HORTONS TORONTO ON".to_string(),
                amount: 44.71,
            },
            Transaction {
                date: d(4, 1),
                description: "PAYMENT - THANK YOU / PAIEMENT - MERCI".to_string(),
                amount: -143.66,
            },
        ]
        .into_iter()
        .collect();
        ParsedStatement {
            source: "mar.txt".to_string(),
            checksum: String::new(),
            period: StatementDateRange {
                start_date: d(3, 20),
                end_date: d(4, 22),
            },
            batch,
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(TallyError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_render_csv() {
        let out = render_csv(&sample().batch).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "date,description,amount");
        assert_eq!(lines[1], "2019-03-22,TIM HORTONS TORONTO ON,44.71");
        assert_eq!(lines[2], "2019-04-01,PAYMENT - THANK YOU / PAIEMENT - MERCI,-143.66");
    }

    #[test]
    fn test_render_table_lists_every_transaction() {
        let out = render_table(&sample());
        assert!(out.starts_with("Statement 2019-03-20 to 2019-04-22 (2 transactions)"));
        assert!(out.contains("TIM HORTONS TORONTO ON"));
        assert!(out.contains("$44.71"));
        assert!(out.contains("PAYMENT - THANK YOU / PAIEMENT - MERCI"));
    }

    #[test]
    fn test_resolve_output() {
        let settings = Settings {
            data_dir: "/tmp/tally".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            resolve_output("mar.csv", &settings),
            PathBuf::from("/tmp/tally/exports/mar.csv")
        );
        assert_eq!(
            resolve_output("/var/out.csv", &settings),
            PathBuf::from("/var/out.csv")
        );
    }
}
