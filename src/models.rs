use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The period a statement covers. Both ends carry a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementDateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A line item as printed on the statement, before its year is known.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTransaction {
    /// Month abbreviation and day, e.g. "DEC 23".
    pub partial_date: String,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
}

/// Index-aligned dates, descriptions and amounts in statement order.
///
/// The vectors are only ever extended together through [`TransactionBatch::push`],
/// so they always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionBatch {
    dates: Vec<NaiveDate>,
    descriptions: Vec<String>,
    amounts: Vec<f64>,
}

impl TransactionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, txn: Transaction) {
        self.dates.push(txn.date);
        self.descriptions.push(txn.description);
        self.amounts.push(txn.amount);
    }

    #[allow(dead_code)]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    #[allow(dead_code)]
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    #[allow(dead_code)]
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = Transaction> + '_ {
        self.dates
            .iter()
            .zip(&self.descriptions)
            .zip(&self.amounts)
            .map(|((date, description), amount)| Transaction {
                date: *date,
                description: description.clone(),
                amount: *amount,
            })
    }
}

impl FromIterator<Transaction> for TransactionBatch {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        let mut batch = Self::new();
        for txn in iter {
            batch.push(txn);
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(y: i32, m: u32, d: u32, desc: &str, amount: f64) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            description: desc.to_string(),
            amount,
        }
    }

    #[test]
    fn test_push_keeps_sequences_aligned() {
        let mut batch = TransactionBatch::new();
        assert!(batch.is_empty());
        batch.push(txn(2019, 12, 23, "PETROCAN TORONTO ON", 16.27));
        batch.push(txn(2020, 1, 5, "GREASY PIZZA PLACE TORONTO ON", 25.03));
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.dates().len(), batch.descriptions().len());
        assert_eq!(batch.descriptions().len(), batch.amounts().len());
        assert_eq!(batch.descriptions()[1], "GREASY PIZZA PLACE TORONTO ON");
    }

    #[test]
    fn test_iter_preserves_order() {
        let batch: TransactionBatch = vec![
            txn(2019, 3, 22, "TIM HORTONS TORONTO ON", 44.71),
            txn(2019, 4, 1, "PAYMENT - THANK YOU / PAIEMENT - MERCI", -143.66),
        ]
        .into_iter()
        .collect();
        let items: Vec<Transaction> = batch.iter().collect();
        assert_eq!(items[0].description, "TIM HORTONS TORONTO ON");
        assert_eq!(items[1].amount, -143.66);
    }

    #[test]
    fn test_total() {
        let batch: TransactionBatch = vec![
            txn(2019, 3, 22, "A", 10.50),
            txn(2019, 3, 23, "B", -4.25),
        ]
        .into_iter()
        .collect();
        assert!((batch.total() - 6.25).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_as_parallel_sequences() {
        let batch: TransactionBatch = vec![txn(2020, 1, 5, "SHELL", 43.79)].into_iter().collect();
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["dates"][0], "2020-01-05");
        assert_eq!(json["descriptions"][0], "SHELL");
        assert_eq!(json["amounts"][0], 43.79);
    }
}
