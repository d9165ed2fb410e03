use crate::categories::{Category, Transaction};
use crate::data::snapshot::{FinancialSnapshot, SnapshotError};
use crate::debt::Debt;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct DebtRecord {
    id: String,
    #[serde(default)]
    name: Option<String>,
    balance: f64,
    interest_rate: f64,
    minimum_payment: f64,
}

#[derive(Debug, Deserialize)]
struct TransactionRecord {
    date: String,
    merchant: String,
    #[serde(default)]
    description: String,
    amount: f64,
    #[serde(default)]
    category: Option<String>,
}

//loads and validates a snapshot from a JSON file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<FinancialSnapshot> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .context(format!("Failed to read snapshot file: {:?}", path))?;
    let snapshot: FinancialSnapshot = serde_json::from_str(&contents)
        .context(format!("Failed to parse snapshot file: {:?}", path))?;

    snapshot
        .validate()
        .context(format!("Invalid snapshot in {:?}", path))?;

    debug!(
        ?path,
        debts = snapshot.debts.len(),
        goals = snapshot.goals.len(),
        transactions = snapshot.transactions.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

//loads debts from a csv file (id,name,balance,interest_rate,minimum_payment)
pub fn load_debts_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .context(format!("Failed to open CSV file: {:?}", path))?;

    let mut debts = Vec::new();
    let mut seen = HashSet::new();

    for (index, result) in reader.deserialize().enumerate() {
        let record: DebtRecord =
            result.context(format!("Failed to parse CSV record at line {}", index + 2))?;

        let mut debt = Debt::new(
            record.id,
            record.balance,
            record.interest_rate,
            record.minimum_payment,
        )
        .context(format!("Invalid debt at line {}", index + 2))?;
        debt.name = record.name.filter(|n| !n.is_empty());

        if !seen.insert(debt.id.clone()) {
            return Err(SnapshotError::DuplicateDebt(debt.id))
                .context(format!("Invalid debt at line {}", index + 2));
        }

        debts.push(debt);
    }

    debug!(?path, count = debts.len(), "loaded debts");
    Ok(debts)
}

//loads transactions from a csv file (date,merchant,description,amount,category)
//unknown categories are dropped so the keyword suggestion applies
pub fn load_transactions_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .context(format!("Failed to open CSV file: {:?}", path))?;

    let mut transactions = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let record: TransactionRecord =
            result.context(format!("Failed to parse CSV record at line {}", index + 2))?;

        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").context(format!(
            "Failed to parse date '{}' at line {}",
            record.date,
            index + 2
        ))?;

        let category = match record.category.as_deref().filter(|c| !c.is_empty()) {
            Some(name) => match name.parse::<Category>() {
                Ok(category) => Some(category),
                Err(err) => {
                    warn!(line = index + 2, %err, "ignoring category");
                    None
                }
            },
            None => None,
        };

        transactions.push(Transaction {
            date,
            merchant: record.merchant,
            description: record.description,
            amount: record.amount,
            category,
        });
    }

    //chronological order
    transactions.sort_by(|a, b| a.date.cmp(&b.date));

    debug!(?path, count = transactions.len(), "loaded transactions");
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_debts() {
        let file = write_temp(
            "id,name,balance,interest_rate,minimum_payment\n\
             A,Credit Card,5000,18.5,100\n\
             B,,25000,6.5,250\n",
        );
        let debts = load_debts_csv(file.path()).unwrap();
        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].label(), "Credit Card");
        assert_eq!(debts[1].name, None);
        assert_eq!(debts[1].balance, 25000.0);
    }

    #[test]
    fn rejects_invalid_debt_row() {
        let file = write_temp(
            "id,name,balance,interest_rate,minimum_payment\n\
             A,Card,-5,18.5,100\n",
        );
        let err = load_debts_csv(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn rejects_duplicate_debt_id() {
        let file = write_temp(
            "id,name,balance,interest_rate,minimum_payment\n\
             A,Card,5000,18.5,100\n\
             B,Car,15000,4.2,300\n\
             A,Store Card,900,24.9,35\n",
        );
        let err = load_debts_csv(file.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("line 4"));
        assert!(message.contains("duplicate debt id: A"));
    }

    #[test]
    fn loads_and_sorts_transactions() {
        let file = write_temp(
            "date,merchant,description,amount,category\n\
             2025-03-05,Starbucks,latte,-5.5,\n\
             2025-03-01,Employer,salary,4000,Income\n\
             2025-03-03,Mystery,,-20,Not A Category\n",
        );
        let transactions = load_transactions_csv(file.path()).unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].merchant, "Employer");
        assert_eq!(transactions[0].category, Some(Category::Income));
        assert_eq!(transactions[1].category, None);
        assert_eq!(transactions[2].category, None);
    }

    #[test]
    fn bad_date_reports_line() {
        let file = write_temp("date,merchant,description,amount,category\n03/05/2025,X,,-1,\n");
        let err = load_transactions_csv(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn loads_snapshot_json() {
        let file = write_temp(
            r#"{"profile": {"netWorth": 30000, "monthlyIncome": 5000, "monthlyExpenses": 3500,
                "totalDebt": 24000, "emergencyFund": 9000}}"#,
        );
        let snapshot = load_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.profile.monthly_income, 5000.0);
        assert!(snapshot.debts.is_empty());
    }

    #[test]
    fn invalid_snapshot_is_rejected() {
        let file = write_temp(
            r#"{"profile": {"netWorth": 0, "monthlyIncome": -5, "monthlyExpenses": 0,
                "totalDebt": 0, "emergencyFund": 0}}"#,
        );
        assert!(load_snapshot(file.path()).is_err());
    }
}
