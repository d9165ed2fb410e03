use crate::categories::Transaction;
use crate::debt::{Debt, DebtError};
use crate::goals::{Goal, GoalError};
use crate::metrics::{Budget, FinancialProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SnapshotError {
    #[error("{field} is not finite")]
    NonFinite { field: &'static str },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error(transparent)]
    Debt(#[from] DebtError),
    #[error("duplicate debt id: {0}")]
    DuplicateDebt(String),
    #[error(transparent)]
    Goal(#[from] GoalError),
}

//everything the metrics need about one user, as received at the boundary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    pub profile: FinancialProfile,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

//a finite amount that may be negative
pub fn check_finite(field: &'static str, value: f64) -> Result<(), SnapshotError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SnapshotError::NonFinite { field })
    }
}

//a finite amount that may not be negative
pub fn check_amount(field: &'static str, value: f64) -> Result<(), SnapshotError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(SnapshotError::Negative { field, value });
    }
    Ok(())
}

//net worth may be negative, every other amount may not
pub fn validate_profile(profile: &FinancialProfile) -> Result<(), SnapshotError> {
    check_finite("netWorth", profile.net_worth)?;
    check_amount("monthlyIncome", profile.monthly_income)?;
    check_amount("monthlyExpenses", profile.monthly_expenses)?;
    check_amount("totalDebt", profile.total_debt)?;
    check_amount("emergencyFund", profile.emergency_fund)
}

impl FinancialSnapshot {
    //checks the snapshot before any arithmetic sees it
    pub fn validate(&self) -> Result<(), SnapshotError> {
        validate_profile(&self.profile)?;

        let mut seen = HashSet::new();
        for debt in &self.debts {
            debt.validate()?;
            if !seen.insert(debt.id.as_str()) {
                return Err(SnapshotError::DuplicateDebt(debt.id.clone()));
            }
        }

        for goal in &self.goals {
            goal.validate()?;
        }

        for budget in &self.budgets {
            check_amount("budgetLimit", budget.limit)?;
        }

        Ok(())
    }
}
