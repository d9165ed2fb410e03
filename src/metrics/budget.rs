use crate::categories::{Category, SpendingBreakdown};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const WARNING_THRESHOLD: f64 = 75.0;
pub const DANGER_THRESHOLD: f64 = 90.0;
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    Danger,
    Exceeded,
}

impl BudgetStatus {
    pub fn from_utilization(utilization: f64) -> Self {
        if utilization >= EXCEEDED_THRESHOLD {
            BudgetStatus::Exceeded
        } else if utilization >= DANGER_THRESHOLD {
            BudgetStatus::Danger
        } else if utilization >= WARNING_THRESHOLD {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OnTrack
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetStatus::OnTrack => "On track",
            BudgetStatus::Warning => "Warning",
            BudgetStatus::Danger => "Danger",
            BudgetStatus::Exceeded => "Exceeded",
        };
        f.write_str(label)
    }
}

//percent of a budget limit already spent, not clamped so overspend stays visible
//a zero limit counts any spending as fully used
pub fn budget_utilization(spent: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return if spent > 0.0 { EXCEEDED_THRESHOLD } else { 0.0 };
    }
    (spent / limit) * 100.0
}

pub fn budget_status(spent: f64, limit: f64) -> BudgetStatus {
    BudgetStatus::from_utilization(budget_utilization(spent, limit))
}

//a spending limit for one category over the snapshot's transactions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub category: Category,
    pub limit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    pub category: Category,
    pub limit: f64,
    pub spent: f64,
    pub utilization: f64,
    pub status: BudgetStatus,
}

impl Budget {
    pub fn new(category: Category, limit: f64) -> Self {
        Budget { category, limit }
    }

    //a category with no outflows has spent nothing
    pub fn report(&self, spending: &SpendingBreakdown) -> BudgetReport {
        let spent = spending
            .categories
            .get(&self.category)
            .map(|c| c.total)
            .unwrap_or(0.0);
        let utilization = budget_utilization(spent, self.limit);

        BudgetReport {
            category: self.category,
            limit: self.limit,
            spent,
            utilization,
            status: BudgetStatus::from_utilization(utilization),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Transaction;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    #[test]
    fn thresholds() {
        assert_eq!(budget_status(100.0, 1000.0), BudgetStatus::OnTrack);
        assert_eq!(budget_status(750.0, 1000.0), BudgetStatus::Warning);
        assert_eq!(budget_status(900.0, 1000.0), BudgetStatus::Danger);
        assert_eq!(budget_status(1000.0, 1000.0), BudgetStatus::Exceeded);
        assert_eq!(budget_status(1500.0, 1000.0), BudgetStatus::Exceeded);
    }

    #[test]
    fn zero_limit() {
        assert_eq!(budget_utilization(0.0, 0.0), 0.0);
        assert_eq!(budget_status(10.0, 0.0), BudgetStatus::Exceeded);
    }

    #[test]
    fn utilization_is_not_clamped() {
        assert_eq!(budget_utilization(300.0, 200.0), 150.0);
    }

    #[test]
    fn report_reads_category_spend() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let spend = |merchant: &str, amount: f64, category: Category| Transaction {
            date,
            merchant: merchant.to_string(),
            description: String::new(),
            amount,
            category: Some(category),
        };
        let breakdown = SpendingBreakdown::from_transactions(&[
            spend("Starbucks", -300.0, Category::FoodAndDrink),
            spend("Chipotle", -480.0, Category::FoodAndDrink),
            spend("Shell", -40.0, Category::Transportation),
            spend("Employer", 4000.0, Category::Income),
        ]);

        let food = Budget::new(Category::FoodAndDrink, 1000.0).report(&breakdown);
        assert_relative_eq!(food.spent, 780.0);
        assert_relative_eq!(food.utilization, 78.0, epsilon = 1e-9);
        assert_eq!(food.status, BudgetStatus::Warning);

        let travel = Budget::new(Category::Travel, 500.0).report(&breakdown);
        assert_eq!(travel.spent, 0.0);
        assert_eq!(travel.status, BudgetStatus::OnTrack);
    }
}
