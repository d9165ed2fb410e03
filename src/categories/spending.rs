use crate::categories::category::Category;
use crate::categories::suggest::suggest_category;
use chrono::NaiveDate;
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

//a single bank transaction; negative amounts are outflows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub merchant: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Transaction {
    //explicit category, or the keyword suggestion
    pub fn resolved_category(&self) -> Category {
        self.category
            .unwrap_or_else(|| suggest_category(&self.merchant, &self.description))
    }

    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }
}

//fills in missing categories, leaving explicit ones untouched
pub fn categorize_all(transactions: &[Transaction]) -> Vec<Transaction> {
    transactions
        .par_iter()
        .map(|t| Transaction {
            category: Some(t.resolved_category()),
            ..t.clone()
        })
        .collect()
}

//spend for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub total: f64,
    pub count: usize,
    //percent of total outflow
    pub share: f64,
}

//outflows grouped by category in first-seen order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingBreakdown {
    pub total_spent: f64,
    pub total_income: f64,
    pub categories: IndexMap<Category, CategorySpend>,
}

impl SpendingBreakdown {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut breakdown = SpendingBreakdown::default();

        for transaction in transactions {
            if !transaction.is_outflow() {
                breakdown.total_income += transaction.amount;
                continue;
            }

            let spent = -transaction.amount;
            breakdown.total_spent += spent;

            let entry = breakdown
                .categories
                .entry(transaction.resolved_category())
                .or_insert(CategorySpend {
                    total: 0.0,
                    count: 0,
                    share: 0.0,
                });
            entry.total += spent;
            entry.count += 1;
        }

        if breakdown.total_spent > 0.0 {
            for spend in breakdown.categories.values_mut() {
                spend.share = spend.total / breakdown.total_spent * 100.0;
            }
        }

        breakdown
    }

    //categories sorted by total spend, largest first
    pub fn top(&self, n: usize) -> Vec<(Category, &CategorySpend)> {
        let mut ranked: Vec<(Category, &CategorySpend)> =
            self.categories.iter().map(|(c, s)| (*c, s)).collect();
        ranked.sort_by(|a, b| b.1.total.total_cmp(&a.1.total));
        ranked.truncate(n);
        ranked
    }
}
