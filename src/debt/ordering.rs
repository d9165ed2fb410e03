use crate::debt::model::Debt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

//a debt with its position in a payoff plan (1 = pay first)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizedDebt {
    #[serde(flatten)]
    pub debt: Debt,
    pub priority: usize,
}

//payoff ordering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    //highest interest rate first
    #[default]
    Avalanche,
    //smallest balance first
    Snowball,
}

impl PayoffStrategy {
    //parse strategy from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "avalanche" | "debt_avalanche" => Some(PayoffStrategy::Avalanche),
            "snowball" | "debt_snowball" => Some(PayoffStrategy::Snowball),
            _ => None,
        }
    }

    pub fn order(&self, debts: &[Debt]) -> Vec<PrioritizedDebt> {
        match self {
            PayoffStrategy::Avalanche => debt_avalanche(debts),
            PayoffStrategy::Snowball => debt_snowball(debts),
        }
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffStrategy::Avalanche => f.write_str("avalanche"),
            PayoffStrategy::Snowball => f.write_str("snowball"),
        }
    }
}

//highest interest rate first, ties keep input order
pub fn debt_avalanche(debts: &[Debt]) -> Vec<PrioritizedDebt> {
    prioritize(debts, |a, b| b.interest_rate.total_cmp(&a.interest_rate))
}

//smallest balance first, ties keep input order
pub fn debt_snowball(debts: &[Debt]) -> Vec<PrioritizedDebt> {
    prioritize(debts, |a, b| a.balance.total_cmp(&b.balance))
}

//slice::sort_by is stable, which gives the tie-break on input order.
//total_cmp keeps the order total when NaN slips in through new_unchecked
fn prioritize<F>(debts: &[Debt], compare: F) -> Vec<PrioritizedDebt>
where
    F: Fn(&Debt, &Debt) -> Ordering,
{
    let mut sorted: Vec<Debt> = debts.to_vec();
    sorted.sort_by(|a, b| compare(a, b));

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, debt)| PrioritizedDebt {
            debt,
            priority: index + 1,
        })
        .collect()
}
