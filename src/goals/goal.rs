use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GoalError {
    #[error("Goal {id}: target amount must be positive, got {target}")]
    NonPositiveTarget { id: String, target: f64 },
    #[error("Goal {id}: negative current amount {current}")]
    NegativeCurrent { id: String, current: f64 },
    #[error("Goal {id}: contribution must not be negative, got {amount}")]
    NegativeContribution { id: String, amount: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalCategory {
    EmergencyFund,
    Fire,
    Retirement,
    Debt,
    Purchase,
    #[default]
    Other,
}

//a savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: GoalCategory,
    pub target_amount: f64,
    pub current_amount: f64,
}

impl Goal {
    pub fn new(
        id: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
    ) -> Result<Self, GoalError> {
        let goal = Goal {
            id: id.into(),
            name: String::new(),
            category: GoalCategory::Other,
            target_amount,
            current_amount,
        };
        goal.validate()?;
        Ok(goal)
    }

    pub fn validate(&self) -> Result<(), GoalError> {
        if self.target_amount <= 0.0 || !self.target_amount.is_finite() {
            return Err(GoalError::NonPositiveTarget {
                id: self.id.clone(),
                target: self.target_amount,
            });
        }
        if self.current_amount < 0.0 || !self.current_amount.is_finite() {
            return Err(GoalError::NegativeCurrent {
                id: self.id.clone(),
                current: self.current_amount,
            });
        }
        Ok(())
    }

    //percent complete, clamped to [0, 100]
    pub fn progress(&self) -> f64 {
        goal_progress(self.current_amount, self.target_amount)
    }

    pub fn is_completed(&self) -> bool {
        self.target_amount > 0.0 && self.current_amount >= self.target_amount
    }

    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    //returns a copy of the goal with the contribution applied
    pub fn contribute(&self, amount: f64) -> Result<Goal, GoalError> {
        if amount < 0.0 {
            return Err(GoalError::NegativeContribution {
                id: self.id.clone(),
                amount,
            });
        }

        Ok(Goal {
            current_amount: self.current_amount + amount,
            ..self.clone()
        })
    }
}

//a non-positive target has no meaningful progress
pub fn goal_progress(current_amount: f64, target_amount: f64) -> f64 {
    if target_amount <= 0.0 {
        return 0.0;
    }
    ((current_amount / target_amount) * 100.0).clamp(0.0, 100.0)
}
