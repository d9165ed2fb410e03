use crate::goals::goal::{Goal, GoalCategory};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

//aggregate progress across a set of goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    pub total_goals: usize,
    pub completed_goals: usize,
    pub total_target_amount: f64,
    pub total_current_amount: f64,
    pub average_progress: f64,
    //goal count per category, in first-seen order
    pub by_category: IndexMap<GoalCategory, usize>,
}

impl GoalStats {
    pub fn from_goals(goals: &[Goal]) -> Self {
        let progress: Vec<f64> = goals.iter().map(Goal::progress).collect();

        //mean of an empty slice is NaN
        let average_progress = if progress.is_empty() {
            0.0
        } else {
            progress.as_slice().mean()
        };

        let mut by_category = IndexMap::new();
        for goal in goals {
            *by_category.entry(goal.category).or_insert(0) += 1;
        }

        GoalStats {
            total_goals: goals.len(),
            completed_goals: goals.iter().filter(|g| g.is_completed()).count(),
            total_target_amount: goals.iter().map(|g| g.target_amount).sum(),
            total_current_amount: goals.iter().map(|g| g.current_amount).sum(),
            average_progress,
            by_category,
        }
    }

    pub fn count(&self, category: GoalCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}
