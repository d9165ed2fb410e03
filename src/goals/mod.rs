pub mod goal;
pub mod stats;

pub use goal::{goal_progress, Goal, GoalCategory, GoalError};
pub use stats::GoalStats;
