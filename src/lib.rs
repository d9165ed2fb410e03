//personal finance metrics: net worth, FIRE, health score, debt payoff ordering

pub mod categories;
pub mod config;
pub mod data;
pub mod debt;
pub mod goals;
pub mod metrics;
pub mod util;

//prelude module for convenient imports
pub mod prelude {
    pub use crate::categories::{
        categorize_all, suggest_category, Category, CategorySpend, SpendingBreakdown, Transaction,
    };
    pub use crate::config::{ConfigError, MetricsConfig};
    pub use crate::data::{
        check_amount, check_finite, load_debts_csv, load_snapshot, load_transactions_csv,
        validate_profile, FinancialSnapshot, SnapshotError,
    };
    pub use crate::debt::{
        debt_avalanche, debt_snowball, simulate_payoff, Debt, DebtError, PayoffConfig, PayoffPlan,
        PayoffStrategy, PrioritizedDebt,
    };
    pub use crate::goals::{goal_progress, Goal, GoalCategory, GoalError, GoalStats};
    pub use crate::metrics::{
        budget_status, debt_to_income_ratio, emergency_fund_target, fire_number, health_score,
        loan_payment, net_worth, savings_rate, years_to_fire, Budget, BudgetReport, BudgetStatus,
        FinancialProfile, FinancialSummary, FireInputs, FireProjection, HealthBreakdown,
    };
    pub use crate::util::{format_currency, format_date, format_percentage};
}
