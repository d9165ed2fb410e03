pub mod budget;
pub mod fire;
pub mod health;
pub mod ratios;
pub mod summary;

pub use budget::{budget_status, budget_utilization, Budget, BudgetReport, BudgetStatus};
pub use fire::{future_value, FireInputs, FireProjection};
pub use health::{health_score, FinancialProfile, HealthBreakdown};
pub use ratios::{
    debt_to_income_ratio, emergency_fund_target, fire_number, loan_payment, net_worth,
    savings_rate, years_to_fire, DEFAULT_EMERGENCY_MONTHS, DEFAULT_EXPECTED_RETURN,
    DEFAULT_WITHDRAWAL_RATE,
};
pub use summary::FinancialSummary;
