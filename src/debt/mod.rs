pub mod model;
pub mod ordering;
pub mod payoff;

pub use model::{total_balance, total_minimum_payment, Debt, DebtError};
pub use ordering::{debt_avalanche, debt_snowball, PayoffStrategy, PrioritizedDebt};
pub use payoff::{simulate_payoff, DebtPayoff, PayoffConfig, PayoffMonth, PayoffPlan, PayoffSimulator};
