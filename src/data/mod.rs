pub mod loader;
pub mod snapshot;

pub use loader::{load_debts_csv, load_snapshot, load_transactions_csv};
pub use snapshot::{
    check_amount, check_finite, validate_profile, FinancialSnapshot, SnapshotError,
};
