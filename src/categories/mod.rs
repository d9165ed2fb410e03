pub mod category;
pub mod spending;
pub mod suggest;

pub use category::{Category, UnknownCategory};
pub use spending::{categorize_all, CategorySpend, SpendingBreakdown, Transaction};
pub use suggest::suggest_category;
