pub mod format;
pub mod period;

pub use format::{format_currency, format_percentage};
pub use period::{format_date, last_n_months, month_end, month_start, year_start};
