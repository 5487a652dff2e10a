pub mod dates;

pub use dates::{elapsed_days, format_date, format_expiry, parse_date, DATE_FORMAT};
