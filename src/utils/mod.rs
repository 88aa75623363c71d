pub mod time;
pub mod validate;

pub use time::parse_deadline;
pub use validate::{validate_non_empty, validate_submission_url};
