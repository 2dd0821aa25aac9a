//! Pure helpers: input sanitizing, conversion, ranking and sums

pub mod helper;
pub mod precision;
pub mod priority;
pub mod sum;

pub use precision::{compute_output, format_input, format_input_default, DEFAULT_MAX_DECIMALS};
pub use priority::{get_priority, PRIORITY_TABLE, UNKNOWN_PRIORITY};
pub use sum::{sum_to_n_formula, sum_to_n_iterative, sum_to_n_recursive};
