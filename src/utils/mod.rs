//! Utility modules for the query engine
//!
//! Shared functionality used across every answer branch:
//! - Formatting: currency, counts, carbon ranges, dates
//! - Carbon: tCO2e to cars/trees equivalence
//! - States: US state name/code table and mention detection

pub mod formatting;
pub mod carbon;
pub mod states;

// Re-export commonly used functions
pub use formatting::{
    format_carbon_range, format_count, format_currency_abbrev, format_currency_full, format_date,
    format_month_year, format_number, percentage, safe_average,
};
pub use carbon::{cars_equivalent, midpoint, trees_equivalent, CARS_PER_TONNE, TREES_PER_TONNE};
pub use states::{find_state_mention, lookup_state, state_name, UsState};
