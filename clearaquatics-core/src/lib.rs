//! Rules and record keeping for aquarium husbandry.
//!
//! The rule modules (`status`, `compatibility`, `tech`) are pure functions over
//! the `clearaquatics-schemas` types. `store` keeps tanks and their records in
//! memory, `seed` fills it from fixture files, and `history` and `dashboard`
//! build the views a front end renders.

pub mod catalog;
pub mod compatibility;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod history;
pub mod maintenance;
pub mod readings;
pub mod seed;
pub mod status;
pub mod store;
pub mod tech;

pub use error::ClearAquaticsError;
