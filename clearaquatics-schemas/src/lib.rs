//! Data model for the ClearAquatics workspace.
//!
//! Every type here is plain data with serde derives. Behaviour (status
//! classification, compatibility checks, storage) lives in `clearaquatics-core`.

pub mod aquarium;
pub mod file_formats;
pub mod life;
pub mod maintenance;
pub mod species;
mod update;
pub mod water;
