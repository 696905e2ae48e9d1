//! Precondition checks applied before anything reaches the collections or the
//! status classifier.

use crate::error::ClearAquaticsError;
use clearaquatics_schemas::{maintenance::MaintenanceTask, water::NewWaterParameter};

pub(super) fn non_empty(field: &str, value: &str) -> Result<(), ClearAquaticsError> {
    if value.trim().is_empty() {
        return Err(ClearAquaticsError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

pub(super) fn aquarium_fields(name: &str, volume: f64) -> Result<(), ClearAquaticsError> {
    non_empty("aquarium name", name)?;
    if !volume.is_finite() || volume <= 0.0 {
        return Err(ClearAquaticsError::Validation(format!(
            "aquarium volume must be a positive number of gallons, got {}",
            volume
        )));
    }
    Ok(())
}

pub(super) fn reading_fields(reading: &NewWaterParameter) -> Result<(), ClearAquaticsError> {
    non_empty("parameter", &reading.parameter)?;
    if !reading.value.is_finite() {
        return Err(ClearAquaticsError::Validation(format!(
            "{} reading must be a finite number, got {}",
            reading.parameter, reading.value
        )));
    }
    if reading.ideal_min.is_nan() || reading.ideal_max.is_nan() {
        return Err(ClearAquaticsError::Validation(format!(
            "ideal range for {} must be numeric",
            reading.parameter
        )));
    }
    if reading.ideal_min > reading.ideal_max {
        return Err(ClearAquaticsError::Validation(format!(
            "ideal range for {} is inverted ({} > {})",
            reading.parameter, reading.ideal_min, reading.ideal_max
        )));
    }
    Ok(())
}

pub(super) fn maintenance_task(task: &MaintenanceTask) -> Result<(), ClearAquaticsError> {
    match task {
        MaintenanceTask::WaterChange { percentage_changed } => {
            if !(*percentage_changed > 0.0 && *percentage_changed <= 100.0) {
                return Err(ClearAquaticsError::Validation(format!(
                    "water change percentage must be in (0, 100], got {}",
                    percentage_changed
                )));
            }
        }
        MaintenanceTask::FilterMaintenance { media, .. } => non_empty("filter media", media)?,
    }
    Ok(())
}
