use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClearAquaticsError {
    #[error("Aquarium '{0}' not found")]
    AquariumNotFound(String),

    #[error("Water parameter reading '{0}' not found")]
    ReadingNotFound(String),

    #[error("Aquatic life entry '{0}' not found")]
    LifeNotFound(String),

    #[error("Maintenance record '{0}' not found")]
    MaintenanceRecordNotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
