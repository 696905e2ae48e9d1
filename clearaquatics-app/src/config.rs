use anyhow::{bail, Context, Result};
use clearaquatics_core::seed::SUPPORTED_SCHEMA_VERSION;
use clearaquatics_schemas::water::ParameterPreset;
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_CONFIG_PATH: &str = "clearaquatics.yaml";

/// Runtime settings, read from `clearaquatics.yaml`.
///
/// Every field is optional in the file. Presets given in the file replace the
/// built-in preset of the same name; the others stay available.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub schema_version: String,
    /// Directory holding the YAML fixture files.
    pub data_dir: PathBuf,
    /// Charts and CSV exports are written under this directory.
    pub output_dir: PathBuf,
    /// Default history window, in days.
    pub history_days: u32,
    pub parameter_presets: BTreeMap<String, ParameterPreset>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: SUPPORTED_SCHEMA_VERSION.to_string(),
            data_dir: PathBuf::from("./data/fixtures"),
            output_dir: PathBuf::from("./data/reports"),
            history_days: 30,
            parameter_presets: builtin_presets(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from `clearaquatics.yaml` in the working
    /// directory when no path is given. Only an explicitly requested file has to
    /// exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        if !path.exists() {
            if required {
                bail!("Config file '{}' does not exist", path.display());
            }
            tracing::debug!("No config at '{}', using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let mut settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from {:?}", path))?;

        if settings.schema_version != SUPPORTED_SCHEMA_VERSION {
            bail!(
                "Config file {:?} has schema_version {}, expected {}",
                path,
                settings.schema_version,
                SUPPORTED_SCHEMA_VERSION
            );
        }
        for (name, preset) in builtin_presets() {
            settings.parameter_presets.entry(name).or_insert(preset);
        }
        for (name, preset) in &settings.parameter_presets {
            if preset.ideal_min > preset.ideal_max {
                bail!("Preset '{}' in {:?} has ideal_min above ideal_max", name, path);
            }
        }

        tracing::info!("Loaded settings from '{}'", path.display());
        Ok(settings)
    }

    pub fn preset(&self, parameter: &str) -> Option<&ParameterPreset> {
        self.parameter_presets.get(parameter)
    }
}

/// Units and ideal bands for a typical tropical community tank.
fn builtin_presets() -> BTreeMap<String, ParameterPreset> {
    let presets: [(&str, &str, f64, f64); 12] = [
        ("ph", "", 6.5, 7.5),
        ("temperature", "°F", 75.0, 79.0),
        ("ammonia", "ppm", 0.0, 0.25),
        ("nitrite", "ppm", 0.0, 0.25),
        ("nitrate", "ppm", 0.0, 20.0),
        ("alkalinity", "dKH", 4.0, 8.0),
        ("carbonate_hardness", "dKH", 4.0, 8.0),
        ("general_hardness", "dGH", 8.0, 12.0),
        ("hardness", "dGH", 8.0, 12.0),
        ("salinity", "sg", 1.020, 1.025),
        ("tds", "ppm", 150.0, 300.0),
        ("dissolved_oxygen", "mg/L", 6.0, 8.0),
    ];
    presets
        .into_iter()
        .map(|(name, unit, ideal_min, ideal_max)| {
            (name.to_string(), ParameterPreset { unit: unit.to_string(), ideal_min, ideal_max })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.history_days, 30);
        assert_eq!(settings.preset("ph").unwrap().ideal_max, 7.5);
        assert_eq!(settings.preset("temperature").unwrap().unit, "°F");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load(Some(dir.path().join("nope.yaml").as_path())).is_err());
    }

    #[test]
    fn file_presets_override_builtins_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clearaquatics.yaml");
        fs::write(
            &path,
            r#"
history_days: 14
parameter_presets:
  temperature: { unit: "°C", ideal_min: 24, ideal_max: 26 }
  phosphate: { unit: ppm, ideal_min: 0, ideal_max: 0.1 }
"#,
        )
        .unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.history_days, 14);
        assert_eq!(settings.data_dir, PathBuf::from("./data/fixtures"));
        assert_eq!(settings.preset("temperature").unwrap().unit, "°C");
        assert!(settings.preset("phosphate").is_some());
        assert!(settings.preset("ammonia").is_some());
    }

    #[test]
    fn inverted_presets_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clearaquatics.yaml");
        fs::write(&path, "parameter_presets:\n  ph: { ideal_min: 8, ideal_max: 6 }\n").unwrap();
        assert!(Settings::load(Some(path.as_path())).is_err());
    }
}
