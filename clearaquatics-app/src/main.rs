use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use clearaquatics_core::{catalog::SpeciesFilter, seed::SeedData};
use clearaquatics_schemas::{aquarium::WaterType, species::SpeciesCategory};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod plotting;
mod reports;

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "clearaquatics", version, about = "Aquarium water-quality dashboards and history charts")]
struct Cli {
    /// Settings file; defaults to ./clearaquatics.yaml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the seed fixture files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory that receives chart and CSV runs
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every tank with its tech level and alert count
    Aquariums {
        #[arg(long)]
        json: bool,
    },
    /// Current state of one tank
    Dashboard {
        #[arg(long)]
        aquarium: String,
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Statistics, charts and a CSV export of past readings
    History {
        #[arg(long)]
        aquarium: String,
        /// Repeat to select several parameters; all recorded ones by default
        #[arg(long = "parameter")]
        parameters: Vec<String>,
        #[arg(long)]
        days: Option<u32>,
        /// Draw every parameter on one chart instead of one chart each
        #[arg(long)]
        combined: bool,
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Search the species catalog
    Species {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
        #[arg(long, value_enum)]
        water_type: Option<WaterTypeArg>,
        /// Only show species that fit this tank, with their compatibility
        #[arg(long)]
        aquarium: Option<String>,
    },
    /// Maintenance log of one tank, newest first
    Maintenance {
        #[arg(long)]
        aquarium: String,
    },
    /// Classify a new reading against the configured preset
    LogReading {
        #[arg(long)]
        aquarium: String,
        #[arg(long)]
        parameter: String,
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Fish,
    Plant,
    Crustacean,
}

impl From<CategoryArg> for SpeciesCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Fish => SpeciesCategory::Fish,
            CategoryArg::Plant => SpeciesCategory::Plant,
            CategoryArg::Crustacean => SpeciesCategory::Crustacean,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum WaterTypeArg {
    Freshwater,
    Saltwater,
    Brackish,
}

impl From<WaterTypeArg> for WaterType {
    fn from(arg: WaterTypeArg) -> Self {
        match arg {
            WaterTypeArg::Freshwater => WaterType::Freshwater,
            WaterTypeArg::Saltwater => WaterType::Saltwater,
            WaterTypeArg::Brackish => WaterType::Brackish,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        settings.output_dir = dir;
    }

    let mut seed = SeedData::load(&settings.data_dir)
        .with_context(|| format!("Failed to load seed data from {:?}", settings.data_dir))?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::Aquariums { json } => reports::list_aquariums(&seed, json),
        Command::Dashboard { aquarium, as_of } => {
            reports::show_dashboard(&seed, &aquarium, as_of.unwrap_or(today))
        }
        Command::History {
            aquarium,
            parameters,
            days,
            combined,
            as_of,
        } => reports::show_history(
            &seed,
            &settings,
            reports::HistoryRequest {
                aquarium_id: &aquarium,
                parameters,
                days: days.unwrap_or(settings.history_days),
                combined,
                as_of: as_of.unwrap_or(today),
            },
        ),
        Command::Species {
            query,
            category,
            water_type,
            aquarium,
        } => {
            let filter = SpeciesFilter {
                query,
                category: category.map(Into::into),
                water_type: water_type.map(Into::into),
            };
            reports::show_species(&seed, &filter, aquarium.as_deref())
        }
        Command::Maintenance { aquarium } => reports::show_maintenance(&seed, &aquarium),
        Command::LogReading {
            aquarium,
            parameter,
            value,
            date,
        } => reports::log_reading(
            &mut seed,
            &settings,
            &aquarium,
            &parameter,
            value,
            date.unwrap_or(today),
        ),
    }
}
