//! Text reports printed by each subcommand.

use crate::{config::Settings, plotting};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clearaquatics_core::{
    catalog::SpeciesFilter,
    compatibility::{check_compatibility, check_habitat},
    dashboard::{days_ago, format_days, DashboardSummary},
    export::CombinedHistoryWriter,
    history::{display_name, ParameterHistory},
    maintenance::describe,
    readings::current_conditions,
    seed::SeedData,
    status::range_note,
    tech::tech_level,
};
use clearaquatics_schemas::{
    aquarium::{Aquarium, TechLevel},
    water::{NewWaterParameter, ParameterStatus, WaterParameter},
};
use serde::Serialize;
use std::fs;

#[derive(Serialize)]
struct AquariumRow<'a> {
    #[serde(flatten)]
    aquarium: &'a Aquarium,
    tech_level: TechLevel,
    alerts: usize,
}

pub fn list_aquariums(seed: &SeedData, json: bool) -> Result<()> {
    let rows: Vec<AquariumRow> = seed
        .store
        .aquariums()
        .iter()
        .map(|a| AquariumRow {
            aquarium: a,
            tech_level: tech_level(a),
            alerts: seed.store.alert_count(&a.id),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:<6} {:<24} {:>8} {:<12} {:<10} {:>6}", "ID", "Name", "Gallons", "Water", "Tech", "Alerts");
    for row in &rows {
        println!(
            "{:<6} {:<24} {:>8} {:<12} {:<10} {:>6}",
            row.aquarium.id,
            row.aquarium.name,
            row.aquarium.volume,
            row.aquarium.water_type.to_string(),
            row.tech_level.to_string(),
            row.alerts
        );
    }
    Ok(())
}

fn status_label(status: ParameterStatus) -> &'static str {
    match status {
        ParameterStatus::Good => "Optimal",
        ParameterStatus::Warning => "Warning",
        ParameterStatus::Critical => "Critical",
    }
}

fn print_reading(reading: &WaterParameter) {
    let note = range_note(reading.value, reading.ideal_min, reading.ideal_max, &reading.unit)
        .map(|n| format!("  ({})", n))
        .unwrap_or_default();
    println!(
        "  - {:<20} {:>8}{:<4} target {}-{}{}  [{}]{}",
        display_name(&reading.parameter),
        reading.value,
        reading.unit,
        reading.ideal_min,
        reading.ideal_max,
        reading.unit,
        status_label(reading.status),
        note
    );
}

pub fn show_dashboard(seed: &SeedData, aquarium_id: &str, as_of: NaiveDate) -> Result<()> {
    let summary = DashboardSummary::build(&seed.store, &seed.catalog, aquarium_id, as_of)?;
    let tank = summary.aquarium;

    println!("\n--- [Dashboard] {} ---", tank.name);
    println!(
        "{} gal | {} | {} | set up {}",
        tank.volume, tank.water_type, summary.tech_level, tank.setup_date
    );
    if summary.is_healthy() {
        println!("Status: Healthy");
    } else {
        let n = summary.alerts.len();
        println!(
            "Status: {} Alert{} - {} parameter{} out of range",
            n,
            if n > 1 { "s" } else { "" },
            n,
            if n > 1 { "s are" } else { " is" }
        );
    }
    println!("========================================");

    println!(
        "Aquatic life: {} ({} fish, {} plants, {} other)",
        summary.life.len(),
        summary.fish_count,
        summary.plant_count,
        summary.other_count()
    );
    let since = |date: Option<NaiveDate>| {
        date.map_or("Never".to_string(), |d| format_days(days_ago(d, as_of)))
    };
    println!("Last test: {}", since(summary.last_test));
    println!(
        "Last water change: {}",
        since(summary.last_water_change.map(|r| r.date))
    );
    println!(
        "Last filter maintenance: {}",
        since(summary.last_filter_maintenance.map(|r| r.date))
    );

    println!("\nCurrent water parameters ({} good):", summary.good_count);
    if summary.latest.is_empty() {
        println!("  No readings recorded yet.");
    }
    for reading in &summary.latest {
        print_reading(reading);
    }

    if !summary.life.is_empty() {
        println!("\nStocked species:");
    }
    for entry in &summary.life {
        let flag = if entry.species.is_none() {
            " (not in species catalog)"
        } else if entry.violations.is_empty() {
            ""
        } else {
            " !"
        };
        println!("  - {} added {}{}", entry.display_name(), entry.life.added_date, flag);
        for violation in &entry.violations {
            println!("      {}", violation);
        }
    }

    if !summary.activity.is_empty() {
        println!("\nRecent activity:");
    }
    for item in &summary.activity {
        let days = days_ago(item.date, as_of);
        let ago = match days {
            0 => "Today".to_string(),
            1 => "1 day ago".to_string(),
            n => format!("{} days ago", n),
        };
        println!("  - {} ({})", item.message, ago);
    }
    Ok(())
}

pub struct HistoryRequest<'a> {
    pub aquarium_id: &'a str,
    pub parameters: Vec<String>,
    pub days: u32,
    pub combined: bool,
    pub as_of: NaiveDate,
}

pub fn show_history(seed: &SeedData, settings: &Settings, request: HistoryRequest) -> Result<()> {
    let tank = seed.store.aquarium(request.aquarium_id)?;
    let history = ParameterHistory::new(seed.store.readings_for(&tank.id), request.as_of, request.days);

    let parameters: Vec<&str> = if request.parameters.is_empty() {
        history.available_parameters()
    } else {
        request.parameters.iter().map(String::as_str).collect()
    };

    println!(
        "\n--- [History] {} | {} to {} ---",
        tank.name,
        history.window_start(),
        request.as_of
    );
    for parameter in &parameters {
        match history.stats(parameter) {
            Some(stats) => {
                let trend = history
                    .trend(parameter)
                    .map(|t| format!("{:+.1}%", t))
                    .unwrap_or_else(|| "n/a".to_string());
                println!(
                    "  - {:<20} n={:<3} min {:.2} | max {:.2} | avg {:.2} | latest {}{} | trend {}",
                    display_name(parameter),
                    stats.count,
                    stats.min,
                    stats.max,
                    stats.average,
                    stats.latest,
                    stats.unit,
                    trend
                );
            }
            None => println!("  - {:<20} no readings in range", display_name(parameter)),
        }
    }

    let run_dir = settings.output_dir.join(format!(
        "history_{}_{}",
        tank.id,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", run_dir))?;

    let rows = history.combined_rows(&parameters);
    let csv_path = run_dir.join("combined_history.csv");
    let mut writer = CombinedHistoryWriter::new(&csv_path, &parameters)?;
    for row in &rows {
        writer.write_row(row)?;
    }
    writer.finish()?;

    let mut charts = Vec::new();
    if request.combined {
        charts.extend(plotting::plot_combined(&run_dir, &parameters, &rows)?);
    } else {
        for parameter in &parameters {
            charts.extend(plotting::plot_parameter(&run_dir, parameter, &history.series(parameter))?);
        }
    }

    println!(
        "\nWrote {} chart(s) and combined_history.csv to '{}'",
        charts.len(),
        run_dir.display()
    );
    Ok(())
}

pub fn show_species(seed: &SeedData, filter: &SpeciesFilter, aquarium_id: Option<&str>) -> Result<()> {
    let matches = seed.catalog.search(filter);

    let Some(aquarium_id) = aquarium_id else {
        println!("\n--- [Species] {} match(es) ---", matches.len());
        for species in matches {
            println!(
                "  - {:<20} {:<26} {:<11} {:<11} pH {}-{} | {}-{}°F",
                species.name,
                species.scientific_name,
                species.category.to_string(),
                species.water_type.to_string(),
                species.requirements.min_ph,
                species.requirements.max_ph,
                species.requirements.min_temp,
                species.requirements.max_temp
            );
        }
        return Ok(());
    };

    let tank = seed.store.aquarium(aquarium_id)?;
    let latest = seed.store.latest_readings(&tank.id);
    let (ph, temp) = current_conditions(&latest);

    println!("\n--- [Species] Candidates for {} ({}, {} gal) ---", tank.name, tank.water_type, tank.volume);
    let mut shown = 0;
    for species in matches {
        let mismatches = check_habitat(species, tank);
        if !mismatches.is_empty() {
            tracing::debug!("{} excluded: {:?}", species.id, mismatches);
            continue;
        }
        shown += 1;
        let violations = check_compatibility(ph, temp, &species.requirements);
        if violations.is_empty() {
            println!("  - {:<20} compatible", species.name);
        } else {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            println!("  - {:<20} {}", species.name, reasons.join("; "));
        }
    }
    if shown == 0 {
        println!("  No species in the catalog suit this tank.");
    }
    Ok(())
}

pub fn show_maintenance(seed: &SeedData, aquarium_id: &str) -> Result<()> {
    let tank = seed.store.aquarium(aquarium_id)?;
    let records = seed.store.maintenance_for(&tank.id);

    let water_changes = records.iter().filter(|r| r.is_water_change()).count();
    println!(
        "\n--- [Maintenance] {} | {} water change(s), {} filter service(s) ---",
        tank.name,
        water_changes,
        records.len() - water_changes
    );
    for record in records {
        let notes = record.notes.as_deref().map(|n| format!(" - {}", n)).unwrap_or_default();
        println!("  - {} {}{}", record.date, describe(record), notes);
    }
    Ok(())
}

/// Classifies a new reading against the configured preset and shows where it
/// leaves the tank. Nothing is written back to the fixture files.
pub fn log_reading(
    seed: &mut SeedData,
    settings: &Settings,
    aquarium_id: &str,
    parameter: &str,
    value: f64,
    date: NaiveDate,
) -> Result<()> {
    let preset = settings
        .preset(parameter)
        .with_context(|| format!("No preset for parameter '{}'; add one under parameter_presets", parameter))?;

    let reading = seed.store.add_reading(NewWaterParameter {
        aquarium_id: aquarium_id.to_string(),
        parameter: parameter.to_string(),
        value,
        unit: preset.unit.clone(),
        date,
        ideal_min: preset.ideal_min,
        ideal_max: preset.ideal_max,
    })?;

    println!("\nLogged {} on {}:", display_name(parameter), date);
    print_reading(&reading);
    println!(
        "Tank now has {} alert(s) across its history.",
        seed.store.alert_count(aquarium_id)
    );
    Ok(())
}
