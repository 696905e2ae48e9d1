use assert_matches::assert_matches;
use chrono::NaiveDate;
use clearaquatics_core::{
    dashboard::{format_days, days_ago, DashboardSummary},
    history::ParameterHistory,
    seed::SeedData,
    ClearAquaticsError,
};
use clearaquatics_schemas::{aquarium::TechLevel, water::ParameterStatus};
use std::{fs, path::PathBuf};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/fixtures")
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

const AQUARIUMS: &str = r#"
schema_version: "1.0"
aquariums:
  - id: "t1"
    name: Quarantine
    volume: 10
    water_type: freshwater
    setup_date: 2025-01-01
    light_level: low
    co2_injection: false
"#;

const SPECIES: &str = r#"
schema_version: "1.0"
species:
  - id: guppy
    name: Guppy
    scientific_name: Poecilia reticulata
    category: fish
    water_type: freshwater
    requirements:
      min_ph: 7.0
      max_ph: 8.5
      min_temp: 72
      max_temp: 82
      min_tank_size: 5
      difficulty: beginner
      social_behavior: peaceful
"#;

#[test]
fn loads_the_bundled_fixtures() {
    let seed = SeedData::load(fixtures_dir()).unwrap();

    assert_eq!(seed.store.aquariums().len(), 2);
    assert_eq!(seed.catalog.len(), 18);
    assert_eq!(seed.store.readings_for("1").count(), 20);
    assert_eq!(seed.store.readings_for("2").count(), 2);
    assert_eq!(seed.store.life_for("1").count(), 3);
    assert_eq!(seed.store.maintenance_for("2").len(), 2);
}

#[test]
fn fixture_statuses_are_recomputed() {
    let seed = SeedData::load(fixtures_dir()).unwrap();

    let status_of = |aquarium: &str, parameter: &str| {
        seed.store
            .latest_readings(aquarium)
            .into_iter()
            .find(|r| r.parameter == parameter)
            .map(|r| r.status)
    };
    assert_eq!(status_of("1", "ammonia"), Some(ParameterStatus::Critical));
    assert_eq!(status_of("1", "ph"), Some(ParameterStatus::Good));
    assert_eq!(status_of("2", "temperature"), Some(ParameterStatus::Warning));

    // two historic pH excursions plus the ammonia spike
    assert_eq!(seed.store.alert_count("1"), 3);
}

#[test]
fn dashboard_for_the_living_room_tank() {
    let seed = SeedData::load(fixtures_dir()).unwrap();
    let summary = DashboardSummary::build(&seed.store, &seed.catalog, "1", date("2025-09-15")).unwrap();

    assert_eq!(summary.tech_level, TechLevel::HighTech);
    assert_eq!(summary.latest.len(), 5);
    assert_eq!(summary.alerts.len(), 1);
    assert_eq!(summary.alerts[0].parameter, "ammonia");
    assert_eq!(summary.good_count, 4);
    assert!(!summary.is_healthy());

    assert_eq!(summary.fish_count, 2);
    assert_eq!(summary.plant_count, 1);
    assert_eq!(summary.other_count(), 0);

    let incompatible: Vec<_> = summary.incompatible_life().collect();
    assert_eq!(incompatible.len(), 1);
    assert_eq!(incompatible[0].display_name(), "Neon Tetra");
    assert_eq!(incompatible[0].violations[0].to_string(), "pH too high (7.2 > 7)");

    assert_eq!(summary.last_test, Some(date("2025-09-15")));
    assert_eq!(summary.last_water_change.map(|r| r.id.as_str()), Some("1"));
    assert_eq!(summary.last_filter_maintenance.map(|r| r.id.as_str()), Some("2"));

    let messages: Vec<_> = summary.activity.iter().map(|a| a.message.as_str()).collect();
    assert_eq!(
        messages,
        ["pH tested: 7.2", "Ammonia critical detected", "New fish added: Angelfish"]
    );
}

#[test]
fn dashboard_ignores_records_after_as_of() {
    let seed = SeedData::load(fixtures_dir()).unwrap();
    let summary = DashboardSummary::build(&seed.store, &seed.catalog, "1", date("2025-09-09")).unwrap();

    assert_eq!(summary.latest.len(), 1);
    assert_eq!(summary.latest[0].parameter, "ph");
    assert_eq!(summary.latest[0].value, 7.4);
    assert_eq!(summary.last_test, Some(date("2025-09-08")));
    assert_eq!(format_days(days_ago(date("2025-09-08"), summary.as_of)), "1 day");
    assert!(summary.is_healthy());

    // the angelfish arrives on 2025-09-10
    assert_eq!(summary.life.len(), 2);
    assert_eq!(summary.fish_count, 1);
    assert_eq!(summary.life[0].violations[0].to_string(), "pH too high (7.4 > 7)");

    // the water change is logged on 2025-09-12
    assert!(summary.last_water_change.is_none());
    assert_eq!(summary.last_filter_maintenance.map(|r| r.id.as_str()), Some("2"));

    let messages: Vec<_> = summary.activity.iter().map(|a| a.message.as_str()).collect();
    assert_eq!(messages, ["pH tested: 7.4", "New fish added: Neon Tetra"]);
}

#[test]
fn betta_tank_is_low_tech_and_runs_warm() {
    let seed = SeedData::load(fixtures_dir()).unwrap();
    let summary = DashboardSummary::build(&seed.store, &seed.catalog, "2", date("2025-09-15")).unwrap();

    assert_eq!(summary.tech_level, TechLevel::LowTech);
    assert_eq!(summary.alerts.len(), 1);
    assert_eq!(summary.incompatible_life().count(), 0);

    let changed = summary.last_water_change.unwrap();
    assert_eq!(format_days(days_ago(changed.date, summary.as_of)), "4 days");
}

#[test]
fn history_over_the_fixture_month() {
    let seed = SeedData::load(fixtures_dir()).unwrap();
    let history = ParameterHistory::new(seed.store.readings_for("1"), date("2025-09-15"), 30);

    assert_eq!(
        history.available_parameters(),
        ["ph", "temperature", "ammonia", "nitrite", "nitrate"]
    );
    let stats = history.stats("ph").unwrap();
    // the 2025-08-15 reading falls just outside the window
    assert_eq!(stats.count, 15);
    assert_eq!(stats.min, 6.4);
    assert_eq!(stats.max, 7.6);
    assert_eq!(stats.latest, 7.2);
}

#[test]
fn unknown_species_are_kept_and_deletable() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("aquariums.yaml"), AQUARIUMS).unwrap();
    fs::write(dir.path().join("species.yaml"), SPECIES).unwrap();
    fs::write(
        dir.path().join("aquatic_life.yaml"),
        r#"
schema_version: "1.0"
aquatic_life:
  - id: "l1"
    aquarium_id: "t1"
    species_id: retired-species
    added_date: 2025-02-01
"#,
    )
    .unwrap();

    let mut seed = SeedData::load(dir.path()).unwrap();
    {
        let summary = DashboardSummary::build(&seed.store, &seed.catalog, "t1", date("2025-03-01")).unwrap();
        assert_eq!(summary.life.len(), 1);
        assert!(summary.life[0].species.is_none());
        assert_eq!(summary.life[0].display_name(), "Unknown Species");
        assert!(summary.life[0].violations.is_empty());
        assert_eq!(summary.other_count(), 1);
        assert_eq!(summary.last_test, None);
    }

    seed.store.delete_life("l1").unwrap();
    assert_eq!(seed.store.life_for("t1").count(), 0);
}

#[test]
fn dependent_files_are_optional() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("aquariums.yaml"), AQUARIUMS).unwrap();
    fs::write(dir.path().join("species.yaml"), SPECIES).unwrap();

    let seed = SeedData::load(dir.path()).unwrap();
    assert_eq!(seed.store.aquariums().len(), 1);
    assert_eq!(seed.store.readings_for("t1").count(), 0);
}

#[test]
fn dangling_references_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("aquariums.yaml"), AQUARIUMS).unwrap();
    fs::write(dir.path().join("species.yaml"), SPECIES).unwrap();
    fs::write(
        dir.path().join("water_parameters.yaml"),
        r#"
schema_version: "1.0"
water_parameters:
  - id: "r1"
    aquarium_id: "nope"
    parameter: ph
    value: 7.0
    date: 2025-02-01
    ideal_min: 6.5
    ideal_max: 7.5
"#,
    )
    .unwrap();

    assert_matches!(
        SeedData::load(dir.path()),
        Err(ClearAquaticsError::AquariumNotFound(id)) if id == "nope"
    );
}

#[test]
fn unsupported_schema_versions_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("aquariums.yaml"), AQUARIUMS.replace("\"1.0\"", "\"2.0\"")).unwrap();
    fs::write(dir.path().join("species.yaml"), SPECIES).unwrap();

    assert_matches!(SeedData::load(dir.path()), Err(ClearAquaticsError::Validation(_)));
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert_matches!(
        SeedData::load(dir.path().join("absent")),
        Err(ClearAquaticsError::FileIO(..))
    );
}
