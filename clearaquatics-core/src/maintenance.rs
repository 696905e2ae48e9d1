use clearaquatics_schemas::maintenance::{FilterAction, MaintenanceKind, MaintenanceRecord, MaintenanceTask};

/// Gallons replaced by a water change of `percentage` percent.
pub fn water_change_volume(aquarium_volume: f64, percentage: f64) -> f64 {
    aquarium_volume * percentage / 100.0
}

/// Turns a submitted task into the stored kind, deriving water-change volume
/// from the tank size.
pub fn resolve_task(task: MaintenanceTask, aquarium_volume: f64) -> MaintenanceKind {
    match task {
        MaintenanceTask::WaterChange { percentage_changed } => MaintenanceKind::WaterChange {
            percentage_changed,
            volume_changed: water_change_volume(aquarium_volume, percentage_changed),
        },
        MaintenanceTask::FilterMaintenance { action, media } => {
            MaintenanceKind::FilterMaintenance { action, media }
        }
    }
}

/// One-line summary, e.g. `25% water change (9.3 gal)`.
pub fn describe(record: &MaintenanceRecord) -> String {
    match &record.kind {
        MaintenanceKind::WaterChange { percentage_changed, volume_changed } => {
            format!("{}% water change ({:.1} gal)", percentage_changed, volume_changed)
        }
        MaintenanceKind::FilterMaintenance { action, media } => {
            format!("{} {}", action_verb(*action), media)
        }
    }
}

pub fn action_verb(action: FilterAction) -> &'static str {
    match action {
        FilterAction::Rinse => "Cleaned",
        FilterAction::Replace => "Replaced",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(kind: MaintenanceKind) -> MaintenanceRecord {
        MaintenanceRecord {
            id: "1".to_string(),
            aquarium_id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
            notes: None,
            kind,
        }
    }

    #[test]
    fn water_change_volume_follows_tank_size() {
        let kind = resolve_task(MaintenanceTask::WaterChange { percentage_changed: 25.0 }, 37.0);
        assert_eq!(kind, MaintenanceKind::WaterChange { percentage_changed: 25.0, volume_changed: 9.25 });

        let kind = resolve_task(MaintenanceTask::WaterChange { percentage_changed: 30.0 }, 5.0);
        assert_eq!(describe(&record(kind)), "30% water change (1.5 gal)");
    }

    #[test]
    fn filter_descriptions() {
        let rinse = record(MaintenanceKind::FilterMaintenance {
            action: FilterAction::Rinse,
            media: "Mechanical sponge".to_string(),
        });
        let replace = record(MaintenanceKind::FilterMaintenance {
            action: FilterAction::Replace,
            media: "Carbon cartridge".to_string(),
        });
        assert_eq!(describe(&rinse), "Cleaned Mechanical sponge");
        assert_eq!(describe(&replace), "Replaced Carbon cartridge");
    }
}
