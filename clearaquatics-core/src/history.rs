//! Time-windowed views over one tank's readings: per-parameter series,
//! summary statistics, trends, and a date-aligned table for combined charts.

use chrono::{Duration, NaiveDate};
use clearaquatics_schemas::water::WaterParameter;
use std::collections::BTreeMap;

/// Summary of one parameter over the window.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStats {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    /// Value of the newest reading in the window.
    pub latest: f64,
    pub count: usize,
    pub unit: String,
}

/// One date's values, aligned with the parameter list it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRow {
    pub date: NaiveDate,
    pub values: Vec<Option<f64>>,
}

pub struct ParameterHistory<'a> {
    all: Vec<&'a WaterParameter>,
    window_start: NaiveDate,
    as_of: NaiveDate,
}

impl<'a> ParameterHistory<'a> {
    /// Covers readings dated within `days` days before `as_of`, inclusive of
    /// both ends. Readings dated after `as_of` are ignored.
    pub fn new<I>(readings: I, as_of: NaiveDate, days: u32) -> Self
    where
        I: IntoIterator<Item = &'a WaterParameter>,
    {
        Self {
            all: readings.into_iter().collect(),
            window_start: as_of - Duration::days(i64::from(days)),
            as_of,
        }
    }

    pub fn window_start(&self) -> NaiveDate {
        self.window_start
    }

    /// Every parameter ever recorded for the tank, in first-seen order,
    /// regardless of the window.
    pub fn available_parameters(&self) -> Vec<&'a str> {
        let mut seen: Vec<&'a str> = Vec::new();
        for r in &self.all {
            if !seen.contains(&r.parameter.as_str()) {
                seen.push(r.parameter.as_str());
            }
        }
        seen
    }

    /// Readings of `parameter` inside the window, oldest first. Same-day
    /// readings keep their insertion order.
    pub fn series(&self, parameter: &str) -> Vec<&'a WaterParameter> {
        let mut series: Vec<&'a WaterParameter> = self
            .all
            .iter()
            .copied()
            .filter(|r| r.parameter == parameter && self.in_window(r.date))
            .collect();
        series.sort_by_key(|r| r.date);
        series
    }

    pub fn stats(&self, parameter: &str) -> Option<ParameterStats> {
        let series = self.series(parameter);
        let last = series.last()?;

        let values: Vec<f64> = series.iter().map(|r| r.value).collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let average = values.iter().sum::<f64>() / values.len() as f64;

        Some(ParameterStats {
            min,
            max,
            average,
            latest: last.value,
            count: values.len(),
            unit: series[0].unit.clone(),
        })
    }

    /// Percent change from the average of the three readings before the last
    /// three to the average of the last three.
    ///
    /// `None` when the window has fewer than four readings or the older
    /// average is zero.
    pub fn trend(&self, parameter: &str) -> Option<f64> {
        let values: Vec<f64> = self.series(parameter).iter().map(|r| r.value).collect();
        if values.len() < 4 {
            return None;
        }

        let split = values.len() - 3;
        let recent = &values[split..];
        let older = &values[split.saturating_sub(3)..split];

        let recent_avg = recent.iter().sum::<f64>() / recent.len() as f64;
        let older_avg = older.iter().sum::<f64>() / older.len() as f64;
        if older_avg == 0.0 {
            return None;
        }
        Some((recent_avg - older_avg) / older_avg * 100.0)
    }

    /// A row per date on which any of `parameters` was measured, oldest first.
    pub fn combined_rows(&self, parameters: &[&str]) -> Vec<CombinedRow> {
        let mut by_date: BTreeMap<NaiveDate, Vec<Option<f64>>> = BTreeMap::new();
        for (column, parameter) in parameters.iter().enumerate() {
            for reading in self.series(parameter) {
                let row = by_date
                    .entry(reading.date)
                    .or_insert_with(|| vec![None; parameters.len()]);
                row[column] = Some(reading.value);
            }
        }
        by_date
            .into_iter()
            .map(|(date, values)| CombinedRow { date, values })
            .collect()
    }

    fn in_window(&self, date: NaiveDate) -> bool {
        date >= self.window_start && date <= self.as_of
    }
}

/// Label for a parameter key: `ph` becomes `pH`, `general_hardness` becomes
/// `General Hardness`.
pub fn display_name(parameter: &str) -> String {
    match parameter {
        "ph" => "pH".to_string(),
        "tds" => "TDS".to_string(),
        "carbonate_hardness" => "Carbonate Hardness".to_string(),
        "general_hardness" => "General Hardness".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>().replacen('_', " ", 1),
                None => String::new(),
            }
        }
    }
}
