use clearaquatics_schemas::water::{WaterParameter, PH, TEMPERATURE};

/// Reduces readings to the most recent one per parameter.
///
/// Parameters appear in the order they are first seen. When two readings of a
/// parameter share a date, the one later in the input wins, so feeding readings
/// in insertion order makes the last-inserted reading authoritative.
pub fn latest_by_parameter<'a, I>(readings: I) -> Vec<&'a WaterParameter>
where
    I: IntoIterator<Item = &'a WaterParameter>,
{
    let mut latest: Vec<&WaterParameter> = Vec::new();
    for reading in readings {
        match latest.iter_mut().find(|r| r.parameter == reading.parameter) {
            Some(slot) if reading.date >= slot.date => *slot = reading,
            Some(_) => {}
            None => latest.push(reading),
        }
    }
    latest
}

/// Latest pH and temperature, the inputs to a compatibility check.
pub fn current_conditions(latest: &[&WaterParameter]) -> (Option<f64>, Option<f64>) {
    let find = |key: &str| latest.iter().find(|r| r.parameter == key).map(|r| r.value);
    (find(PH), find(TEMPERATURE))
}
