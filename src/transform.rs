use crate::structs::TemperatureRecord;
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

/// Computes the mean temperature per city over the inclusive range `[start, end]`.
///
/// Cities with no matching record are absent from the result; an empty filter
/// set yields an empty map. The map is keyed by the city string exactly as
/// stored, so bar ordering downstream is alphabetical and reproducible.
pub fn average_by_city(
    records: &[TemperatureRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, u32)> = BTreeMap::new();
    for record in records {
        if record.date >= start && record.date <= end {
            let entry = sums.entry(record.city.clone()).or_insert((0.0, 0));
            entry.0 += record.temperature;
            entry.1 += 1;
        }
    }

    debug!("Aggregated {} cities for {} - {}", sums.len(), start, end);
    sums.into_iter()
        .map(|(city, (sum, count))| (city, sum / f64::from(count)))
        .collect()
}

/// Finds the hottest and coldest records on an exact date.
///
/// Returns `None` when no record matches. Ties resolve to the earliest
/// matching record in input order.
pub fn extremes_on(
    records: &[TemperatureRecord],
    date: NaiveDate,
) -> Option<(TemperatureRecord, TemperatureRecord)> {
    let mut hottest: Option<&TemperatureRecord> = None;
    let mut coldest: Option<&TemperatureRecord> = None;
    for record in records.iter().filter(|r| r.date == date) {
        match hottest {
            Some(h) if record.temperature <= h.temperature => {}
            _ => hottest = Some(record),
        }
        match coldest {
            Some(c) if record.temperature >= c.temperature => {}
            _ => coldest = Some(record),
        }
    }
    Some((hottest?.clone(), coldest?.clone()))
}
