use crate::error::Result;
use crate::structs::{DATE_FORMAT, TemperatureRecord};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use log::{debug, error};
use std::fs::File;
use std::path::Path;

/// Loads temperature records from a comma-separated text file.
///
/// Each line is `city,date,temperature` with the date in `dd/mm/yyyy`. Lines
/// with fewer than 3 fields are skipped; surrounding whitespace is trimmed
/// from every field.
///
/// # Errors
///
/// An unreadable file is not fatal: the failure is logged and whatever was
/// read up to that point is returned (an empty set if the file could not be
/// opened at all). A malformed date or temperature aborts the whole load with
/// the underlying parse error.
pub fn load_records(path: &Path) -> Result<Vec<TemperatureRecord>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            error!("Error leyendo el CSV: {}", e);
            return Ok(Vec::new());
        }
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for line in reader.records() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Error leyendo el CSV: {}", e);
                break;
            }
        };
        if line.len() < 3 {
            continue;
        }

        let city = line[0].to_string();
        let date = NaiveDate::parse_from_str(&line[1], DATE_FORMAT)?;
        let temperature: f64 = line[2].parse()?;
        records.push(TemperatureRecord {
            city,
            date,
            temperature,
        });
    }

    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::PathBuf;

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("temp-analyzer-load-{}", name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_trimmed_fields() {
        let path = write_fixture(
            "trimmed.csv",
            " Quito , 01/01/2023 , 18.5 \nLima,02/01/2023,25.0\n",
        );
        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].city, "Quito");
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        assert_eq!(records[0].temperature, 18.5);
        assert_eq!(records[1].city, "Lima");
    }

    #[test]
    fn skips_short_lines() {
        let path = write_fixture(
            "short.csv",
            "Quito,01/01/2023,18.5\nLima,02/01/2023\nCuenca,03/01/2023,12.0\n",
        );
        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].city, "Quito");
        assert_eq!(records[1].city, "Cuenca");
    }

    #[test]
    fn missing_file_yields_empty_set() {
        let path = std::env::temp_dir().join("temp-analyzer-load-does-not-exist.csv");
        let records = load_records(&path).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_date_is_fatal() {
        let path = write_fixture("bad-date.csv", "Quito,2023-01-01,18.5\n");
        assert!(load_records(&path).is_err());
    }

    #[test]
    fn malformed_temperature_is_fatal() {
        let path = write_fixture("bad-temp.csv", "Quito,01/01/2023,warm\n");
        assert!(load_records(&path).is_err());
    }

    #[test]
    fn duplicate_city_date_pairs_are_retained() {
        let path = write_fixture(
            "dupes.csv",
            "Quito,01/01/2023,18.5\nQuito,01/01/2023,19.5\n",
        );
        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
    }
}
