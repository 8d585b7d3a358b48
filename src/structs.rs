use chrono::NaiveDate;
use log::{Log, Metadata, Record as LogRecord};

/// Simple logger implementation
pub struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &LogRecord) {
        println!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

/// Date format shared by the CSV file and the interactive prompts
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// One city/date/temperature observation from the input file
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRecord {
    pub city: String,
    pub date: NaiveDate,
    pub temperature: f64,
}
