pub mod chart;
pub mod error;
pub mod load;
pub mod structs;
pub mod transform;

// Re-export public API
pub use chart::render_bar_chart;
pub use error::{AnalyzerError, Result};
pub use load::load_records;
pub use structs::{DATE_FORMAT, SimpleLogger, TemperatureRecord};
pub use transform::{average_by_city, extremes_on};
