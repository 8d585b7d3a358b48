#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Date Parse Error: {0}")]
    Date(#[from] chrono::ParseError),
    #[error("Number Parse Error: {0}")]
    Number(#[from] std::num::ParseFloatError),
    #[error("Chart Error: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
