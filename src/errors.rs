use thiserror::Error;

/// Error type shared by records, calculators, and configuration.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Invalid date `{input}`, expected DD.MM.YYYY: {source}")]
    DateParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
