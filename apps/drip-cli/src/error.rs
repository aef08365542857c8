use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Compile error: {0}")]
    Compile(#[from] drip_sdk::CompileError),

    #[error("CSV error: {0}")]
    Csv(#[from] drip_csvs::CsvError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },
}

pub type CliResult<T> = Result<T, CliError>;
