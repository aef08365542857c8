use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("CSV error: {0}")]
    Csv(#[from] drip_csvs::CsvError),

    #[error("Merkle error: {0}")]
    Merkle(#[from] drip_merkle::MerkleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Self-check failed: generated proof for {recipient} does not verify against the root")]
    SelfCheckFailed { recipient: alloy_primitives::Address },

    #[error("Total distribution amount overflows U256")]
    NumericOverflow,
}

pub type CompileResult<T> = Result<T, CompileError>;
