use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistributorError {
    #[error("Tokens for this allocation have already been claimed.")]
    AlreadyClaimed,

    #[error("Invalid merkle proof provided.")]
    InvalidProof,

    #[error("The underlying asset transfer failed.")]
    TransferFailed,

    #[error("Unauthorized: caller is not the distribution owner.")]
    Unauthorized,
}
