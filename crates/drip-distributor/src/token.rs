use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Failure modes a transfer collaborator may report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: U256, need: U256 },

    #[error("transfer rejected by the receiving side")]
    Rejected,
}

/// Minimal fungible-token surface the distributor needs.
///
/// The distributor never owns token balances itself; it holds custody at its
/// own address inside whatever ledger implements this trait. A transfer that
/// fails must leave the ledger unchanged.
pub trait TokenLedger {
    fn balance_of(&self, holder: Address) -> U256;

    fn transfer(&mut self, from: Address, to: Address, amount: U256)
        -> Result<(), TransferError>;
}

/// Outbound native-currency transfers.
///
/// The receiving side may reject a send (the native analogue of a reverting
/// receive hook), which the distributor surfaces as a transfer failure.
pub trait NativeSink {
    fn send(&mut self, to: Address, amount: U256) -> Result<(), TransferError>;
}
