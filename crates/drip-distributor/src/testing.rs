//! In-memory collaborators for exercising the distributor without a chain.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::token::{NativeSink, TokenLedger, TransferError};

/// A fungible token as a plain balance map. Transfers are atomic: a failed
/// transfer leaves every balance unchanged.
#[derive(Debug, Default)]
pub struct InMemoryToken {
    balances: HashMap<Address, U256>,
}

impl InMemoryToken {
    /// Credit `amount` to `holder` out of thin air. Test setup only.
    pub fn mint(&mut self, holder: Address, amount: U256) {
        *self.balances.entry(holder).or_insert(U256::ZERO) += amount;
    }
}

impl TokenLedger for InMemoryToken {
    fn balance_of(&self, holder: Address) -> U256 {
        self.balances.get(&holder).copied().unwrap_or(U256::ZERO)
    }

    fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TransferError> {
        let have = self.balance_of(from);
        if have < amount {
            return Err(TransferError::InsufficientBalance { have, need: amount });
        }
        self.balances.insert(from, have - amount);
        *self.balances.entry(to).or_insert(U256::ZERO) += amount;
        Ok(())
    }
}

/// A native-currency sink that accepts every send and records it.
#[derive(Debug, Default)]
pub struct AcceptingSink {
    pub sends: Vec<(Address, U256)>,
}

impl NativeSink for AcceptingSink {
    fn send(&mut self, to: Address, amount: U256) -> Result<(), TransferError> {
        self.sends.push((to, amount));
        Ok(())
    }
}

/// A native-currency sink that rejects every send, standing in for a
/// recipient whose receive hook reverts.
#[derive(Debug, Default)]
pub struct RejectingSink;

impl NativeSink for RejectingSink {
    fn send(&mut self, _to: Address, _amount: U256) -> Result<(), TransferError> {
        Err(TransferError::Rejected)
    }
}
