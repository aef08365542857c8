use std::collections::HashSet;

use alloy_primitives::{Address, B256, U256};
use tracing::info;

use drip_merkle::{leaf_hash, verify_proof};

use crate::error::DistributorError;
use crate::token::{NativeSink, TokenLedger};

/// One deployed distribution: token, root and owner fixed at construction.
///
/// The claimed set is the only mutable state. The root and token are never
/// updatable — a new distribution means a new `MerkleDistributor` instance,
/// exactly as it would mean a new contract deployment.
pub struct MerkleDistributor {
    token: Address,
    root: B256,
    owner: Address,
    /// The distributor's own custody address within token ledgers.
    address: Address,
    /// Recipients whose one-time claim has completed. Absence means
    /// unclaimed; insertion is irrevocable (no reversal operation exists).
    claimed: HashSet<Address>,
    /// Unsolicited native value accepted via [`Self::receive`].
    native_balance: U256,
}

impl MerkleDistributor {
    pub fn new(token: Address, root: B256, owner: Address, address: Address) -> Self {
        Self {
            token,
            root,
            owner,
            address,
            claimed: HashSet::new(),
            native_balance: U256::ZERO,
        }
    }

    pub fn token(&self) -> Address {
        self.token
    }

    pub fn root(&self) -> B256 {
        self.root
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn native_balance(&self) -> U256 {
        self.native_balance
    }

    pub fn is_claimed(&self, recipient: Address) -> bool {
        self.claimed.contains(&recipient)
    }

    /// Claim the caller's allocation. Always self-targeted: the leaf is
    /// derived from the caller's own address, so a proof for someone else's
    /// allocation can never authorize a transfer to the caller.
    ///
    /// Fails with `AlreadyClaimed` if the caller's flag is set,
    /// `InvalidProof` if the proof does not resolve to the stored root
    /// (which includes claiming a wrong amount — the amount is part of the
    /// leaf), and `TransferFailed` if the token ledger rejects the payout.
    /// On any failure the claimed flag is left clear.
    pub fn claim(
        &mut self,
        caller: Address,
        amount: U256,
        proof: &[B256],
        token: &mut impl TokenLedger,
    ) -> Result<(), DistributorError> {
        // 1. Exactly-once: a set flag is terminal.
        if self.claimed.contains(&caller) {
            return Err(DistributorError::AlreadyClaimed);
        }

        // 2. Construct the leaf from the call data and verify membership.
        let leaf = leaf_hash(caller, amount);
        if !verify_proof(self.root, leaf, proof) {
            return Err(DistributorError::InvalidProof);
        }

        // 3. Record the claim before moving funds, so a transfer hook that
        //    re-enters sees the flag already set.
        self.claimed.insert(caller);

        // 4. Pay out. Flag write and transfer are one atomic unit: a failed
        //    transfer rolls the flag back so the recipient can claim again
        //    once custody is funded.
        if token.transfer(self.address, caller, amount).is_err() {
            self.claimed.remove(&caller);
            return Err(DistributorError::TransferFailed);
        }

        info!(recipient = %caller, amount = %amount, "claimed");
        Ok(())
    }

    /// Owner-only sweep of `amount` of any token (including the distributed
    /// one) out of custody. An operational safety valve, not part of the
    /// claim protocol.
    pub fn rescue_tokens(
        &self,
        caller: Address,
        token: &mut impl TokenLedger,
        to: Address,
        amount: U256,
    ) -> Result<(), DistributorError> {
        self.require_owner(caller)?;

        token
            .transfer(self.address, to, amount)
            .map_err(|_| DistributorError::TransferFailed)?;

        info!(to = %to, amount = %amount, "tokens rescued");
        Ok(())
    }

    /// Owner-only sweep of the entire native balance to `to`. A rejected
    /// send leaves the balance intact.
    pub fn rescue_native(
        &mut self,
        caller: Address,
        to: Address,
        sink: &mut impl NativeSink,
    ) -> Result<(), DistributorError> {
        self.require_owner(caller)?;

        let amount = self.native_balance;
        sink.send(to, amount)
            .map_err(|_| DistributorError::TransferFailed)?;
        self.native_balance = U256::ZERO;

        info!(to = %to, amount = %amount, "native balance rescued");
        Ok(())
    }

    /// Accept unsolicited native value. No payload, no conditions; the
    /// accumulated balance is only ever released through
    /// [`Self::rescue_native`].
    pub fn receive(&mut self, amount: U256) {
        self.native_balance += amount;
    }

    fn require_owner(&self, caller: Address) -> Result<(), DistributorError> {
        if caller != self.owner {
            return Err(DistributorError::Unauthorized);
        }
        Ok(())
    }
}
