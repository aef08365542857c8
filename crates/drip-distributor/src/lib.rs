/*!
# Drip Distributor

The claim ledger and fund custody state machine for a single Drip
distribution: one token, one merkle root, one owner, all fixed at
construction.

This crate models the on-chain half of the protocol as a plain state
machine. Where a chain runtime supplies ambient context, this API takes it
explicitly:

- **Caller identity** is an `Address` parameter on every operation; a claim
  is always self-targeted (no claiming on behalf of another recipient).
- **Token custody** sits behind the [`TokenLedger`] trait; native-currency
  sends behind [`NativeSink`]. Both can fail, and a failed transfer must
  leave the distributor's state untouched.
- **Atomicity** is explicit: the claimed flag is written before the token
  transfer (closing the reentrancy window a transfer hook would open) and
  rolled back if the transfer fails, so flag write and transfer behave as
  one atomic unit.

Operations run strictly serialized — everything takes `&self`/`&mut self`
and there are no suspension points, so no internal locking exists.
*/

pub mod distributor;
pub mod error;
pub mod testing;
pub mod token;

pub use distributor::MerkleDistributor;
pub use error::DistributorError;
pub use token::{NativeSink, TokenLedger, TransferError};
