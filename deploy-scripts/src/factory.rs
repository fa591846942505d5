//! The capability a deployment is driven through: submitting a contract
//! creation transaction, then tracking it until the network confirms it.
//!
//! Submission and confirmation are separate suspension points. A node accepting
//! the transaction into its pending pool says nothing about whether it will be
//! included, so the pending handle is the only way to learn the contract address.

use std::error::Error;

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;

/// A handle able to submit the creation transaction for one contract
#[async_trait]
pub trait ContractFactory: Send + Sync {
    /// The handle tracking a submitted creation transaction
    type Pending: PendingDeployment<Error = Self::Error>;
    /// The error raised by the network layer on submission or confirmation
    type Error: Error + Send + Sync + 'static;

    /// Submit a new creation transaction, resolving once the network has
    /// accepted it into its pending state.
    ///
    /// Every call submits an independent transaction.
    async fn submit(&self) -> Result<Self::Pending, Self::Error>;
}

/// A creation transaction accepted by the network but not yet confirmed
#[async_trait]
pub trait PendingDeployment: Send {
    /// The error raised while waiting on confirmation
    type Error: Error + Send + Sync + 'static;

    /// The hash of the creation transaction
    fn tx_hash(&self) -> TxHash;

    /// Wait until the transaction is confirmed, returning the address the
    /// network assigned to the new contract
    async fn confirm(self) -> Result<Address, Self::Error>;
}
