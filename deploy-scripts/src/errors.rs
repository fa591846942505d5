//! Definitions of errors that can occur during deployment of a contract

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use alloy::{primitives::TxHash, providers::PendingTransactionError, transports::TransportError};

/// Errors raised by the artifact lookup and the network layer.
///
/// Errors originating in alloy are kept as-is rather than stringified, so the
/// operator sees the node's own rejection reason.
#[derive(Debug)]
pub enum ScriptError {
    /// No compilation artifact could be found for the requested contract
    ArtifactLookup(String),
    /// A compilation artifact was found but could not be used
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// The node rejected the contract creation transaction
    Submission(TransportError),
    /// The creation transaction was accepted but waiting on its receipt failed
    Confirmation(PendingTransactionError),
    /// The creation transaction was included but reverted
    Reverted(TxHash),
    /// The creation transaction's receipt carries no contract address
    MissingContractAddress(TxHash),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ArtifactLookup(s) => write!(f, "error looking up artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::Submission(e) => {
                write!(f, "error submitting deployment transaction: {}", e)
            }
            ScriptError::Confirmation(e) => {
                write!(f, "error confirming deployment transaction: {}", e)
            }
            ScriptError::Reverted(tx_hash) => {
                write!(f, "deployment transaction {} reverted", tx_hash)
            }
            ScriptError::MissingContractAddress(tx_hash) => write!(
                f,
                "receipt for deployment transaction {} has no contract address",
                tx_hash
            ),
        }
    }
}

impl Error for ScriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        // The wrapped error's message is already part of `Display`, so the
        // chain continues from its cause
        match self {
            ScriptError::Submission(e) => e.source(),
            ScriptError::Confirmation(e) => e.source(),
            _ => None,
        }
    }
}
