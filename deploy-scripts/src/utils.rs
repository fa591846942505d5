//! Utilities for the deploy scripts: RPC client setup and the alloy-backed
//! contract factory.

use std::{str::FromStr, time::Duration};

use alloy::{
    network::{Ethereum, ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes, TxHash},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use async_trait::async_trait;
use tracing::debug;

use crate::{
    artifacts::ContractArtifact,
    constants::NUM_DEPLOY_CONFIRMATIONS,
    errors::ScriptError,
    factory::{ContractFactory, PendingDeployment},
};

/// The RPC client the deployment is signed and sent with
pub type Client = DynProvider<Ethereum>;

/// Sets up a client signing with the given private key against the given RPC url.
///
/// Nonce, gas, and chain ID are filled in by the provider when a transaction is sent.
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<Client, ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    debug!(deployer = %signer.address(), %url, "client initialized");
    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);
    Ok(DynProvider::new(provider))
}

/// Creates a contract from a compiled artifact by sending its creation
/// transaction through an RPC client
pub struct AlloyContractFactory {
    /// The client the creation transaction is sent with
    client: Client,
    /// The creation bytecode with constructor arguments appended
    deploy_code: Bytes,
    /// The number of blocks to wait for before the deployment counts as confirmed
    confirmations: u64,
    /// How long to wait for confirmation, if bounded
    timeout: Option<Duration>,
}

impl AlloyContractFactory {
    /// Create a factory for the given artifact and constructor arguments
    pub fn new(client: Client, artifact: &ContractArtifact, constructor_args: &[u8]) -> Self {
        Self {
            client,
            deploy_code: artifact.deploy_code(constructor_args),
            confirmations: NUM_DEPLOY_CONFIRMATIONS,
            timeout: None,
        }
    }

    /// Set the number of confirmations to wait for
    pub fn with_required_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations;
        self
    }

    /// Bound the confirmation wait, `None` waits indefinitely
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ContractFactory for AlloyContractFactory {
    type Pending = AlloyPendingDeployment;
    type Error = ScriptError;

    async fn submit(&self) -> Result<AlloyPendingDeployment, ScriptError> {
        let tx = TransactionRequest::default().with_deploy_code(self.deploy_code.clone());
        let pending = self.client.send_transaction(tx).await.map_err(ScriptError::Submission)?;

        Ok(AlloyPendingDeployment {
            inner: pending
                .with_required_confirmations(self.confirmations)
                .with_timeout(self.timeout),
        })
    }
}

/// A creation transaction sent through an [`AlloyContractFactory`]
pub struct AlloyPendingDeployment {
    /// The watcher for the transaction's receipt
    inner: PendingTransactionBuilder<Ethereum>,
}

#[async_trait]
impl PendingDeployment for AlloyPendingDeployment {
    type Error = ScriptError;

    fn tx_hash(&self) -> TxHash {
        *self.inner.tx_hash()
    }

    async fn confirm(self) -> Result<Address, ScriptError> {
        let tx_hash = self.tx_hash();
        let receipt = self.inner.get_receipt().await.map_err(ScriptError::Confirmation)?;
        if !receipt.status() {
            return Err(ScriptError::Reverted(tx_hash));
        }

        receipt.contract_address().ok_or(ScriptError::MissingContractAddress(tx_hash))
    }
}
