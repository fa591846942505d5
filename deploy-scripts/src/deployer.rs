//! The deployment orchestrator, driving a single contract creation from
//! submission through confirmation

use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    factory::{ContractFactory, PendingDeployment},
    types::{DeploymentResult, DeploymentStage},
};

/// Runs exactly one deployment through a [`ContractFactory`].
///
/// The current [`DeploymentStage`] is published on a watch channel so callers
/// can observe the deployment between submission and confirmation.
pub struct Deployer<F> {
    /// The factory the creation transaction is submitted through
    factory: F,
    /// The publishing side of the stage channel
    stage: watch::Sender<DeploymentStage>,
}

impl<F: ContractFactory> Deployer<F> {
    /// Create an idle deployer around the given factory
    pub fn new(factory: F) -> Self {
        let (stage, _) = watch::channel(DeploymentStage::Idle);
        Self { factory, stage }
    }

    /// The stage the deployment is currently in
    pub fn stage(&self) -> DeploymentStage {
        *self.stage.borrow()
    }

    /// Subscribe to stage transitions.
    ///
    /// The receiver keeps the last published stage after the deployer is
    /// dropped, including when `run` is cancelled mid-flight.
    pub fn subscribe(&self) -> watch::Receiver<DeploymentStage> {
        self.stage.subscribe()
    }

    /// Submit the creation transaction and wait for its confirmation.
    ///
    /// Failures are returned exactly as the factory raised them. No timeout is
    /// applied here: if the factory never confirms, neither does this future.
    pub async fn run(self) -> DeploymentResult<F::Error> {
        self.transition(DeploymentStage::Submitting);
        let pending = match self.factory.submit().await {
            Ok(pending) => pending,
            Err(e) => {
                self.transition(DeploymentStage::Failed);
                return Err(e);
            }
        };

        info!(tx_hash = %pending.tx_hash(), "deployment transaction accepted");
        self.transition(DeploymentStage::AwaitingConfirmation);

        let res = pending.confirm().await;
        match &res {
            Ok(address) => {
                info!(%address, "deployment confirmed");
                self.transition(DeploymentStage::Confirmed);
            }
            Err(_) => self.transition(DeploymentStage::Failed),
        }

        res
    }

    /// Publish the next stage of the deployment
    fn transition(&self, next: DeploymentStage) {
        let prev = self.stage();
        debug_assert!(prev.can_transition_to(next), "illegal transition {prev} -> {next}");
        debug!(from = %prev, to = %next, "deployment stage transition");

        self.stage.send_replace(next);
    }
}

/// Deploy a single contract through the given factory
pub async fn deploy<F: ContractFactory>(factory: F) -> DeploymentResult<F::Error> {
    Deployer::new(factory).run().await
}
