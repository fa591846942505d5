//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use alloy::primitives::Address;

/// The outcome of a single deployment.
///
/// Either the confirmed contract address, or the failure cause exactly as the
/// factory raised it.
pub type DeploymentResult<E> = Result<Address, E>;

/// The stages a deployment moves through.
///
/// A deployment starts `Idle` and ends in exactly one of `Confirmed` or
/// `Failed`; it never returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentStage {
    /// Nothing has been sent to the network yet
    Idle,
    /// The creation transaction is being sent to the network
    Submitting,
    /// The network accepted the transaction, which is not yet confirmed
    AwaitingConfirmation,
    /// The contract exists at its final address
    Confirmed,
    /// Submission or confirmation failed
    Failed,
}

impl DeploymentStage {
    /// Whether no further transitions can follow this stage
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeploymentStage::Confirmed | DeploymentStage::Failed)
    }

    /// Whether a deployment in this stage may move to `next`
    pub fn can_transition_to(&self, next: DeploymentStage) -> bool {
        use DeploymentStage::*;

        matches!(
            (self, next),
            (Idle, Submitting)
                | (Submitting, AwaitingConfirmation)
                | (Submitting, Failed)
                | (AwaitingConfirmation, Confirmed)
                | (AwaitingConfirmation, Failed)
        )
    }
}

impl Display for DeploymentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentStage::Idle => write!(f, "idle"),
            DeploymentStage::Submitting => write!(f, "submitting"),
            DeploymentStage::AwaitingConfirmation => write!(f, "awaiting-confirmation"),
            DeploymentStage::Confirmed => write!(f, "confirmed"),
            DeploymentStage::Failed => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeploymentStage::{self, *};

    const ALL_STAGES: [DeploymentStage; 5] =
        [Idle, Submitting, AwaitingConfirmation, Confirmed, Failed];

    #[test]
    fn test_terminal_stages_have_no_successor() {
        for stage in ALL_STAGES.iter().filter(|s| s.is_terminal()) {
            assert!(ALL_STAGES.iter().all(|next| !stage.can_transition_to(*next)));
        }
    }

    #[test]
    fn test_no_transition_back_to_idle() {
        assert!(ALL_STAGES.iter().all(|stage| !stage.can_transition_to(Idle)));
    }

    #[test]
    fn test_submission_precedes_confirmation() {
        assert!(!Idle.can_transition_to(AwaitingConfirmation));
        assert!(!Idle.can_transition_to(Confirmed));
        assert!(!Submitting.can_transition_to(Confirmed));
        assert!(Submitting.can_transition_to(AwaitingConfirmation));
        assert!(AwaitingConfirmation.can_transition_to(Confirmed));
    }
}
