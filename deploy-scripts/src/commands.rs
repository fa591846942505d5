//! Implementation of the deploy script

use tracing::info;

use crate::{
    artifacts::ContractArtifact,
    cli::Cli,
    deployer::deploy,
    errors::ScriptError,
    types::DeploymentResult,
    utils::{setup_client, AlloyContractFactory},
};

/// Look up the configured contract's artifact and deploy it.
///
/// A failed lookup returns before anything is sent to the network.
pub async fn deploy_contract(args: &Cli) -> DeploymentResult<ScriptError> {
    let artifact = ContractArtifact::lookup(&args.artifacts_dir, &args.contract)?;
    let client = setup_client(&args.priv_key, &args.rpc_url)?;

    info!(contract = %artifact.contract_name, rpc_url = %args.rpc_url, "deploying contract");
    let constructor_args = args.constructor_args.clone().unwrap_or_default();
    let factory = AlloyContractFactory::new(client, &artifact, &constructor_args)
        .with_required_confirmations(args.confirmations)
        .with_timeout(args.confirmation_timeout());

    deploy(factory).await
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_lookup_failure_skips_network() {
        let artifacts = TempDir::new().unwrap();
        let artifacts_dir = artifacts.path().to_str().unwrap();
        // Nothing listens on this port, any request sent would fail as a submission error
        let args = Cli::try_parse_from([
            "deploy-scripts",
            "--pkey",
            "0x01",
            "--rpc-url",
            "http://127.0.0.1:1",
            "--artifacts-dir",
            artifacts_dir,
        ])
        .unwrap();

        let err = deploy_contract(&args).await.unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactLookup(_)));
    }
}
