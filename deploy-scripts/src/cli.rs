//! Definitions of CLI arguments for the deploy script

use std::{path::PathBuf, time::Duration};

use alloy::primitives::Bytes;
use clap::Parser;

use crate::constants::{
    DEFAULT_ARTIFACTS_DIR, DEFAULT_CONTRACT_NAME, DEFAULT_RPC_URL, NUM_DEPLOY_CONFIRMATIONS,
};

/// Deploy a compiled contract to an EVM chain.
///
/// Exits with status 0 once the deployment is confirmed, non-zero otherwise.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(long = "pkey", env = "PKEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Name of the contract to deploy, as declared in its source
    #[arg(short, long, env = "CONTRACT_NAME", default_value = DEFAULT_CONTRACT_NAME)]
    pub contract: String,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// ABI-encoded constructor arguments in hex
    #[arg(long)]
    pub constructor_args: Option<Bytes>,

    /// Number of blocks to wait for before the deployment counts as confirmed
    #[arg(long, default_value_t = NUM_DEPLOY_CONFIRMATIONS)]
    pub confirmations: u64,

    /// Give up waiting for confirmation after this many seconds.
    /// Waits indefinitely if unset
    #[arg(long)]
    pub confirmation_timeout_secs: Option<u64>,
}

impl Cli {
    /// The bound on the confirmation wait, if any
    pub fn confirmation_timeout(&self) -> Option<Duration> {
        self.confirmation_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["deploy-scripts", "--pkey", "0x01"]).unwrap();

        assert_eq!(cli.contract, DEFAULT_CONTRACT_NAME);
        assert_eq!(cli.artifacts_dir, Path::new(DEFAULT_ARTIFACTS_DIR));
        assert_eq!(cli.confirmations, NUM_DEPLOY_CONFIRMATIONS);
        assert!(cli.constructor_args.is_none());
        assert_eq!(cli.confirmation_timeout(), None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "deploy-scripts",
            "--pkey",
            "0x01",
            "--contract",
            "Token",
            "--constructor-args",
            "0x000000000000000000000000000000000000000000000000000000000000002a",
            "--confirmations",
            "3",
            "--confirmation-timeout-secs",
            "120",
        ])
        .unwrap();

        assert_eq!(cli.contract, "Token");
        assert_eq!(cli.constructor_args.as_ref().unwrap().last(), Some(&0x2a));
        assert_eq!(cli.confirmations, 3);
        assert_eq!(cli.confirmation_timeout(), Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_bad_constructor_args() {
        let res = Cli::try_parse_from([
            "deploy-scripts",
            "--pkey",
            "0x01",
            "--constructor-args",
            "0xzz",
        ]);
        assert!(res.is_err());
    }
}
