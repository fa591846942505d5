//! Constants used in the deploy scripts

/// The RPC URL of a local Hardhat / Anvil devnet node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The contract deployed when no contract name is given
pub const DEFAULT_CONTRACT_NAME: &str = "EthGrowDAO";

/// The root of the compilation artifact tree, relative to the working directory
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The extension of a compilation artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// The directory in the artifact tree holding raw compiler build info.
///
/// Its files are keyed by build hash, not contract name, so lookup skips it.
pub const BUILD_INFO_DIR: &str = "build-info";

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The process exit status reported once the deployment is confirmed
pub const EXIT_SUCCESS: u8 = 0;

/// The process exit status reported on any lookup, submission, or confirmation failure
pub const EXIT_FAILURE: u8 = 1;
