//! Lookup of compiled contract artifacts by contract name.
//!
//! Artifacts are expected in the layout Hardhat produces, i.e.
//! `<artifacts dir>/contracts/<Name>.sol/<Name>.json`, though any nesting
//! below the artifacts directory is accepted.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;
use tracing::debug;

use crate::{
    constants::{ARTIFACT_EXTENSION, BUILD_INFO_DIR},
    errors::ScriptError,
};

/// A compiled contract: everything needed to build its creation transaction
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The name of the contract, as declared in its source
    pub contract_name: String,
    /// The contract's ABI
    pub abi: JsonAbi,
    /// The contract's creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Find and parse the artifact of the named contract under `artifacts_dir`
    pub fn lookup(artifacts_dir: &Path, contract_name: &str) -> Result<Self, ScriptError> {
        let path = find_artifact_file(artifacts_dir, contract_name)?;
        debug!(path = %path.display(), "found {contract_name} artifact");

        let contents =
            fs::read_to_string(&path).map_err(|e| ScriptError::ArtifactLookup(e.to_string()))?;
        let artifact: ContractArtifact = serde_json::from_str(&contents)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

        // Abstract contracts and interfaces compile to an empty bytecode
        if artifact.bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} has no bytecode, it cannot be deployed",
                artifact.contract_name
            )));
        }

        Ok(artifact)
    }

    /// The payload of the creation transaction: the creation bytecode followed
    /// by the ABI-encoded constructor arguments
    pub fn deploy_code(&self, constructor_args: &[u8]) -> Bytes {
        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(constructor_args);
        code.into()
    }
}

/// Walk the artifact tree for the single file named `<contract_name>.json`
fn find_artifact_file(artifacts_dir: &Path, contract_name: &str) -> Result<PathBuf, ScriptError> {
    if !artifacts_dir.is_dir() {
        return Err(ScriptError::ArtifactLookup(format!(
            "artifacts directory {} does not exist",
            artifacts_dir.display()
        )));
    }

    let file_name = format!("{contract_name}.{ARTIFACT_EXTENSION}");
    let mut matches = Vec::new();
    let mut to_visit = vec![artifacts_dir.to_path_buf()];
    while let Some(dir) = to_visit.pop() {
        let entries = fs::read_dir(&dir).map_err(|e| ScriptError::ArtifactLookup(e.to_string()))?;
        for entry in entries {
            let path = entry.map_err(|e| ScriptError::ArtifactLookup(e.to_string()))?.path();
            if path.is_dir() {
                if !path.ends_with(BUILD_INFO_DIR) {
                    to_visit.push(path);
                }
            } else if path.file_name().is_some_and(|name| name == file_name.as_str()) {
                matches.push(path);
            }
        }
    }

    match matches.len() {
        0 => Err(ScriptError::ArtifactLookup(format!(
            "no artifact for {} under {}",
            contract_name,
            artifacts_dir.display()
        ))),
        1 => Ok(matches.remove(0)),
        _ => Err(ScriptError::ArtifactLookup(format!(
            "{} is ambiguous, found artifacts at {:?}",
            contract_name, matches
        ))),
    }
}
