//! Parsing of the Hardhat compilation artifacts consumed during deployment

use std::{
    fs,
    path::{Path, PathBuf},
};

use ethers::{abi::Contract, types::Bytes};
use serde::Deserialize;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError, types::EchoContract};

/// A Hardhat compilation artifact, reduced to the fields
/// needed to deploy the compiled contract
#[derive(Deserialize)]
pub struct ContractArtifact {
    /// The name of the compiled contract
    #[serde(rename = "contractName")]
    pub contract_name: String,
    /// The contract ABI
    pub abi: Contract,
    /// The contract creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }

    /// Read the artifact for the given contract from the artifacts directory
    pub fn read(artifacts_dir: &str, contract: EchoContract) -> Result<Self, ScriptError> {
        Self::read_named(artifacts_dir, &contract.to_string())
    }

    /// Read an artifact by contract name from the artifacts directory.
    ///
    /// The artifact must be for the requested contract; a mislabeled
    /// artifact is rejected rather than deployed.
    pub fn read_named(artifacts_dir: &str, contract_name: &str) -> Result<Self, ScriptError> {
        let path = artifact_path(artifacts_dir, contract_name);
        let contents = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ReadFile(format!("{}: {}", path.display(), e)))?;

        let artifact = Self::from_json(&contents)?;
        if artifact.contract_name != contract_name {
            return Err(ScriptError::ArtifactParsing(format!(
                "artifact at {} is for contract {}, expected {}",
                path.display(),
                artifact.contract_name,
                contract_name,
            )));
        }

        Ok(artifact)
    }
}

/// Construct the path of the artifact for the given contract name
fn artifact_path(artifacts_dir: &str, contract_name: &str) -> PathBuf {
    Path::new(artifacts_dir)
        .join(contract_name)
        .with_extension(ARTIFACT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal Hardhat artifact for a contract with a two-address constructor
    const TEST_ARTIFACT: &str = r#"{
        "contractName": "VotingEscrow",
        "abi": [
            {
                "inputs": [
                    { "internalType": "address", "name": "token_addr", "type": "address" },
                    { "internalType": "address", "name": "art_proxy", "type": "address" }
                ],
                "stateMutability": "nonpayable",
                "type": "constructor"
            }
        ],
        "bytecode": "0x608060405234801561001057600080fd5b50"
    }"#;

    #[test]
    fn test_parse_artifact() {
        let artifact = ContractArtifact::from_json(TEST_ARTIFACT).unwrap();

        assert_eq!(artifact.contract_name, "VotingEscrow");
        assert_eq!(artifact.bytecode.len(), 18);

        let constructor = artifact.abi.constructor().unwrap();
        assert_eq!(constructor.inputs.len(), 2);
    }

    #[test]
    fn test_parse_artifact_missing_bytecode() {
        let res = ContractArtifact::from_json(r#"{"contractName": "Echo", "abi": []}"#);
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));
    }

    #[test]
    fn test_artifact_path() {
        let path = artifact_path("artifacts", &EchoContract::Echo.to_string());
        assert_eq!(path, PathBuf::from("artifacts/Echo.json"));
    }

    #[test]
    fn test_read_missing_artifact() {
        let res = ContractArtifact::read("nonexistent-dir", EchoContract::Echo);
        assert!(matches!(res, Err(ScriptError::ReadFile(_))));
    }

    #[test]
    fn test_read_mislabeled_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts_dir = dir.path().to_str().unwrap();

        // The artifact contents name `VotingEscrow`, the file names `Echo`
        fs::write(dir.path().join("Echo.json"), TEST_ARTIFACT).unwrap();

        let res = ContractArtifact::read(artifacts_dir, EchoContract::Echo);
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));

        fs::write(dir.path().join("VotingEscrow.json"), TEST_ARTIFACT).unwrap();

        let artifact = ContractArtifact::read(artifacts_dir, EchoContract::VotingEscrow).unwrap();
        assert_eq!(artifact.contract_name, "VotingEscrow");
    }
}
