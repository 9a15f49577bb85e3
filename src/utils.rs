//! Utilities for the deploy scripts.

use std::{
    fs::{self, File},
    io::Read,
    path::PathBuf,
    str::FromStr,
    sync::Arc,
};

use ethers::{
    abi::{Address, Tokenize},
    contract::ContractFactory,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use json::JsonValue;
use tracing::info;

use crate::{
    artifacts::ContractArtifact,
    constants::{
        DEPLOYMENTS_KEY, ECHO_CONTRACT_KEY, ECHO_HOLDERS_CONTRACT_KEY, NUM_DEPLOY_CONFIRMATIONS,
        REWARDS_DISTRIBUTOR_CONTRACT_KEY, VE_ART_PROXY_CONTRACT_KEY,
        VE_ART_PROXY_IMPL_CONTRACT_KEY, VOTING_ESCROW_CONTRACT_KEY,
    },
    errors::ScriptError,
    types::EchoContract,
};

/// Sets up the client with which to submit deployment transactions,
/// attaching a signer derived from the given private key
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<Arc<impl Middleware>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();
    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.clone().with_chain_id(chain_id),
    ));

    Ok(client)
}

/// Logs the deployer address and its current balance, returning the address
pub async fn report_deployer<M: Middleware>(client: &Arc<M>) -> Result<Address, ScriptError> {
    let deployer = client
        .default_sender()
        .ok_or(ScriptError::ClientInitialization(
            "client does not have sender attached".to_string(),
        ))?;
    let balance = client
        .get_balance(deployer, None /* block */)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    info!("Deploying with account {:#x} (balance: {} wei)", deployer, balance);

    Ok(deployer)
}

/// Deploys the given contract from its compilation artifact, awaiting
/// confirmation, then records the deployed address in the deployments file
pub async fn deploy_contract<T: Tokenize, M: Middleware>(
    contract: EchoContract,
    constructor_args: T,
    artifacts_dir: &str,
    client: Arc<M>,
    deployments_path: &str,
) -> Result<Address, ScriptError> {
    let artifact = ContractArtifact::read(artifacts_dir, contract)?;
    let address = deploy_from_artifact(&artifact, constructor_args, client).await?;

    println!("{} deployed at {:#x}", contract, address);

    write_deployed_address(deployments_path, get_contract_key(contract), address)?;

    Ok(address)
}

/// Deploys a contract from a parsed compilation artifact,
/// returning the deployed address
pub async fn deploy_from_artifact<T: Tokenize, M: Middleware>(
    artifact: &ContractArtifact,
    constructor_args: T,
    client: Arc<M>,
) -> Result<Address, ScriptError> {
    let factory = ContractFactory::new(artifact.abi.clone(), artifact.bytecode.clone(), client);

    let contract = factory
        .deploy(constructor_args)
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    Ok(contract.address())
}

/// Parse JSON from the file at the given path
pub fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::ReadFile(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ReadFile(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadFile(e.to_string()))
}

/// Read the address deployed under the given key from the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadFile(
                    "could not parse contract address from deployments file".to_string(),
                )
            })?,
    )
    .map_err(|e| ScriptError::ReadFile(e.to_string()))
}

/// Record the given deployed address under the given key in the
/// deployments file, creating the file if it does not yet exist
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteFile(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteFile(e.to_string()))?;

    Ok(())
}

/// Maps a contract to its key in the deployments file
pub fn get_contract_key(contract: EchoContract) -> &'static str {
    match contract {
        EchoContract::Echo => ECHO_CONTRACT_KEY,
        EchoContract::VeArtProxy => VE_ART_PROXY_CONTRACT_KEY,
        EchoContract::VeArtProxyUpgradeable => VE_ART_PROXY_IMPL_CONTRACT_KEY,
        EchoContract::VotingEscrow => VOTING_ESCROW_CONTRACT_KEY,
        EchoContract::RewardsDistributor => REWARDS_DISTRIBUTOR_CONTRACT_KEY,
        EchoContract::EchoHolders => ECHO_HOLDERS_CONTRACT_KEY,
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;
    use ethers::abi::Address;
    use tempfile::tempdir;

    use crate::constants::{ECHO_CONTRACT_KEY, VOTING_ESCROW_CONTRACT_KEY};
    use crate::types::EchoContract;

    use super::{get_contract_key, parse_addr_from_deployments_file, write_deployed_address};

    #[test]
    fn test_deployments_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        let echo_addr = Address::from_low_u64_be(0x11);
        let escrow_addr = Address::from_low_u64_be(0x22);

        write_deployed_address(path, ECHO_CONTRACT_KEY, echo_addr).unwrap();
        write_deployed_address(path, VOTING_ESCROW_CONTRACT_KEY, escrow_addr).unwrap();

        // Writing the second key must not clobber the first
        assert_eq!(
            parse_addr_from_deployments_file(path, ECHO_CONTRACT_KEY).unwrap(),
            echo_addr,
        );
        assert_eq!(
            parse_addr_from_deployments_file(path, VOTING_ESCROW_CONTRACT_KEY).unwrap(),
            escrow_addr,
        );
    }

    #[test]
    fn test_missing_deployments_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        write_deployed_address(path, ECHO_CONTRACT_KEY, Address::from_low_u64_be(0x11)).unwrap();

        assert!(parse_addr_from_deployments_file(path, VOTING_ESCROW_CONTRACT_KEY).is_err());
    }

    #[test]
    fn test_contract_keys_distinct() {
        let keys: Vec<_> = EchoContract::value_variants()
            .iter()
            .map(|c| get_contract_key(*c))
            .collect();

        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key));
        }
    }
}
