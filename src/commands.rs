//! Implementations of the various deploy scripts

use std::{str::FromStr, sync::Arc};

use alloy_sol_types::SolCall;
use ethers::{
    abi::Address,
    providers::Middleware,
    types::{Bytes, H256, U256},
};
use tracing::info;

use crate::{
    artifacts::ContractArtifact,
    cli::{DeployEchoHoldersArgs, DeployUpgradeableArgs, UpgradeArgs},
    constants::{
        NUM_BYTES_ADDRESS, NUM_BYTES_STORAGE_SLOT, PROXY_ADMIN_STORAGE_SLOT, PROXY_ARTIFACT_NAME,
        VE_ART_PROXY_ADMIN_CONTRACT_KEY, VE_ART_PROXY_CONTRACT_KEY,
    },
    errors::ScriptError,
    solidity::{initializeCall, ProxyAdminContract},
    types::EchoContract,
    utils::{deploy_contract, deploy_from_artifact, report_deployer, write_deployed_address},
};

/// Deploy the core Echo contract set: the Echo token, the veNFT art proxy,
/// the voting escrow, and the rewards distributor, in that order
pub async fn deploy_echo<M: Middleware>(
    client: Arc<M>,
    artifacts_dir: &str,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    report_deployer(&client).await?;
    info!("Deploying core Echo contracts");

    let echo = deploy_contract(
        EchoContract::Echo,
        (),
        artifacts_dir,
        client.clone(),
        deployments_path,
    )
    .await?;

    let ve_art_proxy = deploy_contract(
        EchoContract::VeArtProxy,
        (),
        artifacts_dir,
        client.clone(),
        deployments_path,
    )
    .await?;

    let voting_escrow = deploy_contract(
        EchoContract::VotingEscrow,
        (echo, ve_art_proxy),
        artifacts_dir,
        client.clone(),
        deployments_path,
    )
    .await?;

    deploy_contract(
        EchoContract::RewardsDistributor,
        voting_escrow,
        artifacts_dir,
        client,
        deployments_path,
    )
    .await?;

    Ok(())
}

/// Deploy the EchoHolders NFT sale contract
pub async fn deploy_echo_holders<M: Middleware>(
    args: DeployEchoHoldersArgs,
    client: Arc<M>,
    artifacts_dir: &str,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    report_deployer(&client).await?;

    let mint_price = U256::from_dec_str(&args.mint_price)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

    deploy_contract(
        EchoContract::EchoHolders,
        (
            U256::from(args.max_supply),
            mint_price,
            U256::from(args.sale_start),
        ),
        artifacts_dir,
        client,
        deployments_path,
    )
    .await?;

    Ok(())
}

/// Deploy the upgradeable veNFT art proxy behind a transparent upgradeable
/// proxy, then the voting escrow and rewards distributor bound to it.
///
/// The escrow is constructed against an already-deployed Echo token rather
/// than a freshly deployed one.
pub async fn deploy_upgradeable<M: Middleware>(
    args: DeployUpgradeableArgs,
    client: Arc<M>,
    artifacts_dir: &str,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let deployer = report_deployer(&client).await?;
    info!("Deploying upgradeable Echo contracts");

    let implementation = deploy_contract(
        EchoContract::VeArtProxyUpgradeable,
        (),
        artifacts_dir,
        client.clone(),
        deployments_path,
    )
    .await?;

    // Install the implementation behind the proxy, initializing it via
    // `initialize()` in the same transaction
    let owner = match args.owner {
        Some(owner) => Address::from_str(&owner)
            .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?,
        None => deployer,
    };
    let init_calldata = Bytes::from(initializeCall {}.abi_encode());

    let proxy_artifact = ContractArtifact::read_named(artifacts_dir, PROXY_ARTIFACT_NAME)?;
    let proxy_address = deploy_from_artifact(
        &proxy_artifact,
        (implementation, owner, init_calldata),
        client.clone(),
    )
    .await?;

    // Get proxy admin contract address
    // This is the recommended way to get the proxy admin address:
    // https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/ERC1967/ERC1967Utils.sol#L104-L106
    let proxy_admin_address = Address::from_slice(
        &client
            .get_storage_at(
                proxy_address,
                // Can `unwrap` here since we know the storage slot constitutes a valid H256
                H256::from_str(PROXY_ADMIN_STORAGE_SLOT).unwrap(),
                None, /* block */
            )
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
            [NUM_BYTES_STORAGE_SLOT - NUM_BYTES_ADDRESS..NUM_BYTES_STORAGE_SLOT],
    );

    println!("VeArtProxy proxy deployed at {:#x}", proxy_address);
    println!("VeArtProxy proxy admin deployed at {:#x}", proxy_admin_address);

    write_deployed_address(deployments_path, VE_ART_PROXY_CONTRACT_KEY, proxy_address)?;
    write_deployed_address(
        deployments_path,
        VE_ART_PROXY_ADMIN_CONTRACT_KEY,
        proxy_admin_address,
    )?;

    // The escrow and distributor bind to the proxy, not the implementation
    let echo_token = Address::from_str(&args.echo_token)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

    let voting_escrow = deploy_contract(
        EchoContract::VotingEscrow,
        (echo_token, proxy_address),
        artifacts_dir,
        client.clone(),
        deployments_path,
    )
    .await?;

    deploy_contract(
        EchoContract::RewardsDistributor,
        voting_escrow,
        artifacts_dir,
        client,
        deployments_path,
    )
    .await?;

    Ok(())
}

/// Point an already-deployed proxy at a new implementation via its proxy admin
pub async fn upgrade<M: Middleware>(args: UpgradeArgs, client: Arc<M>) -> Result<(), ScriptError> {
    let proxy_admin_address = Address::from_str(&args.proxy_admin)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
    let proxy_admin = ProxyAdminContract::new(proxy_admin_address, client);

    let proxy_address = Address::from_str(&args.proxy)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
    let implementation_address = Address::from_str(&args.implementation)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

    let data = if let Some(calldata) = args.calldata {
        Bytes::from_str(&calldata).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?
    } else {
        Bytes::new()
    };

    proxy_admin
        .upgrade_and_call(proxy_address, implementation_address, data)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    println!("Proxy {:#x} upgraded to {:#x}", proxy_address, implementation_address);

    Ok(())
}
