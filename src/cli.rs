//! Definitions of CLI arguments and commands for deploy scripts

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::{deploy_echo, deploy_echo_holders, deploy_upgradeable, upgrade},
    constants::{
        ECHO_HOLDERS_MAX_SUPPLY, ECHO_HOLDERS_MINT_PRICE_WEI, ECHO_HOLDERS_SALE_START,
        ECHO_TOKEN_ADDRESS,
    },
    errors::ScriptError,
};

/// Scripts for deploying and initializing the Echo protocol contracts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "PRIV_KEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Directory containing the Hardhat compilation artifacts
    #[arg(short, long, default_value = "artifacts")]
    pub artifacts_dir: String,

    /// Path to the deployments file
    #[arg(short, long, default_value = "deployments.json")]
    pub deployments_path: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy script to run
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the core Echo contracts: Echo, VeArtProxy,
    /// VotingEscrow, & RewardsDistributor
    DeployEcho,
    /// Deploy the EchoHolders NFT sale contract
    DeployEchoHolders(DeployEchoHoldersArgs),
    /// Deploy the upgradeable VeArtProxy behind a transparent upgradeable
    /// proxy, then VotingEscrow & RewardsDistributor bound to it
    DeployUpgradeable(DeployUpgradeableArgs),
    /// Upgrade a proxy to a new implementation
    Upgrade(UpgradeArgs),
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        client: Arc<impl Middleware>,
        artifacts_dir: &str,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployEcho => deploy_echo(client, artifacts_dir, deployments_path).await,
            Command::DeployEchoHolders(args) => {
                deploy_echo_holders(args, client, artifacts_dir, deployments_path).await
            }
            Command::DeployUpgradeable(args) => {
                deploy_upgradeable(args, client, artifacts_dir, deployments_path).await
            }
            Command::Upgrade(args) => upgrade(args, client).await,
        }
    }
}

/// Deploy the EchoHolders NFT sale contract
#[derive(Args)]
pub struct DeployEchoHoldersArgs {
    /// Maximum supply of the collection
    #[arg(short, long, default_value_t = ECHO_HOLDERS_MAX_SUPPLY)]
    pub max_supply: u64,

    /// Mint price, in wei
    #[arg(short = 'p', long, default_value = ECHO_HOLDERS_MINT_PRICE_WEI)]
    pub mint_price: String,

    /// Sale start, as a unix timestamp
    #[arg(short, long, default_value_t = ECHO_HOLDERS_SALE_START)]
    pub sale_start: u64,
}

/// Deploy the upgradeable VeArtProxy contract set.
///
/// Concretely, the implementation is installed behind a
/// [`TransparentUpgradeableProxy`](https://docs.openzeppelin.com/contracts/5.x/api/proxy#transparent_proxy),
/// which itself deploys a `ProxyAdmin` contract.
///
/// Calls made directly to the proxy are forwarded to the implementation
/// contract. Upgrade calls can only be made through the `ProxyAdmin`.
#[derive(Args)]
pub struct DeployUpgradeableArgs {
    /// Address of the already-deployed Echo token to bind the
    /// voting escrow to, in hex
    #[arg(short, long, default_value = ECHO_TOKEN_ADDRESS)]
    pub echo_token: String,

    /// Address of the owner of the proxy admin contract, in hex.
    ///
    /// Defaults to the deployer
    #[arg(short, long)]
    pub owner: Option<String>,
}

/// Upgrade a proxy's implementation
#[derive(Args)]
pub struct UpgradeArgs {
    /// Address of the proxy admin contract
    #[arg(long)]
    pub proxy_admin: String,

    /// Address of the proxy contract
    #[arg(long)]
    pub proxy: String,

    /// Address of the new implementation contract
    #[arg(short, long)]
    pub implementation: String,

    /// Optional calldata, in hex form, with which to
    /// call the implementation contract when upgrading
    #[arg(short, long)]
    pub calldata: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};
    use crate::constants::{
        ECHO_HOLDERS_MAX_SUPPLY, ECHO_HOLDERS_MINT_PRICE_WEI, ECHO_HOLDERS_SALE_START,
        ECHO_TOKEN_ADDRESS,
    };

    /// A private key / RPC URL argument prefix shared by the parsing tests
    const BASE_ARGS: [&str; 5] = [
        "echo-scripts",
        "--priv-key",
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        "--rpc-url",
        "http://localhost:8545",
    ];

    #[test]
    fn test_parse_deploy_echo() {
        let cli = Cli::parse_from(BASE_ARGS.iter().copied().chain(["deploy-echo"]));

        assert_eq!(cli.artifacts_dir, "artifacts");
        assert_eq!(cli.deployments_path, "deployments.json");
        assert!(matches!(cli.command, Command::DeployEcho));
    }

    #[test]
    fn test_echo_holders_defaults() {
        let cli = Cli::parse_from(BASE_ARGS.iter().copied().chain(["deploy-echo-holders"]));

        let Command::DeployEchoHolders(args) = cli.command else {
            panic!("expected deploy-echo-holders");
        };
        assert_eq!(args.max_supply, ECHO_HOLDERS_MAX_SUPPLY);
        assert_eq!(args.mint_price, ECHO_HOLDERS_MINT_PRICE_WEI);
        assert_eq!(args.sale_start, ECHO_HOLDERS_SALE_START);
    }

    #[test]
    fn test_upgradeable_defaults() {
        let cli = Cli::parse_from(BASE_ARGS.iter().copied().chain(["deploy-upgradeable"]));

        let Command::DeployUpgradeable(args) = cli.command else {
            panic!("expected deploy-upgradeable");
        };
        assert_eq!(args.echo_token, ECHO_TOKEN_ADDRESS);
        assert!(args.owner.is_none());
    }

    #[test]
    fn test_upgrade_requires_addresses() {
        let res = Cli::try_parse_from(BASE_ARGS.iter().copied().chain(["upgrade"]));
        assert!(res.is_err());

        let cli = Cli::parse_from(BASE_ARGS.iter().copied().chain([
            "upgrade",
            "--proxy-admin",
            "0x0000000000000000000000000000000000000001",
            "--proxy",
            "0x0000000000000000000000000000000000000002",
            "--implementation",
            "0x0000000000000000000000000000000000000003",
        ]));

        let Command::Upgrade(args) = cli.command else {
            panic!("expected upgrade");
        };
        assert!(args.calldata.is_none());
    }
}
