//! Constants used in the deploy scripts

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 0;

/// The storage slot containing the proxy admin contract address in the upgradeable proxy.
///
/// This is specified in EIP1967: https://eips.ethereum.org/EIPS/eip-1967#admin-address
pub const PROXY_ADMIN_STORAGE_SLOT: &str =
    "0xb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103";

/// The number of bytes stored in a single storage slot
pub const NUM_BYTES_STORAGE_SLOT: usize = 32;

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The file extension of a Hardhat compilation artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The name of the compilation artifact for the upgradeable proxy contract
///
/// This is the [`TransparentUpgradeableProxy`](https://docs.openzeppelin.com/contracts/5.x/api/proxy#transparent_proxy)
/// contract, which Hardhat's `upgrades.deployProxy` helper installs in front
/// of the implementation
pub const PROXY_ARTIFACT_NAME: &str = "TransparentUpgradeableProxy";

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The Echo token contract key in the `deployments.json` file
pub const ECHO_CONTRACT_KEY: &str = "echo_contract";

/// The veNFT art proxy contract key in the `deployments.json` file
pub const VE_ART_PROXY_CONTRACT_KEY: &str = "ve_art_proxy_contract";

/// The upgradeable veNFT art proxy implementation contract key in the
/// `deployments.json` file
pub const VE_ART_PROXY_IMPL_CONTRACT_KEY: &str = "ve_art_proxy_impl_contract";

/// The upgradeable veNFT art proxy's proxy admin contract key in the
/// `deployments.json` file
pub const VE_ART_PROXY_ADMIN_CONTRACT_KEY: &str = "ve_art_proxy_admin_contract";

/// The voting escrow contract key in the `deployments.json` file
pub const VOTING_ESCROW_CONTRACT_KEY: &str = "voting_escrow_contract";

/// The rewards distributor contract key in the `deployments.json` file
pub const REWARDS_DISTRIBUTOR_CONTRACT_KEY: &str = "rewards_distributor_contract";

/// The EchoHolders contract key in the `deployments.json` file
pub const ECHO_HOLDERS_CONTRACT_KEY: &str = "echo_holders_contract";

/// The canonical address of the already-deployed Echo token, used as the
/// default escrow token when deploying the upgradeable contract set
pub const ECHO_TOKEN_ADDRESS: &str = "0xF4C8E32EaDEC4BFe97E0F595AdD0f4450a863a11";

/// The default maximum supply of the EchoHolders collection
pub const ECHO_HOLDERS_MAX_SUPPLY: u64 = 3000;

/// The default EchoHolders mint price, in wei (2 ether)
pub const ECHO_HOLDERS_MINT_PRICE_WEI: &str = "2000000000000000000";

/// The default EchoHolders sale start, as a unix timestamp
pub const ECHO_HOLDERS_SALE_START: u64 = 1669993200;
