//! Type definitions used throughout the deploy scripts

use std::fmt::{self, Display};

use clap::ValueEnum;

/// The possible Echo protocol contracts to deploy
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum EchoContract {
    /// The Echo ERC20 token contract
    Echo,
    /// The veNFT art proxy contract
    VeArtProxy,
    /// The upgradeable veNFT art proxy implementation contract
    VeArtProxyUpgradeable,
    /// The vote-escrow contract
    VotingEscrow,
    /// The rebase rewards distributor contract
    RewardsDistributor,
    /// The EchoHolders NFT sale contract
    EchoHolders,
}

impl Display for EchoContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EchoContract::Echo => write!(f, "Echo"),
            EchoContract::VeArtProxy => write!(f, "VeArtProxy"),
            EchoContract::VeArtProxyUpgradeable => write!(f, "VeArtProxyUpgradeable"),
            EchoContract::VotingEscrow => write!(f, "VotingEscrow"),
            EchoContract::RewardsDistributor => write!(f, "RewardsDistributor"),
            EchoContract::EchoHolders => write!(f, "EchoHolders"),
        }
    }
}
