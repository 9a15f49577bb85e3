//! Definitions of Solidity functions called during deployment

use alloy_sol_types::sol;
use ethers::contract::abigen;

sol! {
    function initialize() external;
}

abigen!(
    ProxyAdminContract,
    r#"[
        function upgradeAndCall(address proxy, address implementation, bytes memory data) external;
    ]"#,
);

#[cfg(test)]
mod tests {
    use alloy_sol_types::SolCall;

    use super::initializeCall;

    #[test]
    fn test_initialize_calldata() {
        // keccak256("initialize()")[..4]
        assert_eq!(initializeCall::SELECTOR, [0x81, 0x29, 0xfc, 0x1c]);
        assert_eq!(initializeCall {}.abi_encode(), vec![0x81, 0x29, 0xfc, 0x1c]);
    }
}
