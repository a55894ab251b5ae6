//! ERC-20 contract bindings.

use alloy::sol;

sol! {
    #[sol(rpc)]
    contract IERC20 {
        function balanceOf(address owner) external view returns (uint256);
        function decimals() external view returns (uint8);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, U256};
    use alloy::sol_types::SolCall;

    #[test]
    fn test_transfer_calldata_selector() {
        let call = IERC20::transferCall {
            to: address!("fB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"),
            amount: U256::from(5_000_000u64),
        };
        let encoded = call.abi_encode();
        // transfer(address,uint256) selector
        assert_eq!(&encoded[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
        // 4-byte selector + two 32-byte words
        assert_eq!(encoded.len(), 68);
    }
}
