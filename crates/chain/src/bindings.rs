//! ABI bindings for the pre-deployed demo contracts.

use alloy::sol;

sol! {
    /// Subset of ERC-20 used by the dashboard.
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address to, uint256 amount) external returns (bool);
    }

    /// Oracle-priced FX swap between the two stablecoins.
    #[sol(rpc)]
    interface IStableFX {
        function swapExactIn(
            address tokenIn,
            address tokenOut,
            uint256 amountIn,
            uint256 minOut,
            uint256 maxAge
        ) external returns (uint256 amountOut, uint256 fee);
    }

    /// Manually updated SGD-per-HKD oracle.
    #[sol(rpc)]
    interface IRateOracle {
        function getRate() external view returns (uint256 rateSgdPerHkd, uint256 updatedAt);
    }
}
