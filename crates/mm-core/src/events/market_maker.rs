use alloy_sol_types::sol;

sol! {
    /// Emitted when the fee beneficiary is replaced
    #[derive(Debug)]
    event UpdateBeneficiary(address indexed beneficiary);

    /// Emitted when the bonding-curve formula contract is replaced
    #[derive(Debug)]
    event UpdateFormula(address indexed formula);

    /// Emitted when the buy/sell fee percentages change
    #[derive(Debug)]
    event UpdateFees(uint256 buyFeePct, uint256 sellFeePct);

    /// Emitted when a new meta-batch starts
    #[derive(Debug)]
    event NewMetaBatch(uint256 indexed id, uint256 supply, uint256 balance);

    /// Emitted when a new batch opens for a collateral
    #[derive(Debug)]
    event NewBatch(
        uint256 indexed id,
        address indexed collateral,
        uint256 supply,
        uint256 balance,
        uint32 reserveRatio,
        uint256 slippage
    );

    /// Emitted when a batch is cancelled
    #[derive(Debug)]
    event CancelBatch(uint256 indexed id, address indexed collateral);

    /// Emitted when a collateral token is whitelisted
    #[derive(Debug)]
    event AddCollateralToken(
        address indexed collateral,
        uint256 virtualSupply,
        uint256 virtualBalance,
        uint32 reserveRatio,
        uint256 slippage
    );

    /// Emitted when a collateral token is removed from the whitelist
    #[derive(Debug)]
    event RemoveCollateralToken(address indexed collateral);

    /// Emitted when a collateral token's curve parameters change
    #[derive(Debug)]
    event UpdateCollateralToken(
        address indexed collateral,
        uint256 virtualSupply,
        uint256 virtualBalance,
        uint32 reserveRatio,
        uint256 slippage
    );

    /// Emitted once when trading opens
    #[derive(Debug)]
    event Open();

    /// Emitted when a buyer places an order within a batch
    #[derive(Debug)]
    event OpenBuyOrder(
        address indexed buyer,
        uint256 indexed batchId,
        address indexed collateral,
        uint256 fee,
        uint256 value
    );

    /// Emitted when a seller places an order within a batch
    #[derive(Debug)]
    event OpenSellOrder(
        address indexed seller,
        uint256 indexed batchId,
        address indexed collateral,
        uint256 amount
    );

    /// Emitted when a buyer claims the proceeds of a settled batch
    #[derive(Debug)]
    event ClaimBuyOrder(
        address indexed buyer,
        uint256 indexed batchId,
        address indexed collateral,
        uint256 amount
    );

    /// Emitted when a seller claims the proceeds of a settled batch
    #[derive(Debug)]
    event ClaimSellOrder(
        address indexed seller,
        uint256 indexed batchId,
        address indexed collateral,
        uint256 fee,
        uint256 value
    );

    /// Emitted when a buyer is refunded out of a cancelled batch
    #[derive(Debug)]
    event ClaimCancelledBuyOrder(
        address indexed buyer,
        uint256 indexed batchId,
        address indexed collateral,
        uint256 value
    );

    /// Emitted when a seller is refunded out of a cancelled batch
    #[derive(Debug)]
    event ClaimCancelledSellOrder(
        address indexed seller,
        uint256 indexed batchId,
        address indexed collateral,
        uint256 amount
    );

    /// Emitted when a batch's clearing prices are computed
    #[derive(Debug)]
    event UpdatePricing(
        uint256 indexed batchId,
        address indexed collateral,
        uint256 totalBuySpend,
        uint256 totalBuyReturn,
        uint256 totalSellSpend,
        uint256 totalSellReturn
    );

    /// Emitted by the EVM script runner after executing a script
    #[derive(Debug)]
    event ScriptResult(address indexed executor, bytes script, bytes input, bytes returnData);

    /// Emitted when stray funds are swept to the recovery vault
    #[derive(Debug)]
    event RecoverToVault(address indexed vault, address indexed token, uint256 amount);
}
