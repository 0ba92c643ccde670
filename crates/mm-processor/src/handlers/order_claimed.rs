use alloy::rpc::types::Log;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolEvent;
use mm_core::events::{ClaimBuyOrder, ClaimSellOrder};
use mm_core::types::OrderSide;
use mm_core::{IndexerError, Result};
use mm_store::{ClaimOutcome, ProjectionStore};
use std::sync::Arc;
use tracing::debug;

use crate::metrics;

pub struct OrderClaimedHandler {
    store: Arc<ProjectionStore>,
}

impl OrderClaimedHandler {
    pub fn new(store: Arc<ProjectionStore>) -> Self {
        Self { store }
    }

    pub async fn handle_buy(&self, log: &Log) -> Result<()> {
        let event = ClaimBuyOrder::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        // The payout fields identify the settlement, not the record;
        // the claim keys on (side, buyer, batchId) alone.
        self.apply(OrderSide::Buy, event.buyer, event.batchId, log)
            .await
    }

    pub async fn handle_sell(&self, log: &Log) -> Result<()> {
        let event = ClaimSellOrder::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        self.apply(OrderSide::Sell, event.seller, event.batchId, log)
            .await
    }

    async fn apply(
        &self,
        side: OrderSide,
        trader: Address,
        batch_id: U256,
        log: &Log,
    ) -> Result<()> {
        let outcome = self.store.orders.apply_claim(side, trader, batch_id);

        debug!(
            side = ?side,
            trader = ?trader,
            batch_id = %batch_id,
            outcome = ?outcome,
            block = log.block_number.unwrap_or_default(),
            "Order claim handled"
        );

        if outcome == ClaimOutcome::Orphaned {
            metrics::orphan_claims(1);
        }
        metrics::orders_claimed(1);

        // Update stats
        {
            let mut state = self.store.state.write().await;
            state.record_claim();
            state.record_event();
        }

        Ok(())
    }
}
