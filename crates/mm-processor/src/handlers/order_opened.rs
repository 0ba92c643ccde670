use alloy::rpc::types::Log;
use alloy_sol_types::SolEvent;
use mm_core::events::{OpenBuyOrder, OpenSellOrder};
use mm_core::types::Order;
use mm_core::{IndexerError, Result};
use mm_store::{OpenOutcome, ProjectionStore};
use std::sync::Arc;
use tracing::debug;

use crate::metrics;

pub struct OrderOpenedHandler {
    store: Arc<ProjectionStore>,
}

impl OrderOpenedHandler {
    pub fn new(store: Arc<ProjectionStore>) -> Self {
        Self { store }
    }

    pub async fn handle_buy(&self, log: &Log) -> Result<()> {
        let event = OpenBuyOrder::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        let order = Order::open_buy(
            event.buyer,
            event.batchId,
            event.collateral,
            event.value,
            event.fee,
        );

        debug!(
            id = %order.id,
            buyer = ?order.trader,
            batch_id = %order.batch_id,
            collateral = ?order.collateral,
            value = %order.amount,
            fee = %order.fee,
            "Buy order opened"
        );

        self.apply(order).await
    }

    pub async fn handle_sell(&self, log: &Log) -> Result<()> {
        let event = OpenSellOrder::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        let order = Order::open_sell(event.seller, event.batchId, event.collateral, event.amount);

        debug!(
            id = %order.id,
            seller = ?order.trader,
            batch_id = %order.batch_id,
            collateral = ?order.collateral,
            amount = %order.amount,
            "Sell order opened"
        );

        self.apply(order).await
    }

    async fn apply(&self, order: Order) -> Result<()> {
        if self.store.orders.apply_open(order) == OpenOutcome::Replaced {
            metrics::duplicate_opens(1);
        }
        metrics::orders_opened(1);

        // Update stats
        {
            let mut state = self.store.state.write().await;
            state.record_open();
            state.record_event();
        }

        Ok(())
    }
}
