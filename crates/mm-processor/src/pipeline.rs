use alloy::rpc::types::Log;
use alloy_sol_types::SolEvent;
use mm_core::events::{
    AddCollateralToken, CancelBatch, ClaimBuyOrder, ClaimCancelledBuyOrder,
    ClaimCancelledSellOrder, ClaimSellOrder, NewBatch, NewMetaBatch, Open, OpenBuyOrder,
    OpenSellOrder, RecoverToVault, RemoveCollateralToken, ScriptResult, UpdateBeneficiary,
    UpdateCollateralToken, UpdateFees, UpdateFormula, UpdatePricing,
};
use mm_core::{IndexerConfig, Result};
use mm_store::ProjectionStore;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

use crate::handlers::{BeneficiaryHandler, OrderClaimedHandler, OrderOpenedHandler};
use crate::metrics;

/// Event processor that routes logs to appropriate handlers
pub struct EventProcessor {
    store: Arc<ProjectionStore>,
    config: IndexerConfig,

    // Handlers
    beneficiary: BeneficiaryHandler,
    order_opened: OrderOpenedHandler,
    order_claimed: OrderClaimedHandler,
}

impl EventProcessor {
    pub fn new(store: Arc<ProjectionStore>, config: IndexerConfig) -> Self {
        Self {
            store: store.clone(),
            config,
            beneficiary: BeneficiaryHandler::new(store.clone()),
            order_opened: OrderOpenedHandler::new(store.clone()),
            order_claimed: OrderClaimedHandler::new(store),
        }
    }

    /// Get reference to the store
    pub fn store(&self) -> &Arc<ProjectionStore> {
        &self.store
    }

    /// Get reference to config
    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Check if a log is from the contract we care about
    pub fn is_relevant_log(&self, log: &Log) -> bool {
        log.address() == self.config.market_maker
    }

    /// Process a single log, routing to the appropriate handler.
    ///
    /// Logs must be fed in chain order; the projection's duplicate and
    /// orphan handling assumes delivery order matches emission order.
    pub async fn process_log(&self, log: Log) -> Result<()> {
        let process_start = Instant::now();

        let topic0 = match log.topics().first() {
            Some(t) => t,
            None => {
                trace!("Skipping log without topic0");
                return Ok(());
            }
        };

        let block_number = log.block_number.unwrap_or_default();
        let log_index = log.log_index.unwrap_or_default();

        debug!(
            block = block_number,
            log_index = log_index,
            address = ?log.address(),
            topic0 = ?topic0,
            tx_hash = ?log.transaction_hash.unwrap_or_default(),
            "Processing log event"
        );

        // Route to appropriate handler based on event signature
        match *topic0 {
            sig if sig == UpdateBeneficiary::SIGNATURE_HASH => {
                let handler_start = Instant::now();
                self.beneficiary.handle(&log).await?;
                debug!(
                    event = "UpdateBeneficiary",
                    block = block_number,
                    log_index = log_index,
                    handler_us = handler_start.elapsed().as_micros(),
                    total_us = process_start.elapsed().as_micros(),
                    "Processed UpdateBeneficiary event"
                );
            }
            sig if sig == OpenBuyOrder::SIGNATURE_HASH => {
                let handler_start = Instant::now();
                self.order_opened.handle_buy(&log).await?;
                debug!(
                    event = "OpenBuyOrder",
                    block = block_number,
                    log_index = log_index,
                    handler_us = handler_start.elapsed().as_micros(),
                    total_us = process_start.elapsed().as_micros(),
                    "Processed OpenBuyOrder event"
                );
            }
            sig if sig == OpenSellOrder::SIGNATURE_HASH => {
                let handler_start = Instant::now();
                self.order_opened.handle_sell(&log).await?;
                debug!(
                    event = "OpenSellOrder",
                    block = block_number,
                    log_index = log_index,
                    handler_us = handler_start.elapsed().as_micros(),
                    total_us = process_start.elapsed().as_micros(),
                    "Processed OpenSellOrder event"
                );
            }
            sig if sig == ClaimBuyOrder::SIGNATURE_HASH => {
                let handler_start = Instant::now();
                self.order_claimed.handle_buy(&log).await?;
                debug!(
                    event = "ClaimBuyOrder",
                    block = block_number,
                    log_index = log_index,
                    handler_us = handler_start.elapsed().as_micros(),
                    total_us = process_start.elapsed().as_micros(),
                    "Processed ClaimBuyOrder event"
                );
            }
            sig if sig == ClaimSellOrder::SIGNATURE_HASH => {
                let handler_start = Instant::now();
                self.order_claimed.handle_sell(&log).await?;
                debug!(
                    event = "ClaimSellOrder",
                    block = block_number,
                    log_index = log_index,
                    handler_us = handler_start.elapsed().as_micros(),
                    total_us = process_start.elapsed().as_micros(),
                    "Processed ClaimSellOrder event"
                );
            }

            // Recognized contract events that carry no projected state
            sig if sig == UpdateFormula::SIGNATURE_HASH => self.note("UpdateFormula").await,
            sig if sig == UpdateFees::SIGNATURE_HASH => self.note("UpdateFees").await,
            sig if sig == NewMetaBatch::SIGNATURE_HASH => self.note("NewMetaBatch").await,
            sig if sig == NewBatch::SIGNATURE_HASH => self.note("NewBatch").await,
            sig if sig == CancelBatch::SIGNATURE_HASH => self.note("CancelBatch").await,
            sig if sig == AddCollateralToken::SIGNATURE_HASH => {
                self.note("AddCollateralToken").await
            }
            sig if sig == RemoveCollateralToken::SIGNATURE_HASH => {
                self.note("RemoveCollateralToken").await
            }
            sig if sig == UpdateCollateralToken::SIGNATURE_HASH => {
                self.note("UpdateCollateralToken").await
            }
            sig if sig == Open::SIGNATURE_HASH => self.note("Open").await,
            sig if sig == ClaimCancelledBuyOrder::SIGNATURE_HASH => {
                self.note("ClaimCancelledBuyOrder").await
            }
            sig if sig == ClaimCancelledSellOrder::SIGNATURE_HASH => {
                self.note("ClaimCancelledSellOrder").await
            }
            sig if sig == UpdatePricing::SIGNATURE_HASH => self.note("UpdatePricing").await,
            sig if sig == ScriptResult::SIGNATURE_HASH => self.note("ScriptResult").await,
            sig if sig == RecoverToVault::SIGNATURE_HASH => self.note("RecoverToVault").await,

            _ => {
                trace!(topic0 = ?topic0, "Unknown event signature");
                return Ok(());
            }
        }

        metrics::events_processed(1);
        {
            let mut state = self.store.state.write().await;
            state.observe_block(block_number);
        }

        Ok(())
    }

    /// Record a recognized event the projection deliberately ignores
    async fn note(&self, event: &'static str) {
        trace!(event, "Contract event acknowledged, nothing projected");
        let mut state = self.store.state.write().await;
        state.record_notice();
        state.record_event();
    }

    /// Process multiple logs in order
    pub async fn process_logs(&self, logs: Vec<Log>) -> Result<()> {
        for log in logs {
            self.process_log(log).await?;
        }
        Ok(())
    }
}
