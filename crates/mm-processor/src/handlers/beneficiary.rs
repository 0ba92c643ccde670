use alloy::rpc::types::Log;
use alloy_sol_types::SolEvent;
use mm_core::events::UpdateBeneficiary;
use mm_core::{IndexerError, Result};
use mm_store::ProjectionStore;
use std::sync::Arc;
use tracing::debug;

use crate::metrics;

pub struct BeneficiaryHandler {
    store: Arc<ProjectionStore>,
}

impl BeneficiaryHandler {
    pub fn new(store: Arc<ProjectionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, log: &Log) -> Result<()> {
        let event = UpdateBeneficiary::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        let block_number = log.block_number.unwrap_or_default();
        let updates = self
            .store
            .beneficiaries
            .apply_update(event.beneficiary, block_number);

        debug!(
            beneficiary = ?event.beneficiary,
            updates,
            block = block_number,
            "Beneficiary updated"
        );

        metrics::beneficiary_updates(1);

        // Update stats
        {
            let mut state = self.store.state.write().await;
            state.record_beneficiary_update();
            state.record_event();
        }

        Ok(())
    }
}
