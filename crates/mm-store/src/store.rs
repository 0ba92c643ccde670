use std::sync::Arc;
use tokio::sync::RwLock;

use crate::beneficiaries::BeneficiaryStore;
use crate::orders::OrderStore;
use crate::state::IndexState;

/// Thread-safe in-memory store for the projection
#[derive(Debug)]
pub struct ProjectionStore {
    pub orders: Arc<OrderStore>,
    pub beneficiaries: Arc<BeneficiaryStore>,
    pub state: Arc<RwLock<IndexState>>,
}

impl ProjectionStore {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(OrderStore::new()),
            beneficiaries: Arc::new(BeneficiaryStore::new()),
            state: Arc::new(RwLock::new(IndexState::default())),
        }
    }
}

impl Default for ProjectionStore {
    fn default() -> Self {
        Self::new()
    }
}
