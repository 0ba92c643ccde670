/// Projection statistics
#[derive(Debug, Clone, Default)]
pub struct IndexStats {
    pub total_events_processed: u64,
    pub orders_opened: u64,
    pub orders_claimed: u64,
    pub beneficiary_updates: u64,
    /// Contract events recognized but carrying no projected state
    pub notices: u64,
}

/// Replay progress tracking
#[derive(Debug, Clone, Default)]
pub struct IndexState {
    /// Highest block number seen in any processed log
    pub last_seen_block: u64,

    /// Statistics
    pub stats: IndexStats,
}

impl IndexState {
    /// Record the block a processed log came from
    pub fn observe_block(&mut self, block: u64) {
        if block > self.last_seen_block {
            self.last_seen_block = block;
        }
    }

    /// Increment event counter
    pub fn record_event(&mut self) {
        self.stats.total_events_processed += 1;
    }

    /// Increment open-order counter
    pub fn record_open(&mut self) {
        self.stats.orders_opened += 1;
    }

    /// Increment claim counter
    pub fn record_claim(&mut self) {
        self.stats.orders_claimed += 1;
    }

    /// Increment beneficiary-update counter
    pub fn record_beneficiary_update(&mut self) {
        self.stats.beneficiary_updates += 1;
    }

    /// Increment the counter for recognized no-op events
    pub fn record_notice(&mut self) {
        self.stats.notices += 1;
    }

    /// Get last seen block
    pub fn last_seen_block(&self) -> u64 {
        self.last_seen_block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_block_keeps_the_maximum() {
        let mut state = IndexState::default();
        state.observe_block(10);
        state.observe_block(7);
        state.observe_block(12);
        assert_eq!(state.last_seen_block(), 12);
    }
}
