use metrics::{counter, describe_counter};

/// Initialize counter descriptions
pub fn init() {
    describe_counter!(
        "mm_indexer_events_processed_total",
        "Total number of contract events processed"
    );
    describe_counter!(
        "mm_indexer_orders_opened_total",
        "Total number of open-order events applied"
    );
    describe_counter!(
        "mm_indexer_orders_claimed_total",
        "Total number of claim events applied"
    );
    describe_counter!(
        "mm_indexer_beneficiary_updates_total",
        "Total number of beneficiary updates applied"
    );
    describe_counter!(
        "mm_indexer_duplicate_opens_total",
        "Open events that overwrote a live order record"
    );
    describe_counter!(
        "mm_indexer_orphan_claims_total",
        "Claim events whose open order was never seen"
    );
}

/// Increment events processed counter
pub fn events_processed(count: u64) {
    counter!("mm_indexer_events_processed_total").increment(count);
}

/// Increment opened orders counter
pub fn orders_opened(count: u64) {
    counter!("mm_indexer_orders_opened_total").increment(count);
}

/// Increment claimed orders counter
pub fn orders_claimed(count: u64) {
    counter!("mm_indexer_orders_claimed_total").increment(count);
}

/// Increment beneficiary updates counter
pub fn beneficiary_updates(count: u64) {
    counter!("mm_indexer_beneficiary_updates_total").increment(count);
}

/// Increment duplicate open counter
pub fn duplicate_opens(count: u64) {
    counter!("mm_indexer_duplicate_opens_total").increment(count);
}

/// Increment orphan claim counter
pub fn orphan_claims(count: u64) {
    counter!("mm_indexer_orphan_claims_total").increment(count);
}
