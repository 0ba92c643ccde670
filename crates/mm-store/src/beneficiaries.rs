use alloy_primitives::Address;
use dashmap::DashMap;
use mm_core::types::BeneficiaryRecord;
use parking_lot::RwLock;
use tracing::debug;

/// Thread-safe store for beneficiary update tallies
#[derive(Debug)]
pub struct BeneficiaryStore {
    /// beneficiary address -> running tally
    records: DashMap<Address, BeneficiaryRecord>,

    /// Most recently set beneficiary, if any update has been seen
    current: RwLock<Option<Address>>,
}

impl BeneficiaryStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            current: RwLock::new(None),
        }
    }

    /// Apply an `UpdateBeneficiary` event. Returns the updated tally for
    /// the named address.
    pub fn apply_update(&self, beneficiary: Address, block_number: u64) -> u64 {
        let mut record = self
            .records
            .entry(beneficiary)
            .or_insert_with(|| BeneficiaryRecord::new(beneficiary));
        record.updates += 1;
        record.last_update_block = block_number;
        let updates = record.updates;
        drop(record);

        *self.current.write() = Some(beneficiary);

        debug!(
            beneficiary = ?beneficiary,
            updates,
            block_number,
            "Beneficiary update applied in memory store"
        );
        updates
    }

    /// Get the tally for one beneficiary address
    pub fn get(&self, beneficiary: &Address) -> Option<BeneficiaryRecord> {
        self.records.get(beneficiary).map(|r| r.clone())
    }

    /// Most recently set beneficiary
    pub fn current(&self) -> Option<Address> {
        *self.current.read()
    }

    /// Number of distinct beneficiary addresses seen
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

impl Default for BeneficiaryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_accumulates_per_address() {
        let store = BeneficiaryStore::new();
        let a = Address::repeat_byte(0x0a);
        let b = Address::repeat_byte(0x0b);

        assert_eq!(store.apply_update(a, 10), 1);
        assert_eq!(store.apply_update(b, 11), 1);
        assert_eq!(store.apply_update(a, 12), 2);

        let record = store.get(&a).unwrap();
        assert_eq!(record.updates, 2);
        assert_eq!(record.last_update_block, 12);
        assert_eq!(store.current(), Some(a));
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn empty_store_has_no_current() {
        let store = BeneficiaryStore::new();
        assert_eq!(store.current(), None);
        assert_eq!(store.count(), 0);
    }
}
