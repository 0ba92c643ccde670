use alloy_primitives::{Address, U256};
use dashmap::DashMap;
use mm_core::types::{Anomaly, Order, OrderId, OrderSide};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, warn};

/// What applying an open event did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// No record existed under this key before
    Created,
    /// A record already existed and was overwritten (last write wins)
    Replaced,
}

/// What applying a claim event did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The open record was found and marked claimed
    Claimed,
    /// The record was already claimed; the event changed nothing
    AlreadyClaimed,
    /// No open record existed; a placeholder was written
    Orphaned,
}

/// Thread-safe store for order records with secondary indexes
#[derive(Debug)]
pub struct OrderStore {
    /// Primary storage: OrderId -> Order
    orders: DashMap<OrderId, Order>,

    /// Index: trader -> set of OrderIds
    trader_orders: DashMap<Address, HashSet<OrderId>>,

    /// Index: batch_id -> set of OrderIds
    batch_orders: DashMap<U256, HashSet<OrderId>>,

    /// Journal of recovered event-stream anomalies, in arrival order
    anomalies: RwLock<Vec<Anomaly>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
            trader_orders: DashMap::new(),
            batch_orders: DashMap::new(),
            anomalies: RwLock::new(Vec::new()),
        }
    }

    /// Apply an open event: upsert the record under its derived key.
    ///
    /// A duplicate open for a live key overwrites the prior record
    /// (including resetting `claimed` to false) and is journaled as an
    /// anomaly, so a later claim still lands on the surviving record.
    pub fn apply_open(&self, order: Order) -> OpenOutcome {
        let start = Instant::now();
        let id = order.id;
        self.index(&order);

        let prior = self.orders.insert(id, order.clone());

        let outcome = match prior {
            None => OpenOutcome::Created,
            Some(prior) => {
                warn!(
                    id = %id,
                    side = ?order.side,
                    trader = ?order.trader,
                    batch_id = %order.batch_id,
                    prior_claimed = prior.claimed,
                    prior_amount = %prior.amount,
                    prior_fee = %prior.fee,
                    prior_collateral = ?prior.collateral,
                    new_amount = %order.amount,
                    new_fee = %order.fee,
                    new_collateral = ?order.collateral,
                    "Duplicate open order overwritten"
                );
                self.record_anomaly(Anomaly::DuplicateOpen {
                    prior,
                    incoming: order,
                });
                OpenOutcome::Replaced
            }
        };

        let duration_us = start.elapsed().as_micros();
        debug!(
            id = %id,
            outcome = ?outcome,
            total_orders = self.orders.len(),
            apply_us = duration_us,
            "Open order applied in memory store"
        );
        outcome
    }

    /// Apply a claim event: mark the record under the derived key claimed.
    ///
    /// Idempotent; a repeated claim leaves the record untouched. A claim
    /// whose open was never seen writes a claimed placeholder record and
    /// is journaled as an anomaly.
    pub fn apply_claim(&self, side: OrderSide, trader: Address, batch_id: U256) -> ClaimOutcome {
        let start = Instant::now();
        let id = OrderId::derive(side, trader, batch_id);

        let outcome = if let Some(mut order) = self.orders.get_mut(&id) {
            if order.claimed {
                ClaimOutcome::AlreadyClaimed
            } else {
                order.claimed = true;
                ClaimOutcome::Claimed
            }
        } else {
            warn!(
                id = %id,
                side = ?side,
                trader = ?trader,
                batch_id = %batch_id,
                "Claim for an order that was never opened, placeholder created"
            );
            self.record_anomaly(Anomaly::OrphanClaim {
                id,
                side,
                trader,
                batch_id,
            });
            let placeholder = Order::placeholder(side, trader, batch_id);
            self.index(&placeholder);
            self.orders.insert(id, placeholder);
            ClaimOutcome::Orphaned
        };

        let duration_us = start.elapsed().as_micros();
        debug!(
            id = %id,
            outcome = ?outcome,
            total_orders = self.orders.len(),
            apply_us = duration_us,
            "Claim applied in memory store"
        );
        outcome
    }

    fn index(&self, order: &Order) {
        self.trader_orders
            .entry(order.trader)
            .or_insert_with(HashSet::new)
            .insert(order.id);

        self.batch_orders
            .entry(order.batch_id)
            .or_insert_with(HashSet::new)
            .insert(order.id);
    }

    fn record_anomaly(&self, anomaly: Anomaly) {
        self.anomalies.write().push(anomaly);
    }

    /// Get order by id
    pub fn get(&self, id: &OrderId) -> Option<Order> {
        self.orders.get(id).map(|o| o.clone())
    }

    /// Get order by its key fields
    pub fn get_by_key(&self, side: OrderSide, trader: Address, batch_id: U256) -> Option<Order> {
        self.get(&OrderId::derive(side, trader, batch_id))
    }

    /// Get all orders for a trader
    pub fn get_trader_orders(&self, trader: &Address) -> Vec<Order> {
        self.trader_orders
            .get(trader)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.orders.get(id).map(|o| o.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get all orders at a batch
    pub fn get_batch_orders(&self, batch_id: &U256) -> Vec<Order> {
        self.batch_orders
            .get(batch_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.orders.get(id).map(|o| o.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get total order count
    pub fn count(&self) -> usize {
        self.orders.len()
    }

    /// Get count of orders still awaiting their claim
    pub fn unclaimed_count(&self) -> usize {
        self.orders.iter().filter(|o| !o.claimed).count()
    }

    /// Get journaled anomaly count
    pub fn anomaly_count(&self) -> usize {
        self.anomalies.read().len()
    }

    /// Snapshot of the anomaly journal, in arrival order
    pub fn anomalies(&self) -> Vec<Anomaly> {
        self.anomalies.read().clone()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    fn buy(trader: u8, batch: u64, value: u64) -> Order {
        Order::open_buy(
            addr(trader),
            U256::from(batch),
            addr(0xc0),
            U256::from(value),
            U256::from(1),
        )
    }

    #[test]
    fn open_then_claim_marks_the_record() {
        let store = OrderStore::new();
        let order = buy(0x01, 5, 100);
        let id = order.id;

        assert_eq!(store.apply_open(order), OpenOutcome::Created);
        assert!(!store.get(&id).unwrap().claimed);

        let outcome = store.apply_claim(OrderSide::Buy, addr(0x01), U256::from(5));
        assert_eq!(outcome, ClaimOutcome::Claimed);

        let claimed = store.get(&id).unwrap();
        assert!(claimed.claimed);
        assert_eq!(claimed.amount, U256::from(100));
        assert_eq!(store.anomaly_count(), 0);
    }

    #[test]
    fn claim_is_idempotent() {
        let store = OrderStore::new();
        store.apply_open(buy(0x01, 5, 100));

        assert_eq!(
            store.apply_claim(OrderSide::Buy, addr(0x01), U256::from(5)),
            ClaimOutcome::Claimed
        );
        assert_eq!(
            store.apply_claim(OrderSide::Buy, addr(0x01), U256::from(5)),
            ClaimOutcome::AlreadyClaimed
        );

        assert_eq!(store.count(), 1);
        assert_eq!(store.anomaly_count(), 0);
    }

    #[test]
    fn duplicate_open_overwrites_and_journals() {
        let store = OrderStore::new();
        let first = buy(0x01, 5, 100);
        let id = first.id;
        store.apply_open(first);
        store.apply_claim(OrderSide::Buy, addr(0x01), U256::from(5));

        let second = Order::open_buy(
            addr(0x01),
            U256::from(5),
            addr(0xc1),
            U256::from(250),
            U256::from(2),
        );
        assert_eq!(store.apply_open(second), OpenOutcome::Replaced);

        // Last write wins on every field, including the claimed reset
        let current = store.get(&id).unwrap();
        assert_eq!(current.amount, U256::from(250));
        assert_eq!(current.collateral, addr(0xc1));
        assert!(!current.claimed);

        let anomalies = store.anomalies();
        assert_eq!(anomalies.len(), 1);
        match &anomalies[0] {
            Anomaly::DuplicateOpen { prior, incoming } => {
                assert_eq!(prior.amount, U256::from(100));
                assert!(prior.claimed);
                assert_eq!(incoming.amount, U256::from(250));
            }
            other => panic!("unexpected anomaly {other:?}"),
        }

        // Still one record and one index entry per key
        assert_eq!(store.count(), 1);
        assert_eq!(store.get_trader_orders(&addr(0x01)).len(), 1);
        assert_eq!(store.get_batch_orders(&U256::from(5)).len(), 1);
    }

    #[test]
    fn orphan_claim_writes_placeholder() {
        let store = OrderStore::new();

        let outcome = store.apply_claim(OrderSide::Sell, addr(0x02), U256::from(9));
        assert_eq!(outcome, ClaimOutcome::Orphaned);

        let record = store
            .get_by_key(OrderSide::Sell, addr(0x02), U256::from(9))
            .unwrap();
        assert!(record.claimed);
        assert!(record.is_placeholder());
        assert_eq!(record.trader, addr(0x02));
        assert_eq!(record.batch_id, U256::from(9));

        assert_eq!(store.anomaly_count(), 1);
        assert_eq!(store.anomalies()[0].kind(), "orphan_claim");
        // Placeholder is indexed like any other record
        assert_eq!(store.get_trader_orders(&addr(0x02)).len(), 1);
    }

    #[test]
    fn claim_after_orphan_claim_is_already_claimed() {
        let store = OrderStore::new();
        store.apply_claim(OrderSide::Sell, addr(0x02), U256::from(9));

        assert_eq!(
            store.apply_claim(OrderSide::Sell, addr(0x02), U256::from(9)),
            ClaimOutcome::AlreadyClaimed
        );
        // Second claim is not a fresh anomaly
        assert_eq!(store.anomaly_count(), 1);
    }

    #[test]
    fn open_after_orphan_claim_replaces_the_placeholder() {
        let store = OrderStore::new();
        store.apply_claim(OrderSide::Buy, addr(0x04), U256::from(3));

        // The late open carries the real order data. Zero-address (ETH)
        // collateral is a legal value and must not read as degraded.
        let open = Order::open_buy(
            addr(0x04),
            U256::from(3),
            Address::ZERO,
            U256::from(75),
            U256::from(1),
        );
        assert_eq!(store.apply_open(open), OpenOutcome::Replaced);

        let record = store
            .get_by_key(OrderSide::Buy, addr(0x04), U256::from(3))
            .unwrap();
        assert!(!record.is_placeholder());
        assert!(!record.claimed);
        assert_eq!(record.amount, U256::from(75));
    }

    #[test]
    fn sides_and_batches_are_independent_records() {
        let store = OrderStore::new();
        store.apply_open(buy(0x01, 5, 100));
        store.apply_open(Order::open_sell(
            addr(0x01),
            U256::from(5),
            addr(0xc0),
            U256::from(40),
        ));
        store.apply_open(buy(0x01, 6, 70));

        assert_eq!(store.count(), 3);
        assert_eq!(store.get_trader_orders(&addr(0x01)).len(), 3);
        assert_eq!(store.get_batch_orders(&U256::from(5)).len(), 2);
        assert_eq!(store.get_batch_orders(&U256::from(6)).len(), 1);

        // Claiming the sell leaves both buys unclaimed
        store.apply_claim(OrderSide::Sell, addr(0x01), U256::from(5));
        assert_eq!(store.unclaimed_count(), 2);
    }
}
