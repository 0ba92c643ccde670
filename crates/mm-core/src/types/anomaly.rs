use alloy_primitives::{Address, U256};

use super::{Order, OrderId, OrderSide};

/// Event-stream condition the projection recovered from but recorded.
///
/// Each variant is journaled exactly once at the point the store applies
/// the offending event, so operators can audit degraded records after a
/// replay finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// A second open event arrived for a key that already held an order.
    /// The store keeps last-write-wins; `prior` is the overwritten record.
    DuplicateOpen { prior: Order, incoming: Order },
    /// A claim arrived for a key no open event ever populated. The store
    /// wrote a placeholder record for it.
    OrphanClaim {
        id: OrderId,
        side: OrderSide,
        trader: Address,
        batch_id: U256,
    },
}

impl Anomaly {
    /// Short stable tag for logs and metrics
    pub const fn kind(&self) -> &'static str {
        match self {
            Anomaly::DuplicateOpen { .. } => "duplicate_open",
            Anomaly::OrphanClaim { .. } => "orphan_claim",
        }
    }

    /// Key of the order record the anomaly touched
    pub fn order_id(&self) -> OrderId {
        match self {
            Anomaly::DuplicateOpen { incoming, .. } => incoming.id,
            Anomaly::OrphanClaim { id, .. } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_are_stable() {
        let orphan = Anomaly::OrphanClaim {
            id: OrderId::derive(OrderSide::Buy, Address::repeat_byte(1), U256::from(2)),
            side: OrderSide::Buy,
            trader: Address::repeat_byte(1),
            batch_id: U256::from(2),
        };
        assert_eq!(orphan.kind(), "orphan_claim");
        assert_eq!(
            orphan.order_id(),
            OrderId::derive(OrderSide::Buy, Address::repeat_byte(1), U256::from(2))
        );
    }
}
