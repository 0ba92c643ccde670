use alloy_primitives::{keccak256, Address, B256, U256};
use std::fmt;

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OrderSide {
    Buy = 0,
    Sell = 1,
}

impl OrderSide {
    /// Stable single-byte tag used in id derivation
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

/// Derived primary key for an order record.
///
/// The only fields an open event shares with its later claim are
/// `(side, trader, batchId)`, so the key is derived from exactly those:
/// keccak256 over a fixed-width encoding (side tag byte, 20 trader bytes,
/// 32 big-endian batch-id bytes). The encoding is injective, so distinct
/// logical orders cannot collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(B256);

impl OrderId {
    /// Derive the id for `(side, trader, batch_id)`.
    ///
    /// Pure function: identical inputs always re-derive the identical id,
    /// which is how the open and the claim of one logical order end up on
    /// the same record.
    pub fn derive(side: OrderSide, trader: Address, batch_id: U256) -> Self {
        let mut preimage = [0u8; 53];
        preimage[0] = side.tag();
        preimage[1..21].copy_from_slice(trader.as_slice());
        preimage[21..53].copy_from_slice(&batch_id.to_be_bytes::<32>());
        Self(keccak256(preimage))
    }

    /// Raw 32-byte key
    pub const fn as_bytes(&self) -> &B256 {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One logical buy or sell order at one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Derived key, identical for the open and the claim of this order
    pub id: OrderId,
    /// Buy or Sell
    pub side: OrderSide,
    /// Buyer or seller address
    pub trader: Address,
    /// Batch the order belongs to
    pub batch_id: U256,
    /// Collateral token the order trades against
    pub collateral: Address,
    /// Reserve value spent (buy) or bonded amount sold (sell)
    pub amount: U256,
    /// Protocol fee taken at open (buy orders only)
    pub fee: U256,
    /// Whether the matching claim event has been seen
    pub claimed: bool,
    /// Whether this record was synthesized by an orphan claim rather than
    /// an open event. Stored explicitly because the zero address is a legal
    /// collateral (the ETH convention).
    pub placeholder: bool,
}

impl Order {
    /// Build the record for an `OpenBuyOrder` event
    pub fn open_buy(
        buyer: Address,
        batch_id: U256,
        collateral: Address,
        value: U256,
        fee: U256,
    ) -> Self {
        Self {
            id: OrderId::derive(OrderSide::Buy, buyer, batch_id),
            side: OrderSide::Buy,
            trader: buyer,
            batch_id,
            collateral,
            amount: value,
            fee,
            claimed: false,
            placeholder: false,
        }
    }

    /// Build the record for an `OpenSellOrder` event
    pub fn open_sell(seller: Address, batch_id: U256, collateral: Address, amount: U256) -> Self {
        Self {
            id: OrderId::derive(OrderSide::Sell, seller, batch_id),
            side: OrderSide::Sell,
            trader: seller,
            batch_id,
            collateral,
            amount,
            fee: U256::ZERO,
            claimed: false,
            placeholder: false,
        }
    }

    /// Build the degraded record written when a claim arrives for an order
    /// that was never opened. Key fields come from the claim event; magnitude
    /// and collateral stay at their type defaults.
    pub fn placeholder(side: OrderSide, trader: Address, batch_id: U256) -> Self {
        Self {
            id: OrderId::derive(side, trader, batch_id),
            side,
            trader,
            batch_id,
            collateral: Address::ZERO,
            amount: U256::ZERO,
            fee: U256::ZERO,
            claimed: true,
            placeholder: true,
        }
    }

    /// True for records created by an orphan claim, which never saw the
    /// collateral and magnitude of their open event
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}
