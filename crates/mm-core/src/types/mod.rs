mod anomaly;
mod beneficiary;
mod order;

pub use anomaly::Anomaly;
pub use beneficiary::BeneficiaryRecord;
pub use order::{Order, OrderId, OrderSide};
