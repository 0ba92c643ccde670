mod beneficiary;
mod order_claimed;
mod order_opened;

pub use beneficiary::BeneficiaryHandler;
pub use order_claimed::OrderClaimedHandler;
pub use order_opened::OrderOpenedHandler;
