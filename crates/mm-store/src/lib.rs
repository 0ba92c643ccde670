mod beneficiaries;
mod orders;
mod state;
mod store;

pub use beneficiaries::BeneficiaryStore;
pub use orders::{ClaimOutcome, OpenOutcome, OrderStore};
pub use state::{IndexState, IndexStats};
pub use store::ProjectionStore;
