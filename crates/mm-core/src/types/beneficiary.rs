use alloy_primitives::Address;

/// Running tally for one beneficiary address seen in `UpdateBeneficiary`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeneficiaryRecord {
    /// Address the fee beneficiary was set to
    pub beneficiary: Address,
    /// How many updates have named this address
    pub updates: u64,
    /// Block of the most recent update naming this address
    pub last_update_block: u64,
}

impl BeneficiaryRecord {
    pub fn new(beneficiary: Address) -> Self {
        Self {
            beneficiary,
            updates: 0,
            last_update_block: 0,
        }
    }
}
