//! Events for the Badger yield source

use odra::prelude::*;
use odra::casper_types::U256;

/// Event emitted when underlying is supplied into the Sett
#[odra::event]
pub struct SuppliedTokenTo {
    /// Account the underlying was pulled from
    pub from: Address,
    /// Beneficiary named by the caller
    pub to: Address,
    /// Underlying supplied
    pub amount: U256,
    /// Sett shares credited to the adapter
    pub shares: U256,
}

/// Event emitted when underlying is redeemed from the Sett
#[odra::event]
pub struct RedeemedToken {
    /// Account receiving the underlying
    pub to: Address,
    /// Underlying requested
    pub requested: U256,
    /// Underlying actually returned
    pub redeemed: U256,
    /// Sett shares burned
    pub shares: U256,
}
