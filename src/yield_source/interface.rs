//! Yield-source interface exposed to prize pools

use odra::prelude::*;
use odra::casper_types::U256;

/// Standard yield source
///
/// Consumers supply underlying through `supply_token_to` and take it back with
/// `redeem_token`. Balances are denominated either in the source's own units
/// (`balance_of`) or in underlying (`balance_of_token`).
#[odra::external_contract]
pub trait YieldSource {
    /// Underlying token accepted by the source
    ///
    /// - MUST NOT change after deployment
    fn deposit_token(&self) -> Address;

    /// Underlying value held for `user`
    fn balance_of_token(&self, user: Address) -> U256;

    /// Vault shares held for `user`
    fn balance_of(&self, user: Address) -> U256;

    /// Pull `amount` of underlying from the caller and put it to work for `to`
    ///
    /// - MUST revert if the caller has not approved `amount`
    fn supply_token_to(&mut self, amount: U256, to: Address);

    /// Return `amount` of underlying to the caller
    ///
    /// - MUST revert rather than pay out more than the source holds
    /// - Returns the amount actually transferred
    fn redeem_token(&mut self, amount: U256) -> U256;
}
