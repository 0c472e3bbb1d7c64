//! Sett interface consumed by the yield source

use odra::prelude::*;
use odra::casper_types::U256;

/// The part of the Sett the yield source depends on
///
/// Contract callers must be approved by the vault's governance, and every
/// call reverts while the vault is paused.
#[odra::external_contract]
pub trait SettVault {
    /// Deposit `amount` of underlying and mint shares to the caller
    fn deposit(&mut self, amount: U256);

    /// Burn `shares` of the caller and return underlying at the current rate
    fn withdraw(&mut self, shares: U256);

    /// Shares held by `owner`
    fn balance_of(&self, owner: Address) -> U256;

    /// Total shares outstanding
    fn total_supply(&self) -> U256;

    /// Total underlying managed by the vault
    fn balance(&self) -> U256;
}
