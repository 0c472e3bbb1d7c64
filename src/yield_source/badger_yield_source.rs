//! BadgerYieldSource - yield source backed by a Badger Sett
//!
//! Supplied underlying is deposited into the Sett and the resulting shares are
//! held by this contract. Redemptions convert the requested underlying amount
//! back into shares at the Sett's current rate and withdraw them.
//!
//! Balances are reported for the adapter as a whole; the `user` argument of the
//! balance queries is accepted for interface compatibility only.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use super::events::*;
use crate::errors::YieldSourceError;
use crate::sett::interface::SettVaultContractRef;
use crate::share_math::ShareMath;
use crate::token::Cep18TokenContractRef;

/// Badger yield source contract
#[odra::module]
pub struct BadgerYieldSource {
    /// Sett the underlying is deposited into
    sett: Var<Address>,
    /// Underlying token
    token: Var<Address>,
}

#[odra::module]
impl BadgerYieldSource {
    /// Bind the adapter to a Sett and its underlying token
    pub fn init(&mut self, sett: Address, token: Address) {
        self.sett.set(sett);
        self.token.set(token);
    }

    /// Underlying token accepted by this yield source
    pub fn deposit_token(&self) -> Address {
        self.token.get_or_revert_with(YieldSourceError::NotConfigured)
    }

    /// Sett backing this yield source
    pub fn sett(&self) -> Address {
        self.sett.get_or_revert_with(YieldSourceError::NotConfigured)
    }

    /// Sett shares held by the adapter
    pub fn balance_of(&self, _user: Address) -> U256 {
        self.vault().balance_of(self.env().self_address())
    }

    /// Underlying value of the adapter's Sett shares
    pub fn balance_of_token(&self, user: Address) -> U256 {
        let vault = self.vault();
        let shares = self.balance_of(user);
        self.checked(ShareMath::amount_for_shares(
            shares,
            vault.balance(),
            vault.total_supply(),
        ))
    }

    /// Pull `amount` of underlying from the caller and deposit it into the Sett
    ///
    /// # Arguments
    /// * `amount` - Underlying to supply; the caller must have approved it
    /// * `to` - Beneficiary, recorded in the emitted event
    pub fn supply_token_to(&mut self, amount: U256, to: Address) {
        if amount.is_zero() {
            self.env().revert(YieldSourceError::InvalidAmount);
        }

        let caller = self.env().caller();
        let this = self.env().self_address();
        let sett_address = self.sett();
        let mut token = self.underlying();

        if token.allowance(caller, this) < amount {
            self.env().revert(YieldSourceError::InsufficientAllowance);
        }
        if !token.transfer_from(caller, this, amount) {
            self.env().revert(YieldSourceError::TransferFailed);
        }
        if !token.approve(sett_address, amount) {
            self.env().revert(YieldSourceError::TransferFailed);
        }

        let mut vault = self.vault();
        let shares_before = vault.balance_of(this);
        // Paused or unapproved Setts revert here
        vault.deposit(amount);
        let shares = self.checked(ShareMath::checked_delta(vault.balance_of(this), shares_before));
        if shares.is_zero() {
            self.env().revert(YieldSourceError::ZeroShares);
        }

        self.env().emit_event(SuppliedTokenTo {
            from: caller,
            to,
            amount,
            shares,
        });
    }

    /// Withdraw `amount` of underlying from the Sett and send it to the caller
    ///
    /// # Returns
    /// The underlying actually received from the Sett, which may fall short of
    /// `amount` by the Sett's rounding
    pub fn redeem_token(&mut self, amount: U256) -> U256 {
        if amount.is_zero() {
            self.env().revert(YieldSourceError::InvalidAmount);
        }

        let caller = self.env().caller();
        let this = self.env().self_address();
        let mut vault = self.vault();
        let mut token = self.underlying();

        let required_shares = self.checked(ShareMath::shares_for_amount(
            amount,
            vault.total_supply(),
            vault.balance(),
        ));

        let token_before = token.balance_of(this);
        // Access, pause and the share bound are enforced by the Sett
        vault.withdraw(required_shares);
        let redeemed = self.checked(ShareMath::checked_delta(token.balance_of(this), token_before));

        if !token.transfer(caller, redeemed) {
            self.env().revert(YieldSourceError::TransferFailed);
        }

        self.env().emit_event(RedeemedToken {
            to: caller,
            requested: amount,
            redeemed,
            shares: required_shares,
        });

        redeemed
    }

    fn vault(&self) -> SettVaultContractRef {
        SettVaultContractRef::new(self.env(), self.sett())
    }

    fn underlying(&self) -> Cep18TokenContractRef {
        Cep18TokenContractRef::new(self.env(), self.deposit_token())
    }

    fn checked(&self, result: Result<U256, YieldSourceError>) -> U256 {
        match result {
            Ok(value) => value,
            Err(error) => self.env().revert(error),
        }
    }
}
