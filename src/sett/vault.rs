//! Sett vault: pooled deposits of a single underlying token
//!
//! Shares are themselves a CEP-18 ledger. Accounts may deposit freely;
//! contracts need governance approval first. The vault starts paused.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use super::events::*;
use crate::errors::{SettError, YieldSourceError};
use crate::events::{Approval, Transfer};
use crate::share_math::{SafeMath, ShareMath};
use crate::token::Cep18TokenContractRef;

/// Sett vault contract
#[odra::module]
pub struct Sett {
    /// Share token name
    name: Var<String>,
    /// Share token symbol
    symbol: Var<String>,
    /// Share token decimals (same as the underlying)
    decimals: Var<u8>,
    /// Total shares outstanding
    total_supply: Var<U256>,
    /// Shares per holder
    balances: Mapping<Address, U256>,
    /// Share allowances: (owner, spender) -> amount
    allowances: Mapping<(Address, Address), U256>,

    /// Underlying token address
    token: Var<Address>,
    /// Governance address
    governance: Var<Address>,
    /// Guardian address (may pause)
    guardian: Var<Address>,
    /// Contracts approved to deposit and withdraw
    approved: Mapping<Address, bool>,
    /// Paused state
    paused: Var<bool>,
}

#[odra::module]
impl Sett {
    /// Initialize the vault over `token`
    pub fn init(&mut self, token: Address, governance: Address, guardian: Address) {
        let underlying = Cep18TokenContractRef::new(self.env(), token);

        let mut name = String::from("Badger Sett ");
        name.push_str(&underlying.name());
        let mut symbol = String::from("b");
        symbol.push_str(&underlying.symbol());

        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(underlying.decimals());
        self.total_supply.set(U256::zero());

        self.token.set(token);
        self.governance.set(governance);
        self.guardian.set(guardian);
        self.paused.set(true);
    }

    // ========================================
    // Share Token Functions
    // ========================================

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
        true
    }

    pub fn transfer_from(&mut self, owner: Address, to: Address, amount: U256) -> bool {
        let spender = self.env().caller();
        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            self.env().revert(SettError::InsufficientAllowance);
        }
        self.allowances.set(&(owner, spender), current_allowance - amount);
        self.transfer_internal(owner, to, amount);
        true
    }

    // ========================================
    // Vault Functions
    // ========================================

    /// Underlying token address
    pub fn token(&self) -> Address {
        self.token.get_or_revert_with(SettError::NotConfigured)
    }

    /// Total underlying held by the vault
    pub fn balance(&self) -> U256 {
        self.underlying().balance_of(self.env().self_address())
    }

    /// Underlying value of 1e18 shares
    pub fn get_price_per_full_share(&self) -> U256 {
        let price = ShareMath::price_per_full_share(self.balance(), self.total_supply());
        self.checked(price)
    }

    /// Deposit `amount` of underlying; shares go to the caller
    pub fn deposit(&mut self, amount: U256) {
        self.when_not_paused();
        self.defend();
        let depositor = self.env().caller();
        self.deposit_internal(depositor, amount);
    }

    /// Deposit the caller's whole underlying balance
    pub fn deposit_all(&mut self) {
        self.when_not_paused();
        self.defend();
        let depositor = self.env().caller();
        let amount = self.underlying().balance_of(depositor);
        self.deposit_internal(depositor, amount);
    }

    /// Burn `shares` of the caller and pay out their underlying value
    pub fn withdraw(&mut self, shares: U256) {
        self.when_not_paused();
        self.defend();
        let owner = self.env().caller();
        self.withdraw_internal(owner, shares);
    }

    /// Redeem every share the caller holds
    pub fn withdraw_all(&mut self) {
        self.when_not_paused();
        self.defend();
        let owner = self.env().caller();
        let shares = self.balance_of(owner);
        self.withdraw_internal(owner, shares);
    }

    // ========================================
    // Governance
    // ========================================

    pub fn governance(&self) -> Address {
        self.governance.get_or_revert_with(SettError::NotConfigured)
    }

    pub fn guardian(&self) -> Address {
        self.guardian.get_or_revert_with(SettError::NotConfigured)
    }

    /// Allow a contract to deposit and withdraw
    pub fn approve_contract_access(&mut self, account: Address) {
        self.only_governance();
        self.approved.set(&account, true);
        self.env().emit_event(ContractAccessChanged {
            account,
            approved: true,
        });
    }

    /// Withdraw a contract's access
    pub fn revoke_contract_access(&mut self, account: Address) {
        self.only_governance();
        self.approved.set(&account, false);
        self.env().emit_event(ContractAccessChanged {
            account,
            approved: false,
        });
    }

    pub fn is_approved(&self, account: Address) -> bool {
        self.approved.get(&account).unwrap_or_default()
    }

    pub fn set_governance(&mut self, governance: Address) {
        self.only_governance();
        self.governance.set(governance);
    }

    pub fn set_guardian(&mut self, guardian: Address) {
        self.only_governance();
        self.guardian.set(guardian);
    }

    /// Pause deposits and withdrawals (governance or guardian)
    pub fn pause(&mut self) {
        let caller = self.env().caller();
        if caller != self.governance() && caller != self.guardian() {
            self.env().revert(SettError::NotAuthorized);
        }
        self.paused.set(true);
        self.env().emit_event(Paused { by: caller });
    }

    /// Resume deposits and withdrawals (governance only)
    pub fn unpause(&mut self) {
        self.only_governance();
        self.paused.set(false);
        let caller = self.env().caller();
        self.env().emit_event(Unpaused { by: caller });
    }

    pub fn is_paused(&self) -> bool {
        self.paused.get_or_default()
    }

    // ========================================
    // Internal
    // ========================================

    fn deposit_internal(&mut self, depositor: Address, amount: U256) {
        let this = self.env().self_address();
        let mut underlying = self.underlying();

        let pool = underlying.balance_of(this);
        if pool.is_zero() && !self.total_supply().is_zero() {
            self.env().revert(SettError::EmptyPool);
        }
        if !underlying.transfer_from(depositor, this, amount) {
            self.env().revert(SettError::TransferFailed);
        }
        // Measure what actually arrived
        let received = self.checked(ShareMath::checked_delta(underlying.balance_of(this), pool));
        let shares = self.checked(ShareMath::shares_for_deposit(
            received,
            pool,
            self.total_supply(),
        ));

        self.mint(depositor, shares);

        self.env().emit_event(SettDeposit {
            depositor,
            amount: received,
            shares,
        });
    }

    fn withdraw_internal(&mut self, owner: Address, shares: U256) {
        let owner_shares = self.balance_of(owner);
        if owner_shares < shares {
            self.env().revert(SettError::InsufficientShares);
        }

        let amount = self.checked(ShareMath::amount_for_shares(
            shares,
            self.balance(),
            self.total_supply(),
        ));
        self.burn(owner, shares);

        if !self.underlying().transfer(owner, amount) {
            self.env().revert(SettError::TransferFailed);
        }

        self.env().emit_event(SettWithdraw {
            owner,
            amount,
            shares,
        });
    }

    fn mint(&mut self, to: Address, shares: U256) {
        let supply = self.checked(SafeMath::add(self.total_supply(), shares));
        self.total_supply.set(supply);
        let balance = self.checked(SafeMath::add(self.balance_of(to), shares));
        self.balances.set(&to, balance);

        self.env().emit_event(Transfer {
            from: self.env().self_address(),
            to,
            value: shares,
        });
    }

    fn burn(&mut self, from: Address, shares: U256) {
        let balance = self.balance_of(from);
        self.balances.set(&from, balance - shares);
        let supply = self.total_supply();
        self.total_supply.set(supply - shares);

        self.env().emit_event(Transfer {
            from,
            to: self.env().self_address(),
            value: shares,
        });
    }

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(SettError::InsufficientShares);
        }
        self.balances.set(&from, from_balance - amount);
        let to_balance = self.checked(SafeMath::add(self.balance_of(to), amount));
        self.balances.set(&to, to_balance);

        self.env().emit_event(Transfer {
            from,
            to,
            value: amount,
        });
    }

    fn underlying(&self) -> Cep18TokenContractRef {
        Cep18TokenContractRef::new(self.env(), self.token())
    }

    fn checked(&self, result: Result<U256, YieldSourceError>) -> U256 {
        match result {
            Ok(value) => value,
            Err(YieldSourceError::Overflow) => self.env().revert(SettError::Overflow),
            Err(YieldSourceError::Underflow) => self.env().revert(SettError::Underflow),
            Err(_) => self.env().revert(SettError::InsufficientShares),
        }
    }

    fn when_not_paused(&self) {
        if self.is_paused() {
            self.env().revert(SettError::VaultPaused);
        }
    }

    /// Accounts pass; contracts must be approved by governance
    fn defend(&self) {
        let caller = self.env().caller();
        if caller.is_contract() && !self.is_approved(caller) {
            self.env().revert(SettError::VaultAccessDenied);
        }
    }

    fn only_governance(&self) {
        let caller = self.env().caller();
        if caller != self.governance() {
            self.env().revert(SettError::NotGovernance);
        }
    }
}
