//! Prize pool front for a yield source
//!
//! Deposits are forwarded to the yield source and tracked as tickets, one
//! ticket per unit of underlying. Interest earned by the source beyond the
//! ticket supply is reported as the award balance. Drawing winners is out
//! of scope for this contract.
use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::PrizePoolError;
use crate::events::{TicketsBurned, TicketsMinted};
use crate::token::Cep18TokenContractRef;
use crate::yield_source::interface::YieldSourceContractRef;

/// Prize pool contract
#[odra::module]
pub struct PrizePool {
    /// Yield source holding the deposits
    yield_source: Var<Address>,
    /// Underlying token, read from the yield source at init
    token: Var<Address>,
    /// Tickets per holder
    tickets: Mapping<Address, U256>,
    /// Tickets outstanding
    total_tickets: Var<U256>,
}

#[odra::module]
impl PrizePool {
    /// Bind the pool to a yield source
    pub fn init(&mut self, yield_source: Address) {
        let source = YieldSourceContractRef::new(self.env(), yield_source);
        self.token.set(source.deposit_token());
        self.yield_source.set(yield_source);
        self.total_tickets.set(U256::zero());
    }

    pub fn token(&self) -> Address {
        self.token.get_or_revert_with(PrizePoolError::NotConfigured)
    }

    pub fn yield_source(&self) -> Address {
        self.yield_source.get_or_revert_with(PrizePoolError::NotConfigured)
    }

    pub fn ticket_balance(&self, user: Address) -> U256 {
        self.tickets.get(&user).unwrap_or_default()
    }

    pub fn total_tickets(&self) -> U256 {
        self.total_tickets.get_or_default()
    }

    /// Underlying the pool can claim from the yield source
    pub fn balance(&self) -> U256 {
        self.source().balance_of_token(self.env().self_address())
    }

    /// Interest above the ticket supply
    pub fn award_balance(&self) -> U256 {
        let balance = self.balance();
        let tickets = self.total_tickets();
        if balance > tickets {
            balance - tickets
        } else {
            U256::zero()
        }
    }

    /// Deposit `amount` of the caller's underlying and credit tickets to `to`
    pub fn deposit_to(&mut self, to: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(PrizePoolError::InvalidAmount);
        }

        let operator = self.env().caller();
        let this = self.env().self_address();
        let source_address = self.yield_source();
        let mut token = self.underlying();

        if !token.transfer_from(operator, this, amount) {
            self.env().revert(PrizePoolError::TransferFailed);
        }
        if !token.approve(source_address, amount) {
            self.env().revert(PrizePoolError::TransferFailed);
        }
        self.source().supply_token_to(amount, this);

        let balance = self.ticket_balance(to);
        self.tickets.set(&to, balance + amount);
        let total = self.total_tickets();
        self.total_tickets.set(total + amount);

        self.env().emit_event(TicketsMinted {
            operator,
            to,
            amount,
        });
    }

    /// Burn `amount` of the caller's tickets and return the underlying
    ///
    /// # Returns
    /// The underlying redeemed from the yield source
    pub fn withdraw_instantly_from(&mut self, from: Address, amount: U256) -> U256 {
        if amount.is_zero() {
            self.env().revert(PrizePoolError::InvalidAmount);
        }
        let caller = self.env().caller();
        if caller != from {
            self.env().revert(PrizePoolError::Unauthorized);
        }

        let balance = self.ticket_balance(from);
        if balance < amount {
            self.env().revert(PrizePoolError::InsufficientTickets);
        }
        self.tickets.set(&from, balance - amount);
        let total = self.total_tickets();
        self.total_tickets.set(total - amount);

        let redeemed = self.source().redeem_token(amount);
        if !self.underlying().transfer(from, redeemed) {
            self.env().revert(PrizePoolError::TransferFailed);
        }

        self.env().emit_event(TicketsBurned {
            from,
            amount,
            redeemed,
        });

        redeemed
    }

    fn source(&self) -> YieldSourceContractRef {
        YieldSourceContractRef::new(self.env(), self.yield_source())
    }

    fn underlying(&self) -> Cep18TokenContractRef {
        Cep18TokenContractRef::new(self.env(), self.token())
    }
}
