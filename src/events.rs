//! Event definitions shared by the token ledgers and the prize pool
use odra::prelude::*;
use odra::casper_types::U256;
use odra::prelude::Address;

/// Event emitted when tokens or vault shares are transferred
#[odra::event]
pub struct Transfer {
    /// From address
    pub from: Address,
    /// To address
    pub to: Address,
    /// Amount transferred
    pub value: U256,
}

/// Event emitted when approval is granted
#[odra::event]
pub struct Approval {
    /// Owner address
    pub owner: Address,
    /// Spender address
    pub spender: Address,
    /// Amount approved
    pub value: U256,
}

/// Event emitted when the prize pool credits tickets
#[odra::event]
pub struct TicketsMinted {
    /// Account that paid the deposit
    pub operator: Address,
    /// Account credited with tickets
    pub to: Address,
    /// Tickets minted
    pub amount: U256,
}

/// Event emitted when the prize pool burns tickets on withdrawal
#[odra::event]
pub struct TicketsBurned {
    /// Ticket holder
    pub from: Address,
    /// Tickets burned
    pub amount: U256,
    /// Underlying returned by the yield source
    pub redeemed: U256,
}
