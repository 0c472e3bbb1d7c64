//! Events for the Sett vault

use odra::prelude::*;
use odra::casper_types::U256;

/// Event emitted when underlying is deposited into the vault
#[odra::event]
pub struct SettDeposit {
    /// Depositor, credited with the shares
    pub depositor: Address,
    /// Underlying received by the vault
    pub amount: U256,
    /// Shares minted
    pub shares: U256,
}

/// Event emitted when shares are redeemed for underlying
#[odra::event]
pub struct SettWithdraw {
    /// Share owner and receiver of the underlying
    pub owner: Address,
    /// Underlying paid out
    pub amount: U256,
    /// Shares burned
    pub shares: U256,
}

/// Event emitted when governance grants or revokes contract access
#[odra::event]
pub struct ContractAccessChanged {
    /// Contract whose access changed
    pub account: Address,
    /// Whether the contract may now interact with the vault
    pub approved: bool,
}

/// Event emitted when the vault is paused
#[odra::event]
pub struct Paused {
    /// Governance or guardian that paused
    pub by: Address,
}

/// Event emitted when the vault is unpaused
#[odra::event]
pub struct Unpaused {
    /// Governance that unpaused
    pub by: Address,
}
