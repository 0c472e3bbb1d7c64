//! Error definitions for the yield source, the Sett vault and the mock token
use odra::prelude::*;

/// Errors raised by the Badger yield source adapter
#[odra::odra_error]
pub enum YieldSourceError {
    /// Caller has not approved enough underlying token to the adapter
    InsufficientAllowance = 1,

    /// Underlying token transfer or approval returned false
    TransferFailed = 2,

    /// Adapter does not hold enough vault shares for the requested amount
    InsufficientShares = 3,

    /// Zero amount supplied or redeemed
    InvalidAmount = 4,

    /// Overflow error
    Overflow = 5,

    /// Underflow error
    Underflow = 6,

    /// Vault or token address missing from storage
    NotConfigured = 7,

    /// Supplied amount was too small to mint a single vault share
    ZeroShares = 8,
}

/// Errors raised by the Sett vault
#[odra::odra_error]
pub enum SettError {
    /// Vault is paused
    VaultPaused = 100,

    /// Contract caller has not been granted access by governance
    VaultAccessDenied = 101,

    /// Caller is not governance
    NotGovernance = 102,

    /// Caller is neither governance nor guardian
    NotAuthorized = 103,

    /// Owner holds fewer shares than requested
    InsufficientShares = 104,

    /// Insufficient share allowance for transfer
    InsufficientAllowance = 105,

    /// Underlying token address missing from storage
    NotConfigured = 106,

    /// Underlying token transfer returned false
    TransferFailed = 107,

    /// Overflow in share accounting
    Overflow = 108,

    /// Underflow in share accounting
    Underflow = 109,

    /// Shares are outstanding but the vault holds no underlying
    EmptyPool = 110,
}

/// Errors raised by the mock token
#[odra::odra_error]
pub enum TokenError {
    /// Insufficient allowance for transfer
    InsufficientAllowance = 200,

    /// Insufficient balance for operation
    InsufficientBalance = 201,

    /// Supply or balance overflow
    Overflow = 202,
}

/// Errors raised by the prize pool
#[odra::odra_error]
pub enum PrizePoolError {
    /// Zero amount deposited or withdrawn
    InvalidAmount = 300,

    /// Holder has fewer tickets than requested
    InsufficientTickets = 301,

    /// Caller may only withdraw its own tickets
    Unauthorized = 302,

    /// Token transfer returned false
    TransferFailed = 303,

    /// Yield source address missing from storage
    NotConfigured = 304,
}
