//! Sett - Badger's pooled, share-issuing vault
//!
//! A local stand-in for the vault the yield source wraps. Depositors receive
//! shares priced at `balance() / total_supply()`; yield shows up as underlying
//! sent to the vault. Strategy and controller plumbing are not modelled.

pub mod vault;
pub mod interface;
pub mod events;

pub use vault::Sett;
pub use events::*;
