//! Badger yield source
//!
//! Adapts a Badger Sett to the yield-source interface consumed by prize pools.
//! The adapter is the Sett's depositor of record: it holds shares for every
//! supplier in aggregate and keeps no per-user ledger of its own.

pub mod badger_yield_source;
pub mod interface;
pub mod events;

#[cfg(test)]
mod tests;

pub use badger_yield_source::BadgerYieldSource;
pub use events::*;
