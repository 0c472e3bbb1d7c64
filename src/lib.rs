#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

// Shared definitions
pub mod errors;
pub mod events;
pub mod share_math;

// Underlying token
pub mod token;

// Badger Sett vault
pub mod sett;

// Yield source adapter
pub mod yield_source;

// Yield source consumer
pub mod prize_pool;
