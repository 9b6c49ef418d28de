// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::Dht22Error;
pub use common::Reading;
pub use driver::SyncDriver;
