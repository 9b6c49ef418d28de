// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod decode;
pub mod error;
pub mod hal_traits;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From decode.rs
pub use decode::{decode_samples, transmitted_checksum, SAMPLE_COUNT};

// From error.rs
pub use error::Dht22Error;

// From hal_traits.rs
pub use hal_traits::{Dht22Line, Dht22Timer, Level};

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.

// From types.rs
pub use types::Reading;

// --- Feature-gated re-exports ---

// embedded-hal integration adapter (from hal_traits.rs)
#[cfg(feature = "impl-hal")]
pub use hal_traits::OpenDrainLine;
