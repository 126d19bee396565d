/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

/// The capacity validator
pub mod capacity;

mod config;

#[doc(inline)]
pub use config::AllocConfig;
