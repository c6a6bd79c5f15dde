//! Core building blocks shared by every system.

#[macro_use]
pub mod utils;
pub mod error;
pub mod math;

pub use utils::console;
