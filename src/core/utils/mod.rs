#[macro_use]
mod safety;
pub mod console;
