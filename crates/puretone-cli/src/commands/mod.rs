//! Command implementations for the puretone CLI.

pub mod generate;
pub mod validate;
