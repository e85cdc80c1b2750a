//! Command implementations for the CLI
//!
//! - start: Start the API server
//! - estimate: Run either savings calculator from the terminal
//! - catalog: List services and demo model prices
//! - test: Test configuration validity
//! - config: Configuration display and validation

pub mod catalog;
pub mod config;
pub mod estimate;
pub mod start;
pub mod test;
