//! Command implementations for pokereview CLI

pub mod serve;

pub use serve::run_serve;
