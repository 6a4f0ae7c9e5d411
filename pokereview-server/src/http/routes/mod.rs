//! Route handlers organized by resource

pub mod health;
pub mod pokemon;
pub mod review;
