//! Command implementations

pub mod doctor;
pub mod setup;
pub mod version;
