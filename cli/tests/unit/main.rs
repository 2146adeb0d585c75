//! Unit tests for venvboot
//!
//! These tests use mocked ports and run fast without spawning processes.

mod architecture;
mod doctor_service;
