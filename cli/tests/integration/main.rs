//! Integration tests for venvboot
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! Setup and doctor scenarios put fake interpreters on a controlled PATH,
//! so they only run on Unix.

#[cfg(unix)]
mod fixture;
