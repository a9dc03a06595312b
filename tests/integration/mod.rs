//! Integration tests for the end-to-end runner

pub mod fault_injection;
pub mod profile_flow;
