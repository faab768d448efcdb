//! Property-based tests for navigation and lookup guarantees

mod determinism;
mod navigation;
