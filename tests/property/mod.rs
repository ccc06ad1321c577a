//! Property-based tests

mod age_gate_proptest;
mod planet_proptest;
