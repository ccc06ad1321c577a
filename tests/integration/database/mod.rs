//! Schema and seed tests against file-backed databases

mod schema_test;
