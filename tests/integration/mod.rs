//! Integration tests driving the full router

mod api;
mod database;
