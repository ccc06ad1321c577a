//! Planets Module
//!
//! Read access to the planet catalogue.
//!
//! - **`db`** - explicit SQL over the `planets` table
//! - **`handlers`** - `GET /planets` and `GET /planets/{planet_id}`

/// Planet database operations
pub mod db;

/// Planet HTTP handlers
pub mod handlers;

pub use handlers::{list_planets, planet_details};
