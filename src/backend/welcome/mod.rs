//! Welcome Module
//!
//! Static greetings and the age-gated welcome endpoints.
//!
//! - **`age_gate`** - the age check shared by `/parameters` and `/url-variables`
//! - **`handlers`** - `/`, `/super-simple`, `/not-found`, `/parameters`,
//!   `/url-variables/{name}/{age}`

pub mod age_gate;
pub mod handlers;

pub use age_gate::{check_age, AgeVerdict, MINIMUM_AGE};
pub use handlers::{home, not_found, parameters, super_simple, url_variables};
