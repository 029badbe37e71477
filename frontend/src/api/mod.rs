mod auth;
pub mod client;
pub mod types;

pub use client::*;
pub use types::*;

/// Resource paths, relative to the API base.
pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/dashboard";
pub const OVERVIEW: &str = "/overview";
pub const USERS: &str = "/users";
pub const PRODUCTS: &str = "/products";
pub const ANALYTICS: &str = "/analytics";

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
