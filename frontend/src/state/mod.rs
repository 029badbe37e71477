pub mod auth;
pub mod page_data;
pub mod session;
pub mod theme;
