pub mod analytics;
pub mod dashboard;
pub mod help;
pub mod login;
pub mod overview;
pub mod products;
pub mod settings;
pub mod users;
