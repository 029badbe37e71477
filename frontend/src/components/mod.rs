pub mod cards;
pub mod charts;
pub mod fetch;
pub mod guard;
pub mod layout;
pub mod sidebar;
pub mod table;
pub mod theme;
