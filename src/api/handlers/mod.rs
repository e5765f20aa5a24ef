pub mod announcements;
pub mod auth;
pub mod catalog;
pub mod faculties;
pub mod root;
pub mod saved_items;
