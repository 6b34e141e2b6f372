pub mod cafe;
pub mod dashboard;
pub mod layout;
pub mod reports;
pub mod sessions;
pub mod settings;
