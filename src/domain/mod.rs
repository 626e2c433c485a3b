pub mod contact;
pub mod content;
pub mod host;
pub mod models;
