pub mod footer;
pub mod header;
pub mod modals;
pub mod pages;
pub mod preloader;
