//! UI components: the navbar, page sections and shared building blocks.
pub mod common;
pub mod sections;

mod navbar;

pub use navbar::Navbar;
