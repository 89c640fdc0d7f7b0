//! P & B Advogados Associados single-page site.
//!
//! The page is a Dioxus app; scroll, reveal, navigation and form behavior
//! live in the platform-free [`motion`] module. [`extract`] backs the
//! `extract-ids` maintenance binaries.

pub mod app;
pub mod bridge;
pub mod components;
pub mod config;
pub mod constants;
pub mod content;
pub mod extract;
pub mod hooks;
pub mod logging;
pub mod motion;
pub mod platform;

pub use app::App;
