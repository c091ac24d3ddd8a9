//! UI layer for the digest GUI: view model and egui app shell.

pub mod app;

pub use app::DigestApp;
