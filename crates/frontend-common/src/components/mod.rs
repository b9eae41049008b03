//! Shared components module

pub mod spinner;

pub use spinner::LoadingSpinner;
