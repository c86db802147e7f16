//! daybook - Personal journaling backend
//!
//! A command-line journaling backend that keeps dated entries with
//! moods, tags, and attached media in a single JSON document, stores
//! uploaded media files on disk, and computes aggregate statistics.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaybookError;
