//! Configuration module for Pennywise
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PennywisePaths;
pub use settings::{Settings, Theme};
