//! Infrastructure layer.
//!
//! Configuration loading and the bootstrap that brings a database up
//! against an [`App`](crate::app::App).
//!
//! # Submodules
//!
//! - [`bootstrap`] - Connects an application to its database
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
