//! Version resolution layer for the CLI
//!
//! This module reads the installed version of the package from the host's
//! package metadata and collapses every lookup failure into the "dev" fallback.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ MetadataProvider │────▶│     Resolver     │────▶│       CLI        │
//! │     (lookup)     │     │ (fallback "dev") │     │ (version line)   │
//! └──────────────────┘     └──────────────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │    Providers     │
//! │ (cargo install)  │
//! └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`provider`]: Provider trait for reading installed package metadata
//! - [`providers`]: Concrete provider implementations (cargo install registry)
//! - [`resolver`]: One-shot resolution with the "dev" fallback
//! - [`error`]: Error types for metadata lookups

pub mod error;
pub mod provider;
pub mod providers;
pub mod resolver;
