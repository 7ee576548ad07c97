//! Design-system linter for host design nodes.
//!
//! [`rules`] evaluates node snapshots against the active [`config::Profile`];
//! [`aggregate`] folds the findings into counted bulk errors.

pub mod aggregate;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod exit;
pub mod ignore;
pub mod messages;
pub mod node;
pub mod reporting;
pub mod rules;
pub mod snapshot;
pub mod theme;
pub mod types;
