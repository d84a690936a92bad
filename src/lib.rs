//! # Fieldbook - a farm CRM with crop planning
//!
//! Fieldbook keeps customers, orders and activities for an agricultural
//! supplier, plus the crop-planning side: crop cycles with projected harvest
//! dates, a monthly planting calendar and dated reminders.
//!
//! ## Features
//!
//! - **Harvest projection**: planting date plus a per-crop growing period
//! - **Planning calendar**: a Sunday-first 6x7 month grid of plantings and harvests
//! - **Reminders**: upcoming-window queries, cascade delete with their crop cycle
//! - **CRM records**: customers, orders and activities with search and metrics
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default config
//! fieldbook init
//!
//! # When will corn planted today be ready?
//! fieldbook harvest-date Corn 2024-04-15
//!
//! # Month view
//! fieldbook calendar --month 2024-08
//!
//! # What needs doing in the next two weeks
//! fieldbook reminders upcoming --days 14
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`dashboard`]: Summary metrics
//! - [`error`]: Error types and result aliases
//! - [`model`]: Record types and label enums
//! - [`planning`]: Harvest projection, calendar grid and schedule filters
//! - [`storage`]: In-memory repositories seeded from JSON
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.fieldbook.yml` configuration files and project discovery.
pub mod config;

pub mod dashboard;

/// Error types and result aliases.
///
/// Defines `FieldbookError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Record types.
///
/// Includes `Customer`, `Order`, `Activity`, `CropCycle` and `Reminder`.
pub mod model;

pub mod planning;

/// In-memory storage layer.
///
/// Repositories over tables seeded from JSON, one store per session.
pub mod storage;

/// Input validation utilities.
///
/// Validates titles, text lengths, acreage and required fields.
pub mod validation;
