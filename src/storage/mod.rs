//! In-memory storage layer.
//!
//! Every record collection is a [`Table`] seeded from JSON once per session.
//! Nothing is written back; a new session starts from the seed again.
//!
//! ## Seed files
//!
//! | File               | Record     |
//! |--------------------|------------|
//! | `customers.json`   | Customer   |
//! | `orders.json`      | Order      |
//! | `activities.json`  | Activity   |
//! | `cropCycles.json`  | CropCycle  |
//! | `reminders.json`   | Reminder   |
//!
//! ## Components
//!
//! - [`Store`]: all repositories for a session
//! - [`CustomerRepository`], [`OrderRepository`], [`ActivityRepository`]: CRM records
//! - [`PlanningRepository`]: crop cycles and reminders, with cascade delete
//! - [`SeedData`]: loads the seed, embedded or from a directory
//! - [`Latency`]: optional simulated backend delay

mod activity_repository;
mod customer_repository;
mod latency;
mod order_repository;
mod planning_repository;
mod seed;
mod store;
mod table;

pub use activity_repository::{ActivityRepository, DEFAULT_RECENT_LIMIT};
pub use customer_repository::CustomerRepository;
pub use latency::{Latency, Operation};
pub use order_repository::OrderRepository;
pub use planning_repository::PlanningRepository;
pub use seed::{SEED_FILES, SeedData};
pub use store::Store;
pub use table::{Placement, Record, Table};
