//! Startup wiring for example member seeding.

mod config;
mod startup;

pub use config::ExampleDataSettings;
pub use startup::{SeedOutcome, StartupSeedingError, seed_example_data_on_startup};
