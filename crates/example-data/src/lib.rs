//! Deterministic example member profiles for the developer directory.
//!
//! This crate generates believable, reproducible member records from a JSON
//! seed registry. It is deliberately independent of backend domain types; the
//! backend converts [`ExampleMemberSeed`] values at the point of use.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use example_data::{SeedRegistry, generate_example_members};
//!
//! let json = r#"{
//!     "version": 1,
//!     "seeds": [{"name": "test-seed", "seed": 42, "memberCount": 3}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
//! let members = generate_example_members(seed_def, today).expect("generation succeeds");
//!
//! assert_eq!(members.len(), 3);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_example_members;
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{ABOUT_TEXT, DEFAULT_PASSWORD, ExampleMemberSeed};
pub use validation::{NAME_MAX, PROFILE_TITLES, is_valid_name, is_valid_profile_title};
