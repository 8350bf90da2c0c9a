//! Startup seeding orchestration.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use chrono::NaiveDate;
use example_data::{ExampleMemberSeed, GenerationError, RegistryError, SeedRegistry};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{MemberPersistenceError, MemberRepository};
use crate::domain::{
    DirectoryFilter, MemberProfile, MemberValidationError, NewMember, PasswordDigest, ProfileTitle,
};
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing or lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Member generation failed.
    #[error("example member generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated member did not map onto the domain model.
    #[error("generated member is invalid: {0}")]
    InvalidMember(#[from] MemberValidationError),
    /// The store rejected a generated member.
    #[error("failed to store example member: {0}")]
    Persistence(#[from] MemberPersistenceError),
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Members were generated and stored.
    Applied {
        /// Number of members inserted.
        member_count: usize,
    },
    /// The store already held members; nothing was written.
    AlreadySeeded,
}

/// Seed the member store on startup when enabled.
///
/// `today` anchors generated birth dates so runs are reproducible.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
/// use backend::outbound::persistence::InMemoryMemberRepository;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: false,
///     seed_name: None,
///     count: None,
///     registry_path: None,
/// };
/// let repo = InMemoryMemberRepository::new(Arc::new(mockable::DefaultClock));
/// let today = chrono::Utc::now().date_naive();
/// let outcome = seed_example_data_on_startup(&settings, &repo, today).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup<R>(
    settings: &ExampleDataSettings,
    repo: &R,
    today: NaiveDate,
) -> Result<Option<SeedOutcome>, StartupSeedingError>
where
    R: MemberRepository + ?Sized,
{
    if !settings.is_enabled() {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    if !repo.list(&DirectoryFilter::default(), 1).await?.is_empty() {
        info!(seed_key = seed_name, "member store already populated; skipping");
        return Ok(Some(SeedOutcome::AlreadySeeded));
    }

    let registry = load_registry(&settings.registry_path())?;
    let seed_def = registry.find_seed(seed_name)?;
    let seed_def = match settings.count {
        Some(count) => seed_def.with_member_count(count),
        None => seed_def.clone(),
    };

    let seeds = example_data::generate_example_members(&seed_def, today)?;
    let member_count = seeds.len();
    for seed in seeds {
        repo.insert(new_member(seed)?).await?;
    }
    info!(seed_key = seed_name, member_count, "example data seeding applied");
    Ok(Some(SeedOutcome::Applied { member_count }))
}

fn new_member(seed: ExampleMemberSeed) -> Result<NewMember, MemberValidationError> {
    let profile_title = Some(seed.profile_title.parse::<ProfileTitle>()?);
    Ok(NewMember {
        password: PasswordDigest::derive(&seed.password),
        email: seed.email,
        username: seed.username,
        profile: MemberProfile {
            first_name: seed.first_name,
            last_name: seed.last_name,
            city: seed.city,
            state: seed.state,
            country: seed.country,
            pincode: String::new(),
            profile_title,
        },
        date_of_birth: Some(seed.date_of_birth),
        contact_number: seed.contact_number,
        about: seed.about,
    })
}

fn load_registry(path: &Path) -> Result<SeedRegistry, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::RegistryRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "registry path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    Ok(SeedRegistry::from_json(&contents)?)
}
