//! Directory listing and profile lookup.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{MemberRepository, MembersQuery};
use crate::domain::{Error, Member, MemberId};

/// Number of members shown on the directory index.
pub const DIRECTORY_PAGE_SIZE: usize = 20;

/// Case-insensitive "contains" filter on country and city.
///
/// Blank criteria are ignored, so the default filter matches everyone.
///
/// # Examples
/// ```
/// use backend::domain::DirectoryFilter;
///
/// let filter = DirectoryFilter::new(Some("  "), Some("Lon"));
/// assert_eq!(filter.country(), None);
/// assert_eq!(filter.city(), Some("lon"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    country: Option<String>,
    city: Option<String>,
}

impl DirectoryFilter {
    /// Build a filter; blank criteria are dropped and the rest lower-cased.
    #[must_use]
    pub fn new(country: Option<&str>, city: Option<&str>) -> Self {
        Self {
            country: normalise(country),
            city: normalise(city),
        }
    }

    /// Normalised country criterion.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Normalised city criterion.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Whether `member` satisfies every present criterion.
    #[must_use]
    pub fn matches(&self, member: &Member) -> bool {
        let profile = member.profile();
        contains(&profile.country, self.country.as_deref())
            && contains(&profile.city, self.city.as_deref())
    }
}

fn normalise(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
}

fn contains(haystack: &str, needle: Option<&str>) -> bool {
    needle.is_none_or(|text| haystack.to_lowercase().contains(text))
}

/// Read-side service implementing [`MembersQuery`].
#[derive(Clone)]
pub struct DirectoryService<R> {
    repo: Arc<R>,
}

impl<R> DirectoryService<R> {
    /// Build the service over `repo`.
    pub const fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> MembersQuery for DirectoryService<R>
where
    R: MemberRepository,
{
    async fn list_members(&self, filter: &DirectoryFilter) -> Result<Vec<Member>, Error> {
        Ok(self.repo.list(filter, DIRECTORY_PAGE_SIZE).await?)
    }

    async fn member(&self, id: MemberId) -> Result<Member, Error> {
        self.repo
            .find(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("member {id} not found")))
    }
}
