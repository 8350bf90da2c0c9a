//! In-process member store.
//!
//! Writes are serialised behind an async `RwLock`. Each update changes one
//! field group of one member in place, so concurrent edits of different
//! groups both survive and readers never observe a partial edit.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{MemberPersistenceError, MemberRepository};
use crate::domain::{DirectoryFilter, Member, MemberId, MemberProfile, NewMember};

#[derive(Debug)]
struct Store {
    members: BTreeMap<MemberId, Member>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            members: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// [`MemberRepository`] held entirely in memory.
///
/// Ids are assigned sequentially from one; `created_at` comes from the
/// injected clock.
pub struct InMemoryMemberRepository {
    store: RwLock<Store>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl InMemoryMemberRepository {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            store: RwLock::new(Store::default()),
            clock,
        }
    }

    /// Number of stored members.
    pub async fn len(&self) -> usize {
        self.store.read().await.members.len()
    }

    /// Whether the store holds no members.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.members.is_empty()
    }

    // Read and write happen under one write guard.
    async fn modify(
        &self,
        id: MemberId,
        change: impl FnOnce(&mut Member),
    ) -> Result<Member, MemberPersistenceError> {
        let mut store = self.store.write().await;
        let slot = store
            .members
            .get_mut(&id)
            .ok_or_else(|| MemberPersistenceError::missing(id.get()))?;
        change(slot);
        debug!(member_id = %id, "member updated");
        Ok(slot.clone())
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find(&self, id: MemberId) -> Result<Option<Member>, MemberPersistenceError> {
        Ok(self.store.read().await.members.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, MemberPersistenceError> {
        let wanted = email.trim().to_lowercase();
        Ok(self
            .store
            .read()
            .await
            .members
            .values()
            .find(|member| member.email() == wanted)
            .cloned())
    }

    async fn list(
        &self,
        filter: &DirectoryFilter,
        limit: usize,
    ) -> Result<Vec<Member>, MemberPersistenceError> {
        let store = self.store.read().await;
        let mut matching: Vec<&Member> = store
            .members
            .values()
            .filter(|member| filter.matches(member))
            .collect();
        matching.sort_by_key(|member| (member.created_at(), member.id()));
        Ok(matching.into_iter().take(limit).cloned().collect())
    }

    async fn insert(&self, member: NewMember) -> Result<Member, MemberPersistenceError> {
        let mut store = self.store.write().await;
        let email = member.email.trim().to_lowercase();
        if store.members.values().any(|existing| existing.email() == email) {
            return Err(MemberPersistenceError::duplicate_email(email));
        }
        let id = MemberId::new(store.next_id)
            .map_err(|err| MemberPersistenceError::query(err.to_string()))?;
        store.next_id += 1;
        let created = Member::register(id, member, self.clock.utc());
        store.members.insert(id, created.clone());
        debug!(member_id = %id, "member inserted");
        Ok(created)
    }

    async fn update_about(
        &self,
        id: MemberId,
        about: String,
    ) -> Result<Member, MemberPersistenceError> {
        self.modify(id, |member| member.set_about(about)).await
    }

    async fn update_profile(
        &self,
        id: MemberId,
        profile: MemberProfile,
    ) -> Result<Member, MemberPersistenceError> {
        self.modify(id, |member| member.set_profile(profile)).await
    }
}
