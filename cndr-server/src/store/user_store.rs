use async_trait::async_trait;
use chrono::Utc;
use cndr_core::{NewUser, Page, PaginationParams, User, UserId};
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Backing store for the `/users` routes.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn get(&self, id: &UserId) -> anyhow::Result<Option<User>>;

    async fn list(&self, params: PaginationParams) -> anyhow::Result<Page<User>>;

    async fn create(&self, new_user: NewUser) -> anyhow::Result<User>;
}

struct StoredUser {
    seq: u64,
    user: User,
}

/// Process-local store. Contents are lost when the server stops.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<DashMap<UserId, StoredUser>>,
    next_seq: Arc<AtomicU64>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, id: &UserId) -> anyhow::Result<Option<User>> {
        Ok(self.users.get(id).map(|entry| entry.user.clone()))
    }

    async fn list(&self, params: PaginationParams) -> anyhow::Result<Page<User>> {
        let mut all: Vec<(u64, User)> = self
            .users
            .iter()
            .map(|e| (e.seq, e.user.clone()))
            .collect();
        // insertion order
        all.sort_unstable_by_key(|(seq, _)| *seq);

        let total = all.len();
        let items = all
            .into_iter()
            .skip(params.offset())
            .take(params.limit as usize)
            .map(|(_, user)| user)
            .collect();

        Ok(Page {
            items,
            total,
            page: params.page,
            limit: params.limit,
        })
    }

    async fn create(&self, new_user: NewUser) -> anyhow::Result<User> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let user = new_user.into_user(UserId::new(), Utc::now());
        self.users.insert(
            user.id,
            StoredUser {
                seq,
                user: user.clone(),
            },
        );
        Ok(user)
    }
}
