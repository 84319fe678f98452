/// Business logic services layer
use crate::clients::{CatalogClient, UpdatesClient};
use crate::domain::{LikeState, Mission};
use crate::errors::{ApiError, ApiResult};
use crate::filters::{explore, Exploration, FilterOptions};
use crate::optimistic::{OptimisticCommand, Rollback};
use crate::utils::count_pick;
use chrono::{Datelike, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

/// Immutable catalog snapshot shared by concurrent readers
pub type Catalog = Arc<Vec<Mission>>;

/// Mission catalog service
pub struct CatalogService {
    client: CatalogClient,
    snapshot: RwLock<Option<Catalog>>,
    first_fetch: Mutex<()>,
}

impl CatalogService {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            snapshot: RwLock::new(None),
            first_fetch: Mutex::new(()),
        }
    }

    /// Service preloaded with a catalog, without touching the network
    #[cfg(test)]
    pub fn with_snapshot(client: CatalogClient, missions: Vec<Mission>) -> Self {
        Self {
            client,
            snapshot: RwLock::new(Some(Arc::new(missions))),
            first_fetch: Mutex::new(()),
        }
    }

    /// Refetch the catalog. A failed fetch never replaces a good snapshot;
    /// with nothing cached yet it installs an empty catalog.
    pub async fn refresh(&self) -> Catalog {
        match self.client.fetch_missions().await {
            Ok(missions) => {
                info!("Catalog refreshed: {} missions", missions.len());
                let catalog = Arc::new(missions);
                *self.snapshot.write().await = Some(catalog.clone());
                catalog
            }
            Err(e) => {
                warn!("Catalog fetch from {} failed: {}", self.client.missions_url(), e);
                let mut guard = self.snapshot.write().await;
                guard.get_or_insert_with(|| Arc::new(Vec::new())).clone()
            }
        }
    }

    /// Current snapshot, fetched once if nothing is cached. Concurrent callers
    /// on an empty cache wait for the same first fetch.
    pub async fn snapshot(&self) -> Catalog {
        if let Some(catalog) = self.cached().await {
            return catalog;
        }
        let _first = self.first_fetch.lock().await;
        if let Some(catalog) = self.cached().await {
            return catalog;
        }
        self.refresh().await
    }

    async fn cached(&self) -> Option<Catalog> {
        self.snapshot.read().await.clone()
    }

    /// Run an explorer query against the current snapshot
    pub async fn explore(&self, params: &HashMap<String, String>) -> Exploration {
        let catalog = self.snapshot().await;
        explore(&catalog, params, Utc::now().year())
    }

    /// Dropdown options for the filter panel
    pub async fn options(&self) -> FilterOptions {
        FilterOptions::from_missions(&self.snapshot().await)
    }

    /// Look up a mission by its exact name
    pub async fn find(&self, name: &str) -> ApiResult<Mission> {
        self.snapshot()
            .await
            .iter()
            .find(|m| m.name == name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("mission '{}'", name)))
    }
}

/// Per-request caller identity, taken from the `Authorization` header
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub token: Option<String>,
}

impl SessionContext {
    pub fn from_authorization(header: Option<&str>) -> Self {
        let token = header
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Self { token }
    }

    pub fn require_token(&self) -> ApiResult<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| ApiError::Unauthorized("sign in to like updates".to_string()))
    }
}

/// Optimistic like toggling for mission updates
pub struct LikeService {
    client: UpdatesClient,
    likes: Mutex<HashMap<String, LikeState>>,
    /// One in-flight toggle per update; later toggles queue behind it
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl LikeService {
    pub fn new(client: UpdatesClient) -> Self {
        Self {
            client,
            likes: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Locally known like state of an update
    pub async fn get(&self, update_id: &str) -> LikeState {
        self.likes
            .lock()
            .await
            .get(update_id)
            .copied()
            .unwrap_or_default()
    }

    async fn update_lock(&self, update_id: &str) -> Arc<Mutex<()>> {
        self.in_flight
            .lock()
            .await
            .entry(update_id.to_string())
            .or_default()
            .clone()
    }

    /// Toggle the like, confirm it upstream and roll back if that fails.
    /// Toggles on the same update run one at a time, so each starts from
    /// settled state and a rollback never undoes another toggle's result.
    pub async fn toggle(&self, update_id: &str, session: &SessionContext) -> ApiResult<LikeState> {
        validate_update_id(update_id)?;
        let token = session.require_token()?;

        let update_lock = self.update_lock(update_id).await;
        let _serialized = update_lock.lock().await;

        let id = update_id.to_string();
        let mut wanted = LikeState::default();
        let command = OptimisticCommand::begin(&self.likes, |likes| {
            let previous = likes.get(&id).copied();
            let entry = likes.entry(id.clone()).or_default();
            *entry = toggled(*entry);
            wanted = *entry;

            let undo: Rollback<HashMap<String, LikeState>> =
                Box::new(move |likes: &mut HashMap<String, LikeState>| match previous {
                    Some(state) => {
                        likes.insert(id, state);
                    }
                    None => {
                        likes.remove(&id);
                    }
                });
            undo
        })
        .await;

        let outcome = self.client.set_like(update_id, wanted.liked, token).await;
        let body = command.settle(outcome).await?;

        // the upstream count is authoritative when it reports one
        let mut likes = self.likes.lock().await;
        let entry = likes.entry(update_id.to_string()).or_default();
        if let Some(count) = count_pick(&body, &["likes", "likeCount", "likesCount"]) {
            entry.likes = count;
        }
        Ok(*entry)
    }
}

/// Update ids are interpolated into upstream paths
fn validate_update_id(update_id: &str) -> ApiResult<()> {
    let valid = !update_id.is_empty()
        && update_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ApiError::InvalidInput(format!("bad update id '{}'", update_id)))
    }
}

fn toggled(state: LikeState) -> LikeState {
    if state.liked {
        LikeState {
            liked: false,
            likes: state.likes.saturating_sub(1),
        }
    } else {
        LikeState {
            liked: true,
            likes: state.likes + 1,
        }
    }
}
