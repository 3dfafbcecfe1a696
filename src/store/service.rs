//! Item service: one lifecycle operation per call, wrapped in a
//! read-modify-write cycle against the store
//!
//! Every call holds the store lock from read to write, so two concurrent
//! pick-ups by the same actor cannot both pass the admission check.

use std::sync::Arc;

use rand::Rng;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::domain;
use crate::errors::{CaseflowError, Result};
use crate::schemas::{Status, Timestamp, WorkItem};

use super::backend::ItemStore;
use super::clock::Clock;

const ID_ATTEMPTS: usize = 64;

/// Fields accepted when creating an item
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub received_date: Option<Timestamp>,
    #[serde(default)]
    pub logged_date: Option<Timestamp>,
}

/// Editable non-workflow fields. Any other field (status, assignee, timing)
/// fails to deserialize instead of being dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DetailsPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub received_date: Option<Timestamp>,
    #[serde(default)]
    pub logged_date: Option<Timestamp>,
}

/// A requested move to `status`, with the actor needed to enter `pick_up`
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionRequest {
    pub status: String,
    #[serde(default)]
    pub actor: Option<String>,
}

pub struct ItemService<S: ItemStore> {
    store: Arc<S>,
    /// Held from load to save by every call
    lock: Mutex<()>,
    clock: Arc<dyn Clock>,
}

impl<S: ItemStore + 'static> ItemService<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        ItemService {
            store: Arc::new(store),
            lock: Mutex::new(()),
            clock,
        }
    }

    /// Current time according to the service clock.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub async fn list(&self) -> Result<Vec<WorkItem>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    pub async fn get(&self, id: &str) -> Result<WorkItem> {
        let _guard = self.lock.lock().await;
        let items = self.load().await?;
        let idx = find_index(&items, id)?;
        Ok(items[idx].clone())
    }

    /// Create an unallocated item. Without an id, a free `W-NNNN` is generated.
    pub async fn create(&self, new_item: NewItem) -> Result<WorkItem> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        let now = self.clock.now();

        let id = match new_item.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => {
                if items.iter().any(|item| item.id == id) {
                    return Err(CaseflowError::Validation(format!("item {} already exists", id)));
                }
                id.to_string()
            }
            _ => generate_id(&items)?,
        };
        let title = new_item
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled");

        let item = WorkItem::new(id, title, now).with_dates(
            new_item.received_date.unwrap_or(now),
            new_item.logged_date.unwrap_or(now),
        );
        items.push(item.clone());
        self.save(items).await?;

        tracing::info!(item = %item.id, "item created");
        Ok(item)
    }

    /// Edit title and dates. Workflow fields are not reachable from here.
    pub async fn update_details(&self, id: &str, patch: DetailsPatch) -> Result<WorkItem> {
        self.mutate(id, "update", |item, _, _| {
            let mut next = item.clone();
            if let Some(title) = patch.title.as_deref() {
                next.title = domain::require_non_empty(title, "title")?;
            }
            next = next.with_dates(
                patch.received_date.unwrap_or(item.received_date),
                patch.logged_date.unwrap_or(item.logged_date),
            );
            Ok(next)
        })
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        let idx = find_index(&items, id)?;
        items.remove(idx);
        self.save(items).await?;
        tracing::info!(item = %id, "item deleted");
        Ok(())
    }

    pub async fn allocate(&self, id: &str, handler: &str) -> Result<WorkItem> {
        self.mutate(id, "allocate", |item, _, _| domain::allocate(item, handler))
            .await
    }

    pub async fn pick_up(&self, id: &str, actor: &str) -> Result<WorkItem> {
        self.mutate(id, "pick_up", |item, items, now| {
            domain::pick_up(item, actor, items, now)
        })
        .await
    }

    pub async fn move_to(&self, id: &str, target: Status) -> Result<WorkItem> {
        self.mutate(id, "move", |item, _, now| domain::move_to(item, target, now))
            .await
    }

    /// Route a raw transition request to pick-up or move.
    pub async fn transition(&self, id: &str, request: TransitionRequest) -> Result<WorkItem> {
        let target: Status = request.status.parse()?;
        if target != Status::PickUp {
            return self.move_to(id, target).await;
        }
        match request.actor.as_deref() {
            Some(actor) => self.pick_up(id, actor).await,
            None => Err(CaseflowError::Validation(
                "actor is required to pick up an item".to_string(),
            )),
        }
    }

    pub async fn add_comment(&self, id: &str, author: &str, text: &str) -> Result<WorkItem> {
        self.mutate(id, "comment", |item, _, now| {
            domain::add_comment(item, author, text, now)
        })
        .await
    }

    async fn mutate<F>(&self, id: &str, op: &'static str, f: F) -> Result<WorkItem>
    where
        F: FnOnce(&WorkItem, &[WorkItem], Timestamp) -> Result<WorkItem>,
    {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        let idx = find_index(&items, id)?;
        let now = self.clock.now();

        let next = match f(&items[idx], &items, now) {
            Ok(next) => next,
            Err(e) => {
                tracing::debug!(item = %id, op, "rejected: {}", e);
                return Err(e);
            }
        };
        items[idx] = next.clone();
        self.save(items).await?;

        tracing::info!(item = %id, op, status = %next.status, "item updated");
        Ok(next)
    }

    async fn load(&self) -> Result<Vec<WorkItem>> {
        let store = Arc::clone(&self.store);
        run_blocking(move || store.load_all()).await
    }

    async fn save(&self, items: Vec<WorkItem>) -> Result<()> {
        let store = Arc::clone(&self.store);
        run_blocking(move || store.save_all(&items)).await
    }
}

// Store I/O is synchronous; keep it off the async worker threads.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| CaseflowError::wrap(e, "store task failed"))?
}

fn find_index(items: &[WorkItem], id: &str) -> Result<usize> {
    items
        .iter()
        .position(|item| item.id == id)
        .ok_or_else(|| CaseflowError::NotFound(id.to_string()))
}

fn generate_id(items: &[WorkItem]) -> Result<String> {
    let mut rng = rand::thread_rng();
    for _ in 0..ID_ATTEMPTS {
        let candidate = format!("W-{}", rng.gen_range(1000..=9999));
        if !items.iter().any(|item| item.id == candidate) {
            return Ok(candidate);
        }
    }
    Err(CaseflowError::Validation(
        "could not generate a free item id; pass one explicitly".to_string(),
    ))
}
