//! Collection Synchronization Controller
//!
//! The fetch/mutate/resync cycle. The controller owns the loaded
//! collection and the form state around it, talks to the backend through
//! the `RecordStore` seam, and never mutates the collection locally:
//! every successful write is followed by a full authoritative re-read, so
//! displayed state cannot diverge from server state once an operation
//! settles.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use super::confirm::ConfirmGate;
use super::store::RecordStore;
use super::suggest;
use crate::domain::{Record, RecordDraft};
use crate::error::{SyncError, SyncResult};

/// View state owned by the controller, guarded by one lock
struct ControllerState<R: Record> {
    /// Snapshot of server state as of the last successful load
    collection: Vec<R>,
    /// Active category constraint; None lists everything
    filter: Option<String>,
    /// Identifier of the record being edited, if any
    edit_target: Option<String>,
    /// Form buffer for the next create or update
    draft: R::Draft,
    /// Distinct categories for dropdown and autocomplete use
    categories: Vec<String>,
    /// Last blocking mutation failure, until dismissed or superseded
    last_error: Option<SyncError>,
}

/// Synchronizes one record collection against its backend.
///
/// Methods take `&self`; state lives behind a mutex so a presentation
/// layer can drive the controller from shared references, and so
/// overlapping in-flight loads are expressible. Reads are fail-soft
/// (an empty list beats a crashed view); writes surface blocking errors
/// through [`SyncController::last_error`].
pub struct SyncController<R: Record> {
    store: Arc<dyn RecordStore<R>>,
    gate: Arc<dyn ConfirmGate>,
    state: Mutex<ControllerState<R>>,
    /// Monotonic tag for load calls; responses that are no longer the
    /// latest issued are discarded on arrival
    issued_loads: AtomicU64,
}

impl<R: Record> SyncController<R> {
    /// Controller over a backend store and a delete-confirmation gate
    pub fn new(store: Arc<dyn RecordStore<R>>, gate: Arc<dyn ConfirmGate>) -> Self {
        Self {
            store,
            gate,
            state: Mutex::new(ControllerState {
                collection: Vec::new(),
                filter: None,
                edit_target: None,
                draft: R::Draft::default(),
                categories: Vec::new(),
                last_error: None,
            }),
            issued_loads: AtomicU64::new(0),
        }
    }

    /// Re-read the collection from the backend.
    ///
    /// Success replaces the collection wholesale, preserving server
    /// order, and regenerates the category projection. Failure resets the
    /// collection to empty and is only logged, never surfaced: the view
    /// keeps rendering. A response that resolves after a newer load was
    /// issued is discarded, whatever its arrival order.
    pub async fn load(&self) {
        // Filter snapshot and sequence tag are taken under one lock, so
        // tag order always matches filter-read order
        let (filter, seq) = {
            let state = self.state.lock().await;
            let seq = self.issued_loads.fetch_add(1, Ordering::SeqCst) + 1;
            (state.filter.clone(), seq)
        };

        let listed = self.store.list(filter.as_deref()).await;
        let categories = self.store.categories().await;

        let mut state = self.state.lock().await;
        if seq != self.issued_loads.load(Ordering::SeqCst) {
            log::debug!("{} load #{seq} superseded in flight, discarding", R::LABEL);
            return;
        }
        state.collection = match listed {
            Ok(records) => records,
            Err(err) => {
                log::warn!("{} list failed, showing empty collection: {err}", R::LABEL);
                Vec::new()
            }
        };
        state.categories = match categories {
            Ok(listed) if !listed.is_empty() => listed,
            // No dedicated listing on this backend: derive from what loaded
            Ok(_) => distinct_categories(&state.collection),
            Err(err) => {
                log::warn!("category listing failed, dropdown will be empty: {err}");
                Vec::new()
            }
        };
    }

    /// Submit the draft as a new record.
    ///
    /// Returns `Ok(true)` when a request round-trip happened: the draft is
    /// cleared and the collection resynced. Returns `Ok(false)` when
    /// validation stopped the submit locally; nothing is sent and nothing
    /// is surfaced. Returns `Err` when the backend refused, leaving the
    /// draft intact for retry and the failure in [`Self::last_error`].
    pub async fn create(&self) -> SyncResult<bool> {
        let draft = self.state.lock().await.draft.clone();
        if let Err(err) = draft.validate() {
            log::debug!("{} create skipped: {err}", R::LABEL);
            return Ok(false);
        }
        match self.store.create(&draft).await {
            // The created record is not merged locally; the resync is
            // the authoritative view of it
            Ok(_) => {
                {
                    let mut state = self.state.lock().await;
                    state.draft = R::Draft::default();
                    state.last_error = None;
                }
                self.load().await;
                Ok(true)
            }
            Err(err) => {
                self.state.lock().await.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Replace the identified record with the draft's fields.
    ///
    /// Only valid while `id` is the current edit target; anything else is
    /// a no-op returning `Ok(false)`. The full record shape is re-sent,
    /// including fields the user never touched. Success leaves edit mode
    /// and resyncs; a backend refusal keeps edit mode active so the user
    /// can correct and retry.
    pub async fn update(&self, id: &str) -> SyncResult<bool> {
        let draft = {
            let state = self.state.lock().await;
            if state.edit_target.as_deref() != Some(id) {
                log::debug!("update of {} {id} ignored: not the edit target", R::LABEL);
                return Ok(false);
            }
            state.draft.clone()
        };
        if let Err(err) = draft.validate() {
            log::debug!("{} update skipped: {err}", R::LABEL);
            return Ok(false);
        }
        match self.store.update(id, &draft).await {
            Ok(()) => {
                {
                    let mut state = self.state.lock().await;
                    state.edit_target = None;
                    state.draft = R::Draft::default();
                    state.last_error = None;
                }
                self.load().await;
                Ok(true)
            }
            Err(err) => {
                self.state.lock().await.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Delete the identified record, behind the confirmation gate.
    ///
    /// A declined prompt sends nothing and returns `Ok(false)`. Success
    /// resyncs; if the deleted record was being edited, edit mode is
    /// cleared so the edit target always names a live record.
    pub async fn remove(&self, id: &str) -> SyncResult<bool> {
        let prompt = format!("Delete this {}?", R::LABEL);
        if !self.gate.confirm(&prompt).await {
            log::debug!("delete of {} {id} declined", R::LABEL);
            return Ok(false);
        }
        match self.store.delete(id).await {
            Ok(()) => {
                {
                    let mut state = self.state.lock().await;
                    if state.edit_target.as_deref() == Some(id) {
                        state.edit_target = None;
                        state.draft = R::Draft::default();
                    }
                    state.last_error = None;
                }
                self.load().await;
                Ok(true)
            }
            Err(err) => {
                self.state.lock().await.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Replace the category filter and reload immediately.
    ///
    /// An empty selection means no filter. Every change produces exactly
    /// one request; there is no debounce.
    pub async fn set_filter(&self, filter: Option<&str>) {
        let filter = filter.filter(|value| !value.is_empty()).map(str::to_string);
        self.state.lock().await.filter = filter;
        self.load().await;
    }

    /// Enter edit mode for the identified record.
    ///
    /// Copies the record's fields into the draft and makes `id` the edit
    /// target, replacing any previous one atomically. Returns false and
    /// changes nothing when the id is not in the loaded collection.
    pub async fn begin_edit(&self, id: &str) -> bool {
        let mut state = self.state.lock().await;
        let draft = match state.collection.iter().find(|record| record.id() == id) {
            Some(record) => record.to_draft(),
            None => {
                log::debug!("cannot edit {} {id}: not in the loaded collection", R::LABEL);
                return false;
            }
        };
        state.draft = draft;
        state.edit_target = Some(id.to_string());
        true
    }

    /// Leave edit mode and reset the form buffer
    pub async fn cancel_edit(&self) {
        let mut state = self.state.lock().await;
        state.edit_target = None;
        state.draft = R::Draft::default();
    }

    /// Current form buffer contents
    pub async fn draft(&self) -> R::Draft {
        self.state.lock().await.draft.clone()
    }

    /// Mutate the form buffer in place; the field-binding hook
    pub async fn edit_draft<F>(&self, mutate: F)
    where
        F: FnOnce(&mut R::Draft),
    {
        mutate(&mut self.state.lock().await.draft);
    }

    /// Snapshot of the loaded collection, in server order
    pub async fn collection(&self) -> Vec<R> {
        self.state.lock().await.collection.clone()
    }

    /// Active category filter
    pub async fn filter(&self) -> Option<String> {
        self.state.lock().await.filter.clone()
    }

    /// Identifier currently in edit mode
    pub async fn edit_target(&self) -> Option<String> {
        self.state.lock().await.edit_target.clone()
    }

    /// Distinct categories for the filter dropdown
    pub async fn categories(&self) -> Vec<String> {
        self.state.lock().await.categories.clone()
    }

    /// Autocomplete suggestions for a partial category input
    pub async fn suggest_categories(&self, input: &str) -> Vec<String> {
        suggest::suggestions(input, &self.state.lock().await.categories)
    }

    /// Last blocking mutation failure, until dismissed
    pub async fn last_error(&self) -> Option<SyncError> {
        self.state.lock().await.last_error.clone()
    }

    /// Dismiss the blocking error notification
    pub async fn clear_error(&self) {
        self.state.lock().await.last_error = None;
    }
}

/// Distinct non-empty categories in first-appearance order
fn distinct_categories<R: Record>(collection: &[R]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in collection {
        if let Some(category) = record.category() {
            if !seen.iter().any(|have| have == category) {
                seen.push(category.to_string());
            }
        }
    }
    seen
}
