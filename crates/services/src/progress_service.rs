use std::sync::Arc;

use tokio::sync::Mutex;

use seekho_core::model::{CompletionSet, ModuleId};
use storage::repository::KeyValueRepository;

use crate::error::ProgressError;

/// Fixed storage key for the serialized list of completed module ids.
pub const PROGRESS_KEY: &str = "seekho-completed-modules";

/// Loads and persists the user's completion set.
///
/// The set is stored as one JSON array of module ids under [`PROGRESS_KEY`],
/// written through on every toggle. It never expires and is valid even when
/// it references modules the curriculum no longer serves.
///
/// Writes go through a fair gate, so saves issued in quick succession land
/// in call order and a slow earlier write cannot erase a later one.
#[derive(Clone)]
pub struct ProgressService {
    kv: Arc<dyn KeyValueRepository>,
    write_gate: Arc<Mutex<()>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            kv,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Load the persisted completion set.
    ///
    /// Absent, unreadable, and malformed data all collapse to an empty set;
    /// nothing is surfaced to the caller beyond a warn-level trace.
    pub async fn load(&self) -> CompletionSet {
        let raw = match self.kv.get(PROGRESS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return CompletionSet::new(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read saved progress, starting empty");
                return CompletionSet::new();
            }
        };

        match serde_json::from_str::<Vec<ModuleId>>(&raw) {
            Ok(ids) => CompletionSet::from_ids(ids),
            Err(err) => {
                tracing::warn!(error = %err, "malformed saved progress, starting empty");
                CompletionSet::new()
            }
        }
    }

    /// Persist `set` as the authoritative completion state.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the set cannot be serialized or written.
    pub async fn save(&self, set: &CompletionSet) -> Result<(), ProgressError> {
        let raw = serde_json::to_string(&set.to_vec())?;
        let _guard = self.write_gate.lock().await;
        self.kv.put(PROGRESS_KEY, &raw).await?;
        Ok(())
    }

    /// Toggle `id` in `set` and persist the resulting set immediately.
    ///
    /// Returns the new set on success.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the new set cannot be serialized or
    /// written.
    pub async fn toggle(
        &self,
        set: &CompletionSet,
        id: &ModuleId,
    ) -> Result<CompletionSet, ProgressError> {
        let next = set.toggled(id);
        self.save(&next).await?;
        Ok(next)
    }
}
