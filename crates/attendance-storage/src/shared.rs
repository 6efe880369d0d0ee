use crate::store::AttendanceStore;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Cloneable handle to one [`AttendanceStore`] shared between tasks
///
/// Every read and write goes through a single mutex, so two concurrent
/// registrations of the same ID resolve to exactly one success and one
/// `DuplicateId`.
///
/// # Examples
///
/// ```
/// use attendance_storage::{AttendanceStore, SharedStore};
/// use attendance_storage::models::Student;
///
/// # async fn example() -> Result<(), attendance_core::Error> {
/// let shared = SharedStore::new(AttendanceStore::new());
/// let handle = shared.clone();
///
/// handle
///     .with(|store| store.add_student(Student::new("S101", "Alice")))
///     .await?;
///
/// assert!(shared.lock().await.get_student("S101").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<AttendanceStore>>,
}

impl SharedStore {
    pub fn new(store: AttendanceStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store for a sequence of operations.
    pub async fn lock(&self) -> MutexGuard<'_, AttendanceStore> {
        self.inner.lock().await
    }

    /// Run `f` with exclusive access to the store.
    pub async fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AttendanceStore) -> R,
    {
        let mut store = self.inner.lock().await;
        f(&mut store)
    }
}

impl From<AttendanceStore> for SharedStore {
    fn from(store: AttendanceStore) -> Self {
        Self::new(store)
    }
}
