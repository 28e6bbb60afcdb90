use crate::ops::store::TaskStore;

/// Notification contract between a `TaskStore` and whatever displays it.
///
/// The store calls these synchronously, after the triggering mutation has
/// finished, and hands over a shared borrow of itself so the surface can
/// re-query counts and rows. The store only ever holds a `Weak` handle to
/// the surface; once the surface is dropped notifications stop.
pub trait PresentationPort: Send + Sync {
    /// The whole active sequence may have changed; reload every row.
    fn list_changed(&self, store: &TaskStore);

    /// Only the row at `index` of the active sequence changed.
    fn row_changed(&self, store: &TaskStore, index: usize);

    /// The count label is stale; re-read `TaskStore::count_display_text`.
    fn count_changed(&self, store: &TaskStore);
}
