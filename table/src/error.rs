use thiserror::Error;

/// Script-visible failures raised by table mutation.
///
/// The interpreter converts these into runtime panics at the call site that
/// triggered them; the target table is left unchanged in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The heap could not provide the backing buffer for a grow.
    #[error("can't grow table, out of heap")]
    OutOfHeap,
    /// The mutation would disturb an open iterator.
    #[error("can't mutate locked table")]
    Locked,
}
