use crate::ModuleIdx;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
  /// Always loaded and executed first. Holds the entry's synchronous closure.
  Main { entry: ModuleIdx },
  /// Loaded on demand when `root` is imported dynamically.
  Async { root: ModuleIdx },
  /// Modules shared by several async chunks. Loaded, never executed on its own.
  #[default]
  Common,
}
