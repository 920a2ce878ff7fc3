use arcstr::ArcStr;
use oxc_index::IndexVec;
use wirepack_utils::bitset::BitSet;

use crate::{ChunkIdx, ChunkKind, Module, ModuleIdx, PreliminaryFilename};

#[derive(Debug, Default)]
pub struct Chunk {
  pub kind: ChunkKind,
  /// Emission order.
  pub modules: Vec<ModuleIdx>,
  /// The async chunks whose closure contained these modules before deduplication.
  pub bits: BitSet,
  pub name: Option<ArcStr>,
  pub preliminary_filename: Option<PreliminaryFilename>,
  /// Chunks that must be loaded before this one. Sorted by `ChunkIdx`.
  pub requires: Vec<ChunkIdx>,
}

impl Chunk {
  pub fn new(kind: ChunkKind, bits: BitSet, modules: Vec<ModuleIdx>) -> Self {
    Self { kind, bits, modules, ..Self::default() }
  }

  pub fn is_main(&self) -> bool {
    matches!(self.kind, ChunkKind::Main { .. })
  }

  pub fn is_async(&self) -> bool {
    matches!(self.kind, ChunkKind::Async { .. })
  }

  pub fn is_common(&self) -> bool {
    matches!(self.kind, ChunkKind::Common)
  }

  pub fn entry_module_idx(&self) -> Option<ModuleIdx> {
    match self.kind {
      ChunkKind::Main { entry } => Some(entry),
      ChunkKind::Async { .. } | ChunkKind::Common => None,
    }
  }

  /// The module the chunk is named after: the entry or async root, else the first module.
  pub fn root_module_idx(&self) -> Option<ModuleIdx> {
    match self.kind {
      ChunkKind::Main { entry } => Some(entry),
      ChunkKind::Async { root } => Some(root),
      ChunkKind::Common => self.modules.first().copied(),
    }
  }

  pub fn root_module<'module>(
    &self,
    modules: &'module IndexVec<ModuleIdx, Module>,
  ) -> Option<&'module Module> {
    self.root_module_idx().map(|idx| &modules[idx])
  }

  pub fn preliminary_filename(&self) -> &PreliminaryFilename {
    self
      .preliminary_filename
      .as_ref()
      .expect("preliminary filenames are assigned before chunks are rendered")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kind_drives_flags() {
    let entry = ModuleIdx::from_usize(0);
    let main = Chunk::new(ChunkKind::Main { entry }, BitSet::default(), vec![entry]);
    assert!(main.is_main() && !main.is_async());

    let common = Chunk::new(ChunkKind::Common, BitSet::new(2), vec![ModuleIdx::from_usize(3)]);
    assert!(common.is_common() && !common.is_async());
    assert_eq!(common.root_module_idx(), Some(ModuleIdx::from_usize(3)));
    assert_eq!(common.entry_module_idx(), None);
  }
}
