use std::collections::hash_map::Entry;

use arcstr::ArcStr;
use oxc_index::IndexVec;
use rustc_hash::FxHashMap;
use wirepack_common::{ChunkIdx, PreliminaryFilename};
use wirepack_utils::{
  concat_string,
  hash_placeholder::{extract_hash_placeholders, HashPlaceholderGenerator},
  rayon::{IntoParallelRefIterator, ParallelIterator},
};

use crate::{graph::ChunkGraph, utils::export_path::chunk_base_name};

use super::GenerateStage;

impl GenerateStage<'_> {
  /// Notices:
  /// - Names only depend on module ids and chunk order, so they are stable across builds and OSes.
  /// - The hash part of every filename is a placeholder until the chunks are finalized.
  /// - Placeholder-shaped text in module ids and sources is never reused as a placeholder.
  pub(super) fn generate_chunk_name_and_preliminary_filenames(&self, chunk_graph: &mut ChunkGraph) {
    let modules = self.graph.modules();

    let index_pre_generated_names: IndexVec<ChunkIdx, ArcStr> = chunk_graph
      .chunk_table
      .par_iter()
      .map(|chunk| {
        chunk.root_module(modules).map_or(arcstr::literal!("chunk"), |module| {
          ArcStr::from(chunk_base_name(&self.export_paths.path_for(&module.id, self.options)))
        })
      })
      .collect::<Vec<_>>()
      .into();

    let mut used_name_counts: FxHashMap<ArcStr, u32> = FxHashMap::default();
    let mut make_unique_name = |name: &ArcStr| {
      let mut candidate = name.clone();
      loop {
        match used_name_counts.entry(candidate.clone()) {
          Entry::Occupied(mut occ) => {
            // This name is already used
            let next_count = *occ.get();
            occ.insert(next_count + 1);
            candidate =
              ArcStr::from(concat_string!(name, itoa::Buffer::new().format(next_count)).as_str());
          }
          Entry::Vacant(vac) => {
            // This is the first time we see this name
            let name = vac.key().clone();
            vac.insert(2);
            break name;
          }
        }
      }
    };

    let export_root = self.options.export_root();
    let reserved_placeholders = modules
      .par_iter()
      .chain(self.pre_modules.par_iter())
      .flat_map_iter(|module| {
        let mut found = extract_hash_placeholders(&module.id);
        found.extend(extract_hash_placeholders(&module.source));
        found
      })
      .collect();
    let mut hash_placeholder_generator = HashPlaceholderGenerator::new(reserved_placeholders);

    for (chunk_idx, chunk) in chunk_graph.chunk_table.iter_mut_enumerated() {
      let name = make_unique_name(&index_pre_generated_names[chunk_idx]);
      let hash_placeholder = hash_placeholder_generator.generate();
      let filename = concat_string!(export_root, "/", name, "-", hash_placeholder, ".js");

      chunk.preliminary_filename = Some(PreliminaryFilename::new(filename, Some(hash_placeholder)));
      chunk.name = Some(name);
    }
  }
}
