use std::hash::Hash;

use itertools::Itertools;
use oxc_index::IndexVec;
use petgraph::{algo::tarjan_scc, graph::DiGraph};
use rustc_hash::FxHashMap;
use wirepack_common::{Artifact, ChunkIdx};
use wirepack_error::{BuildResult, SerializeError};
use wirepack_utils::{
  concat_string,
  hash_placeholder::{extract_hash_placeholders, replace_placeholder_with_hash},
  rayon::{IntoParallelIterator, IntoParallelRefIterator, ParallelIterator},
  xxhash::digest_to_hex,
};
use xxhash_rust::xxh3::Xxh3;

use crate::{types::IndexInstantiatedChunks, utils::export_path::hashed_filename};

/// Replaces every hash placeholder with the content hash of the chunk it stands for.
///
/// Chunks are hashed leaf-first over the strongly connected components of the "source mentions
/// the filename of" relation, so a chunk's hash covers the final filenames of every chunk it loads.
/// A chunk outside any cycle is named by `hashed_filename` over its final source. Members of a
/// cycle cannot see each other's final filenames; each one hashes its own source, the sources of
/// all members and its own preliminary filename instead.
///
/// Only placeholders that were handed out to chunks are replaced. Other placeholder-shaped text in
/// a chunk is left as is and does not count as a reference.
pub fn finalize_chunks(instantiated_chunks: IndexInstantiatedChunks) -> BuildResult<Vec<Artifact>> {
  let chunk_idx_by_placeholder = instantiated_chunks
    .iter_enumerated()
    .filter_map(|(chunk_idx, chunk)| {
      chunk.preliminary_filename.hash_placeholder().map(|placeholder| (placeholder, chunk_idx))
    })
    .collect::<FxHashMap<_, _>>();

  let index_direct_dependencies: IndexVec<ChunkIdx, Vec<ChunkIdx>> = instantiated_chunks
    .par_iter()
    .map(|chunk| {
      extract_hash_placeholders(&chunk.content)
        .iter()
        .filter_map(|placeholder| chunk_idx_by_placeholder.get(placeholder).copied())
        .collect_vec()
    })
    .collect::<Vec<_>>()
    .into();

  let mut reference_graph = DiGraph::<ChunkIdx, ()>::with_capacity(
    instantiated_chunks.len(),
    index_direct_dependencies.iter().map(Vec::len).sum(),
  );
  let nodes = instantiated_chunks
    .indices()
    .map(|chunk_idx| reference_graph.add_node(chunk_idx))
    .collect::<IndexVec<ChunkIdx, _>>();
  for (importer, dependencies) in index_direct_dependencies.iter_enumerated() {
    for dependency in dependencies {
      reference_graph.add_edge(nodes[importer], nodes[*dependency], ());
    }
  }

  // `tarjan_scc` yields components in reverse topological order: referenced chunks come first.
  let mut final_hashes_by_placeholder: FxHashMap<String, String> = FxHashMap::default();
  let mut final_filenames: IndexVec<ChunkIdx, Option<String>> =
    instantiated_chunks.iter().map(|_| None).collect();
  for component in tarjan_scc(&reference_graph) {
    let members = component.iter().map(|node| reference_graph[*node]).sorted().collect_vec();
    let is_cycle =
      members.len() > 1 || index_direct_dependencies[members[0]].contains(&members[0]);

    let sources = members
      .iter()
      .map(|chunk_idx| {
        replace_placeholder_with_hash(
          &instantiated_chunks[*chunk_idx].content,
          &final_hashes_by_placeholder,
        )
        .into_owned()
      })
      .collect_vec();

    if is_cycle {
      tracing::trace!(chunks = members.len(), "hashing chunks that reference each other");
    }

    for (source, chunk_idx) in sources.iter().zip(&members) {
      let preliminary_filename = &instantiated_chunks[*chunk_idx].preliminary_filename;
      let (Some(placeholder), Some(chunk_path)) =
        (preliminary_filename.hash_placeholder(), preliminary_filename.chunk_path())
      else {
        continue;
      };

      let (filename, hash) = if is_cycle {
        let mut hasher = Xxh3::default();
        hasher.update(source.as_bytes());
        sources.iter().for_each(|member_source| hasher.update(member_source.as_bytes()));
        preliminary_filename.hash(&mut hasher);
        let hash = digest_to_hex(hasher.digest128());
        (concat_string!(chunk_path, "-", hash, ".js"), hash)
      } else {
        let filename = hashed_filename(chunk_path, source);
        // `<chunk_path>-<hash>.js`
        let hash = filename[chunk_path.len() + 1..filename.len() - ".js".len()].to_string();
        (filename, hash)
      };

      final_hashes_by_placeholder.insert(placeholder.to_string(), hash);
      final_filenames[*chunk_idx] = Some(filename);
    }
  }

  let artifacts = instantiated_chunks
    .raw
    .into_par_iter()
    .map(|mut chunk| {
      let filename = final_filenames[chunk.origin_chunk]
        .clone()
        .unwrap_or_else(|| chunk.preliminary_filename.to_string());
      let content =
        replace_placeholder_with_hash(&chunk.content, &final_hashes_by_placeholder).into_owned();
      let requires = std::mem::take(&mut chunk.requires);
      (chunk.origin_chunk, requires, chunk.finalize(filename, content))
    })
    .collect::<Vec<_>>();

  let mut origin_by_filename = FxHashMap::default();
  let mut filename_by_chunk_idx = FxHashMap::default();
  for (chunk_idx, _, artifact) in &artifacts {
    if let Some(first) =
      origin_by_filename.insert(artifact.filename.as_str(), artifact.origin_filename.as_str())
    {
      return Err(
        SerializeError::FilenameCollision {
          filename: artifact.filename.clone(),
          first: first.to_string(),
          second: artifact.origin_filename.clone(),
        }
        .into(),
      );
    }
    filename_by_chunk_idx.insert(*chunk_idx, artifact.filename.clone());
  }

  Ok(
    artifacts
      .into_iter()
      .map(|(_, requires, mut artifact)| {
        artifact.metadata.requires = requires
          .iter()
          .filter_map(|chunk_idx| filename_by_chunk_idx.get(chunk_idx).cloned())
          .collect();
        artifact
      })
      .collect(),
  )
}
