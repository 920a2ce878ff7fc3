pub mod artifact;
pub mod chunk_kind;
pub mod dependency_edge;
pub mod import_kind;
pub mod instantiated_chunk;
pub mod module_graph;
pub mod module_id;
pub mod preliminary_filename;
pub mod raw_idx;
pub mod serialize_output;
pub mod source;
pub mod source_joiner;
