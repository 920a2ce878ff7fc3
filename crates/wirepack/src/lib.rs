mod graph;
mod serializer;
mod stages;
mod types;
mod utils;

pub use crate::{
  graph::ChunkGraph,
  serializer::{create_serializer_from_plugins, with_serializer_plugins, BaseSerializer},
  stages::split::reachability::{collect_async_roots, reachable_from},
  types::SharedOptions,
  utils::{
    export_path::{chunk_base_name, hashed_filename, path_for, ExportPathCache},
    normalize_options::normalize_options,
    render_wire_module::{render_run_statement, render_wire_module, RenderWireModuleArgs},
  },
};
pub use wirepack_common::*;
pub use wirepack_error::{BuildError, BuildResult, SerializeError};
pub use wirepack_plugin::{
  Next, SerializeArgs, SerializeFuture, Serializer, SerializerConfig, SerializerPlugin,
  SharedSerializer, SharedSerializerPlugin,
};
