mod compose;
mod next;
mod plugin;
mod serializer;
mod serializer_config;
mod types;

pub use crate::{
  compose::compose_serializers,
  next::Next,
  plugin::{SerializerPlugin, SharedSerializerPlugin},
  serializer::{SerializeFuture, Serializer, SharedSerializer},
  serializer_config::SerializerConfig,
  types::serialize_args::SerializeArgs,
};
