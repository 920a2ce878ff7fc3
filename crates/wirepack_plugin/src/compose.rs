use std::sync::Arc;

use crate::{
  Next, SerializeArgs, SerializeFuture, Serializer, SharedSerializer, SharedSerializerPlugin,
};

struct PluginLink {
  plugin: SharedSerializerPlugin,
  next: SharedSerializer,
}

impl Serializer for PluginLink {
  fn serialize<'a>(&'a self, args: SerializeArgs<'a>) -> SerializeFuture<'a> {
    tracing::trace!(plugin = %self.plugin.name(), entry = args.entry_file, "serializer plugin");
    self.plugin.serialize(args, Next::new(self.next.as_ref()))
  }
}

/// Folds `plugins` around `inner`. The last plugin becomes the outermost link, so `[p1, p2]` runs
/// `p2`, then `p1`, then `inner`.
pub fn compose_serializers(
  inner: SharedSerializer,
  plugins: impl IntoIterator<Item = SharedSerializerPlugin>,
) -> SharedSerializer {
  plugins
    .into_iter()
    .fold(inner, |next, plugin| Arc::new(PluginLink { plugin, next }) as SharedSerializer)
}
