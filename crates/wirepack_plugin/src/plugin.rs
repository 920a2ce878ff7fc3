use std::{borrow::Cow, sync::Arc};

use wirepack_utils::pretty_type_name::pretty_type_name;

use crate::{Next, SerializeArgs, SerializeFuture};

/// Wraps the rest of the serializer chain.
///
/// A plugin may rewrite the arguments before calling `next`, post-process what `next` returns, or
/// not call `next` at all. Errors should be returned as they are; the chain never retries.
pub trait SerializerPlugin: Send + Sync {
  fn name(&self) -> Cow<'static, str> {
    pretty_type_name::<Self>()
  }

  fn serialize<'a>(&'a self, args: SerializeArgs<'a>, next: Next<'a>) -> SerializeFuture<'a>;
}

pub type SharedSerializerPlugin = Arc<dyn SerializerPlugin>;
