use std::sync::Arc;

use futures::future::BoxFuture;
use wirepack_common::SerializeOutput;
use wirepack_error::BuildResult;

use crate::SerializeArgs;

pub type SerializeFuture<'a> = BoxFuture<'a, BuildResult<SerializeOutput>>;

/// A complete serialize step: takes a graph, returns the bundle or the split artifacts.
pub trait Serializer: Send + Sync {
  fn serialize<'a>(&'a self, args: SerializeArgs<'a>) -> SerializeFuture<'a>;
}

pub type SharedSerializer = Arc<dyn Serializer>;
