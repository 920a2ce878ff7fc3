use crate::{SerializeArgs, SerializeFuture, Serializer};

/// Handle to the remaining links of the chain.
#[derive(Clone, Copy)]
pub struct Next<'a> {
  inner: &'a dyn Serializer,
}

impl<'a> Next<'a> {
  pub(crate) fn new(inner: &'a dyn Serializer) -> Self {
    Self { inner }
  }

  pub fn run(self, args: SerializeArgs<'a>) -> SerializeFuture<'a> {
    self.inner.serialize(args)
  }
}

impl std::fmt::Debug for Next<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Next").finish_non_exhaustive()
  }
}
