mod serialize_error;

use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

pub use crate::serialize_error::SerializeError;

/// Every failure that can stop a serialize call. Most of the time there is exactly one error in
/// it, but plugins are allowed to report several at once.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// Looks for the first error of type `E`, e.g. `SerializeError`.
  pub fn downcast_ref<E>(&self) -> Option<&E>
  where
    E: Display + std::fmt::Debug + Send + Sync + 'static,
  {
    self.0.iter().find_map(|error| error.downcast_ref::<E>())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl std::error::Error for BuildError {}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<SerializeError> for BuildError {
  fn from(error: SerializeError) -> Self {
    Self(vec![error.into()])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;
