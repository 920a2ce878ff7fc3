use std::ops::Deref;

use arcstr::ArcStr;

/// A filename that may still contain a hash placeholder.
///
/// Chunks reference each other by preliminary filename while rendering. Once every content hash is
/// known the placeholder is swapped for the real hash, in the filename and in every source that
/// mentions it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreliminaryFilename {
  filename: ArcStr,
  hash_placeholder: Option<String>,
}

impl PreliminaryFilename {
  pub fn new(filename: impl Into<ArcStr>, hash_placeholder: Option<String>) -> Self {
    Self { filename: filename.into(), hash_placeholder }
  }

  pub fn as_str(&self) -> &str {
    &self.filename
  }

  pub fn hash_placeholder(&self) -> Option<&str> {
    self.hash_placeholder.as_deref()
  }

  /// The filename without its `-<placeholder>.js` tail.
  pub fn chunk_path(&self) -> Option<&str> {
    let placeholder = self.hash_placeholder.as_deref()?;
    self.filename.strip_suffix(".js")?.strip_suffix(placeholder)?.strip_suffix('-')
  }
}

impl Deref for PreliminaryFilename {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.filename
  }
}

#[test]
fn test_chunk_path() {
  let filename =
    PreliminaryFilename::new("_expo/static/js/web/index-!~{000}~.js", Some("!~{000}~".to_string()));
  assert_eq!(filename.chunk_path(), Some("_expo/static/js/web/index"));
  assert_eq!(PreliminaryFilename::new("index.js", None).chunk_path(), None);
}
