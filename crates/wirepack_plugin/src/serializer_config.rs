use crate::SharedSerializer;

#[derive(Default, Clone)]
pub struct SerializerConfig {
  /// Innermost step of a composed chain. `None` means the built-in serializer.
  pub custom_serializer: Option<SharedSerializer>,
}

impl std::fmt::Debug for SerializerConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SerializerConfig")
      .field("custom_serializer", &self.custom_serializer.as_ref().map(|_| "<serializer>"))
      .finish()
  }
}
