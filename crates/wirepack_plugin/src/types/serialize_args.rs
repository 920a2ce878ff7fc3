use wirepack_common::{Module, ModuleGraph, NormalizedSerializerOptions};

/// Everything one serialize call works on. Every link of a plugin chain receives the same shape.
#[derive(Debug, Clone, Copy)]
pub struct SerializeArgs<'a> {
  /// Module id of the entry point. An empty string means `graph.entry_point()`.
  pub entry_file: &'a str,
  /// Scripts emitted verbatim at the top of the main chunk, in this order.
  pub pre_modules: &'a [Module],
  pub graph: &'a ModuleGraph,
  pub options: &'a NormalizedSerializerOptions,
}

impl<'a> SerializeArgs<'a> {
  pub fn new(graph: &'a ModuleGraph, options: &'a NormalizedSerializerOptions) -> Self {
    Self { entry_file: graph.entry_point(), pre_modules: &[], graph, options }
  }

  #[must_use]
  pub fn with_entry_file(mut self, entry_file: &'a str) -> Self {
    self.entry_file = entry_file;
    self
  }

  #[must_use]
  pub fn with_pre_modules(mut self, pre_modules: &'a [Module]) -> Self {
    self.pre_modules = pre_modules;
    self
  }
}
