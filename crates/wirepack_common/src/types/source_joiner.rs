use super::source::Source;

/// Collects the pieces of a chunk and joins them with line breaks.
#[derive(Default)]
pub struct SourceJoiner<'source> {
  inner: Vec<Box<dyn Source + Send + 'source>>,
}

impl<'source> SourceJoiner<'source> {
  pub fn append_source<T: Source + Send + 'source>(&mut self, source: T) {
    self.inner.push(Box::new(source));
  }

  pub fn join(&self) -> String {
    let separators = self.inner.len().saturating_sub(1);
    let size_hint = self.inner.iter().map(|source| source.content().len()).sum::<usize>() + separators;

    let mut joined = String::with_capacity(size_hint);
    for (index, source) in self.inner.iter().enumerate() {
      if index > 0 {
        joined.push('\n');
      }
      joined.push_str(source.content());
    }
    joined
  }
}

#[test]
fn test_source_joiner() {
  let mut joiner = SourceJoiner::default();
  assert_eq!(joiner.join(), "");

  joiner.append_source("__d(a);");
  joiner.append_source(String::from("__r(\"a\");"));
  assert_eq!(joiner.join(), "__d(a);\n__r(\"a\");");
}
