use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::collections::FxIndexSet;

static HASH_PLACEHOLDER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"!~\{[0-9a-f]{3,}\}~").unwrap());

/// Hands out the tokens that stand in for content hashes until chunks are finalized.
///
/// Tokens are numbered in the order they are requested, so the same chunk order always yields the
/// same tokens. A token listed in `reserved` is never handed out: text that only looks like a
/// placeholder is left alone when placeholders are replaced.
#[derive(Debug, Default)]
pub struct HashPlaceholderGenerator<'a> {
  next_index: usize,
  reserved: FxHashSet<&'a str>,
}

impl<'a> HashPlaceholderGenerator<'a> {
  pub fn new(reserved: FxHashSet<&'a str>) -> Self {
    Self { next_index: 0, reserved }
  }

  pub fn generate(&mut self) -> String {
    loop {
      let placeholder = format!("!~{{{:03x}}}~", self.next_index);
      self.next_index += 1;
      if !self.reserved.contains(placeholder.as_str()) {
        return placeholder;
      }
    }
  }
}

pub fn extract_hash_placeholders(source: &str) -> FxIndexSet<&str> {
  HASH_PLACEHOLDER_RE.find_iter(source).map(|found| found.as_str()).collect()
}

/// Replaces every placeholder that has a known hash. Unknown placeholders are kept as is.
pub fn replace_placeholder_with_hash<'a>(
  source: &'a str,
  final_hashes: &FxHashMap<String, String>,
) -> Cow<'a, str> {
  HASH_PLACEHOLDER_RE.replace_all(source, |caps: &Captures| {
    let placeholder = &caps[0];
    final_hashes.get(placeholder).map_or_else(|| placeholder.to_string(), Clone::clone)
  })
}

#[test]
fn test_hash_placeholders() {
  let mut generator = HashPlaceholderGenerator::default();
  let first = generator.generate();
  let second = generator.generate();
  assert_eq!(first, "!~{000}~");
  assert_eq!(second, "!~{001}~");

  let source = format!("load('/js/math-{first}.js'); load('/js/shapes-{second}.js');");
  assert_eq!(extract_hash_placeholders(&source).into_iter().collect::<Vec<_>>(), [
    first.as_str(),
    second.as_str()
  ]);

  let mut hashes = FxHashMap::default();
  hashes.insert(first.clone(), "abc".to_string());
  assert_eq!(
    replace_placeholder_with_hash(&source, &hashes),
    format!("load('/js/math-abc.js'); load('/js/shapes-{second}.js');")
  );
  assert!(matches!(replace_placeholder_with_hash("no tokens", &hashes), Cow::Borrowed(_)));
}

#[test]
fn test_reserved_placeholders_are_skipped() {
  let input = "var a = '!~{000}~'; var b = '!~{002}~';";
  let reserved = extract_hash_placeholders(input).into_iter().collect();
  let mut generator = HashPlaceholderGenerator::new(reserved);
  assert_eq!(generator.generate(), "!~{001}~");
  assert_eq!(generator.generate(), "!~{003}~");
}
