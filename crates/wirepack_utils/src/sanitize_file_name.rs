use std::borrow::Cow;

/// Makes `name` safe to use as a chunk file name. Anything outside `[A-Za-z0-9_-]` becomes `_`.
pub fn sanitize_file_name(name: &str) -> Cow<'_, str> {
  let is_safe = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_');
  if name.is_empty() {
    return Cow::Borrowed("_");
  }
  if name.chars().all(is_safe) {
    return Cow::Borrowed(name);
  }
  Cow::Owned(name.chars().map(|c| if is_safe(c) { c } else { '_' }).collect())
}

#[test]
fn test_sanitize_file_name() {
  assert_eq!(sanitize_file_name("\0+a=Z_0-"), "__a_Z_0-");
  assert_eq!(sanitize_file_name("[id]"), "_id_");
  assert_eq!(sanitize_file_name(""), "_");
  assert!(matches!(sanitize_file_name("colors"), Cow::Borrowed("colors")));
}
