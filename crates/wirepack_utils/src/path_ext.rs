use std::path::Path;

use sugar_path::SugarPath;

pub trait PathExt {
  /// Forward-slash form of the path, whatever the host separator is.
  fn to_slash_string(&self) -> String;

  /// `self` relative to `root`, in slash form. Paths outside `root` keep their `../` prefix.
  fn relative_slash(&self, root: &Path) -> String;
}

impl PathExt for Path {
  fn to_slash_string(&self) -> String {
    self.to_slash_lossy().into_owned()
  }

  fn relative_slash(&self, root: &Path) -> String {
    if self.is_absolute() {
      self.relative(root).to_slash_string()
    } else {
      self.to_slash_string()
    }
  }
}

/// Drops the extension of the last segment of a slash path. Dotfiles such as `.babelrc` have no
/// extension.
pub fn strip_extension(slash_path: &str) -> &str {
  let segment_start = slash_path.rfind('/').map_or(0, |index| index + 1);
  match slash_path[segment_start..].rfind('.') {
    Some(dot) if dot > 0 => &slash_path[..segment_start + dot],
    _ => slash_path,
  }
}

/// Last segment of a slash path.
pub fn last_segment(slash_path: &str) -> &str {
  slash_path.rsplit('/').next().unwrap_or(slash_path)
}

#[test]
fn test_strip_extension() {
  assert_eq!(strip_extension("etc/external.tsx"), "etc/external");
  assert_eq!(strip_extension("index.android.js"), "index.android");
  assert_eq!(strip_extension("src.v2/readme"), "src.v2/readme");
  assert_eq!(strip_extension("config/.babelrc"), "config/.babelrc");
  assert_eq!(last_segment("etc/external"), "external");
  assert_eq!(last_segment("index"), "index");
}

#[test]
fn test_relative_slash() {
  let root = Path::new("/app");
  assert_eq!(Path::new("/app/etc/external.tsx").relative_slash(root), "etc/external.tsx");
  assert_eq!(Path::new("/lib/shared.js").relative_slash(root), "../lib/shared.js");
  assert_eq!(Path::new("virtual:entry").relative_slash(root), "virtual:entry");
}
