use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

static MODULE_PATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:\w+::)").unwrap());

/// `std::any::type_name` without module paths. Used as the default name of serializer plugins.
pub fn pretty_type_name<T: ?Sized>() -> Cow<'static, str> {
  MODULE_PATH_RE.replace_all(std::any::type_name::<T>(), "")
}

#[test]
fn test_pretty_type_name() {
  struct AssetCollector;
  assert_eq!(pretty_type_name::<AssetCollector>(), "AssetCollector");
  assert_eq!(pretty_type_name::<std::sync::Arc<AssetCollector>>(), "Arc<AssetCollector>");
  assert_eq!(pretty_type_name::<dyn std::fmt::Debug>(), "dyn Debug");
}
