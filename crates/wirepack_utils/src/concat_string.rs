/// Concatenates string-like values into a `String` with a single allocation.
///
/// Every argument is evaluated twice, once to measure and once to copy, so only pass cheap
/// expressions.
#[macro_export]
macro_rules! concat_string {
  () => {
    String::new()
  };
  ($($s:expr),+ $(,)?) => {{
    let mut len = 0;
    $(len += AsRef::<str>::as_ref(&$s).len();)+
    let mut buf = String::with_capacity(len);
    $(buf.push_str(AsRef::<str>::as_ref(&$s));)+
    buf
  }};
}

#[test]
fn test_concat_string() {
  let name = String::from("math");
  assert_eq!(concat_string!(), "");
  assert_eq!(concat_string!(name, "-", "abc", ".js"), "math-abc.js");
}
