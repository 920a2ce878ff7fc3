/// Renders `value` as a double-quoted JavaScript/JSON string literal.
pub fn to_string_literal(value: &str) -> String {
  serde_json::Value::from(value).to_string()
}

#[test]
fn test_to_string_literal() {
  assert_eq!(to_string_literal("/app/index.js"), r#""/app/index.js""#);
  assert_eq!(to_string_literal("a\"b\\c\n"), r#""a\"b\\c\n""#);
}
