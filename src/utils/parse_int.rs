/// Parse an optional integer from operator input
pub fn parse_optional_int(value: &str) -> Option<i64> {
    let t = value.trim();
    if t.is_empty() {
        None
    } else {
        t.parse::<i64>().ok()
    }
}
