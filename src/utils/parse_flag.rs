/// Whether a yes/no answer is affirmative: only `y` or `Y` proceeds.
/// Empty input takes the default, "no".
pub fn is_affirmative(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("y")
}
