// Parsing utilities
pub mod parse_flag;
pub mod parse_int;

// JSON utilities
pub mod json_converter;

// Re-export all utilities for convenient access
pub use parse_flag::is_affirmative;
pub use parse_int::parse_optional_int;
pub use json_converter::value_to_short_string;
