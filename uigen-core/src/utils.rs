//! Shared string utilities for code generation.

/// Turn an arbitrary string into a valid identifier.
///
/// Characters that cannot appear in an identifier become `_`, and a leading
/// digit is prefixed with `_`. An empty input yields `"_"`.
pub fn sanitize_identifier(s: &str) -> String {
    let mut result: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}
