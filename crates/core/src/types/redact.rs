//! Partial redaction of resource handles for log output.

/// Redact a billing resource handle down to its last three characters.
///
/// Confirmation log lines reference created resources as `'...abc'` so an
/// operator can correlate them against the billing dashboard without full
/// handles landing in log storage.
#[must_use]
pub fn id_suffix(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let tail: String = chars.iter().skip(chars.len().saturating_sub(3)).collect();
    format!("...{tail}")
}
