//! Keeps record values and credentials out of debug logs.
//!
//! TXT/DKIM payloads can be long and access keys must never be printed in
//! full, so everything the providers log about a request goes through here.

/// Maximum number of bytes of a body kept in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a credential left visible.
const VISIBLE_SECRET_PREFIX: usize = 4;

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Truncates `s` to [`TRUNCATE_LIMIT`] bytes, noting the original length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Masks a credential, keeping a short prefix so keys stay distinguishable.
///
/// `AKIDEXAMPLE` becomes `AKID*******`.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(VISIBLE_SECRET_PREFIX).collect();
    let hidden = secret.chars().count().saturating_sub(VISIBLE_SECRET_PREFIX);
    format!("{visible}{}", "*".repeat(hidden))
}
