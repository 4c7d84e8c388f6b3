//! Group identity.
//!
//! Two schemes live here and must not be mixed up:
//! - [`key_of`] is the grouping key: a readable slug of the base name. It is
//!   the only identity the aggregator buckets on, and it is what persistence
//!   stores as `group_id` so later partial re-scrapes land in the same family.
//! - [`storage_key`] is a hash-based surrogate for the persistence layer. It
//!   is never used to decide grouping.

use sha2::{Digest, Sha256};

/// Maximum length of a grouping key, in characters.
pub const GROUP_KEY_MAX_LEN: usize = 50;

/// Derives the grouping key for a base name.
///
/// Lowercases, replaces every run of characters outside `[a-z0-9]` with a
/// single `-`, trims leading and trailing `-`, and keeps the first
/// [`GROUP_KEY_MAX_LEN`] characters. Distinct base names can collide; that is
/// a known limitation of the heuristic.
#[must_use]
pub fn key_of(base_name: &str) -> String {
    let mut slug = String::with_capacity(base_name.len());
    let mut pending_dash = false;

    for c in base_name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    // Only ASCII is pushed, so byte truncation is char-safe.
    slug.truncate(GROUP_KEY_MAX_LEN);
    slug
}

/// Persistence-layer surrogate key: `grp_` plus the first 16 hex digits of
/// the SHA-256 of the lowercased, trimmed base name.
#[must_use]
pub fn storage_key(base_name: &str) -> String {
    let digest = Sha256::digest(base_name.trim().to_lowercase().as_bytes());
    let hex = format!("{digest:x}");
    format!("grp_{}", &hex[..16])
}
