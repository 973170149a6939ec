//! Character roster for Parlor.
//!
//! - `preset`: the five built-in personas
//! - `find_character`: resolve a picker argument (index or slug) to an index

mod preset;

pub use preset::default_characters;

use parlor_types::character::Character;
use parlor_types::error::CharacterError;

/// Resolve a user-supplied selector to a roster index.
///
/// Accepts a zero-based index (`"2"`), a slug (`"sable"`), or a display name
/// (case-insensitive).
pub fn find_character(roster: &[Character], selector: &str) -> Result<usize, CharacterError> {
    let needle = selector.trim();

    if let Ok(index) = needle.parse::<usize>() {
        if index < roster.len() {
            return Ok(index);
        }
        return Err(CharacterError::NotFound(needle.to_string()));
    }

    roster
        .iter()
        .position(|c| c.slug.eq_ignore_ascii_case(needle) || c.name.eq_ignore_ascii_case(needle))
        .ok_or_else(|| CharacterError::NotFound(needle.to_string()))
}
