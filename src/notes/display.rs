//! Size guard and layout for extracted notes.

/// Default maximum number of note lines shown for a single package.
pub const DEFAULT_NOTES_LIMIT: usize = 250;

/// Shown instead of the notes when they exceed the display limit.
pub const NOTES_LIMIT_MESSAGE: &str =
    "  The relevant notes for your upgrade are too long to be displayed here.";

/// Formats extracted notes for the console, or returns
/// [`NOTES_LIMIT_MESSAGE`] when there are more than `limit` lines.
///
/// The block gets a two space indent; every following line is prefixed
/// with a single space.
pub fn apply_display_limit<S: AsRef<str>>(notes: &[S], limit: usize) -> String {
    if notes.len() > limit {
        return NOTES_LIMIT_MESSAGE.to_string();
    }

    format_notes(notes)
}

/// Same layout as [`apply_display_limit`] without the size guard.
pub fn format_notes<S: AsRef<str>>(notes: &[S]) -> String {
    let joined = notes
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n ");

    format!("  {}", joined.trim())
}
