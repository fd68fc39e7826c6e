//! Format and genre choices offered to the frontend.
//!
//! These lists feed dropdowns only. Records are not checked against them:
//! the seed inventory already carries genres (`Reggae`, `Alternative`) that
//! are not listed here.

/// Release formats the shop stocks.
pub const FORMATS: &[&str] = &["Vinyl", "CD"];

/// Genres offered when adding a record.
pub const GENRES: &[&str] = &["Rock", "Pop", "Jazz", "Hip-Hop", "Classical", "Electronic"];
