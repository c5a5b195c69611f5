//! Genre normalization.
//!
//! MovieLens lists every genre tag of a movie ("Adventure|Children|Fantasy").
//! Recommendations group movies by exactly one label, picked here.

/// Separator between tags in the raw `genres` column
pub const GENRE_DELIMITER: char = '|';

/// Tags that win over whatever is listed first, highest priority first.
///
/// Family and genre-defining tags beat generic ones like "Drama", so a
/// "Drama|Horror" movie is grouped with horror movies.
pub const GENRE_PRIORITY: [&str; 7] = [
    "Children",
    "Animation",
    "Fantasy",
    "Horror",
    "Thriller",
    "Romance",
    "War",
];

/// Reduce a raw genre string to one label.
///
/// Example: "Comedy" -> "Comedy"
///          "Adventure|Children|Fantasy" -> "Children"
///          "Action|Crime" -> "Action"
pub fn normalize_genre(raw: &str) -> String {
    if !raw.contains(GENRE_DELIMITER) {
        return raw.to_string();
    }

    let tags: Vec<&str> = raw.split(GENRE_DELIMITER).collect();

    GENRE_PRIORITY
        .iter()
        .find(|&&priority| tags.contains(&priority))
        .copied()
        .or_else(|| tags.first().copied())
        .unwrap_or(raw)
        .to_string()
}
