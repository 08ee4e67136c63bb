/// Genre → search term expansion
///
/// OMDb search only matches title text, so a genre is approximated by words
/// that tend to appear in titles of that genre. Titles found this way are
/// re-checked against their real genre metadata by the collector; genres whose
/// proxy words miss relevant titles simply yield fewer results.
const GENRE_TERMS: &[(&str, &[&str])] = &[
    ("action", &["action", "adventure", "superhero", "martial arts", "spy"]),
    ("comedy", &["comedy", "funny", "humor", "romantic comedy", "parody"]),
    ("drama", &["drama", "emotional", "family", "biographical", "historical"]),
    ("horror", &["horror", "scary", "thriller", "supernatural", "zombie"]),
    ("sci-fi", &["science fiction", "sci-fi", "space", "future", "alien"]),
    ("romance", &["romance", "love", "romantic", "wedding", "relationship"]),
    ("thriller", &["thriller", "suspense", "mystery", "crime", "psychological"]),
    ("animation", &["animation", "animated", "cartoon", "pixar", "disney"]),
    ("fantasy", &["fantasy", "magic", "wizard", "medieval", "adventure"]),
    ("crime", &["crime", "gangster", "mafia", "detective", "police"]),
];

const FALLBACK_SUFFIXES: &[&str] = &["movie", "film"];

/// Returns the ordered search terms used to discover titles of `genre`
///
/// Unknown genres search for the genre name itself followed by "movie" and "film".
pub fn expand(genre: &str) -> Vec<String> {
    let genre = genre.trim();

    GENRE_TERMS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(genre))
        .map(|(_, terms)| terms.iter().map(|t| t.to_string()).collect())
        .unwrap_or_else(|| {
            std::iter::once(genre.to_string())
                .chain(FALLBACK_SUFFIXES.iter().map(|s| s.to_string()))
                .collect()
        })
}
