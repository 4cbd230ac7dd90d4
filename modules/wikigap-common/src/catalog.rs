//! Curated topic catalog: the friendly category names shown to users, their
//! wiki category refs, and the three top-level groups they are picked from.

/// Friendly name → category ref, in catalog order.
pub const NAMED_CATEGORIES: &[(&str, &str)] = &[
    ("Architecture", "Category:Architecture"),
    ("Art", "Category:Arts"),
    ("Comics and anime", "Category:Comics"),
    ("Entertainment", "Category:Entertainment"),
    ("Fashion", "Category:Fashion"),
    ("Literature", "Category:Literature"),
    ("Music", "Category:Music"),
    ("Performing arts", "Category:Performing arts"),
    ("Sports", "Category:Sports"),
    ("TV and film", "Category:Television"),
    ("Video games", "Category:Video games"),
    ("Biography (all)", "Category:Biography"),
    ("Biography (women)", "Category:Women"),
    ("Business and economics", "Category:Business"),
    ("Education", "Category:Education"),
    ("Food and drink", "Category:Food and drink"),
    ("History", "Category:History"),
    ("Military and warfare", "Category:Military"),
    ("Philosophy and religion", "Category:Philosophy"),
    ("Politics and government", "Category:Politics"),
    ("Society", "Category:Society"),
    ("Transportation", "Category:Transport"),
    ("Biology", "Category:Biology"),
    ("Chemistry", "Category:Chemistry"),
    ("Computing", "Category:Computing"),
    ("Earth and environment", "Category:Earth sciences"),
    ("Engineering", "Category:Engineering"),
    ("Mathematics", "Category:Mathematics"),
    ("Medicine & Health", "Category:Health"),
    ("Physics", "Category:Physics"),
    ("Space", "Category:Astronomy"),
    ("Technology", "Category:Technology"),
];

pub const CATEGORY_GROUPS: &[(&str, &[&str])] = &[
    (
        "Culture",
        &[
            "Architecture",
            "Art",
            "Comics and anime",
            "Entertainment",
            "Fashion",
            "Literature",
            "Music",
            "Performing arts",
            "Sports",
            "TV and film",
            "Video games",
        ],
    ),
    (
        "History and Society",
        &[
            "Biography (all)",
            "Biography (women)",
            "Business and economics",
            "Education",
            "Food and drink",
            "History",
            "Military and warfare",
            "Philosophy and religion",
            "Politics and government",
            "Society",
            "Transportation",
        ],
    ),
    (
        "Science, Technology, and Math",
        &[
            "Biology",
            "Chemistry",
            "Computing",
            "Earth and environment",
            "Engineering",
            "Mathematics",
            "Medicine & Health",
            "Physics",
            "Space",
            "Technology",
        ],
    ),
];

/// Resolve a user-facing name to a category ref. Names outside the catalog
/// pass through unchanged, so callers can hand in raw "Category:..." refs.
pub fn resolve(name: &str) -> &str {
    NAMED_CATEGORIES
        .iter()
        .find(|(friendly, _)| *friendly == name)
        .map(|(_, category)| *category)
        .unwrap_or(name)
}
