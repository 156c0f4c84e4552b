//! Static fixtures used across harnesses.
//!
//! `TIE_FIXTURE` holds entries that score identically for the queries the
//! harnesses use, so ordering among them exposes the tie-break policy.

use chwilio::IndexEntry;
use std::path::{Path, PathBuf};

use super::builders::IndexEntryBuilder;

/// Queries paired with the title expected at rank 1 in the built-in English
/// catalogue.
pub const EN_TOP_HITS: &[(&str, &str)] = &[
    ("funding", "Funding & Grants"),
    ("Funding & Grants", "Funding & Grants"),
    ("schools", "Sport in Schools"),
    ("disability", "Disability Sport"),
    ("contact", "Contact Us"),
    ("safeguarding", "Safeguarding"),
];

/// Same for the built-in Welsh catalogue.
pub const CY_TOP_HITS: &[(&str, &str)] = &[
    ("cyllid", "Cyllid a Grantiau"),
    ("ysgolion", "Chwaraeon mewn Ysgolion"),
    ("diogelu", "Diogelu"),
    ("newyddion", "Newyddion"),
];

/// Queries that match nothing in either locale.
pub const NO_MATCH_QUERIES: &[&str] = &["xyzzynomatch", "qqqq", "zzzz zzzz"];

/// Three entries identical in every scored field, in a known order.
pub fn tie_fixture() -> Vec<IndexEntry> {
    ["/first", "/second", "/third"]
        .into_iter()
        .map(|url| {
            IndexEntryBuilder::new("Netball Clubs")
                .excerpt("Find a netball club near you")
                .keywords(["netball", "clubs"])
                .url(url)
                .build()
        })
        .collect()
}

/// A small index with an exact-title target and several partial matches.
pub fn exact_vs_partial_fixture() -> Vec<IndexEntry> {
    vec![
        IndexEntryBuilder::new("Rugby Coaching Courses")
            .excerpt("Rugby coaching for every level")
            .keywords(["rugby", "coaching", "courses"])
            .build(),
        IndexEntryBuilder::new("Coaching")
            .excerpt("Support for coaches")
            .build(),
        IndexEntryBuilder::new("Coaching Awards")
            .excerpt("Coaching celebrated")
            .keywords(["coaching"])
            .build(),
    ]
}

/// Serialise `entries` as a JSON index file inside `dir`.
pub fn write_index_file(dir: &Path, name: &str, entries: &[IndexEntry]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(entries).unwrap()).unwrap();
    path
}
