// tests/listing_flow.rs — Integration test: sort-then-resolve listing flow
//
// Drives the public API the way a directory lister would: build DisplayItems
// from scanned names and metadata, order them with a selected strategy, then
// resolve a glyph per entry for rendering.

use dirglyph::{
    DisplayItem, NodeKind, SortDirection, SortField, file_icon, folder_icon, sort_by_predicate,
    sort_items,
};





////////////////////////////////////////////////////////////////////////////////
//
//  scanned_entries
//
//  A fixed directory scan: (file name, size, mtime seconds).
//
////////////////////////////////////////////////////////////////////////////////

fn scanned_entries() -> Vec<DisplayItem> {
    [
        ("readme.md",     1_204, 1_700_000_300),
        ("Cargo.toml",       98, 1_700_000_100),
        (".gitignore",       24, 1_700_000_000),
        ("main.rs",       5_800, 1_700_000_500),
        ("logo.png",     88_000, 1_700_000_200),
        ("LICENSE",       1_068, 1_700_000_400),
    ]
    .iter()
    .map (|&(name, size, mtime)| DisplayItem::new (name, size, mtime))
    .collect()
}





////////////////////////////////////////////////////////////////////////////////
//
//  Tests
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn size_ordering_then_glyphs() {
    let mut items = scanned_entries();
    sort_items(&mut items, SortField::Size, SortDirection::Ascending);

    let sizes: Vec<u64> = items.iter().map (|i| i.size).collect();
    assert!(sizes.windows (2).all (|w| w[0] <= w[1]));

    // Every sorted entry still resolves to a glyph
    for item in &items {
        assert!(!file_icon(&item.basename, &item.ext).is_ascii());
    }
}

#[test]
fn time_ordering_descending_newest_first() {
    let mut items = scanned_entries();
    sort_items(&mut items, SortField::Time, SortDirection::Descending);

    let times: Vec<i64> = items.iter().map (|i| i.mtime).collect();
    assert!(times.windows (2).all (|w| w[0] >= w[1]));
    assert_eq!(items[0].file_name(), "main.rs");
}

#[test]
fn kind_ordering_clusters_extensions() {
    let mut items = scanned_entries();
    sort_items(&mut items, SortField::Kind, SortDirection::Ascending);

    let listed: Vec<String> = items.iter().map (|i| i.file_name()).collect();
    // Hidden first ("." key), then extensionless ("0" sentinel), then
    // extension groups in order: md, png, rs, toml
    assert_eq!(
        listed,
        [".gitignore", "LICENSE", "readme.md", "logo.png", "main.rs", "Cargo.toml"]
    );
}

#[test]
fn rendered_glyphs_hit_expected_tables() {
    // Reserved full names beat plain extensions
    assert_eq!(file_icon("Cargo", "toml"), file_icon("cargo", "lock"));
    assert_ne!(file_icon("Cargo", "toml"), file_icon("other", "toml"));

    // Folder names resolve exactly; unknown folders share the one default
    assert_ne!(folder_icon(".git"), folder_icon("random"));
    assert_eq!(folder_icon("random"), folder_icon("also_random"));

    // Special nodes bypass name resolution entirely
    assert_ne!(NodeKind::Pipe.glyph(), NodeKind::Socket.glyph());
}

#[test]
fn custom_predicate_orders_like_a_caller_would() {
    let mut items = scanned_entries();
    // Hidden entries last, then alphabetical by on-disk name
    sort_by_predicate(&mut items, |lhs, rhs| {
        if lhs.hidden != rhs.hidden {
            return !lhs.hidden;
        }
        lhs.file_name() < rhs.file_name()
    });

    let listed: Vec<String> = items.iter().map (|i| i.file_name()).collect();
    assert_eq!(
        listed,
        ["Cargo.toml", "LICENSE", "logo.png", "main.rs", "readme.md", ".gitignore"]
    );
}
