// item_comparator.rs — Display item sort orderings
//
// In-place ordering strategies over a slice of DisplayItems: by size, by
// modification time, and by kind (extension grouping with hidden and
// extensionless entries given sentinel keys). Descending order is an O(n)
// reversal of the ascending sort, not a re-sort, so tie order carries over.
//
// All strategies use the standard stable sort; equal sizes/times keep their
// input order as an implementation property, not a documented contract.

use std::cmp::Ordering;

use crate::display_item::DisplayItem;





////////////////////////////////////////////////////////////////////////////////
//
//  SortField / SortDirection
//
//  Strategy selection for sort_items. The caller picks these from whatever
//  surface it exposes (flags, keybindings); this module only dispatches.
//
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Size,   // smallest first
    Time,   // oldest first
    Kind,   // grouped by extension, then by name
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}





////////////////////////////////////////////////////////////////////////////////
//
//  Fixed strategies
//
////////////////////////////////////////////////////////////////////////////////

/// Sort by size in bytes, ascending.
pub fn sort_by_size(items: &mut [DisplayItem]) {
    items.sort_by (compare_size);
}

/// Sort by modification time, ascending (oldest first).
pub fn sort_by_time(items: &mut [DisplayItem]) {
    items.sort_by (compare_time);
}

/// Sort by kind key, then by base name within equal kinds.
pub fn sort_by_kind(items: &mut [DisplayItem]) {
    items.sort_by (compare_kind);
}

fn compare_size(lhs: &DisplayItem, rhs: &DisplayItem) -> Ordering {
    lhs.size.cmp (&rhs.size)
}

fn compare_time(lhs: &DisplayItem, rhs: &DisplayItem) -> Ordering {
    lhs.mtime.cmp (&rhs.mtime)
}

fn compare_kind(lhs: &DisplayItem, rhs: &DisplayItem) -> Ordering {
    let lhs_kind = kind_key (lhs);
    let rhs_kind = kind_key (rhs);

    if lhs_kind == rhs_kind {
        return lhs.basename.cmp (&rhs.basename);
    }
    lhs_kind.cmp (&rhs_kind)
}

/// Grouping key for the kind ordering. Hidden entries key as "." + ext and
/// cluster before the "0" sentinel that groups extensionless files, which in
/// turn sorts before any alphabetic extension.
fn kind_key(item: &DisplayItem) -> String {
    if item.is_hidden() {
        format!(".{}", item.ext)
    } else if item.ext.is_empty() {
        "0".to_string()
    } else {
        item.ext.clone()
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  reverse
//
//  In-place reversal for descending order. O(n) and its own inverse;
//  preserves the relative order the ascending sort established for ties.
//
////////////////////////////////////////////////////////////////////////////////

pub fn reverse<T>(items: &mut [T]) {
    items.reverse();
}





////////////////////////////////////////////////////////////////////////////////
//
//  sort_by_predicate
//
//  Sort by any boolean strict-weak-order predicate ("lhs sorts before
//  rhs"), using the same underlying sort as the fixed strategies. This is
//  the injection point for ad hoc orderings the caller defines.
//
////////////////////////////////////////////////////////////////////////////////

pub fn sort_by_predicate<F>(items: &mut [DisplayItem], before: F)
where
    F: Fn(&DisplayItem, &DisplayItem) -> bool,
{
    items.sort_by (|lhs, rhs| {
        if before (lhs, rhs) {
            Ordering::Less
        } else if before (rhs, lhs) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}





////////////////////////////////////////////////////////////////////////////////
//
//  sort_items
//
//  Strategy dispatch. Descending = ascending sort followed by reversal.
//
////////////////////////////////////////////////////////////////////////////////

pub fn sort_items(items: &mut [DisplayItem], field: SortField, direction: SortDirection) {
    match field {
        SortField::Size => sort_by_size (items),
        SortField::Time => sort_by_time (items),
        SortField::Kind => sort_by_kind (items),
    }

    if direction == SortDirection::Descending {
        reverse (items);
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  Unit Tests
//
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(file_name: &str, size: u64, mtime: i64) -> DisplayItem {
        DisplayItem::new (file_name, size, mtime)
    }

    fn names(items: &[DisplayItem]) -> Vec<String> {
        items.iter().map (|i| i.file_name()).collect()
    }

    #[test]
    fn sort_by_size_ascending() {
        let mut items = vec![
            make_item("big.txt",    3000, 0),
            make_item("small.txt",  100,  0),
            make_item("medium.txt", 1500, 0),
        ];
        sort_by_size(&mut items);
        assert_eq!(names(&items), ["small.txt", "medium.txt", "big.txt"]);
    }

    #[test]
    fn sort_by_size_is_idempotent() {
        let mut items = vec![
            make_item("c", 30, 0),
            make_item("a", 10, 0),
            make_item("b", 20, 0),
        ];
        sort_by_size(&mut items);
        let once = items.clone();
        sort_by_size(&mut items);
        assert_eq!(items, once);
    }

    #[test]
    fn sort_by_time_ascending() {
        let mut items = vec![
            make_item("newest.txt", 0, 3000),
            make_item("oldest.txt", 0, 1000),
            make_item("middle.txt", 0, 2000),
        ];
        sort_by_time(&mut items);
        assert_eq!(names(&items), ["oldest.txt", "middle.txt", "newest.txt"]);
    }

    #[test]
    fn sort_by_kind_groups_extensions() {
        // Kind keys: ".hidden" (0x2E) < "0" sentinel (0x30) < "txt", so
        // hidden entries cluster first, then extensionless, then by
        // extension group with names ordered inside each group.
        let mut items = vec![
            make_item("b.txt",   0, 0),
            make_item("a.txt",   0, 0),
            make_item(".hidden", 0, 0),
            make_item("noext",   0, 0),
        ];
        sort_by_kind(&mut items);
        assert_eq!(names(&items), [".hidden", "noext", "a.txt", "b.txt"]);
    }

    #[test]
    fn sort_by_kind_breaks_ties_by_basename() {
        let mut items = vec![
            make_item("zeta.rs",  0, 0),
            make_item("alpha.rs", 0, 0),
            make_item("mid.rs",   0, 0),
        ];
        sort_by_kind(&mut items);
        assert_eq!(names(&items), ["alpha.rs", "mid.rs", "zeta.rs"]);
    }

    #[test]
    fn sort_by_kind_hidden_files_use_dot_key() {
        // ".gitignore" keys as ".gitignore", "a.gitignore" keys as "gitignore"
        let mut items = vec![
            make_item("a.gitignore", 0, 0),
            make_item(".gitignore",  0, 0),
        ];
        sort_by_kind(&mut items);
        assert_eq!(names(&items), [".gitignore", "a.gitignore"]);
    }

    #[test]
    fn reverse_is_its_own_inverse() {
        let original = vec![
            make_item("a", 1, 0),
            make_item("b", 2, 0),
            make_item("c", 3, 0),
        ];
        let mut items = original.clone();
        reverse(&mut items);
        assert_ne!(items, original);
        reverse(&mut items);
        assert_eq!(items, original);
    }

    #[test]
    fn descending_is_ascending_reversed() {
        let mut ascending = vec![
            make_item("a", 10, 0),
            make_item("b", 30, 0),
            make_item("c", 20, 0),
        ];
        let mut descending = ascending.clone();

        sort_items(&mut ascending, SortField::Size, SortDirection::Ascending);
        sort_items(&mut descending, SortField::Size, SortDirection::Descending);

        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn equal_sizes_keep_input_order() {
        // Stable sort: documents the tie behavior we actually provide
        let mut items = vec![
            make_item("first",  5, 0),
            make_item("second", 5, 0),
            make_item("third",  5, 0),
        ];
        sort_by_size(&mut items);
        assert_eq!(names(&items), ["first", "second", "third"]);
    }

    #[test]
    fn predicate_sort_matches_fixed_strategy() {
        let mut by_strategy = vec![
            make_item("c.txt", 300, 5),
            make_item("a.txt", 100, 9),
            make_item("b.txt", 200, 1),
        ];
        let mut by_predicate = by_strategy.clone();

        sort_by_size(&mut by_strategy);
        sort_by_predicate(&mut by_predicate, |lhs, rhs| lhs.size < rhs.size);
        assert_eq!(by_strategy, by_predicate);

        sort_by_time(&mut by_strategy);
        sort_by_predicate(&mut by_predicate, |lhs, rhs| lhs.mtime < rhs.mtime);
        assert_eq!(by_strategy, by_predicate);
    }

    #[test]
    fn predicate_sort_with_custom_ordering() {
        // Longest name first, the kind of ad hoc ordering a caller injects
        let mut items = vec![
            make_item("ab",    0, 0),
            make_item("abcde", 0, 0),
            make_item("abc",   0, 0),
        ];
        sort_by_predicate(&mut items, |lhs, rhs| {
            lhs.basename.len() > rhs.basename.len()
        });
        assert_eq!(names(&items), ["abcde", "abc", "ab"]);
    }

    #[test]
    fn sorting_empty_and_single_slices() {
        let mut empty: Vec<DisplayItem> = Vec::new();
        sort_by_kind(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![make_item("only.txt", 1, 1)];
        sort_by_size(&mut single);
        sort_by_time(&mut single);
        sort_by_kind(&mut single);
        reverse(&mut single);
        assert_eq!(names(&single), ["only.txt"]);
    }
}
