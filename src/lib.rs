// dirglyph - Icon resolution and sort ordering core for directory listing tools
//
// A directory lister hands this crate one DisplayItem per entry (base name,
// extension, hidden flag, size/mtime), asks the comparator to order them,
// then asks the resolver for each entry's Nerd Font glyph at render time.
// Traversal, color selection, and rendering live in the caller.

pub mod icon_mapping;
pub mod icon_resolver;
pub mod display_item;
pub mod item_comparator;

pub use display_item::DisplayItem;
pub use icon_resolver::{IconResolver, NodeKind, file_icon, folder_icon};
pub use item_comparator::{
    SortDirection, SortField, reverse, sort_by_kind, sort_by_predicate, sort_by_size,
    sort_by_time, sort_items,
};
