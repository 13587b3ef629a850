// display_item.rs — Display item record
//
// One record per filesystem entry to be listed. Identity and metadata are
// fixed at creation (one scan of the filesystem); sorting only reorders the
// caller's sequence, it never creates or destroys items.

/// A single directory entry as seen by the sorter and the icon resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Base name without the extension
    pub basename: String,

    /// Extension without the leading dot; empty when the name has none
    pub ext:      String,

    /// Hidden entry (dot-prefixed name)
    pub hidden:   bool,

    /// Size in bytes
    pub size:     u64,

    /// Modification time, seconds since the Unix epoch
    pub mtime:    i64,
}

impl DisplayItem {
    /// Build an item from a raw file name plus metadata. The name splits at
    /// the last dot; a leading dot marks the entry hidden, and a name that
    /// is only an extension (".bashrc") keeps an empty basename.
    pub fn new(file_name: &str, size: u64, mtime: i64) -> Self {
        let hidden = file_name.starts_with ('.');
        let (basename, ext) = match file_name.rfind ('.') {
            Some(idx) if idx > 0 || hidden => {
                (file_name[..idx].to_string(), file_name[idx + 1..].to_string())
            }
            _ => (file_name.to_string(), String::new()),
        };

        DisplayItem { basename, ext, hidden, size, mtime }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The name as it appears on disk.
    pub fn file_name(&self) -> String {
        if self.ext.is_empty() {
            self.basename.clone()
        } else {
            format!("{}.{}", self.basename, self.ext)
        }
    }
}
