// icon_resolver.rs — Name/extension to glyph resolution
//
// Two-pass lookup over the static icon mapping tables: an extension pass
// establishes a category glyph, then a full-name pass overrides it for
// reserved names ("gruntfile.js" beats plain "js"). Misses fall back to the
// default file/folder glyph, so resolution never fails.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::icon_mapping::{
    DEFAULT_FILE_KEY, DEFAULT_FOLDER_KEY, EXTENSION_ALIASES, EXTENSION_GLYPHS, FOLDER_GLYPHS,
    NF_FA_CHAIN_BROKEN, NF_FA_FILE, NF_FA_FOLDER_OPEN, NF_FA_HDD_O, NF_FA_LINK, NF_FA_PLUG,
    NF_MDI_PIPE,
};





////////////////////////////////////////////////////////////////////////////////
//
//  NodeKind
//
//  Non-regular-file node kinds. Resolved directly to a glyph by the caller;
//  these never go through the name/extension lookup.
//
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Symlink,
    SymlinkDir,
    BrokenSymlink,
    Device,
    Socket,
    Pipe,
}

impl NodeKind {
    /// Glyph for this node kind. Total over the enum.
    pub fn glyph(self) -> char {
        match self {
            NodeKind::Symlink       => NF_FA_LINK,
            NodeKind::SymlinkDir    => NF_FA_LINK,
            NodeKind::BrokenSymlink => NF_FA_CHAIN_BROKEN,
            NodeKind::Device        => NF_FA_HDD_O,
            NodeKind::Socket        => NF_FA_PLUG,
            NodeKind::Pipe          => NF_MDI_PIPE,
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  IconResolver
//
//  Read-only lookup maps seeded once from the icon mapping tables. Never
//  mutated after construction, so a shared instance is safe to read from
//  any thread.
//
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct IconResolver {
    /// Canonical extension/category key → glyph
    extension_glyphs:  HashMap<&'static str, char>,

    /// Raw extension or full file name → canonical key
    extension_aliases: HashMap<&'static str, &'static str>,

    /// Well-known folder name → glyph
    folder_glyphs:     HashMap<&'static str, char>,

    /// Glyph returned when no file lookup hits
    default_file_glyph:   char,

    /// Glyph returned when no folder lookup hits
    default_folder_glyph: char,
}

impl IconResolver {
    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Seed the lookup maps from the default mapping tables.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new() -> Self {
        let extension_glyphs: HashMap<&'static str, char> =
            EXTENSION_GLYPHS.iter().copied().collect();
        let extension_aliases: HashMap<&'static str, &'static str> =
            EXTENSION_ALIASES.iter().copied().collect();
        let folder_glyphs: HashMap<&'static str, char> =
            FOLDER_GLYPHS.iter().copied().collect();

        // The default keys are guaranteed present in the tables; the named
        // constants only back them up if the data ever regresses.
        let default_file_glyph = extension_glyphs
            .get (DEFAULT_FILE_KEY)
            .copied()
            .unwrap_or (NF_FA_FILE);
        let default_folder_glyph = folder_glyphs
            .get (DEFAULT_FOLDER_KEY)
            .copied()
            .unwrap_or (NF_FA_FOLDER_OPEN);

        IconResolver {
            extension_glyphs,
            extension_aliases,
            folder_glyphs,
            default_file_glyph,
            default_folder_glyph,
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  file_icon
    //
    //  Resolve the glyph for a regular file from its base name and extension
    //  (dot stripped, possibly empty). Case-insensitive; a full-name match
    //  overrides an extension match.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn file_icon(&self, name: &str, ext: &str) -> char {
        let mut icon = self.default_file_glyph;

        // Extension pass: resolve aliases, then look for a category glyph
        let ext_lower = ext.to_lowercase();
        let ext_key = self
            .extension_aliases
            .get (ext_lower.as_str())
            .copied()
            .unwrap_or (ext_lower.as_str());
        if let Some(&glyph) = self.extension_glyphs.get (ext_key) {
            icon = glyph;
        }

        // Full-name pass: reserved names ("gruntfile.js") win over extensions
        let full_lower = if ext.is_empty() {
            name.to_lowercase()
        } else {
            format!("{name}.{ext}").to_lowercase()
        };
        let full_key = self
            .extension_aliases
            .get (full_lower.as_str())
            .copied()
            .unwrap_or (full_lower.as_str());
        if let Some(&glyph) = self.extension_glyphs.get (full_key) {
            icon = glyph;
        }

        icon
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  folder_icon
    //
    //  Resolve the glyph for a directory. Exact-match lookup, no
    //  normalization (".Trash" is matched with its capital).
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn folder_icon(&self, name: &str) -> char {
        self.folder_glyphs
            .get (name)
            .copied()
            .unwrap_or (self.default_folder_glyph)
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        IconResolver::new()
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  Shared instance
//
//  Seeded on first use and read-only thereafter.
//
////////////////////////////////////////////////////////////////////////////////

static SHARED_RESOLVER: Lazy<IconResolver> = Lazy::new (IconResolver::new);

/// The process-wide resolver.
pub fn shared() -> &'static IconResolver {
    &SHARED_RESOLVER
}

/// Resolve a file glyph via the shared resolver.
pub fn file_icon(name: &str, ext: &str) -> char {
    SHARED_RESOLVER.file_icon (name, ext)
}

/// Resolve a folder glyph via the shared resolver.
pub fn folder_icon(name: &str) -> char {
    SHARED_RESOLVER.folder_icon (name)
}





////////////////////////////////////////////////////////////////////////////////
//
//  Unit Tests
//
////////////////////////////////////////////////////////////////////////////////
