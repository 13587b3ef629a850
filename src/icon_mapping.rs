// dirglyph - Nerd Font Icon Mapping
// Named constants and default lookup tables for file/folder/special-node icons.
//
// Keys in the extension tables are lowercase without a leading dot; alias keys
// may also be full lowercase file names (e.g. "gruntfile.js", "go.mod").
// Folder keys are matched exactly as given (".Trash" keeps its capital).


////////////////////////////////////////////////////////////////////////////////
//
//  Named Constants — fallback and special-node glyphs
//
////////////////////////////////////////////////////////////////////////////////

pub const NF_FA_FILE:                char = '\u{F15B}';
pub const NF_FA_FOLDER_OPEN:         char = '\u{F07C}';
pub const NF_FA_LINK:                char = '\u{F0C1}';
pub const NF_FA_CHAIN_BROKEN:        char = '\u{F127}';
pub const NF_FA_HDD_O:               char = '\u{F0A0}';
pub const NF_FA_PLUG:                char = '\u{F1E6}';
pub const NF_MDI_PIPE:               char = '\u{FCE3}';





////////////////////////////////////////////////////////////////////////////////
//
//  Default table keys
//
////////////////////////////////////////////////////////////////////////////////

/// Glyph-table key guaranteeing a hit for any regular file.
pub const DEFAULT_FILE_KEY: &str = "file";

/// Folder-table key guaranteeing a hit for any directory.
pub const DEFAULT_FOLDER_KEY: &str = "folder";





////////////////////////////////////////////////////////////////////////////////
//
//  EXTENSION_GLYPHS
//
//  Static table mapping canonical extension-or-category keys to Nerd Font
//  icon glyphs. Includes category keys ("image", "video", "audio", ...) that
//  are only reachable through EXTENSION_ALIASES, and full-name keys
//  ("gruntfile.js") that win over plain extension matches.
//
////////////////////////////////////////////////////////////////////////////////

pub const EXTENSION_GLYPHS: &[(&str, char)] = &[
    ("ai",           '\u{E7B4}'),
    ("android",      '\u{E70E}'),
    ("apple",        '\u{F179}'),
    ("as",           '\u{E60B}'),
    ("asm",          '\u{FB19}'),
    ("audio",        '\u{F1C7}'),
    ("avro",         '\u{E60B}'),
    ("bf",           '\u{F067}'),
    ("binary",       '\u{F471}'),
    ("c",            '\u{E61E}'),
    ("cfg",          '\u{F423}'),
    ("clj",          '\u{E768}'),
    ("coffee",       '\u{E751}'),
    ("conf",         '\u{E615}'),
    ("cpp",          '\u{E61D}'),
    ("cr",           '\u{E23E}'),
    ("cs",           '\u{F81A}'),
    ("cson",         '\u{E601}'),
    ("css",          '\u{E749}'),
    ("d",            '\u{E7AF}'),
    ("dart",         '\u{E798}'),
    ("db",           '\u{F1C0}'),
    ("deb",          '\u{F306}'),
    ("diff",         '\u{F440}'),
    ("doc",          '\u{F1C2}'),
    ("dockerfile",   '\u{E7B0}'),
    ("dpkg",         '\u{F17C}'),
    ("ebook",        '\u{F02D}'),
    ("elm",          '\u{E62C}'),
    ("env",          '\u{F462}'),
    ("erl",          '\u{E7B1}'),
    ("ex",           '\u{E62D}'),
    ("f",            '\u{F794}'),
    ("file",         NF_FA_FILE),
    ("font",         '\u{F031}'),
    ("fs",           '\u{E7A7}'),
    ("gb",           '\u{E272}'),
    ("gform",        '\u{F298}'),
    ("git",          '\u{E702}'),
    ("go",           '\u{E724}'),
    ("graphql",      '\u{E284}'),
    ("groovy",       '\u{E775}'),
    ("gruntfile.js", '\u{E74C}'),
    ("gulpfile.js",  '\u{E610}'),
    ("gv",           '\u{E225}'),
    ("h",            '\u{F0FD}'),
    ("hs",           '\u{E777}'),
    ("html",         '\u{F13B}'),
    ("ics",          '\u{F073}'),
    ("image",        '\u{F1C5}'),
    ("iml",          '\u{E7B5}'),
    ("ini",          '\u{F669}'),
    ("ino",          '\u{E255}'),
    ("iso",          '\u{F7C9}'),
    ("java",         '\u{E738}'),
    ("jenkinsfile",  '\u{E767}'),
    ("jl",           '\u{E624}'),
    ("js",           '\u{E781}'),
    ("json",         '\u{E60B}'),
    ("jsx",          '\u{E7BA}'),
    ("key",          '\u{F43D}'),
    ("ko",           '\u{EBC6}'),
    ("kt",           '\u{E634}'),
    ("less",         '\u{E758}'),
    ("lock",         '\u{F720}'),
    ("log",          '\u{F18D}'),
    ("lua",          '\u{E620}'),
    ("m",            '\u{FB27}'),
    ("maintainers",  '\u{F0C0}'),
    ("makefile",     '\u{E20F}'),
    ("md",           '\u{F48A}'),
    ("mjs",          '\u{E718}'),
    ("ml",           '\u{FB26}'),
    ("mustache",     '\u{E60F}'),
    ("nc",           '\u{F7C0}'),
    ("nim",          '\u{F6A4}'),
    ("npmignore",    '\u{E71E}'),
    ("package",      '\u{F487}'),
    ("passwd",       '\u{F023}'),
    ("patch",        '\u{F440}'),
    ("pdf",          '\u{F1C1}'),
    ("php",          '\u{E608}'),
    ("pl",           '\u{E7A1}'),
    ("ppt",          '\u{F1C4}'),
    ("psd",          '\u{E7B8}'),
    ("py",           '\u{E606}'),
    ("r",            '\u{FCD2}'),
    ("rb",           '\u{E21E}'),
    ("rdb",          '\u{E76D}'),
    ("rpm",          '\u{F17C}'),
    ("rs",           '\u{E7A8}'),
    ("rss",          '\u{F09E}'),
    ("rst",          '\u{F66A}'),
    ("rubydoc",      '\u{E73B}'),
    ("sass",         '\u{E603}'),
    ("scala",        '\u{E737}'),
    ("shell",        '\u{F489}'),
    ("shp",          '\u{FA5F}'),
    ("sol",          '\u{FCB9}'),
    ("sql",          '\u{E706}'),
    ("sqlite3",      '\u{E7C4}'),
    ("styl",         '\u{E600}'),
    ("swift",        '\u{E755}'),
    ("tex",          '\u{222B}'),
    ("tfrecord",     '\u{FB27}'),
    ("toml",         '\u{F669}'),
    ("ts",           '\u{FBE4}'),
    ("twig",         '\u{E61C}'),
    ("txt",          '\u{F15C}'),
    ("vagrantfile",  '\u{E21E}'),
    ("video",        '\u{F03D}'),
    ("vim",          '\u{E62B}'),
    ("vue",          '\u{FD42}'),
    ("windows",      '\u{F17A}'),
    ("xls",          '\u{F1C3}'),
    ("xml",          '\u{E796}'),
    ("yml",          '\u{E601}'),
    ("zig",          '\u{F0E7}'),
    ("zip",          '\u{F410}'),
];





////////////////////////////////////////////////////////////////////////////////
//
//  EXTENSION_ALIASES
//
//  Static table mapping raw lowercase extensions (and full lowercase file
//  names) to canonical EXTENSION_GLYPHS keys. A raw extension with no alias
//  is looked up in EXTENSION_GLYPHS directly.
//
////////////////////////////////////////////////////////////////////////////////

pub const EXTENSION_ALIASES: &[(&str, &str)] = &[
    ("apk",              "android"),
    ("gradle",           "android"),
    ("ds_store",         "apple"),
    ("localized",        "apple"),
    ("s",                "asm"),
    ("aac",              "audio"),
    ("alac",             "audio"),
    ("flac",             "audio"),
    ("m4a",              "audio"),
    ("mka",              "audio"),
    ("mp3",              "audio"),
    ("ogg",              "audio"),
    ("opus",             "audio"),
    ("wav",              "audio"),
    ("wma",              "audio"),
    ("b",                "bf"),
    ("bson",             "binary"),
    ("feather",          "binary"),
    ("mat",              "binary"),
    ("o",                "binary"),
    ("pb",               "binary"),
    ("pickle",           "binary"),
    ("pkl",              "binary"),
    ("conf",             "cfg"),
    ("config",           "cfg"),
    ("cljc",             "clj"),
    ("cljs",             "clj"),
    ("editorconfig",     "conf"),
    ("rc",               "conf"),
    ("c++",              "cpp"),
    ("cc",               "cpp"),
    ("cxx",              "cpp"),
    ("scss",             "css"),
    ("docx",             "doc"),
    ("gdoc",             "doc"),
    ("dockerignore",     "dockerfile"),
    ("epub",             "ebook"),
    ("ipynb",            "ebook"),
    ("mobi",             "ebook"),
    ("f03",              "f"),
    ("f77",              "f"),
    ("f90",              "f"),
    ("f95",              "f"),
    ("for",              "f"),
    ("fpp",              "f"),
    ("ftn",              "f"),
    ("eot",              "font"),
    ("otf",              "font"),
    ("ttf",              "font"),
    ("woff",             "font"),
    ("woff2",            "font"),
    ("fsi",              "fs"),
    ("fsscript",         "fs"),
    ("fsx",              "fs"),
    ("dna",              "gb"),
    ("gitattributes",    "git"),
    ("gitconfig",        "git"),
    ("gitignore",        "git"),
    ("gitignore_global", "git"),
    ("gitmirrorall",     "git"),
    ("gitmodules",       "git"),
    ("gsh",              "groovy"),
    ("gvy",              "groovy"),
    ("gy",               "groovy"),
    ("h++",              "h"),
    ("hh",               "h"),
    ("hpp",              "h"),
    ("hxx",              "h"),
    ("lhs",              "hs"),
    ("htm",              "html"),
    ("xhtml",            "html"),
    ("bmp",              "image"),
    ("cbr",              "image"),
    ("cbz",              "image"),
    ("dvi",              "image"),
    ("eps",              "image"),
    ("gif",              "image"),
    ("ico",              "image"),
    ("jpeg",             "image"),
    ("jpg",              "image"),
    ("nef",              "image"),
    ("orf",              "image"),
    ("pbm",              "image"),
    ("pgm",              "image"),
    ("png",              "image"),
    ("pnm",              "image"),
    ("ppm",              "image"),
    ("pxm",              "image"),
    ("stl",              "image"),
    ("svg",              "image"),
    ("tif",              "image"),
    ("tiff",             "image"),
    ("webp",             "image"),
    ("xpm",              "image"),
    ("disk",             "iso"),
    ("dmg",              "iso"),
    ("img",              "iso"),
    ("ipsw",             "iso"),
    ("smi",              "iso"),
    ("vhd",              "iso"),
    ("vhdx",             "iso"),
    ("vmdk",             "iso"),
    ("jar",              "java"),
    ("cjs",              "js"),
    ("properties",       "json"),
    ("webmanifest",      "json"),
    ("tsx",              "jsx"),
    ("cjsx",             "jsx"),
    ("cer",              "key"),
    ("crt",              "key"),
    ("der",              "key"),
    ("gpg",              "key"),
    ("p7b",              "key"),
    ("pem",              "key"),
    ("pfx",              "key"),
    ("pgp",              "key"),
    ("license",          "key"),
    ("codeowners",       "maintainers"),
    ("credits",          "maintainers"),
    ("cmake",            "makefile"),
    ("justfile",         "makefile"),
    ("markdown",         "md"),
    ("mkd",              "md"),
    ("rdoc",             "md"),
    ("readme",           "md"),
    ("mli",              "ml"),
    ("sml",              "ml"),
    ("netcdf",           "nc"),
    ("brewfile",         "package"),
    ("cargo.toml",       "package"),
    ("cargo.lock",       "package"),
    ("go.mod",           "package"),
    ("go.sum",           "package"),
    ("pyproject.toml",   "package"),
    ("poetry.lock",      "package"),
    ("pipfile",          "package"),
    ("pipfile.lock",     "package"),
    ("php3",             "php"),
    ("php4",             "php"),
    ("php5",             "php"),
    ("phpt",             "php"),
    ("phtml",            "php"),
    ("gslides",          "ppt"),
    ("pptx",             "ppt"),
    ("pxd",              "py"),
    ("pyc",              "py"),
    ("pyx",              "py"),
    ("whl",              "py"),
    ("rdata",            "r"),
    ("rds",              "r"),
    ("rmd",              "r"),
    ("gemfile",          "rb"),
    ("gemspec",          "rb"),
    ("guardfile",        "rb"),
    ("procfile",         "rb"),
    ("rakefile",         "rb"),
    ("rspec",            "rb"),
    ("rspec_parallel",   "rb"),
    ("rspec_status",     "rb"),
    ("ru",               "rb"),
    ("erb",              "rubydoc"),
    ("slim",             "rubydoc"),
    ("awk",              "shell"),
    ("bash",             "shell"),
    ("bash_history",     "shell"),
    ("bash_profile",     "shell"),
    ("bashrc",           "shell"),
    ("csh",              "shell"),
    ("fish",             "shell"),
    ("ksh",              "shell"),
    ("sh",               "shell"),
    ("zsh",              "shell"),
    ("zsh-theme",        "shell"),
    ("zshrc",            "shell"),
    ("plpgsql",          "sql"),
    ("plsql",            "sql"),
    ("psql",             "sql"),
    ("tsql",             "sql"),
    ("sl3",              "sqlite3"),
    ("stylus",           "styl"),
    ("cls",              "tex"),
    ("avi",              "video"),
    ("flv",              "video"),
    ("m2v",              "video"),
    ("mkv",              "video"),
    ("mov",              "video"),
    ("mp4",              "video"),
    ("mpeg",             "video"),
    ("mpg",              "video"),
    ("ogm",              "video"),
    ("ogv",              "video"),
    ("vob",              "video"),
    ("webm",             "video"),
    ("vimrc",            "vim"),
    ("bat",              "windows"),
    ("cmd",              "windows"),
    ("exe",              "windows"),
    ("csv",              "xls"),
    ("gsheet",           "xls"),
    ("xlsx",             "xls"),
    ("svelte",           "xml"),
    ("plist",            "xml"),
    ("xul",              "xml"),
    ("yaml",             "yml"),
    ("7z",               "zip"),
    ("bz2",              "zip"),
    ("gz",               "zip"),
    ("lzma",             "zip"),
    ("par",              "zip"),
    ("rar",              "zip"),
    ("tar",              "zip"),
    ("tc",               "zip"),
    ("tgz",              "zip"),
    ("txz",              "zip"),
    ("xz",               "zip"),
    ("z",                "zip"),
];





////////////////////////////////////////////////////////////////////////////////
//
//  FOLDER_GLYPHS
//
//  Static table mapping well-known folder names to Nerd Font icon glyphs.
//  Keys are matched exactly as given; "folder" is the fallback key.
//
////////////////////////////////////////////////////////////////////////////////

pub const FOLDER_GLYPHS: &[(&str, char)] = &[
    (".atom",                 '\u{E764}'),
    (".aws",                  '\u{E7AD}'),
    (".docker",               '\u{E7B0}'),
    (".gem",                  '\u{E21E}'),
    (".git",                  '\u{E5FB}'),
    (".git-credential-cache", '\u{E5FB}'),
    (".github",               '\u{E5FD}'),
    (".npm",                  '\u{E5FA}'),
    (".nvm",                  '\u{E718}'),
    (".rvm",                  '\u{E21E}'),
    (".Trash",                '\u{F1F8}'),
    (".vscode",               '\u{E70C}'),
    (".vim",                  '\u{E62B}'),
    ("config",                '\u{E5FC}'),
    ("folder",                NF_FA_FOLDER_OPEN),
    ("hidden",                '\u{F023}'),
    ("node_modules",          '\u{E5FA}'),
];





////////////////////////////////////////////////////////////////////////////////
//
//  Unit Tests
//
////////////////////////////////////////////////////////////////////////////////
