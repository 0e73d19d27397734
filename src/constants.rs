//! Common constants used throughout the chisel application.

/// Chisel's configuration file name
pub const CONFIG_FILE: &str = "chisel.json";

/// Default directory holding the site template tree
pub const DEFAULT_SITE_DIR: &str = "site";

/// Default directory holding JSON data and copyable assets
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// Default directory the rendered site is written to
pub const DEFAULT_OUTPUT_DIR: &str = "build";

/// Entries starting with this marker are ignored entirely
pub const DEFAULT_SKIP_PREFIX: &str = "_";

/// Entries starting with this marker bind loaded data to the subtree
pub const DEFAULT_LOAD_PREFIX: &str = "%";

/// Entries starting with this marker are copied verbatim from the content dir
pub const DEFAULT_COPY_PREFIX: &str = "b%";
