pub const SITE_NAME: &str = "Courseboard";

/// File types accepted when importing a unit document.
pub const IMPORT_EXTENSIONS: &[&str] = &["json"];

pub const IMPORT_MAX_BYTES: u64 = 256 * 1024;

/// How long status notices stay on screen.
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;
