/// Event host queried when no `--base-url` is configured
pub(crate) const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Identifier sent in the `User-Agent` header of every input request
pub(crate) const DEFAULT_USER_AGENT: &str = "aocfetch";

/// Name of the cookie carrying the session credential
pub(crate) const SESSION_COOKIE: &str = "session";

/// File name of the default credential inside the tool's config directory
pub(crate) const SESSION_FILE_NAME: &str = "session_cookie";

/// Directory name used under the platform config dir
pub(crate) const APP_DIR: &str = "aocfetch";

/// Puzzles are released on December 1st through 25th
pub(crate) const FIRST_DAY: u32 = 1;
pub(crate) const LAST_DAY: u32 = 25;
pub(crate) const EVENT_MONTH: u32 = 12;
