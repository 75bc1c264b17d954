// Version information for the chili detection node

/// Full version string
pub const VERSION: &str = "v0.1.0-chili-detect-2026-08-29";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-08-29";
