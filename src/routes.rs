// Route path constants - single source of truth for all paths

pub const ROOT: &str = "/";
pub const PAGE: &str = "/{*page}";
