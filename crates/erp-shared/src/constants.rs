//! Application-wide constants

pub const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 24;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MIN_COMPANY_NAME_LENGTH: usize = 2;
pub const MAX_COMPANY_NAME_LENGTH: usize = 200;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 3;
