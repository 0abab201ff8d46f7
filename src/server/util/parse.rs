use crate::server::error::AppError;

/// Parses a Discord snowflake id from a path segment.
///
/// Snowflakes are non-zero, so "0" is rejected like any other non-numeric value.
///
/// # Arguments
/// - `value` - The string to attempt to parse
///
/// # Returns
/// - `Some(u64)` - Valid snowflake
/// - `None` - Not a positive integer that fits in `u64`
pub fn parse_snowflake(value: &str) -> Option<u64> {
    value.parse::<u64>().ok().filter(|id| *id != 0)
}

/// Parses a guild id path segment.
///
/// # Returns
/// - `Ok(u64)` - Valid guild id
/// - `Err(AppError::BadRequest)` - Not a valid snowflake
pub fn parse_guild_id(value: &str) -> Result<u64, AppError> {
    parse_snowflake(value).ok_or_else(|| AppError::BadRequest("Invalid guild id".to_string()))
}

/// Parses a channel id path segment.
///
/// A malformed channel id can never name an existing channel, so it is reported the same way
/// as a channel that does not exist.
///
/// # Returns
/// - `Ok(u64)` - Valid channel id
/// - `Err(AppError::InvalidChannel)` - Not a valid snowflake
pub fn parse_channel_id(value: &str) -> Result<u64, AppError> {
    parse_snowflake(value).ok_or(AppError::InvalidChannel)
}
