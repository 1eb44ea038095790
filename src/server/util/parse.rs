use crate::server::error::{course::CourseError, AppError};

/// Parses a course ID from a path segment.
///
/// Leading whitespace is skipped and an optional sign is accepted, then the longest run of
/// decimal digits is read; anything after it is ignored, so `"12abc"` and `"1.5"` address
/// courses 12 and 1.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i64)` - Successfully parsed ID
/// - `Err(AppError::CourseErr(InvalidId))` - No digits lead the segment, or the value does
///   not fit in an `i64`
pub fn parse_course_id(value: &str) -> Result<i64, AppError> {
    let invalid = || CourseError::InvalidId(value.to_string());

    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
    let sign_len = trimmed.len() - unsigned.len();

    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(invalid().into());
    }

    let id = trimmed[..sign_len + digits]
        .parse::<i64>()
        .map_err(|_| invalid())?;

    Ok(id)
}
