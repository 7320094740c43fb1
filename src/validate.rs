use chrono::NaiveDate;

use crate::error::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const MAX_RANGE_DAYS: i64 = 365;

/// Latitude must be within [-90, 90], longitude within [-180, 180].
pub(crate) fn check_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::OutOfRange {
            field: "latitude",
            min: -90.0,
            max: 90.0,
        });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::OutOfRange {
            field: "longitude",
            min: -180.0,
            max: 180.0,
        });
    }
    Ok(())
}

/// Both bounds must parse as `YYYY-MM-DD`, the range must not be inverted,
/// and it must not span more than a year.
pub(crate) fn check_date_range(start_date: &str, end_date: &str) -> Result<(), ValidationError> {
    let start = parse_date(start_date, "start_date")?;
    let end = parse_date(end_date, "end_date")?;

    if end < start {
        return Err(ValidationError::InvertedRange);
    }
    if (end - start).num_days() > MAX_RANGE_DAYS {
        return Err(ValidationError::RangeTooLarge);
    }
    Ok(())
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::MalformedDate { field })
}
