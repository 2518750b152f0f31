use anyhow::{Result, anyhow, bail};
use chrono::{NaiveDate, NaiveTime, Timelike};

pub const DEFAULT_DATE: &str = "2008-12-20";
pub const DEFAULT_TIME: &str = "00:00:00";

/// Date and time halves of a `last_updated` value, ready for a `~U[date timeZ]` sigil.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTimestamp {
    pub date: String,
    pub time: String,
}

/// Splits `"YYYY-MM-DD HH:MM:SS"` on its space.
///
/// An empty date portion falls back to [`DEFAULT_DATE`] and a missing time to [`DEFAULT_TIME`].
/// Both halves are re-emitted zero padded (`2020-5-1` becomes `2020-05-01`); anything that is
/// not a real date and time is an error, since the sigil would not compile.
pub fn split_last_updated(last_updated: &str) -> Result<SplitTimestamp> {
    let parts: Vec<&str> = last_updated.split(' ').collect();

    let date = match parts.first() {
        Some(date) if !date.is_empty() => *date,
        _ => DEFAULT_DATE,
    };
    let time = match parts.get(1) {
        Some(time) if !time.is_empty() => *time,
        // "date  time": the real time sits behind a second space
        Some(_) if parts.len() > 2 => {
            bail!("Invalid separator in last_updated '{}'", last_updated)
        }
        _ => DEFAULT_TIME,
    };

    let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| anyhow!("Invalid date '{}' in last_updated '{}': {}", date, last_updated, e))?;
    let parsed_time = NaiveTime::parse_from_str(time, "%H:%M:%S%.f")
        .map_err(|e| anyhow!("Invalid time '{}' in last_updated '{}': {}", time, last_updated, e))?;

    // chrono keeps a leap second as nanos past 1s, DateTime in elixir has no :60
    if parsed_time.nanosecond() >= 1_000_000_000 {
        bail!("Leap second '{}' in last_updated '{}'", time, last_updated);
    }

    Ok(SplitTimestamp {
        date: parsed_date.format("%Y-%m-%d").to_string(),
        time: parsed_time.format("%H:%M:%S%.f").to_string(),
    })
}
