pub mod checks;
pub mod extraction;

use chrono::{DateTime, SecondsFormat, SubsecRound, Timelike, Utc};

/// Current UTC time as ISO-8601 with an explicit `+00:00` offset.
pub fn utc_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Microsecond precision; the fraction is omitted when it is zero.
fn format_timestamp(at: DateTime<Utc>) -> String {
    let at = at.trunc_subsecs(6);
    let format = if at.nanosecond() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    at.to_rfc3339_opts(format, false)
}
