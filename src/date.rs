use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Timezone that decides which calendar day "today" is.
pub const TIMEZONE: Tz = chrono_tz::America::Chicago;

/// Today's date as `YYYY-MM-DD` in [`TIMEZONE`], whatever the host timezone is.
pub fn today() -> String {
    today_at(Utc::now())
}

pub fn today_at(now: DateTime<Utc>) -> String {
    now.with_timezone(&TIMEZONE)
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}
