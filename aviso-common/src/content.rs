//! Text shown inside a notification toast

use chrono::{DateTime, TimeZone, Utc};

use crate::datefmt::{format_full_date_short_time, iso_timestamp};

/// Title, description and machine-readable timestamp of one toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContent {
    /// The message, verbatim
    pub title: String,
    /// Event time formatted for people
    pub description: String,
    /// Event time for the `datetime` attribute
    pub datetime: String,
}

impl ToastContent {
    /// Build the content with the event time shown in `tz`.
    pub fn new<Tz: TimeZone>(message: &str, event_timestamp: DateTime<Utc>, tz: &Tz) -> Self {
        Self {
            title: message.to_string(),
            description: format_full_date_short_time(&event_timestamp.with_timezone(tz)),
            datetime: iso_timestamp(&event_timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_content_for_known_instant() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 19, 17, 5, 0).unwrap();
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        let content = ToastContent::new("Hello", ts, &tz);
        assert_eq!(content.title, "Hello");
        assert_eq!(
            content.description,
            "segunda-feira, 19 de outubro de 2026 às 14:05"
        );
        assert_eq!(content.datetime, "2026-10-19T17:05:00.000Z");
    }

    #[test]
    fn test_empty_message_is_kept() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 19, 17, 5, 0).unwrap();
        assert_eq!(ToastContent::new("", ts, &Utc).title, "");
    }
}
