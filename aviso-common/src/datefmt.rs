//! Date formatting for toast descriptions
//!
//! Produces the pt-BR "full date, short time" rendering, e.g.
//! `segunda-feira, 19 de outubro de 2026 às 14:05`.

use chrono::{DateTime, Datelike, SecondsFormat, TimeZone, Timelike, Utc};

/// Indexed by `Weekday::num_days_from_monday`
const WEEKDAYS: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Full weekday/day/month/year with 24h hours and minutes, in the time zone of `dt`.
pub fn format_full_date_short_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    let weekday = WEEKDAYS[dt.weekday().num_days_from_monday() as usize];
    let month = MONTHS[dt.month0() as usize];
    format!(
        "{weekday}, {} de {month} de {} às {:02}:{:02}",
        dt.day(),
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// UTC instant with millisecond precision, for `<time datetime>`
pub fn iso_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
