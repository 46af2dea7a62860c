//! Parsing helpers for date phrases, tag lists, and output format.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use journalr_core::is_storable;

use crate::errors::CliError;

/// An interpreted date phrase: a single instant (`start == end`) or a period
/// with an inclusive end one microsecond before the next period starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateSpan {
    pub fn instant(at: DateTime<Utc>) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }
}

/// Interpret a human date phrase relative to `now`, in `now`'s timezone.
///
/// Understood forms:
/// - `now` (or an empty phrase), `today`, `yesterday`, `tomorrow`
/// - `this week`, `last week` (weeks start on Monday), `this month`, `last month`
/// - `3 days ago`, `2 hours ago`, `1 week ago`, `10 minutes ago`
/// - `7d`, `12h`, `30m`, `2w`, `last 3 days` (the window ending now)
/// - `2024-01-31` (that whole day), `2024-01-31 09:30[:15]`, RFC 3339
///
/// Returns `None` for anything else, and for spans reaching outside the
/// years the store can keep.
pub fn interpret_date_phrase<Tz: TimeZone>(phrase: &str, now: &DateTime<Tz>) -> Option<DateSpan> {
    interpret_span(phrase, now).filter(|span| is_storable(&span.start) && is_storable(&span.end))
}

fn interpret_span<Tz: TimeZone>(phrase: &str, now: &DateTime<Tz>) -> Option<DateSpan> {
    let trimmed = phrase.trim();
    let normalized = trimmed.to_ascii_lowercase();
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let tz = now.timezone();
    let today = now.date_naive();
    let now_utc = now.with_timezone(&Utc);

    match words.as_slice() {
        [] | ["now"] => return Some(DateSpan::instant(now_utc)),
        ["today"] => return day_span(&tz, today),
        ["yesterday"] => return day_span(&tz, today.pred_opt()?),
        ["tomorrow"] => return day_span(&tz, today.succ_opt()?),
        ["this", "week"] => {
            let monday = week_start(today)?;
            return period_span(&tz, monday, monday.checked_add_signed(Duration::try_weeks(1)?)?);
        }
        ["last", "week"] => {
            let monday = week_start(today)?;
            return period_span(&tz, monday.checked_sub_signed(Duration::try_weeks(1)?)?, monday);
        }
        ["this", "month"] => {
            let first = month_start(today.year(), today.month())?;
            return period_span(&tz, first, next_month(first)?);
        }
        ["last", "month"] => {
            let first = month_start(today.year(), today.month())?;
            return period_span(&tz, previous_month(first)?, first);
        }
        [amount, unit, "ago"] => {
            let offset = unit_duration(parse_amount(amount)?, unit)?;
            return Some(DateSpan::instant(now_utc.checked_sub_signed(offset)?));
        }
        ["last", amount, unit] => {
            let offset = unit_duration(parse_amount(amount)?, unit)?;
            return window_ending(now_utc, offset);
        }
        [compact] => {
            if let Some(offset) = compact_duration(compact) {
                return window_ending(now_utc, offset);
            }
        }
        _ => {}
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(DateSpan::instant(parsed.with_timezone(&Utc)));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return day_span(&tz, date);
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            let local = tz.from_local_datetime(&naive).earliest()?;
            return Some(DateSpan::instant(local.with_timezone(&Utc)));
        }
    }

    None
}

/// Interpret `phrase` relative to `now`, or fail with `CliError::UnparseableDate`.
pub fn require_date_span<Tz: TimeZone>(
    phrase: &str,
    now: &DateTime<Tz>,
) -> anyhow::Result<DateSpan> {
    interpret_date_phrase(phrase, now).ok_or_else(|| CliError::unparseable_date(phrase).into())
}

fn parse_amount(value: &str) -> Option<i64> {
    value.parse::<u32>().ok().map(i64::from)
}

fn unit_duration(amount: i64, unit: &str) -> Option<Duration> {
    match unit {
        "minute" | "minutes" | "min" | "mins" => Duration::try_minutes(amount),
        "hour" | "hours" => Duration::try_hours(amount),
        "day" | "days" => Duration::try_days(amount),
        "week" | "weeks" => Duration::try_weeks(amount),
        _ => None,
    }
}

/// `7d`, `12h`, `30m`, `2w`.
fn compact_duration(value: &str) -> Option<Duration> {
    if value.len() < 2 || !value.is_ascii() {
        return None;
    }
    let (number, unit) = value.split_at(value.len() - 1);
    let amount = parse_amount(number)?;
    if amount == 0 {
        return None;
    }
    match unit {
        "m" => Duration::try_minutes(amount),
        "h" => Duration::try_hours(amount),
        "d" => Duration::try_days(amount),
        "w" => Duration::try_weeks(amount),
        _ => None,
    }
}

fn window_ending(now: DateTime<Utc>, length: Duration) -> Option<DateSpan> {
    Some(DateSpan {
        start: now.checked_sub_signed(length)?,
        end: now,
    })
}

fn week_start(day: NaiveDate) -> Option<NaiveDate> {
    let offset = i64::from(day.weekday().num_days_from_monday());
    day.checked_sub_signed(Duration::try_days(offset)?)
}

fn month_start(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn next_month(first: NaiveDate) -> Option<NaiveDate> {
    if first.month() == 12 {
        month_start(first.year() + 1, 1)
    } else {
        month_start(first.year(), first.month() + 1)
    }
}

fn previous_month(first: NaiveDate) -> Option<NaiveDate> {
    if first.month() == 1 {
        month_start(first.year() - 1, 12)
    } else {
        month_start(first.year(), first.month() - 1)
    }
}

/// First instant of `day` in `tz`. Falls forward an hour when midnight is skipped by DST.
fn local_day_start<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> Option<DateTime<Utc>> {
    let midnight = day.and_hms_opt(0, 0, 0)?;
    let local = tz
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| tz.from_local_datetime(&day.and_hms_opt(1, 0, 0)?).earliest())?;
    Some(local.with_timezone(&Utc))
}

fn day_span<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> Option<DateSpan> {
    period_span(tz, day, day.succ_opt()?)
}

/// `[first, next)` expressed as an inclusive span.
fn period_span<Tz: TimeZone>(tz: &Tz, first: NaiveDate, next: NaiveDate) -> Option<DateSpan> {
    let start = local_day_start(tz, first)?;
    let end = local_day_start(tz, next)?.checked_sub_signed(Duration::microseconds(1))?;
    Some(DateSpan { start, end })
}

/// Split a comma-separated tag list. Pieces are trimmed; empty pieces are kept.
pub fn parse_tag_list(value: &str) -> Vec<String> {
    value.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Output format for the `ls` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Table,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use plain or table)",
            other
        ))
        .into()),
    }
}
