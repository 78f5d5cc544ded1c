//! Display-zone conversions and Russian date formatting.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, TimeZone, Utc, Weekday};

/// Moscow time
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 3;

const WEEKDAYS_RU: [&str; 7] = [
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
    "Воскресенье",
];

/// Fixed UTC offset used for every date shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone {
    offset: FixedOffset,
}

impl DisplayZone {
    /// `None` when the offset is outside ±23 hours.
    pub fn from_hours(hours: i32) -> Option<Self> {
        FixedOffset::east_opt(hours.checked_mul(3600)?).map(|offset| Self { offset })
    }

    pub fn utc() -> Self {
        Self {
            offset: FixedOffset::east_opt(0).expect("zero offset is valid"),
        }
    }

    pub fn to_local(&self, ts: &DateTime<Utc>) -> DateTime<FixedOffset> {
        ts.with_timezone(&self.offset)
    }

    pub fn local_date(&self, ts: &DateTime<Utc>) -> NaiveDate {
        self.to_local(ts).date_naive()
    }

    pub fn today(&self) -> NaiveDate {
        self.local_date(&Utc::now())
    }

    /// `DD.MM.YYYY HH:MM`
    pub fn format_timestamp(&self, ts: &DateTime<Utc>) -> String {
        self.to_local(ts).format("%d.%m.%Y %H:%M").to_string()
    }

    /// `HH:MM`
    pub fn format_time(&self, ts: &DateTime<Utc>) -> String {
        self.to_local(ts).format("%H:%M").to_string()
    }

    /// First instant strictly after `now` whose local time is `hour:00`.
    pub fn next_run_after(&self, now: &DateTime<Utc>, hour: u32) -> Option<DateTime<Utc>> {
        let today = self.local_date(now);
        let at = |date: NaiveDate| -> Option<DateTime<Utc>> {
            let naive = date.and_hms_opt(hour, 0, 0)?;
            self.offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
        };

        let candidate = at(today)?;
        if candidate > *now {
            Some(candidate)
        } else {
            at(today.checked_add_days(Days::new(1))?)
        }
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::from_hours(DEFAULT_UTC_OFFSET_HOURS).expect("default offset is valid")
    }
}

pub fn weekday_ru(weekday: Weekday) -> &'static str {
    WEEKDAYS_RU[weekday.num_days_from_monday() as usize]
}

/// `DD.MM.YYYY, <weekday>`
pub fn format_date(date: NaiveDate) -> String {
    format!("{}, {}", date.format("%d.%m.%Y"), weekday_ru(date.weekday()))
}
