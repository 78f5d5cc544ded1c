//! Per-day journey of achievements, oldest first.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::category::extract_group;
use super::repositories::Achievement;
use super::time::DisplayZone;

pub const DEFAULT_GROUP_COLOR: &str = "#fea03d";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub id: i32,
    pub category: String,
    pub body: String,
    pub points: i64,
    /// Local `HH:MM`
    pub time: String,
    pub color: String,
}

pub fn daily_timeline(
    records: &[Achievement],
    date: NaiveDate,
    zone: &DisplayZone,
    colors: &HashMap<String, String>,
) -> Vec<TimelineEntry> {
    let mut day: Vec<&Achievement> = records
        .iter()
        .filter(|r| zone.local_date(&r.created_at) == date)
        .collect();
    day.sort_by_key(|r| r.created_at);

    day.into_iter()
        .map(|record| {
            let (category, body) = extract_group(&record.description);
            TimelineEntry {
                id: record.id,
                category: category.to_string(),
                body: body.to_string(),
                points: record.points,
                time: zone.format_time(&record.created_at),
                color: colors
                    .get(category)
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_GROUP_COLOR.to_string()),
            }
        })
        .collect()
}
