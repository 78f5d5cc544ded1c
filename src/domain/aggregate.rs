//! Grouping of achievement records by category and date range.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::extract_group;
use super::repositories::Achievement;
use super::time::DisplayZone;

/// Inclusive range of local calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Open bounds become unbounded; `None` when both are absent.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (None, None) => None,
            (start, end) => Some(Self::new(
                start.unwrap_or(NaiveDate::MIN),
                end.unwrap_or(NaiveDate::MAX),
            )),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Optional restrictions applied before grouping
#[derive(Debug, Default, Clone)]
pub struct AggregateFilter {
    pub range: Option<DateRange>,
    pub category: Option<String>,
}

impl AggregateFilter {
    pub fn matches(&self, record: &Achievement, zone: &DisplayZone) -> bool {
        if let Some(range) = &self.range {
            if !range.contains(zone.local_date(&record.created_at)) {
                return false;
            }
        }
        match &self.category {
            Some(category) => extract_group(&record.description).0 == category,
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedEntry {
    pub id: i32,
    pub body: String,
    pub points: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBucket {
    pub entries: Vec<GroupedEntry>,
    pub total_points: i64,
}

/// Category to bucket, iterated in lexicographic category order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Aggregate {
    buckets: BTreeMap<String, CategoryBucket>,
}

impl Aggregate {
    pub fn categories(&self) -> impl Iterator<Item = (&str, &CategoryBucket)> {
        self.buckets.iter().map(|(name, bucket)| (name.as_str(), bucket))
    }

    pub fn get(&self, category: &str) -> Option<&CategoryBucket> {
        self.buckets.get(category)
    }

    pub fn total_points(&self) -> i64 {
        self.buckets.values().map(|b| b.total_points).sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn push(&mut self, category: &str, entry: GroupedEntry) {
        let bucket = self.buckets.entry(category.to_string()).or_default();
        bucket.total_points += entry.points;
        bucket.entries.push(entry);
    }
}

/// Group `records` by extracted category, keeping input order inside each bucket.
pub fn aggregate(records: &[Achievement], filter: &AggregateFilter, zone: &DisplayZone) -> Aggregate {
    let mut result = Aggregate::default();
    for record in records.iter().filter(|r| filter.matches(r, zone)) {
        let (category, body) = extract_group(&record.description);
        result.push(
            category,
            GroupedEntry {
                id: record.id,
                body: body.to_string(),
                points: record.points,
                created_at: record.created_at,
            },
        );
    }
    result
}

/// Records of one category whose local date falls within `range`.
pub fn select_scope<'a>(
    records: &'a [Achievement],
    category: &str,
    range: Option<DateRange>,
    zone: &DisplayZone,
) -> Vec<&'a Achievement> {
    let filter = AggregateFilter {
        range,
        category: Some(category.to_string()),
    };
    records.iter().filter(|r| filter.matches(r, zone)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_CATEGORY;

    fn record(id: i32, description: &str, points: i64, ts: &str) -> Achievement {
        Achievement {
            id,
            description: description.to_string(),
            points,
            user_id: 1,
            created_at: DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_totals_per_category() {
        let records = vec![
            record(1, "A: one", 10, "2024-01-01T10:00:00Z"),
            record(2, "A: two", 5, "2024-01-01T09:00:00Z"),
            record(3, "B: three", 7, "2024-01-01T08:00:00Z"),
        ];
        let agg = aggregate(&records, &AggregateFilter::default(), &DisplayZone::utc());

        assert_eq!(agg.len(), 2);
        assert_eq!(agg.get("A").unwrap().total_points, 15);
        assert_eq!(agg.get("B").unwrap().total_points, 7);
        assert_eq!(agg.total_points(), 22);
    }

    #[test]
    fn test_preserves_order_within_bucket_and_sorts_categories() {
        let records = vec![
            record(1, "ZETA: first", 1, "2024-01-03T00:00:00Z"),
            record(2, "plain", 2, "2024-01-02T00:00:00Z"),
            record(3, "ZETA: second", 3, "2024-01-01T00:00:00Z"),
            record(4, "ALPHA: only", 4, "2024-01-01T00:00:00Z"),
        ];
        let agg = aggregate(&records, &AggregateFilter::default(), &DisplayZone::utc());

        let names: Vec<&str> = agg.categories().map(|(name, _)| name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&DEFAULT_CATEGORY));

        let bodies: Vec<&str> = agg
            .get("ZETA")
            .unwrap()
            .entries
            .iter()
            .map(|e| e.body.as_str())
            .collect();
        assert_eq!(bodies, vec!["first", "second"]);
    }

    #[test]
    fn test_date_range_is_inclusive_and_local() {
        let records = vec![
            // 2024-01-01 22:00 UTC is 2024-01-02 01:00 in UTC+3
            record(1, "A: late", 1, "2024-01-01T22:00:00Z"),
            record(2, "A: day one", 2, "2024-01-01T12:00:00Z"),
            record(3, "A: day three", 4, "2024-01-03T12:00:00Z"),
        ];
        let filter = AggregateFilter {
            range: Some(DateRange::single(date(2024, 1, 2))),
            category: None,
        };
        let agg = aggregate(&records, &filter, &DisplayZone::default());
        assert_eq!(agg.get("A").unwrap().total_points, 1);

        let filter = AggregateFilter {
            range: Some(DateRange::new(date(2024, 1, 1), date(2024, 1, 3))),
            category: None,
        };
        let agg = aggregate(&records, &filter, &DisplayZone::default());
        assert_eq!(agg.get("A").unwrap().total_points, 7);
    }

    #[test]
    fn test_category_filter() {
        let records = vec![
            record(1, "A: x", 3, "2024-01-01T00:00:00Z"),
            record(2, "B: y", 4, "2024-01-01T00:00:00Z"),
        ];
        let filter = AggregateFilter {
            range: None,
            category: Some("B".to_string()),
        };
        let agg = aggregate(&records, &filter, &DisplayZone::utc());
        assert_eq!(agg.len(), 1);
        assert_eq!(agg.total_points(), 4);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let records = vec![record(1, "A: x", 3, "2024-01-02T00:00:00Z")];
        let filter = AggregateFilter {
            range: Some(DateRange::new(date(2024, 1, 3), date(2024, 1, 1))),
            category: None,
        };
        assert!(aggregate(&records, &filter, &DisplayZone::utc()).is_empty());
    }

    #[test]
    fn test_from_bounds() {
        assert_eq!(DateRange::from_bounds(None, None), None);
        let open_end = DateRange::from_bounds(Some(date(2024, 1, 1)), None).unwrap();
        assert!(open_end.contains(date(2030, 1, 1)));
        assert!(!open_end.contains(date(2023, 12, 31)));
    }

    #[test]
    fn test_select_scope() {
        let records = vec![
            record(1, "A: in", 3, "2024-01-02T00:00:00Z"),
            record(2, "A: out", 4, "2024-02-01T00:00:00Z"),
            record(3, "B: other", 5, "2024-01-02T00:00:00Z"),
        ];
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
        let scope = select_scope(&records, "A", Some(range), &DisplayZone::utc());
        let ids: Vec<i32> = scope.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
