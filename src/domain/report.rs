//! Plain-text rendering of aggregated achievements.
//!
//! The output is byte-for-byte deterministic for identical input: it feeds
//! the copy/export views and the daily backup file.

use chrono::NaiveDate;

use super::aggregate::Aggregate;
use super::repositories::Achievement;
use super::time::format_date;

const UNDATED_HEADER: &str = "Мои достижения";

/// Header line, then one block per category in lexicographic order.
pub fn format_report(aggregate: &Aggregate, date: Option<NaiveDate>) -> String {
    let mut out = match date {
        Some(date) => format!("Достижения за {}\n", format_date(date)),
        None => format!("{}\n", UNDATED_HEADER),
    };

    for (category, bucket) in aggregate.categories() {
        out.push('\n');
        out.push_str(category);
        out.push_str(":\n");
        for entry in &bucket.entries {
            out.push_str("  - ");
            out.push_str(&entry.body);
            out.push('\n');
        }
    }

    out
}

/// Flat list of raw descriptions with their points, in input order.
pub fn format_plain_list(records: &[Achievement]) -> String {
    let mut out = format!("{}:\n\n", UNDATED_HEADER);
    for record in records {
        out.push_str(&format!("• {} ({} pts)\n", record.description, record.points));
    }
    out
}

/// One dated block of the backup export file.
pub fn format_export_block(username: &str, date: NaiveDate, aggregate: &Aggregate) -> String {
    format!(
        "=== Report for {} - {} ===\n{}\n",
        username,
        date.format("%Y-%m-%d"),
        format_report(aggregate, Some(date))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregate::{AggregateFilter, aggregate};
    use crate::domain::time::DisplayZone;
    use chrono::{DateTime, Utc};

    fn record(id: i32, description: &str, points: i64) -> Achievement {
        Achievement {
            id,
            description: description.to_string(),
            points,
            user_id: 1,
            created_at: DateTime::parse_from_rfc3339("2024-12-02T09:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    fn sample() -> Vec<Achievement> {
        vec![
            record(1, "РАБОТА: Закрыл баг", 20),
            record(2, "прочитал статью", 10),
            record(3, "РАБОТА: Код-ревью", 15),
            record(4, "ЗДОРОВЬЕ: Пробежка", 30),
        ]
    }

    #[test]
    fn test_report_layout() {
        let agg = aggregate(&sample(), &AggregateFilter::default(), &DisplayZone::utc());
        let date = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap();
        let text = format_report(&agg, Some(date));

        let expected = "Достижения за 02.12.2024, Понедельник\n\
                        \n\
                        ДРУГОЕ:\n  - прочитал статью\n\
                        \n\
                        ЗДОРОВЬЕ:\n  - Пробежка\n\
                        \n\
                        РАБОТА:\n  - Закрыл баг\n  - Код-ревью\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_report_is_deterministic() {
        let agg = aggregate(&sample(), &AggregateFilter::default(), &DisplayZone::utc());
        assert_eq!(format_report(&agg, None), format_report(&agg, None));
    }

    #[test]
    fn test_empty_report_is_header_only() {
        assert_eq!(format_report(&Aggregate::default(), None), "Мои достижения\n");
    }

    #[test]
    fn test_plain_list() {
        let text = format_plain_list(&sample()[..2]);
        assert_eq!(
            text,
            "Мои достижения:\n\n• РАБОТА: Закрыл баг (20 pts)\n• прочитал статью (10 pts)\n"
        );
    }

    #[test]
    fn test_export_block_header() {
        let agg = aggregate(&sample(), &AggregateFilter::default(), &DisplayZone::utc());
        let date = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap();
        let block = format_export_block("alice", date, &agg);
        assert!(block.starts_with("=== Report for alice - 2024-12-02 ===\nДостижения за"));
        assert!(block.ends_with("  - Код-ревью\n\n"));
    }
}
