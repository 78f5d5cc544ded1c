//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Repository traits, domain error types and the pure achievement
//! pipeline: category extraction, aggregation, levels, reports and
//! summary planning.

pub mod aggregate;
pub mod category;
pub mod errors;
pub mod level;
pub mod report;
pub mod repositories;
pub mod summary;
pub mod time;
pub mod timeline;

pub use aggregate::{Aggregate, AggregateFilter, CategoryBucket, DateRange, GroupedEntry};
pub use category::{DEFAULT_CATEGORY, extract_group};
pub use errors::DomainError;
pub use level::LevelInfo;
pub use repositories::*;
pub use time::DisplayZone;
