//! Repository implementations using SeaORM

pub mod achievement_repository;
pub mod group_color_repository;
pub mod user_repository;

pub use achievement_repository::SeaOrmAchievementRepository;
pub use group_color_repository::SeaOrmGroupColorRepository;
pub use user_repository::SeaOrmUserRepository;
