pub mod achievement;
pub mod group_color;
pub mod user;
