//! Category color preferences

use std::collections::HashMap;

use crate::domain::{DomainError, GroupColorRepository};

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

pub async fn get_colors(
    repo: &dyn GroupColorRepository,
    user_id: i32,
) -> Result<HashMap<String, String>, DomainError> {
    repo.find_by_owner(user_id).await
}

/// Save `#rrggbb` as the display color of `group`
pub async fn save_color(
    repo: &dyn GroupColorRepository,
    user_id: i32,
    group: &str,
    color: &str,
) -> Result<(), DomainError> {
    let group = group.trim();
    if group.is_empty() {
        return Err(DomainError::Validation("Group name is required".to_string()));
    }
    if !is_hex_color(color) {
        return Err(DomainError::Validation(format!(
            "Color must look like #rrggbb, got '{}'",
            color
        )));
    }

    repo.save(user_id, group.to_string(), color.to_lowercase())
        .await
}
