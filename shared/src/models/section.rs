//! Menu section models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{MenuId, SectionId};

/// A named group of items within a menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSection {
    pub id: SectionId,
    pub menu_id: MenuId,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    /// Hidden sections stay editable but are not served to guests
    pub visible: bool,
}

/// Display order for a section appended after `existing`
pub fn next_display_order(existing: &[MenuSection]) -> i32 {
    existing
        .iter()
        .map(|section| section.display_order)
        .max()
        .map_or(0, |highest| highest + 1)
}

/// Restore a contiguous 0-based ordering, keeping relative positions
pub fn reindex(sections: &mut [MenuSection]) {
    sections.sort_by_key(|section| section.display_order);
    for (index, section) in sections.iter_mut().enumerate() {
        section.display_order = index as i32;
    }
}

/// Input for creating a section
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSectionInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(order: i32) -> MenuSection {
        MenuSection {
            id: SectionId::new(),
            menu_id: MenuId::new(),
            name: format!("section {order}"),
            description: None,
            display_order: order,
            visible: true,
        }
    }

    #[test]
    fn next_order_appends_after_gaps() {
        assert_eq!(next_display_order(&[]), 0);
        assert_eq!(next_display_order(&[section(0), section(7)]), 8);
    }

    #[test]
    fn reindex_closes_gaps_preserving_order() {
        let mut sections = vec![section(5), section(0), section(12)];
        reindex(&mut sections);
        let orders: Vec<i32> = sections.iter().map(|s| s.display_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(sections[2].name, "section 12");
    }
}
