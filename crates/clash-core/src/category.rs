//! Event categories.
//!
//! The category table is display data only. The conflict engine never reads
//! it; the event form uses it to resolve a category's colour when an event is
//! saved.

use serde::{Deserialize, Serialize};

/// Colour used when a category key is not in the table.
pub const FALLBACK_COLOR: &str = "bg-gray-500";

/// One entry in the category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Key stored on events.
    pub value: String,
    /// Human-readable name.
    pub label: String,
    pub color: String,
}

impl Category {
    pub fn new(value: &str, label: &str, color: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

/// Read-only access to a category table.
pub trait CategoryLookup {
    /// All categories, in display order.
    fn categories(&self) -> &[Category];

    /// Find a category by key.
    fn find(&self, value: &str) -> Option<&Category> {
        self.categories().iter().find(|c| c.value == value)
    }

    /// Colour for a category key, falling back to [`FALLBACK_COLOR`].
    fn color_for(&self, value: &str) -> &str {
        self.find(value).map_or(FALLBACK_COLOR, |c| c.color.as_str())
    }
}

/// The built-in category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub const fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(vec![
            Category::new("meeting", "Meeting", "bg-blue-500"),
            Category::new("work", "Work", "bg-purple-500"),
            Category::new("personal", "Personal", "bg-green-500"),
            Category::new("health", "Health", "bg-red-500"),
            Category::new("social", "Social", "bg-yellow-500"),
            Category::new("travel", "Travel", "bg-indigo-500"),
            Category::new("other", "Other", "bg-gray-500"),
        ])
    }
}

impl CategoryLookup for CategoryTable {
    fn categories(&self) -> &[Category] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_resolves_colors() {
        let table = CategoryTable::default();
        assert_eq!(table.color_for("meeting"), "bg-blue-500");
        assert_eq!(table.find("work").map(|c| c.label.as_str()), Some("Work"));
    }

    #[test]
    fn unknown_category_uses_fallback_color() {
        let table = CategoryTable::default();
        assert!(table.find("karaoke").is_none());
        assert_eq!(table.color_for("karaoke"), FALLBACK_COLOR);
    }

    #[test]
    fn custom_table_is_injectable() {
        let table = CategoryTable::new(vec![Category::new("focus", "Focus", "bg-teal-500")]);
        assert_eq!(table.categories().len(), 1);
        assert_eq!(table.color_for("focus"), "bg-teal-500");
        assert_eq!(table.color_for("meeting"), FALLBACK_COLOR);
    }
}
