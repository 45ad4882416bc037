// File: src/model/filter.rs
// Decides which feed items are about the tracked operator.
use crate::model::RawItem;

pub const DEFAULT_CATEGORY: &str = "mezzi pubblici";
pub const DEFAULT_KEYWORD: &str = "Atac";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFilter {
    pub category: String,
    pub keyword: String,
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            keyword: DEFAULT_KEYWORD.to_string(),
        }
    }
}

impl ItemFilter {
    pub fn new(category: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            keyword: keyword.into(),
        }
    }

    /// An item is relevant when it carries the category label and mentions the
    /// keyword (case-sensitive) in its title or body.
    pub fn is_relevant(&self, item: &RawItem) -> bool {
        log::debug!("in categories: {:?}", item.categories);

        if !item.has_category(&self.category) {
            log::debug!("ignoring item, not about {}", self.category);
            return false;
        }

        if !item.title.contains(&self.keyword) && !item.content.contains(&self.keyword) {
            log::debug!(
                "ignoring item, item doesn't appear to be about {}",
                self.keyword
            );
            return false;
        }

        true
    }
}
