//! Portfolio categories and the gallery filter.
//!
//! The gallery is a fixed array; filtering never mutates it, it only selects
//! which entries are shown and keeps their original order.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Mariage,
    Editorial,
    Beaute,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Mariage, Category::Editorial, Category::Beaute];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Mariage => "mariage",
            Category::Editorial => "editorial",
            Category::Beaute => "beaute",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Mariage => "Mariage",
            Category::Editorial => "Éditorial",
            Category::Beaute => "Beauté",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Active selector of the gallery. `All` is the "tous" sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PortfolioFilter {
    #[default]
    All,
    Only(Category),
}

impl PortfolioFilter {
    /// Buttons in display order.
    pub fn choices() -> [PortfolioFilter; 4] {
        [
            PortfolioFilter::All,
            PortfolioFilter::Only(Category::Mariage),
            PortfolioFilter::Only(Category::Editorial),
            PortfolioFilter::Only(Category::Beaute),
        ]
    }

    pub fn value(&self) -> &'static str {
        match self {
            PortfolioFilter::All => "tous",
            PortfolioFilter::Only(category) => category.slug(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PortfolioFilter::All => "Tous",
            PortfolioFilter::Only(category) => category.label(),
        }
    }

    /// Parses a selector value; unknown values are rejected.
    pub fn from_value(value: &str) -> Option<PortfolioFilter> {
        if value == "tous" {
            return Some(PortfolioFilter::All);
        }
        Category::ALL
            .into_iter()
            .find(|category| category.slug() == value)
            .map(PortfolioFilter::Only)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Only(selected) => *selected == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub category: Category,
    pub photo_id: &'static str,
}

/// Items shown for `filter`, in source order.
pub fn filtered(items: &[PortfolioItem], filter: PortfolioFilter) -> Vec<&PortfolioItem> {
    items.iter().filter(|item| filter.matches(item.category)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::studio::PORTFOLIO;

    #[test]
    fn test_mariage_filter_keeps_only_weddings() {
        let shown = filtered(&PORTFOLIO, PortfolioFilter::Only(Category::Mariage));
        assert_eq!(shown.len(), 3);
        assert!(shown.iter().all(|item| item.category == Category::Mariage));
        let ids: Vec<u32> = shown.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 4, 6]);
    }

    #[test]
    fn test_tous_shows_everything_in_order() {
        let shown = filtered(&PORTFOLIO, PortfolioFilter::All);
        assert_eq!(shown.len(), 6);
        let ids: Vec<u32> = shown.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = PortfolioFilter::Only(Category::Beaute);
        let first: Vec<u32> = filtered(&PORTFOLIO, filter).iter().map(|i| i.id).collect();
        let second: Vec<u32> = filtered(&PORTFOLIO, filter).iter().map(|i| i.id).collect();
        assert_eq!(first, second);
        assert_eq!(PORTFOLIO.len(), 6);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(PortfolioFilter::from_value("tous"), Some(PortfolioFilter::All));
        assert_eq!(
            PortfolioFilter::from_value("editorial"),
            Some(PortfolioFilter::Only(Category::Editorial))
        );
        assert_eq!(PortfolioFilter::from_value("Mariage"), None);
        assert_eq!(PortfolioFilter::from_value(""), None);
    }

    #[test]
    fn test_choices_round_trip_their_values() {
        for choice in PortfolioFilter::choices() {
            assert_eq!(PortfolioFilter::from_value(choice.value()), Some(choice));
        }
    }
}
