use serde::{Deserialize, Serialize};

/// Placeholder a category picker shows before the user chooses anything.
/// Submitting it is treated the same as submitting no category at all.
pub const UNSELECTED_CATEGORY: &str = "Select Category";

/// The closed set of categories a transaction can be filed under.
///
/// The stored `Transaction` keeps its category as plain text; this enum is
/// the boundary type pickers and validation work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Money coming in (salary, refunds, gifts)
    Income,
    Rent,
    Food,
    Entertainment,
    /// Anything that doesn't fit the categories above
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Income,
        Category::Rent,
        Category::Food,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Rent => "Rent",
            Category::Food => "Food",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Category::Income),
            "rent" => Some(Category::Rent),
            "food" => Some(Category::Food),
            "entertainment" => Some(Category::Entertainment),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            let s = category.as_str();
            let parsed = Category::from_str(s).unwrap();
            assert_eq!(category, parsed);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(Category::from_str("food"), Some(Category::Food));
        assert_eq!(Category::from_str("FOOD"), Some(Category::Food));
        assert_eq!(Category::from_str("EnterTainment"), Some(Category::Entertainment));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(Category::from_str("Groceries"), None);
        assert_eq!(Category::from_str(""), None);
        assert_eq!(Category::from_str(UNSELECTED_CATEGORY), None);
    }
}
