/// Fixed set of posting categories. Postings must use one of these verbatim.
pub const CATEGORIES: [&str; 7] = [
    "Domestic workers",
    "Construction",
    "Specialised",
    "Farming",
    "Waste collection",
    "Cleaning",
    "General",
];

pub fn is_valid_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_accepted() {
        for category in CATEGORIES {
            assert!(is_valid_category(category));
        }
    }

    #[test]
    fn test_unknown_and_miscased_categories_rejected() {
        assert!(!is_valid_category("Gardening"));
        assert!(!is_valid_category("construction"));
        assert!(!is_valid_category(""));
    }
}
