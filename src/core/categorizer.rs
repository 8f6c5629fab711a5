use crate::models::Category;

/// Keyword table, in tie-break order
const CATEGORY_KEYWORDS: [(Category, &[&str]); 8] = [
    (Category::Fruits, &["apple", "banana", "orange", "fruit", "berries", "grape", "mango"]),
    (
        Category::Vegetables,
        &["carrot", "broccoli", "lettuce", "vegetable", "salad", "tomato", "cucumber"],
    ),
    (Category::Grains, &["bread", "rice", "pasta", "cereal", "grain", "oats", "quinoa"]),
    (Category::Protein, &["chicken", "beef", "fish", "eggs", "meat", "tofu", "beans"]),
    (Category::Dairy, &["milk", "cheese", "yogurt", "butter", "dairy", "cream"]),
    (Category::Snacks, &["chips", "cookies", "crackers", "nuts", "snack", "popcorn"]),
    (Category::Beverages, &["water", "juice", "soda", "coffee", "tea", "drink"]),
    (Category::Prepared, &["pizza", "sandwich", "soup", "stew", "meal", "leftovers"]),
];

/// Map free text to a food category by keyword occurrence counting
///
/// Keywords match as substrings of the lower-cased text, so "pineapple"
/// counts for "apple". The category with the most matching keywords wins;
/// ties go to the category listed first. Text with no matches is `Other`.
pub fn categorize(text: &str) -> Category {
    let text = text.to_lowercase();

    let mut best = Category::Other;
    let mut best_count = 0;

    for (category, keywords) in CATEGORY_KEYWORDS.iter() {
        let count = keywords.iter().filter(|k| text.contains(*k)).count();
        // Strict comparison keeps the earliest category on ties
        if count > best_count {
            best = *category;
            best_count = count;
        }
    }

    tracing::trace!("Categorized text as {} ({} keyword hits)", best, best_count);

    best
}
