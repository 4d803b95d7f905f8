//! Pure helpers for the recipe browsing page.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

/// Filter buttons rendered above the list; `All` disables the filter.
pub const CATEGORIES: [&str; 6] = ["All", "BREAKFAST", "LUNCH", "DINNER", "DESSERT", "SNACK"];

/// Query value for the selected filter button; `All` sends no parameter.
pub fn category_query(selected: &str) -> Option<&str> {
    if selected == "All" { None } else { Some(selected) }
}

/// Empty-state message, mentioning the active filter when one is set.
pub fn empty_list_message(selected: &str) -> String {
    match category_query(selected) {
        Some(category) => format!("No recipes found in {category}."),
        None => "No recipes found.".to_owned(),
    }
}

/// Footer label for a recipe card.
pub fn ingredient_count_label(count: usize) -> String {
    if count == 1 {
        "1 ingredient".to_owned()
    } else {
        format!("{count} ingredients")
    }
}
