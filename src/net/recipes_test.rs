use super::*;
use crate::net::api::build_url;

#[test]
fn detail_endpoint_resolves_to_numeric_path() {
    let url = build_url(DETAIL_ENDPOINT, &[("id", "42")], &[]);
    assert!(url.ends_with("recipes/42"));
}

#[test]
fn list_endpoint_with_category_filter() {
    let url = build_url(LIST_ENDPOINT, &[], &[("category", "DESSERT")]);
    assert!(url.ends_with("recipes?category=DESSERT"));
}

#[test]
fn ingredient_endpoints_resolve_both_ids() {
    let url = build_url(
        INGREDIENT_ENDPOINT,
        &[("recipeId", "3"), ("ingredientId", "17")],
        &[],
    );
    assert!(url.ends_with("recipes/3/ingredients/17"));

    let url = build_url(INGREDIENTS_ENDPOINT, &[("recipeId", "3")], &[]);
    assert!(url.ends_with("recipes/3/ingredients"));
}
