//! Typed recipe endpoints over the generic gateway.
//!
//! Facade only: every function maps one endpoint to DTOs and carries no
//! logic of its own.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use super::api::{self, ApiError, Method};
use super::types::{IngredientRequest, Recipe};

pub(crate) const LIST_ENDPOINT: &str = "recipes";
pub(crate) const DETAIL_ENDPOINT: &str = "recipes/{id}";
pub(crate) const INGREDIENTS_ENDPOINT: &str = "recipes/{recipeId}/ingredients";
pub(crate) const INGREDIENT_ENDPOINT: &str = "recipes/{recipeId}/ingredients/{ingredientId}";

/// Fetch all recipes, optionally filtered by category.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn get_all(category: Option<&str>) -> Result<Vec<Recipe>, ApiError> {
    let query: Vec<(&str, &str)> = match category {
        Some(category) => vec![("category", category)],
        None => Vec::new(),
    };
    let value = api::call(Method::Get, LIST_ENDPOINT, &[], &query, None, true).await?;
    api::from_value(value)
}

/// Fetch one recipe with its full ingredient detail.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn get_by_id(id: i64) -> Result<Recipe, ApiError> {
    let id = id.to_string();
    let value = api::call(Method::Get, DETAIL_ENDPOINT, &[("id", &id)], &[], None, true).await?;
    api::from_value(value)
}

/// Create a recipe.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn create(recipe: &Recipe) -> Result<Recipe, ApiError> {
    let body = serde_json::to_value(recipe).map_err(|err| ApiError::unexpected_shape(&err.to_string()))?;
    let value = api::call(Method::Post, LIST_ENDPOINT, &[], &[], Some(&body), true).await?;
    api::from_value(value)
}

/// Replace a recipe.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn update(id: i64, recipe: &Recipe) -> Result<Recipe, ApiError> {
    let id = id.to_string();
    let body = serde_json::to_value(recipe).map_err(|err| ApiError::unexpected_shape(&err.to_string()))?;
    let value = api::call(Method::Put, DETAIL_ENDPOINT, &[("id", &id)], &[], Some(&body), true).await?;
    api::from_value(value)
}

/// Delete a recipe. The server answers 204.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn delete(id: i64) -> Result<(), ApiError> {
    let id = id.to_string();
    api::call(Method::Delete, DETAIL_ENDPOINT, &[("id", &id)], &[], None, true).await?;
    Ok(())
}

/// Add an ingredient line to a recipe.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn add_ingredient(recipe_id: i64, request: &IngredientRequest) -> Result<Recipe, ApiError> {
    let recipe_id = recipe_id.to_string();
    let body = serde_json::to_value(request).map_err(|err| ApiError::unexpected_shape(&err.to_string()))?;
    let value = api::call(
        Method::Post,
        INGREDIENTS_ENDPOINT,
        &[("recipeId", &recipe_id)],
        &[],
        Some(&body),
        true,
    )
    .await?;
    api::from_value(value)
}

/// Remove an ingredient line from a recipe. The server answers 204.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn remove_ingredient(recipe_id: i64, ingredient_id: i64) -> Result<(), ApiError> {
    let recipe_id = recipe_id.to_string();
    let ingredient_id = ingredient_id.to_string();
    api::call(
        Method::Delete,
        INGREDIENT_ENDPOINT,
        &[("recipeId", &recipe_id), ("ingredientId", &ingredient_id)],
        &[],
        None,
        true,
    )
    .await?;
    Ok(())
}
