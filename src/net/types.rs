//! Wire DTOs for the recipe API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads so serde round-trips stay
//! lossless. The one deliberate normalization is the role claim on
//! [`UserDto`]: the server sometimes sends roles as an array and sometimes as
//! a comma-joined string, and that ambiguity is resolved here at the boundary
//! so the rest of the client only ever sees `Vec<String>`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A recipe as returned by `recipes` and `recipes/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Category tag (e.g. `"DESSERT"`).
    pub category: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Ingredient lines; the list endpoint may omit or truncate these.
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// One ingredient line on a recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Unique line identifier.
    pub id: i64,
    /// Amount in `unit`.
    pub quantity: f64,
    /// Measurement unit (e.g. `"g"`, `"ml"`, `"pcs"`).
    pub unit: String,
    /// Optional preparation note (e.g. `"finely chopped"`).
    pub preparation: Option<String>,
    /// The ingredient itself.
    pub ingredient: Ingredient,
}

/// An ingredient with optional nutrition facts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name.
    pub name: String,
    /// Free-text description, if any.
    pub description: Option<String>,
    /// Nutrition per 100g/100ml, if known.
    pub nutrition: Option<Nutrition>,
}

/// Nutrition facts; every field is optional and the UI renders only the
/// values that are present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct Nutrition {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

/// Request body for creating or replacing an ingredient line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientRequest {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
}

/// A user row as returned by the admin `auth/users` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    /// Unique username.
    pub username: String,
    /// Assigned roles, normalized from array or comma-joined form.
    #[serde(default, deserialize_with = "deserialize_roles")]
    pub roles: Vec<String>,
}

/// Successful `auth/login` / `auth/register` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent calls.
    pub token: String,
}

fn deserialize_roles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(role) => Ok(role),
                _ => Err(D::Error::custom("expected role name string")),
            })
            .collect(),
        serde_json::Value::String(joined) => Ok(joined
            .split(',')
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(str::to_owned)
            .collect()),
        serde_json::Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("expected role array or joined string")),
    }
}
