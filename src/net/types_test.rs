use super::*;

#[test]
fn user_roles_deserialize_from_array() {
    let user: UserDto =
        serde_json::from_value(serde_json::json!({"username": "alice", "roles": ["user", "admin"]}))
            .unwrap();
    assert_eq!(user.roles, vec!["user".to_owned(), "admin".to_owned()]);
}

#[test]
fn user_roles_deserialize_from_comma_joined_string() {
    let user: UserDto =
        serde_json::from_value(serde_json::json!({"username": "alice", "roles": "user, admin"}))
            .unwrap();
    assert_eq!(user.roles, vec!["user".to_owned(), "admin".to_owned()]);
}

#[test]
fn user_roles_array_and_string_forms_agree() {
    let array: UserDto =
        serde_json::from_value(serde_json::json!({"username": "u", "roles": ["a", "b"]})).unwrap();
    let joined: UserDto =
        serde_json::from_value(serde_json::json!({"username": "u", "roles": "a,b"})).unwrap();
    assert_eq!(array, joined);
}

#[test]
fn user_roles_default_to_empty_when_missing_or_null() {
    let missing: UserDto = serde_json::from_value(serde_json::json!({"username": "u"})).unwrap();
    assert!(missing.roles.is_empty());

    let null: UserDto =
        serde_json::from_value(serde_json::json!({"username": "u", "roles": null})).unwrap();
    assert!(null.roles.is_empty());
}

#[test]
fn user_roles_reject_non_string_entries() {
    let result: Result<UserDto, _> =
        serde_json::from_value(serde_json::json!({"username": "u", "roles": [1, 2]}));
    assert!(result.is_err());
}

#[test]
fn recipe_deserializes_with_nested_ingredients() {
    let recipe: Recipe = serde_json::from_value(serde_json::json!({
        "id": 7,
        "name": "Pancakes",
        "category": "BREAKFAST",
        "description": "Fluffy.",
        "ingredients": [{
            "id": 1,
            "quantity": 200.0,
            "unit": "g",
            "preparation": null,
            "ingredient": {
                "name": "Flour",
                "description": "All-purpose",
                "nutrition": {"calories": 364.0, "protein": 10.0, "carbs": 76.0, "fat": 1.0}
            }
        }]
    }))
    .unwrap();
    assert_eq!(recipe.ingredients.len(), 1);
    let nutrition = recipe.ingredients[0].ingredient.nutrition.as_ref().unwrap();
    assert_eq!(nutrition.calories, Some(364.0));
}

#[test]
fn recipe_list_entries_may_omit_ingredients_and_description() {
    let recipe: Recipe = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Toast",
        "category": "SNACK"
    }))
    .unwrap();
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.description.is_empty());
}

#[test]
fn nutrition_fields_are_individually_optional() {
    let nutrition: Nutrition =
        serde_json::from_value(serde_json::json!({"calories": 52.0})).unwrap();
    assert_eq!(nutrition.calories, Some(52.0));
    assert_eq!(nutrition.protein, None);
}

#[test]
fn ingredient_request_omits_absent_preparation() {
    let request = IngredientRequest {
        name: "Salt".to_owned(),
        quantity: 1.0,
        unit: "tsp".to_owned(),
        preparation: None,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("preparation").is_none());
}

#[test]
fn token_response_extracts_token() {
    let response: TokenResponse =
        serde_json::from_value(serde_json::json!({"token": "a.b.c", "username": "ignored"}))
            .unwrap();
    assert_eq!(response.token, "a.b.c");
}
