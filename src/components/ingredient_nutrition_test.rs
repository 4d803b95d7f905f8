use super::*;

#[test]
fn label_keeps_liquid_units() {
    assert_eq!(nutrition_label("ml"), "Nutrition (per 100ml)");
    assert_eq!(nutrition_label("ML"), "Nutrition (per 100ML)");
}

#[test]
fn label_defaults_to_grams() {
    assert_eq!(nutrition_label("g"), "Nutrition (per 100g)");
    assert_eq!(nutrition_label("pcs"), "Nutrition (per 100g)");
}

#[test]
fn rows_include_only_present_values() {
    let nutrition = Nutrition {
        calories: Some(52.0),
        protein: None,
        carbs: Some(14.0),
        fat: None,
    };
    let rows = nutrition_rows(&nutrition);
    assert_eq!(
        rows,
        vec![
            ("Calories", "52 kcal".to_owned()),
            ("Carbs", "14g".to_owned()),
        ]
    );
}

#[test]
fn rows_are_empty_for_unknown_nutrition() {
    assert!(nutrition_rows(&Nutrition::default()).is_empty());
}

#[test]
fn fractional_values_keep_their_decimals() {
    let nutrition = Nutrition {
        calories: None,
        protein: Some(0.5),
        carbs: None,
        fat: None,
    };
    assert_eq!(nutrition_rows(&nutrition), vec![("Protein", "0.5g".to_owned())]);
}
