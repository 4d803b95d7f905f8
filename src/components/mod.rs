//! Presentation components shared by the pages.

pub mod admin_user_row;
pub mod ingredient_nutrition;
pub mod ingredients_list;
pub mod layout;
pub mod recipe_modal;
pub mod toast_stack;
