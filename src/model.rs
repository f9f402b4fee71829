//! Payload shapes returned by TheMealDB.
//!
//! The upstream schema is wide and loosely typed (`strIngredient1` through
//! `strIngredient20`, nullable strings everywhere), so entities are kept as
//! plain JSON objects rather than mapped onto structs.

use serde_json::{Map, Value};

/// A recipe, as returned by the search, lookup and random endpoints.
pub type Meal = Map<String, Value>;

/// A meal category from `categories.php`.
pub type Category = Map<String, Value>;

/// Reduced meal object (`strMeal`, `strMealThumb`, `idMeal`) from `filter.php`.
pub type FilterResult = Map<String, Value>;

/// An ingredient from `list.php?i=list`.
pub type Ingredient = Map<String, Value>;

/// Top-level JSON key holding the payload of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKey {
    Meals,
    Categories,
}

impl PayloadKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKey::Meals => "meals",
            PayloadKey::Categories => "categories",
        }
    }
}

/// Field projected out of each element by the name-list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Category,
    Area,
}

impl NameField {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameField::Category => "strCategory",
            NameField::Area => "strArea",
        }
    }
}
