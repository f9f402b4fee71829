//! # mealdb
//!
//! A blocking client for [TheMealDB](https://themealdb.com) recipe API.
//!
//! Each operation issues a single GET against the public API, decodes the
//! JSON body and returns the payload nested under `meals` or `categories`.
//! An empty body or a missing/empty payload fails with
//! [`MealDbError::NoResults`]; a request that cannot be completed fails with
//! [`MealDbError::Transport`] carrying the transport diagnostic.
//!
//! ## Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), mealdb::MealDbError> {
//! let meals = mealdb::search("Arrabiata")?;
//! println!("{}", meals[0]["strMeal"]);
//!
//! let areas = mealdb::area_filter()?;
//! println!("{} areas", areas.len());
//! # Ok(())
//! # }
//! ```
//!
//! Use [`MealDbClient`] directly to reuse one HTTP client across calls or to
//! point at a different base URL.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod model;
pub mod transport;

pub use client::MealDbClient;
pub use config::{load_config, ClientConfig, BASE_URL};
pub use endpoint::Endpoint;
pub use error::{MealDbError, TransportError};
pub use model::{Category, FilterResult, Ingredient, Meal};
pub use transport::{HttpTransport, Transport};

/// Search meals by name.
pub fn search(name: &str) -> Result<Vec<Meal>, MealDbError> {
    MealDbClient::new()?.search(name)
}

/// Search meals by first letter; only the first character of `letter` is used.
pub fn search_by_letter(letter: &str) -> Result<Vec<Meal>, MealDbError> {
    MealDbClient::new()?.search_by_letter(letter)
}

/// Look up full meal details by id.
pub fn search_by_id(id: &str) -> Result<Meal, MealDbError> {
    MealDbClient::new()?.search_by_id(id)
}

/// Fetch a single random meal.
pub fn random() -> Result<Meal, MealDbError> {
    MealDbClient::new()?.random()
}

/// List all meal categories.
pub fn meal_categories() -> Result<Vec<Category>, MealDbError> {
    MealDbClient::new()?.meal_categories()
}

/// Filter meals by main ingredient.
pub fn filter_by_ingredient(ingredient: &str) -> Result<Vec<FilterResult>, MealDbError> {
    MealDbClient::new()?.filter_by_ingredient(ingredient)
}

/// Filter meals by area.
pub fn filter_by_area(area: &str) -> Result<Vec<FilterResult>, MealDbError> {
    MealDbClient::new()?.filter_by_area(area)
}

/// Filter meals by category.
pub fn filter_by_category(category: &str) -> Result<Vec<FilterResult>, MealDbError> {
    MealDbClient::new()?.filter_by_category(category)
}

/// List the category names accepted by [`filter_by_category`].
pub fn categories_filter() -> Result<Vec<String>, MealDbError> {
    MealDbClient::new()?.categories_filter()
}

/// List the ingredients accepted by [`filter_by_ingredient`].
pub fn ingredients_filter() -> Result<Vec<Ingredient>, MealDbError> {
    MealDbClient::new()?.ingredients_filter()
}

/// List the area names accepted by [`filter_by_area`].
pub fn area_filter() -> Result<Vec<String>, MealDbError> {
    MealDbClient::new()?.area_filter()
}
