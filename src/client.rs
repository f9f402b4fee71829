use log::debug;
use serde_json::{Map, Value};

use crate::config::{ClientConfig, BASE_URL};
use crate::endpoint::Endpoint;
use crate::error::MealDbError;
use crate::model::{Category, FilterResult, Ingredient, Meal, NameField, PayloadKey};
use crate::transport::{HttpTransport, Transport};

/// Blocking client for TheMealDB.
///
/// Holds only its transport; every call is an independent request with no
/// state carried between calls.
#[derive(Debug, Clone)]
pub struct MealDbClient<T = HttpTransport> {
    transport: T,
}

impl MealDbClient<HttpTransport> {
    /// Client for the public API at [`BASE_URL`].
    pub fn new() -> Result<Self, MealDbError> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MealDbError> {
        Ok(Self::with_transport(HttpTransport::new(base_url)?))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, MealDbError> {
        Ok(Self::with_transport(HttpTransport::from_config(config)?))
    }

    /// Client built from `mealdb.toml` and `MEALDB__*` environment variables.
    pub fn from_env() -> Result<Self, MealDbError> {
        let config = ClientConfig::load()?;
        debug!("{:#?}", config);
        Self::from_config(&config)
    }
}

impl<T: Transport> MealDbClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    fn transport(&self) -> &T {
        &self.transport
    }

    /// Search meals by name.
    pub fn search(&self, name: &str) -> Result<Vec<Meal>, MealDbError> {
        self.fetch_entries(Endpoint::Search(name))
    }

    /// Search meals by first letter. Only the first character of `letter` is sent.
    pub fn search_by_letter(&self, letter: &str) -> Result<Vec<Meal>, MealDbError> {
        let first = letter.chars().next().ok_or_else(|| {
            debug!("search_by_letter called with empty input");
            MealDbError::NoResults
        })?;
        self.fetch_entries(Endpoint::SearchByLetter(first))
    }

    /// Full meal details by id.
    pub fn search_by_id(&self, id: &str) -> Result<Meal, MealDbError> {
        self.fetch_first(Endpoint::Lookup(id))
    }

    /// A single random meal.
    pub fn random(&self) -> Result<Meal, MealDbError> {
        self.fetch_first(Endpoint::Random)
    }

    /// All meal categories with descriptions and thumbnails.
    pub fn meal_categories(&self) -> Result<Vec<Category>, MealDbError> {
        self.fetch_entries(Endpoint::Categories)
    }

    pub fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<FilterResult>, MealDbError> {
        self.fetch_entries(Endpoint::FilterByIngredient(ingredient))
    }

    pub fn filter_by_area(&self, area: &str) -> Result<Vec<FilterResult>, MealDbError> {
        self.fetch_entries(Endpoint::FilterByArea(area))
    }

    pub fn filter_by_category(&self, category: &str) -> Result<Vec<FilterResult>, MealDbError> {
        self.fetch_entries(Endpoint::FilterByCategory(category))
    }

    /// Names of every category usable with [`filter_by_category`](Self::filter_by_category).
    ///
    /// Entries without a string `strCategory` are dropped rather than kept as
    /// placeholders; if none remain the call fails with [`MealDbError::NoResults`].
    pub fn categories_filter(&self) -> Result<Vec<String>, MealDbError> {
        let entries = self.fetch_entries(Endpoint::ListCategories)?;
        project_names(entries, NameField::Category)
    }

    pub fn ingredients_filter(&self) -> Result<Vec<Ingredient>, MealDbError> {
        self.fetch_entries(Endpoint::ListIngredients)
    }

    /// Names of every area usable with [`filter_by_area`](Self::filter_by_area).
    ///
    /// Entries without a string `strArea` are dropped rather than kept as
    /// placeholders; if none remain the call fails with [`MealDbError::NoResults`].
    pub fn area_filter(&self) -> Result<Vec<String>, MealDbError> {
        let entries = self.fetch_entries(Endpoint::ListAreas)?;
        project_names(entries, NameField::Area)
    }

    fn fetch_first(&self, endpoint: Endpoint<'_>) -> Result<Meal, MealDbError> {
        self.fetch_entries(endpoint)?
            .into_iter()
            .next()
            .ok_or(MealDbError::NoResults)
    }

    /// Fetch an endpoint and return the non-empty list under its payload key.
    fn fetch_entries(&self, endpoint: Endpoint<'_>) -> Result<Vec<Map<String, Value>>, MealDbError> {
        let path = endpoint.path();
        let body = self.transport.fetch(&path).map_err(|e| {
            debug!("request for {} failed: {}", path, e);
            MealDbError::from(e)
        })?;
        decode_payload(&body, endpoint.key())
    }
}

fn decode_payload(body: &str, key: PayloadKey) -> Result<Vec<Map<String, Value>>, MealDbError> {
    if body.is_empty() {
        debug!("empty response body");
        return Err(MealDbError::NoResults);
    }

    let mut document: Map<String, Value> = serde_json::from_str(body).map_err(|e| {
        debug!("response is not a JSON object: {}", e);
        MealDbError::NoResults
    })?;

    // Missing key, null, and non-array values such as "Invalid ID" all mean no match
    let items = match document.remove(key.as_str()) {
        Some(Value::Array(items)) if !items.is_empty() => items,
        other => {
            debug!("no usable `{}` payload: {:?}", key.as_str(), other);
            return Err(MealDbError::NoResults);
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(entry) => Some(entry),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .ok_or(MealDbError::NoResults)
}

fn project_names(
    entries: Vec<Map<String, Value>>,
    field: NameField,
) -> Result<Vec<String>, MealDbError> {
    let names: Vec<String> = entries
        .into_iter()
        .filter_map(|mut entry| match entry.remove(field.as_str()) {
            Some(Value::String(name)) => Some(name),
            other => {
                debug!("skipping entry without `{}`: {:?}", field.as_str(), other);
                None
            }
        })
        .collect();

    if names.is_empty() {
        return Err(MealDbError::NoResults);
    }
    Ok(names)
}
