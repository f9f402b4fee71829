use crate::model::PayloadKey;

/// One upstream API operation together with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Search(&'a str),
    SearchByLetter(char),
    Lookup(&'a str),
    Random,
    Categories,
    FilterByIngredient(&'a str),
    FilterByArea(&'a str),
    FilterByCategory(&'a str),
    ListCategories,
    ListIngredients,
    ListAreas,
}

impl Endpoint<'_> {
    /// Path and query relative to the API root, with input percent-encoded.
    pub fn path(&self) -> String {
        match *self {
            Endpoint::Search(name) => format!("search.php?s={}", urlencoding::encode(name)),
            Endpoint::SearchByLetter(letter) => {
                let mut buf = [0u8; 4];
                format!(
                    "search.php?f={}",
                    urlencoding::encode(letter.encode_utf8(&mut buf))
                )
            }
            Endpoint::Lookup(id) => format!("lookup.php?i={}", urlencoding::encode(id)),
            Endpoint::Random => "random.php".to_string(),
            Endpoint::Categories => "categories.php".to_string(),
            Endpoint::FilterByIngredient(name) => {
                format!("filter.php?i={}", urlencoding::encode(name))
            }
            Endpoint::FilterByArea(name) => format!("filter.php?a={}", urlencoding::encode(name)),
            Endpoint::FilterByCategory(name) => {
                format!("filter.php?c={}", urlencoding::encode(name))
            }
            Endpoint::ListCategories => "list.php?c=list".to_string(),
            Endpoint::ListIngredients => "list.php?i=list".to_string(),
            Endpoint::ListAreas => "list.php?a=list".to_string(),
        }
    }

    /// Top-level key the response nests its payload under.
    pub fn key(&self) -> PayloadKey {
        match self {
            Endpoint::Categories => PayloadKey::Categories,
            _ => PayloadKey::Meals,
        }
    }
}
