use log::error;
use mealdb::{MealDbClient, MealDbError};
use serde::Serialize;
use std::env;
use thiserror::Error;

const USAGE: &str = "Usage: mealdb <command> [argument]

Commands:
  search <name>          Search meals by name
  letter <letter>        Search meals by first letter
  lookup <id>            Meal details by id
  random                 A random meal
  categories             All meal categories
  ingredient <name>      Filter by main ingredient
  area <name>            Filter by area
  category <name>        Filter by category
  list-categories        Category names
  list-ingredients       Ingredients
  list-areas             Area names";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the command and optional argument from command-line arguments
    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().ok_or(USAGE)?;
    let argument = args.get(1).map(String::as_str);

    let client = MealDbClient::from_env()?;

    let output = match run(&client, command, argument) {
        Ok(output) => output,
        Err(CliError::Api(e)) => {
            error!("{} failed: {}", command, e);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", output);
    Ok(())
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{}", USAGE)]
    Usage,

    #[error(transparent)]
    Api(#[from] MealDbError),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

fn run(
    client: &MealDbClient,
    command: &str,
    argument: Option<&str>,
) -> Result<String, CliError> {
    let arg = || argument.ok_or(CliError::Usage);

    match command {
        "search" => render(&client.search(arg()?)?),
        "letter" => render(&client.search_by_letter(arg()?)?),
        "lookup" => render(&client.search_by_id(arg()?)?),
        "random" => render(&client.random()?),
        "categories" => render(&client.meal_categories()?),
        "ingredient" => render(&client.filter_by_ingredient(arg()?)?),
        "area" => render(&client.filter_by_area(arg()?)?),
        "category" => render(&client.filter_by_category(arg()?)?),
        "list-categories" => render(&client.categories_filter()?),
        "list-ingredients" => render(&client.ingredients_filter()?),
        "list-areas" => render(&client.area_filter()?),
        _ => Err(CliError::Usage),
    }
}

fn render<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
