use mealdb::{ClientConfig, MealDbClient, MealDbError};
use mockito::Matcher;
use std::thread;
use std::time::Duration;

fn client_for(server: &mockito::ServerGuard) -> MealDbClient {
    MealDbClient::with_base_url(server.url()).unwrap()
}

#[test]
fn test_search_against_mock_server() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/search.php?s=Arrabiata")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "meals": [{
                    "idMeal": "52771",
                    "strMeal": "Spicy Arrabiata Penne",
                    "strCategory": "Vegetarian",
                    "strArea": "Italian"
                }]
            }"#,
        )
        .create();

    let meals = client_for(&server).search("Arrabiata").unwrap();

    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0]["strMeal"], "Spicy Arrabiata Penne");
    mock.assert();
}

#[test]
fn test_lookup_returns_first_meal() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/lookup.php?i=52772")
        .with_status(200)
        .with_body(r#"{"meals":[{"idMeal":"52772","strMeal":"Teriyaki Chicken Casserole"}]}"#)
        .create();

    let meal = client_for(&server).search_by_id("52772").unwrap();

    assert_eq!(meal["idMeal"], "52772");
    assert_eq!(meal["strMeal"], "Teriyaki Chicken Casserole");
}

#[test]
fn test_query_input_is_url_encoded() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "chicken breast".into()))
        .with_status(200)
        .with_body(r#"{"meals":[{"strMeal":"Brown Stew Chicken","idMeal":"52940"}]}"#)
        .create();

    let meals = client_for(&server)
        .filter_by_ingredient("chicken breast")
        .unwrap();

    assert_eq!(meals[0]["idMeal"], "52940");
    mock.assert();
}

#[test]
fn test_letter_search_sends_single_character() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/search.php?f=b")
        .with_status(200)
        .with_body(r#"{"meals":[{"strMeal":"Beef Wellington"}]}"#)
        .expect(2)
        .create();

    let client = client_for(&server);
    let long = client.search_by_letter("beef").unwrap();
    let short = client.search_by_letter("b").unwrap();

    assert_eq!(long, short);
    mock.assert();
}

#[test]
fn test_area_list_projects_names() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/list.php?a=list")
        .with_status(200)
        .with_body(r#"{"meals":[{"strArea":"American"},{"strArea":"British"}]}"#)
        .create();

    let areas = client_for(&server).area_filter().unwrap();

    assert_eq!(areas, vec!["American", "British"]);
}

#[test]
fn test_categories_endpoint() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/categories.php")
        .with_status(200)
        .with_body(
            r#"{"categories":[
                {"idCategory":"1","strCategory":"Beef"},
                {"idCategory":"2","strCategory":"Chicken"}
            ]}"#,
        )
        .create();

    let categories = client_for(&server).meal_categories().unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1]["strCategory"], "Chicken");
}

#[test]
fn test_http_error_reports_status_line() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/random.php")
        .with_status(404)
        .with_body("not here")
        .create();

    let err = client_for(&server).random().unwrap_err();

    assert!(matches!(err, MealDbError::Transport(_)));
    assert_eq!(err.to_string(), "HTTP/1.1 404 Not Found");
}

#[test]
fn test_empty_body_is_no_results() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/list.php?i=list")
        .with_status(200)
        .with_body("")
        .create();

    let err = client_for(&server).ingredients_filter().unwrap_err();

    assert_eq!(err.to_string(), "no results found");
}

#[test]
fn test_null_meals_is_no_results() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/search.php?s=Nothing")
        .with_status(200)
        .with_body(r#"{"meals":null}"#)
        .create();

    let err = client_for(&server).search("Nothing").unwrap_err();

    assert!(matches!(err, MealDbError::NoResults));
}

#[test]
fn test_connection_failure_is_transport_error() {
    // Nothing listens on port 1
    let client = MealDbClient::with_base_url("http://127.0.0.1:1").unwrap();
    let err = client.random().unwrap_err();

    match err {
        MealDbError::Transport(message) => assert!(!message.is_empty()),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn test_configured_timeout_aborts_slow_response() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_body_from_request(|_| {
            thread::sleep(Duration::from_secs(3));
            br#"{"meals":[{"idMeal":"52772"}]}"#.to_vec()
        })
        .create();

    let config = ClientConfig {
        base_url: server.url(),
        timeout: Some(1),
        ..ClientConfig::default()
    };
    let err = MealDbClient::from_config(&config).unwrap().random().unwrap_err();

    assert!(matches!(err, MealDbError::Transport(_)));
    assert_ne!(err.to_string(), "no results found");
}
