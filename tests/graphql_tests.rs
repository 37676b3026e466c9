use async_graphql::{Request, Variables};
use itemql::config::StoreConfig;
use itemql::graphql::{ItemsSchema, build_schema, export_sdl};
use itemql::storage::ItemStore;
use serde_json::{Value, json};

async fn memory_schema() -> ItemsSchema {
    let store = ItemStore::connect(&StoreConfig::Memory).await.unwrap();
    build_schema(store)
}

/// Execute a document and return `data` as JSON, failing on any error.
async fn run(schema: &ItemsSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Execute a document that must fail; returns the error messages.
async fn run_err(schema: &ItemsSchema, query: &str, variables: Value) -> Vec<String> {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    assert!(!response.errors.is_empty(), "expected an error");
    response.errors.into_iter().map(|e| e.message).collect()
}

async fn add_item(schema: &ItemsSchema, name: &str, description: &str) -> Value {
    let data = run(
        schema,
        "mutation($name: String!, $description: String!) {
            addItem(name: $name, description: $description) { id name description }
        }",
        json!({ "name": name, "description": description }),
    )
    .await;
    data["addItem"].clone()
}

async fn get_item(schema: &ItemsSchema, id: &str) -> Value {
    let data = run(
        schema,
        "query($id: ID!) { getItem(id: $id) { id name description } }",
        json!({ "id": id }),
    )
    .await;
    data["getItem"].clone()
}

async fn item_ids(schema: &ItemsSchema) -> Vec<String> {
    let data = run(schema, "{ getItems { id } }", json!({})).await;
    let mut ids: Vec<String> = data["getItems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    ids
}

// =============================================================================
// Schema surface
// =============================================================================

#[test]
fn test_sdl_matches_published_schema() {
    let sdl = export_sdl();

    for line in [
        "type Item {",
        "id: ID!",
        "name: String!",
        "description: String!",
        "getItems: [Item]",
        "getItem(id: ID!): Item",
        "addItem(name: String!, description: String!): Item",
        "updateItem(id: ID!, name: String, description: String): Item",
        "deleteItem(id: ID!): Item",
    ] {
        assert!(sdl.contains(line), "SDL is missing `{}`:\n{}", line, sdl);
    }
}

// =============================================================================
// CRUD round trips
// =============================================================================

#[tokio::test]
async fn test_add_then_get() {
    let schema = memory_schema().await;
    let added = add_item(&schema, "Pen", "Blue pen").await;

    let id = added["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let fetched = get_item(&schema, id).await;
    assert_eq!(fetched, added);
    assert_eq!(fetched["name"], "Pen");
    assert_eq!(fetched["description"], "Blue pen");
}

#[tokio::test]
async fn test_update_name_keeps_description() {
    let schema = memory_schema().await;
    let added = add_item(&schema, "Pen", "Blue pen").await;
    let id = added["id"].as_str().unwrap();

    let data = run(
        &schema,
        "mutation($id: ID!) { updateItem(id: $id, name: \"Marker\") { id name description } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(data["updateItem"]["name"], "Marker");
    assert_eq!(data["updateItem"]["description"], "Blue pen");

    let fetched = get_item(&schema, id).await;
    assert_eq!(fetched["name"], "Marker");
    assert_eq!(fetched["description"], "Blue pen");
}

#[tokio::test]
async fn test_update_description_keeps_name() {
    let schema = memory_schema().await;
    let added = add_item(&schema, "Pen", "Blue pen").await;
    let id = added["id"].as_str().unwrap();

    run(
        &schema,
        "mutation($id: ID!, $d: String) { updateItem(id: $id, description: $d) { id } }",
        json!({ "id": id, "d": "Red pen" }),
    )
    .await;

    let fetched = get_item(&schema, id).await;
    assert_eq!(fetched["name"], "Pen");
    assert_eq!(fetched["description"], "Red pen");
}

#[tokio::test]
async fn test_update_without_fields_returns_current_state() {
    let schema = memory_schema().await;
    let added = add_item(&schema, "Pen", "Blue pen").await;
    let id = added["id"].as_str().unwrap();

    let data = run(
        &schema,
        "mutation($id: ID!) { updateItem(id: $id) { id name description } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(data["updateItem"], added);
}

#[tokio::test]
async fn test_delete_then_get_is_null() {
    let schema = memory_schema().await;
    let added = add_item(&schema, "Pen", "Blue pen").await;
    let id = added["id"].as_str().unwrap();

    let data = run(
        &schema,
        "mutation($id: ID!) { deleteItem(id: $id) { id name description } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(data["deleteItem"], added);

    assert_eq!(get_item(&schema, id).await, Value::Null);
}

// =============================================================================
// Absent values and errors
// =============================================================================

#[tokio::test]
async fn test_missing_id_is_null_not_error() {
    let schema = memory_schema().await;
    let vars = json!({ "id": "doesnotexist" });

    assert_eq!(get_item(&schema, "doesnotexist").await, Value::Null);

    let data = run(
        &schema,
        "mutation($id: ID!) { updateItem(id: $id, name: \"X\") { id } }",
        vars.clone(),
    )
    .await;
    assert_eq!(data["updateItem"], Value::Null);

    let data = run(
        &schema,
        "mutation($id: ID!) { deleteItem(id: $id) { id } }",
        vars,
    )
    .await;
    assert_eq!(data["deleteItem"], Value::Null);
}

#[tokio::test]
async fn test_malformed_id_is_an_error() {
    let schema = memory_schema().await;
    let messages = run_err(
        &schema,
        "query($id: ID!) { getItem(id: $id) { id } }",
        json!({ "id": "../etc/passwd" }),
    )
    .await;
    assert!(messages[0].contains("Invalid item ID"), "{:?}", messages);
}

#[tokio::test]
async fn test_add_missing_argument_rejected_before_resolver() {
    let schema = memory_schema().await;
    run_err(
        &schema,
        "mutation { addItem(name: \"Pen\") { id } }",
        json!({}),
    )
    .await;

    assert!(item_ids(&schema).await.is_empty());
}

#[tokio::test]
async fn test_add_empty_name_is_validation_error() {
    let schema = memory_schema().await;
    let messages = run_err(
        &schema,
        "mutation { addItem(name: \"\", description: \"Blue pen\") { id } }",
        json!({}),
    )
    .await;
    assert!(messages[0].contains("`name` is required"), "{:?}", messages);

    assert!(item_ids(&schema).await.is_empty());
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_get_items_is_exactly_live_set() {
    let schema = memory_schema().await;
    let a = add_item(&schema, "Pen", "Blue pen").await;
    let b = add_item(&schema, "Cup", "Coffee cup").await;
    let c = add_item(&schema, "Pen", "Blue pen").await;

    run(
        &schema,
        "mutation($id: ID!) { deleteItem(id: $id) { id } }",
        json!({ "id": b["id"] }),
    )
    .await;

    let mut expected = vec![
        a["id"].as_str().unwrap().to_string(),
        c["id"].as_str().unwrap().to_string(),
    ];
    expected.sort();
    assert_eq!(item_ids(&schema).await, expected);
}

#[tokio::test]
async fn test_pen_scenario() {
    let schema = memory_schema().await;

    let pen = add_item(&schema, "Pen", "Blue pen").await;
    assert_eq!(pen["name"], "Pen");
    assert_eq!(pen["description"], "Blue pen");
    let id = pen["id"].as_str().unwrap().to_string();

    let data = run(&schema, "{ getItems { id name description } }", json!({})).await;
    assert!(data["getItems"].as_array().unwrap().contains(&pen));

    let data = run(
        &schema,
        "mutation($id: ID!) { deleteItem(id: $id) { id name description } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(data["deleteItem"], pen);

    assert!(!item_ids(&schema).await.contains(&id));
}

#[tokio::test]
async fn test_file_store_backs_schema() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = StoreConfig::File {
        path: temp_dir.path().to_path_buf(),
    };

    let schema = build_schema(ItemStore::connect(&config).await.unwrap());
    let pen = add_item(&schema, "Pen", "Blue pen").await;
    let id = pen["id"].as_str().unwrap();

    // A second schema over the same directory sees the item.
    let reopened = build_schema(ItemStore::connect(&config).await.unwrap());
    assert_eq!(get_item(&reopened, id).await, pen);
}
