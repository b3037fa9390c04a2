use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, in-memory stores, ephemeral port.
        let services = Arc::new(depot_api::app::build_in_memory_services());
        let app = depot_api::app::build_app(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn warehouse_body(code: &str, location: &str, capacity: i32, stock: i32) -> serde_json::Value {
    json!({
        "businessUnitCode": code,
        "location": location,
        "capacity": capacity,
        "stock": stock,
    })
}

async fn create_warehouse(
    client: &reqwest::Client,
    base_url: &str,
    code: &str,
    location: &str,
    capacity: i32,
    stock: i32,
) -> reqwest::Response {
    client
        .post(format!("{}/warehouse", base_url))
        .json(&warehouse_body(code, location, capacity, stock))
        .send()
        .await
        .unwrap()
}

async fn associate(
    client: &reqwest::Client,
    base_url: &str,
    product_id: i64,
    store_id: i64,
    code: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/fulfillment/warehouse-product-store", base_url))
        .json(&json!({
            "productId": product_id,
            "storeId": store_id,
            "warehouseBusinessUnitCode": code,
        }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_up() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "UP");
}

#[tokio::test]
async fn warehouse_create_and_fetch() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_warehouse(&client, &srv.base_url, "MWH.001", "AMSTERDAM-001", 80, 10).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["businessUnitCode"], "MWH.001");
    assert_eq!(created["location"], "AMSTERDAM-001");

    let res = client
        .get(format!("{}/warehouse/MWH.001", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["capacity"], 80);
    assert_eq!(fetched["stock"], 10);
}

#[tokio::test]
async fn warehouse_create_rejections() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_warehouse(&client, &srv.base_url, "MWH.001", "AMSTERDAM-001", 80, 10).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    // Duplicate business unit code.
    let res = create_warehouse(&client, &srv.base_url, "MWH.001", "EINDHOVEN-001", 20, 0).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Unknown location.
    let res = create_warehouse(&client, &srv.base_url, "MWH.002", "NOWHERE-001", 20, 0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Capacity above the location maximum (ZWOLLE-001 caps at 40).
    let res = create_warehouse(&client, &srv.base_url, "MWH.002", "ZWOLLE-001", 50, 0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Stock above own capacity.
    let res = create_warehouse(&client, &srv.base_url, "MWH.002", "ZWOLLE-001", 30, 35).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn warehouse_location_count_limit_is_enforced() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // TILBURG-001 allows a single warehouse.
    let res = create_warehouse(&client, &srv.base_url, "MWH.010", "TILBURG-001", 30, 0).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = create_warehouse(&client, &srv.base_url, "MWH.011", "TILBURG-001", 30, 0).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn archiving_a_warehouse_hides_it_and_is_idempotent() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_warehouse(&client, &srv.base_url, "MWH.001", "AMSTERDAM-001", 80, 10).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .delete(format!("{}/warehouse/MWH.001", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/warehouse/MWH.001", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Archiving again restamps rather than failing.
    let res = client
        .delete(format!("{}/warehouse/MWH.001", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // Unknown codes still 404.
    let res = client
        .delete(format!("{}/warehouse/MWH.404", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn replacement_requires_matching_stock_and_leaves_old_warehouse_intact() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_warehouse(&client, &srv.base_url, "MWH.001", "AMSTERDAM-001", 80, 10).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/warehouse/MWH.001/replacement", srv.base_url))
        .json(&json!({ "location": "EINDHOVEN-001", "capacity": 60, "stock": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // The failed replace must not have touched the original record.
    let res = client
        .get(format!("{}/warehouse/MWH.001", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["location"], "AMSTERDAM-001");
    assert_eq!(body["capacity"], 80);
}

#[tokio::test]
async fn replacement_moves_the_code_to_the_new_location() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_warehouse(&client, &srv.base_url, "MWH.001", "AMSTERDAM-001", 80, 10).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/warehouse/MWH.001/replacement", srv.base_url))
        .json(&json!({ "location": "EINDHOVEN-001", "capacity": 60, "stock": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let replacement: serde_json::Value = res.json().await.unwrap();
    assert_eq!(replacement["businessUnitCode"], "MWH.001");
    assert_eq!(replacement["location"], "EINDHOVEN-001");

    // The code resolves to the replacement; only one active record remains.
    let res = client
        .get(format!("{}/warehouse", srv.base_url))
        .send()
        .await
        .unwrap();
    let active: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["location"], "EINDHOVEN-001");
}

#[tokio::test]
async fn association_caps_are_enforced_with_conflicts() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = associate(&client, &srv.base_url, 1, 1, "MWH.001").await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Association created successfully");

    // Same triple twice.
    let res = associate(&client, &srv.base_url, 1, 1, "MWH.001").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // A product may ship from at most two warehouses per store.
    let res = associate(&client, &srv.base_url, 1, 1, "MWH.002").await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let res = associate(&client, &srv.base_url, 1, 1, "MWH.003").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn store_is_capped_at_three_warehouses() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for (product, code) in [(1, "MWH.001"), (2, "MWH.002"), (3, "MWH.003")] {
        let res = associate(&client, &srv.base_url, product, 7, code).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    // A fourth distinct warehouse for the same store is rejected.
    let res = associate(&client, &srv.base_url, 4, 7, "MWH.004").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // But an already-associated warehouse can still take new products.
    let res = associate(&client, &srv.base_url, 4, 7, "MWH.001").await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn warehouse_is_capped_at_five_products_per_store() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for product in 1..=5 {
        let res = associate(&client, &srv.base_url, product, 1, "MWH.001").await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = associate(&client, &srv.base_url, 6, 1, "MWH.001").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn dissociation_deletes_or_404s() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = associate(&client, &srv.base_url, 1, 1, "MWH.001").await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .delete(format!(
            "{}/fulfillment/warehouse-product-store/product/1/store/1/warehouse/MWH.001",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // Gone now, so a second delete is a 404.
    let res = client
        .delete(format!(
            "{}/fulfillment/warehouse-product-store/product/1/store/1/warehouse/MWH.001",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn association_listings_filter_by_dimension() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    associate(&client, &srv.base_url, 1, 1, "MWH.001").await;
    associate(&client, &srv.base_url, 1, 1, "MWH.002").await;
    associate(&client, &srv.base_url, 2, 1, "MWH.001").await;
    associate(&client, &srv.base_url, 1, 2, "MWH.001").await;

    let res = client
        .get(format!(
            "{}/fulfillment/warehouse-product-store/product/1/store/1",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    let rows: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(rows.len(), 2);

    let res = client
        .get(format!(
            "{}/fulfillment/warehouse-product-store/store/1",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    let rows: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(rows.len(), 3);

    let res = client
        .get(format!(
            "{}/fulfillment/warehouse-product-store/warehouse/MWH.001",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    let rows: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn store_crud_and_validation() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // A preset id on create is unprocessable.
    let res = client
        .post(format!("{}/store", srv.base_url))
        .json(&json!({ "id": 9, "name": "Utrecht", "quantityProductsInStock": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // A blank name is a bad request.
    let res = client
        .post(format!("{}/store", srv.base_url))
        .json(&json!({ "name": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .post(format!("{}/store", srv.base_url))
        .json(&json!({ "name": "Utrecht", "quantityProductsInStock": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    // Patch only the name; the quantity stays.
    let res = client
        .patch(format!("{}/store/{}", srv.base_url, id))
        .json(&json!({ "name": "Utrecht Centraal" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let patched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(patched["name"], "Utrecht Centraal");
    assert_eq!(patched["quantityProductsInStock"], 3);

    let res = client
        .delete(format!("{}/store/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/store/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_update_requires_a_name() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/store", srv.base_url))
        .json(&json!({ "name": "Utrecht" }))
        .send()
        .await
        .unwrap();
    let created: serde_json::Value = res.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    let res = client
        .put(format!("{}/store/{}", srv.base_url, id))
        .json(&json!({ "quantityProductsInStock": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn product_crud_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/product", srv.base_url))
        .json(&json!({ "name": "KALLAX", "description": "Shelf unit", "stock": 12 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    let res = client
        .put(format!("{}/product/{}", srv.base_url, id))
        .json(&json!({ "name": "KALLAX", "stock": 7 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["stock"], 7);
    assert!(updated["description"].is_null());

    let res = client
        .get(format!("{}/product", srv.base_url))
        .send()
        .await
        .unwrap();
    let products: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(products.len(), 1);

    let res = client
        .delete(format!("{}/product/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn locations_resolve_or_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/location/AMSTERDAM-001", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let location: serde_json::Value = res.json().await.unwrap();
    assert_eq!(location["identification"], "AMSTERDAM-001");
    assert_eq!(location["maxNumberOfWarehouses"], 5);
    assert_eq!(location["maxCapacity"], 100);

    let res = client
        .get(format!("{}/location/NOWHERE-001", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
