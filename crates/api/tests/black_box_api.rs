use chrono::{Duration, NaiveDate, Utc};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(jwt_secret: &str) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = innkeep_api::app::build_app(jwt_secret.to_string());
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

/// Register an admin over the wire and log in; returns a bearer token.
async fn admin_token(client: &reqwest::Client, base_url: &str) -> String {
    let res = client
        .post(format!("{}/admin/create", base_url))
        .json(&json!({ "username": "frontdesk", "password": "hunter2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/admin/login", base_url))
        .json(&json!({ "username": "frontdesk", "password": "hunter2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    body["access_token"].as_str().unwrap().to_string()
}

async fn create_room(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    room_number: &str,
    price_per_night: i64,
) -> String {
    let res = client
        .post(format!("{}/rooms", base_url))
        .bearer_auth(token)
        .json(&json!({
            "room_number": room_number,
            "room_type": "double",
            "price_per_night": price_per_night,
            "max_occupancy": 2,
            "amenities": ["wifi"],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: serde_json::Value = res.json().await.unwrap();
    body["room_id"].as_str().unwrap().to_string()
}

fn guest() -> serde_json::Value {
    json!({
        "name": "Jordan Mistry",
        "email": "jordan@example.com",
        "phone": "+91 98000 00000",
    })
}

fn day(offset: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(offset)
}

#[tokio::test]
async fn health_is_open() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn mutating_endpoints_require_a_token() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/rooms", srv.base_url))
        .json(&json!({
            "room_number": "101",
            "room_type": "double",
            "price_per_night": 8500,
            "max_occupancy": 2,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .put(format!(
            "{}/bookings/{}/status",
            srv.base_url,
            innkeep_core::BookingId::new()
        ))
        .json(&json!({ "status": "checked_in" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn whoami_reflects_the_token() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &srv.base_url).await;

    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["username"].as_str().unwrap(), "frontdesk");
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let _ = admin_token(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/admin/login", srv.base_url))
        .json(&json!({ "username": "frontdesk", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Unknown user gets the same answer as a bad password.
    let res = client
        .post(format!("{}/admin/login", srv.base_url))
        .json(&json!({ "username": "nobody", "password": "hunter2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_room_numbers_conflict() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &srv.base_url).await;

    create_room(&client, &srv.base_url, &token, "101", 8500).await;

    let res = client
        .post(format!("{}/rooms", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "room_number": "101",
            "room_type": "suite",
            "price_per_night": 12_000,
            "max_occupancy": 4,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = client
        .get(format!("{}/rooms", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn booking_flow_end_to_end() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &srv.base_url).await;

    let room_id = create_room(&client, &srv.base_url, &token, "101", 8500).await;

    // Two nights at 8500.
    let res = client
        .post(format!("{}/bookings", srv.base_url))
        .json(&json!({
            "room_id": room_id,
            "guest": guest(),
            "check_in": day(1).to_string(),
            "check_out": day(3).to_string(),
            "guests_count": 2,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let booking: serde_json::Value = res.json().await.unwrap();
    assert_eq!(booking["total_amount"].as_i64().unwrap(), 17_000);
    assert_eq!(booking["status"].as_str().unwrap(), "confirmed");
    let booking_id = booking["booking_id"].as_str().unwrap().to_string();

    // The stay blocks the room, but a back-to-back stay starting on the
    // checkout day does not.
    let res = client
        .post(format!("{}/rooms/availability", srv.base_url))
        .json(&json!({
            "check_in": day(2).to_string(),
            "check_out": day(4).to_string(),
        }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["items"].as_array().unwrap().is_empty());

    let res = client
        .post(format!("{}/rooms/availability", srv.base_url))
        .json(&json!({
            "check_in": day(3).to_string(),
            "check_out": day(5).to_string(),
        }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    // The listing joins room and guest details.
    let res = client
        .get(format!("{}/bookings", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let item = &body["items"].as_array().unwrap()[0];
    assert_eq!(item["room_number"].as_str().unwrap(), "101");
    assert_eq!(item["guest_name"].as_str().unwrap(), "Jordan Mistry");

    // Check in, then check out with a 500 minibar charge.
    let res = client
        .put(format!("{}/bookings/{}/status", srv.base_url, booking_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "checked_in" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .put(format!("{}/bookings/{}/status", srv.base_url, booking_id))
        .bearer_auth(&token)
        .json(&json!({
            "status": "checked_out",
            "additional_charges": 500,
            "payment_method": "card",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let balance: serde_json::Value = res.json().await.unwrap();
    assert_eq!(balance["room_charges"].as_i64().unwrap(), 17_000);
    assert_eq!(balance["additional_charges"].as_i64().unwrap(), 500);
    assert_eq!(balance["total_amount"].as_i64().unwrap(), 17_500);
    assert_eq!(balance["paid_amount"].as_i64().unwrap(), 17_500);
    assert_eq!(balance["balance_due"].as_i64().unwrap(), 0);
    assert_eq!(balance["payment_status"].as_str().unwrap(), "paid");

    // Ledger: the room charge at booking time plus the minibar charge.
    let res = client
        .get(format!("{}/sales", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let total: i64 = items.iter().map(|s| s["amount"].as_i64().unwrap()).sum();
    assert_eq!(total, 17_500);
}

#[tokio::test]
async fn overlapping_booking_is_rejected() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &srv.base_url).await;

    let room_id = create_room(&client, &srv.base_url, &token, "101", 8500).await;

    let book = |check_in: NaiveDate, check_out: NaiveDate| {
        client
            .post(format!("{}/bookings", srv.base_url))
            .json(&json!({
                "room_id": room_id,
                "guest": guest(),
                "check_in": check_in.to_string(),
                "check_out": check_out.to_string(),
                "guests_count": 1,
            }))
            .send()
    };

    let res = book(day(1), day(4)).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = book(day(3), day(6)).await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn inverted_date_ranges_are_rejected() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &srv.base_url).await;

    let room_id = create_room(&client, &srv.base_url, &token, "101", 8500).await;

    for (check_in, check_out) in [(day(3), day(1)), (day(2), day(2))] {
        let res = client
            .post(format!("{}/bookings", srv.base_url))
            .json(&json!({
                "room_id": room_id,
                "guest": guest(),
                "check_in": check_in.to_string(),
                "check_out": check_out.to_string(),
                "guests_count": 1,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn illegal_status_transitions_are_unprocessable() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &srv.base_url).await;

    let room_id = create_room(&client, &srv.base_url, &token, "101", 8500).await;

    let res = client
        .post(format!("{}/bookings", srv.base_url))
        .json(&json!({
            "room_id": room_id,
            "guest": guest(),
            "check_in": day(1).to_string(),
            "check_out": day(2).to_string(),
            "guests_count": 1,
        }))
        .send()
        .await
        .unwrap();
    let booking: serde_json::Value = res.json().await.unwrap();
    let booking_id = booking["booking_id"].as_str().unwrap().to_string();

    // Cannot check out a booking that was never checked in.
    let res = client
        .put(format!("{}/bookings/{}/status", srv.base_url, booking_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "checked_out" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The failed transition wrote nothing.
    let res = client
        .get(format!("{}/bookings/{}", srv.base_url, booking_id))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"].as_str().unwrap(), "confirmed");
}

#[tokio::test]
async fn unknown_ids_and_statuses_are_rejected() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &srv.base_url).await;

    let res = client
        .put(format!("{}/bookings/not-a-uuid/status", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "status": "checked_in" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .put(format!(
            "{}/bookings/{}/status",
            srv.base_url,
            innkeep_core::BookingId::new()
        ))
        .bearer_auth(&token)
        .json(&json!({ "status": "checked_in" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .put(format!(
            "{}/bookings/{}/status",
            srv.base_url,
            innkeep_core::BookingId::new()
        ))
        .bearer_auth(&token)
        .json(&json!({ "status": "teleported" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn expenses_feed_the_dashboard() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &srv.base_url).await;

    let res = client
        .get(format!("{}/dashboard/stats", srv.base_url))
        .send()
        .await
        .unwrap();
    let stats: serde_json::Value = res.json().await.unwrap();
    assert_eq!(stats["total_rooms"].as_i64().unwrap(), 0);
    assert_eq!(stats["occupancy_rate"].as_f64().unwrap(), 0.0);

    create_room(&client, &srv.base_url, &token, "101", 8500).await;

    let res = client
        .post(format!("{}/expenses", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "category": "laundry",
            "amount": 1200,
            "date": day(0).to_string(),
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!("{}/dashboard/stats", srv.base_url))
        .send()
        .await
        .unwrap();
    let stats: serde_json::Value = res.json().await.unwrap();
    assert_eq!(stats["total_rooms"].as_i64().unwrap(), 1);
    assert_eq!(stats["total_expenses"].as_i64().unwrap(), 1200);
    assert_eq!(stats["net_profit"].as_i64().unwrap(), -1200);
}
