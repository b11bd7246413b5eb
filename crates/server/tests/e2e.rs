use std::net::SocketAddr;

use axum::Router;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.post(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await.unwrap_or(Value::Null)))
    }

    async fn patch(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.patch(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await.unwrap_or(Value::Null)))
    }

    async fn get(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.get(self.url(path)).send().await?;
        Ok((res.status(), res.json().await.unwrap_or(Value::Null)))
    }

    async fn delete(&self, path: &str) -> anyhow::Result<HttpStatusCode> {
        Ok(self.client.delete(self.url(path)).send().await?.status())
    }

    async fn medspa(&self, name: &str) -> anyhow::Result<i64> {
        let (status, body) = self
            .post("/medspas", json!({
                "name": name,
                "address": "123 Main St",
                "phone_number": "123-456-7890",
                "email_address": "test@example.com"
            }))
            .await?;
        assert_eq!(status, HttpStatusCode::CREATED);
        Ok(body["id"].as_i64().unwrap())
    }

    async fn service(&self, medspa_id: i64, name: &str, price: i64, duration: i64) -> anyhow::Result<i64> {
        let (status, body) = self
            .post("/services", json!({
                "medspa_id": medspa_id,
                "name": name,
                "description": format!("{name} description"),
                "price": price,
                "duration": duration
            }))
            .await?;
        assert_eq!(status, HttpStatusCode::CREATED);
        Ok(body["id"].as_i64().unwrap())
    }
}

/// Real router over a private in-memory database on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;

    let app: Router = routes::build_router(ServerState { db }, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url: format!("http://{}", addr), client: reqwest::Client::new() })
}

#[tokio::test]
async fn e2e_health_and_welcome() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get("/health").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = app.get("/").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["docs"], "/docs");

    let (status, doc) = app.get("/api-docs/openapi.json").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert!(doc["paths"]["/appointments/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_medspa_crud() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = app.medspa("Test Medspa").await?;

    let (status, list) = app.get("/medspas/").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, updated) = app
        .patch(&format!("/medspas/{id}"), json!({"name": "Updated Medspa", "email_address": "updated@example.com"}))
        .await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(updated["name"], "Updated Medspa");
    assert_eq!(updated["email_address"], "updated@example.com");
    assert_eq!(updated["address"], "123 Main St");
    assert_eq!(updated["phone_number"], "123-456-7890");

    assert_eq!(app.delete(&format!("/medspas/{id}")).await?, HttpStatusCode::NO_CONTENT);
    let (status, body) = app.get(&format!("/medspas/{id}")).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Medspa not found"}));
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_body_is_unprocessable() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, _) = app.post("/medspas", json!({"name": "No Address"})).await?;
    assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn e2e_services_by_medspa() -> anyhow::Result<()> {
    let app = start_server().await?;
    let a = app.medspa("A").await?;
    let b = app.medspa("B").await?;
    app.service(a, "Botox", 450, 30).await?;
    app.service(b, "Hydrafacial", 200, 60).await?;

    let (_, of_a) = app.get(&format!("/services?medspa_id={a}")).await?;
    assert_eq!(of_a.as_array().map(Vec::len), Some(1));
    assert_eq!(of_a[0]["name"], "Botox");
    assert_eq!(of_a[0]["price"], "450.00");

    let (status, none) = app.get("/services?medspa_id=999").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(none, json!([]));

    let (status, body) = app
        .post("/services", json!({
            "medspa_id": 999, "name": "Orphan", "description": "d", "price": "10.00", "duration": 10
        }))
        .await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Medspa not found");

    let (status, body) = app
        .post("/services", json!({
            "medspa_id": a, "name": "Negative", "description": "d", "price": "-1.00", "duration": 10
        }))
        .await?;
    assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "price must not be negative");

    // 仍有服务引用时不能删除 medspa
    assert_eq!(app.delete(&format!("/medspas/{a}")).await?, HttpStatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn e2e_booking_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let spa = app.medspa("Test Medspa").await?;
    let s1 = app.service(spa, "Test Service 1", 100, 30).await?;
    let s2 = app.service(spa, "Test Service 2", 200, 60).await?;
    let s3 = app.service(spa, "Test Service 3", 298, 45).await?;

    let (status, booked) = app.post("/appointments/", json!({"medspa_id": spa, "services": [s1, s2]})).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    assert_eq!(booked["medspa_id"], spa);
    assert_eq!(booked["status"], "scheduled");
    assert_eq!(booked["total_price"], "300.00");
    assert_eq!(booked["total_duration"], 90);
    let id = booked["id"].as_i64().unwrap();

    let (status, detail) = app.get(&format!("/appointments/{id}")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(detail["total_price"], "300.00");
    let names: Vec<&str> = detail["services"].as_array().unwrap().iter().filter_map(|s| s["name"].as_str()).collect();
    assert_eq!(names, vec!["Test Service 1", "Test Service 2"]);

    let (status, updated) = app
        .patch(&format!("/appointments/{id}"), json!({"status": "cancelled", "services": [s1, s3]}))
        .await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(updated["status"], "cancelled");
    assert_eq!(updated["total_price"], "398.00");
    assert_eq!(updated["total_duration"], 75);

    let (_, detail) = app.get(&format!("/appointments/{id}")).await?;
    let ids: Vec<i64> = detail["services"].as_array().unwrap().iter().filter_map(|s| s["id"].as_i64()).collect();
    assert_eq!(ids, vec![s1, s3]);

    // 已被预约的服务不能删除，预约总价保持不变
    assert_eq!(app.delete(&format!("/services/{s3}")).await?, HttpStatusCode::CONFLICT);
    let (_, detail) = app.get(&format!("/appointments/{id}")).await?;
    assert_eq!(detail["total_price"], "398.00");

    assert_eq!(app.delete(&format!("/appointments/{id}")).await?, HttpStatusCode::NO_CONTENT);
    let (status, body) = app.get(&format!("/appointments/{id}")).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Appointment not found");
    Ok(())
}

#[tokio::test]
async fn e2e_appointment_filters() -> anyhow::Result<()> {
    let app = start_server().await?;
    let spa = app.medspa("Filters").await?;
    let s = app.service(spa, "VI Peel", 300, 60).await?;
    let (_, first) = app.post("/appointments", json!({"medspa_id": spa, "services": [s]})).await?;
    let (_, second) = app.post("/appointments", json!({"medspa_id": spa, "services": [s]})).await?;
    app.patch(&format!("/appointments/{}", second["id"]), json!({"status": "cancelled"})).await?;

    let (_, scheduled) = app.get("/appointments?status=scheduled").await?;
    assert_eq!(scheduled.as_array().map(Vec::len), Some(1));
    assert_eq!(scheduled[0]["id"], first["id"]);

    let (_, cancelled) = app.get("/appointments?status=cancelled").await?;
    assert_eq!(cancelled.as_array().map(Vec::len), Some(1));
    assert_eq!(cancelled[0]["id"], second["id"]);

    let today = chrono::Utc::now().date_naive();
    let (_, on_day) = app.get(&format!("/appointments?start_date={today}")).await?;
    assert_eq!(on_day.as_array().map(Vec::len), Some(2));

    let (_, long_ago) = app.get("/appointments?start_date=2000-01-01").await?;
    assert_eq!(long_ago, json!([]));

    let (status, _) = app.get("/appointments?status=pending").await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    Ok(())
}
