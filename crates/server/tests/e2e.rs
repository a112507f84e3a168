use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
}

// File-backed sqlite under target/ so the whole startup path runs, directory creation included.
async fn start_server(seed: bool) -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.database.url = format!("sqlite://target/test-data/{}/marketplace.db?mode=rwc", Uuid::new_v4());
    cfg.seed.enabled = seed;

    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server(false).await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_offer_lifecycle() -> anyhow::Result<()> {
    let app = start_server(false).await?;
    let c = reqwest::Client::new();

    let offer = json!({"id": 10, "customer_id": 1, "executor_id": 2});
    let res = c.post(format!("{}/offers", app.base_url)).json(&offer).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?, offer);

    let res = c.post(format!("{}/offers", app.base_url)).json(&offer).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    let res = c.put(format!("{}/offer/10", app.base_url))
        .json(&json!({"customer_id": 3, "executor_id": 4}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let listed = c.get(format!("{}/offers", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(listed, vec![json!({"id": 10, "customer_id": 3, "executor_id": 4})]);

    let res = c.delete(format!("{}/offers/10", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(format!("{}/offer/10", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn e2e_concurrent_duplicate_creates_yield_one_success() -> anyhow::Result<()> {
    let app = start_server(false).await?;
    let c = reqwest::Client::new();
    let offer = json!({"id": 1, "customer_id": 1, "executor_id": 2});

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let req = c.post(format!("{}/offers", app.base_url)).json(&offer);
            tokio::spawn(async move { req.send().await.map(|res| res.status()) })
        })
        .collect();
    let mut statuses = Vec::with_capacity(handles.len());
    for h in handles {
        statuses.push(h.await??);
    }

    let created = statuses.iter().filter(|s| **s == HttpStatusCode::CREATED).count();
    let conflicts = statuses.iter().filter(|s| **s == HttpStatusCode::CONFLICT).count();
    assert_eq!(created, 1, "{statuses:?}");
    assert_eq!(conflicts, statuses.len() - 1, "{statuses:?}");

    let listed = c.get(format!("{}/offers", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(listed, vec![offer]);
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_json_is_bad_request() -> anyhow::Result<()> {
    let app = start_server(false).await?;
    let res = reqwest::Client::new()
        .post(format!("{}/users", app.base_url))
        .header("content-type", "application/json")
        .body("{\"id\": 1,")
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Bad Request");
    Ok(())
}

#[tokio::test]
async fn e2e_seeded_users_are_listed() -> anyhow::Result<()> {
    let app = start_server(true).await?;
    let users = reqwest::get(format!("{}/users", app.base_url)).await?.json::<Vec<Value>>().await?;
    let expected = service::seed::SeedData::builtin()?;
    assert_eq!(users.len(), expected.users.len());
    assert!(users.iter().all(|u| u["email"].is_string() && u["age"].is_i64()));
    Ok(())
}
