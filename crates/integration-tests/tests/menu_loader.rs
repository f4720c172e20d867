//! Menu page loading against live and failing servers.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{Router, http::StatusCode, routing::get};
use tokio::sync::oneshot;

use foodiehub_core::{CategoryFilter, MenuItemId, Price};
use foodiehub_integration_tests::{TestServer, serve, unreachable_base_url};
use foodiehub_storefront::services::{MenuClient, MenuClientError, MenuPage, spawn_menu_load};
use url::Url;

#[tokio::test]
async fn test_load_from_running_server() {
    let server = TestServer::start().await;
    let client = MenuClient::new(&server.base_url()).unwrap();

    let mut page = MenuPage::loading();
    assert!(page.loading);

    page = MenuPage::load(&client).await;
    assert!(!page.loading);
    assert!(!page.shows_empty_diagnostic());
    assert_eq!(page.menu.items().len(), 8);
    assert_eq!(
        page.menu.categories(),
        vec!["all", "pizza", "pasta", "dessert", "salad", "main", "drinks"]
    );

    page.menu.select_category("main").unwrap();
    assert_eq!(page.menu.filter(), &CategoryFilter::Category("main".to_string()));
    assert_eq!(page.menu.filtered().count(), 3);
}

#[tokio::test]
async fn test_server_error_yields_empty_page() {
    let router = Router::new().route(
        "/api/menu/",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let addr = serve(router).await;
    let client = MenuClient::new(&Url::parse(&format!("http://{addr}")).unwrap()).unwrap();

    let err = client.fetch_menu().await.unwrap_err();
    assert!(matches!(err, MenuClientError::Api { status: 503, .. }));

    let page = MenuPage::load(&client).await;
    assert!(!page.loading);
    assert!(page.menu.is_empty());
    assert!(page.shows_empty_diagnostic());
    assert_eq!(page.menu.categories(), vec!["all"]);
}

#[tokio::test]
async fn test_unreachable_server_yields_empty_page() {
    let client = MenuClient::new(&unreachable_base_url()).unwrap();

    let page = MenuPage::load(&client).await;
    assert!(page.shows_empty_diagnostic());
}

#[tokio::test]
async fn test_client_item_operations() {
    let server = TestServer::start().await;
    let client = MenuClient::new(&server.base_url()).unwrap();

    let mojito = client.fetch_item(MenuItemId::new(6)).await.unwrap();
    assert_eq!(mojito.name, "Mojito");
    assert_eq!(mojito.price, Price::whole(149));

    let missing = client.fetch_item(MenuItemId::new(99)).await.unwrap_err();
    assert!(matches!(missing, MenuClientError::Api { status: 404, .. }));

    let mut dish = foodiehub_core::seed::menu_items().remove(0);
    dish.name = "Quattro Formaggi".to_string();
    let created = client.create_item(&dish).await.unwrap();
    assert_eq!(created.id, MenuItemId::new(9));
    assert!(created.created_at.is_some());
}

/// Sends on its channel when dropped.
struct DropSignal(Option<oneshot::Sender<()>>);

impl Drop for DropSignal {
    fn drop(&mut self) {
        if let Some(tx) = self.0.take() {
            let _ = tx.send(());
        }
    }
}

#[tokio::test]
async fn test_spawned_load_dropped_with_view() {
    let (started_tx, started_rx) = oneshot::channel::<()>();
    let (cancelled_tx, cancelled_rx) = oneshot::channel::<()>();
    let signals = Arc::new(Mutex::new(Some((started_tx, cancelled_tx))));

    let router = Router::new().route(
        "/api/menu/",
        get(move || {
            let signals = signals.lock().unwrap().take();
            async move {
                let (started, cancelled) = signals.unwrap();
                let _guard = DropSignal(Some(cancelled));
                started.send(()).unwrap();
                tokio::time::sleep(Duration::from_secs(30)).await;
                "[]"
            }
        }),
    );
    let addr = serve(router).await;
    let client = MenuClient::new(&Url::parse(&format!("http://{addr}")).unwrap()).unwrap();

    let task = spawn_menu_load(client);
    started_rx.await.unwrap();
    assert!(!task.is_finished());

    // The view goes away before the response arrives: the request is
    // abandoned and the server sees the connection close.
    drop(task);
    tokio::time::timeout(Duration::from_secs(5), cancelled_rx)
        .await
        .expect("in-flight request was not abandoned")
        .unwrap();
}

#[tokio::test]
async fn test_spawned_load_completes() {
    let server = TestServer::start().await;
    let client = MenuClient::new(&server.base_url()).unwrap();

    let page = spawn_menu_load(client).join().await.unwrap();
    assert_eq!(page.menu.popular().count(), 4);
}
