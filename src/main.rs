/**
 * CartSync Demo Entry Point
 *
 * Wires the cart store, HTTP gateway, and sync service together against a
 * remote document store and runs a short scripted shopping session.
 * Point CARTSYNC_API_URL at a JSON document server to see the pushes land.
 */
use cartsync::config::Config;
use cartsync::gateway::HttpGateway;
use cartsync::shared::Product;
use cartsync::store::CartStore;
use cartsync::sync::SyncService;
use std::sync::Arc;
use std::time::Duration;

fn catalog() -> Vec<Product> {
    vec![
        Product::new("p1", "buggati", 6.0)
            .with_description("One of the finest cars in the world"),
        Product::new("p2", "porsche", 5.0).with_description("A sports car icon"),
    ]
}

#[tokio::main]
async fn main() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::new();
    tracing::info!("using document store at {}", config.server_url());

    let store = Arc::new(CartStore::new());
    let gateway = Arc::new(HttpGateway::new(config));
    let mut sync = SyncService::new(Arc::clone(&store), gateway);
    let notifications = sync.notifications();

    sync.start().await;
    tracing::info!(
        "hydrated: {} item(s) in cart",
        store.snapshot().await.items.len()
    );

    for product in catalog() {
        store.add_item(&product).await;
        tokio::time::sleep(Duration::from_millis(300)).await;
        if let Some(notification) = notifications.latest().await {
            println!("[{:?}] {} - {}", notification.status, notification.title, notification.message);
        }
    }

    if let Err(e) = store.remove_item("p2").await {
        tracing::error!("remove failed: {}", e);
    }
    tokio::time::sleep(Duration::from_millis(300)).await;

    let final_state = store.snapshot().await;
    println!(
        "final cart: {} item(s), total quantity {}, total amount {:.2}",
        final_state.items.len(),
        final_state.total_quantity,
        final_state.total_amount
    );

    let metrics = sync.metrics().await;
    println!(
        "pushes: {} started, {} succeeded, {} failed",
        metrics.pushes_started, metrics.pushes_succeeded, metrics.pushes_failed
    );

    sync.stop();
}
