//! SDK end-to-end tests
//!
//! Starts a real HTTP server on an ephemeral port and drives it through
//! `RecipeBookClient`.

use std::sync::Arc;

use recipebook_api_http::{HttpServer, HttpServerConfig};
use recipebook_core::application::RecipeService;
use recipebook_core::port::id_provider::UuidProvider;
use recipebook_core::port::time_provider::SystemTimeProvider;
use recipebook_infra_memory::InMemoryRecipeRepository;
use recipebook_sdk::{RecipeBookClient, RecipeDraft, SdkError};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestServer {
    url: String,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Self {
        let service = RecipeService::new(
            Arc::new(InMemoryRecipeRepository::new()),
            Arc::new(UuidProvider),
            Arc::new(SystemTimeProvider),
        );
        let server = HttpServer::new(HttpServerConfig::default(), service);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let (shutdown, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            server
                .serve(listener, async move {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            url,
            shutdown,
            handle,
        }
    }

    async fn stop(self) {
        let _ = self.shutdown.send(());
        self.handle.await.unwrap();
    }
}

fn draft(name: &str, tags: &[&str]) -> RecipeDraft {
    RecipeDraft {
        name: name.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_sdk_lifecycle() {
    let server = TestServer::start().await;
    let client = RecipeBookClient::connect(&server.url).unwrap();

    let created = client.create(&draft("Tea", &["drink"])).await.unwrap();
    assert!(!created.id.is_empty());

    assert_eq!(client.list().await.unwrap(), vec![created.clone()]);
    assert_eq!(client.search("DRINK").await.unwrap().len(), 1);
    assert!(client.search("dinner").await.unwrap().is_empty());

    let updated = client
        .update(&created.id, &draft("Tea2", &["drink", "hot"]))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Tea2");
    assert_eq!(updated.published_at, created.published_at);
    assert_eq!(client.get(&created.id).await.unwrap(), updated);

    assert_eq!(client.delete(&created.id).await.unwrap(), "Recipe deleted");
    assert!(client.list().await.unwrap().is_empty());

    match client.delete(&created.id).await {
        Err(SdkError::NotFound(message)) => assert_eq!(message, "Recipe not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_sdk_unknown_id_is_not_found() {
    let server = TestServer::start().await;
    let client = RecipeBookClient::connect(&server.url).unwrap();

    let result = client.update("missing", &draft("X", &[])).await;
    assert!(matches!(result, Err(SdkError::NotFound(_))));

    let result = client.get("missing").await;
    assert!(matches!(result, Err(SdkError::NotFound(_))));

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_sdk_search_with_spaces_in_tag() {
    let server = TestServer::start().await;
    let client = RecipeBookClient::connect(&server.url).unwrap();

    client
        .create(&draft("Cocoa", &["Hot Drink"]))
        .await
        .unwrap();

    let found = client.search("hot drink").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Cocoa");

    let health = client.health().await.unwrap();
    assert_eq!(health.recipes, 1);

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_sdk_connection_refused() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = RecipeBookClient::connect(&url).unwrap();
    assert!(matches!(
        client.list().await,
        Err(SdkError::Connection(_))
    ));
}
