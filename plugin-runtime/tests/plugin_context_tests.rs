//! End-to-end use of `PluginContext` from a plugin's point of view

use bytes::Bytes;
use plugin_cache::MockCache;
use plugin_logging::{LogLevel, MockLogger};
use plugin_navigation::{Destination, MockNavigation, Record};
use plugin_network::{HttpRequest, MockNetwork, NetworkRequest, ResponseMetadata};
use plugin_runtime::{Environment, Error, PluginContext};
use plugin_user::{Community, Org, User};
use std::sync::Arc;
use url::Url;

/// What a record-viewer plugin does when opened
async fn open_latest_record(context: &PluginContext) -> Result<(), String> {
    let cache_key = "latest-record";
    let record_id = match context.cache.load(cache_key).await.map_err(|e| e.to_string())? {
        Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        None => {
            let request = NetworkRequest::new(HttpRequest::get("/services/data/v59.0/latest"));
            let (body, metadata) = context.network.data(request).await.map_err(|e| e.to_string())?;
            if !metadata.is_success() {
                return Err(format!("status {}", metadata.status));
            }
            context
                .cache
                .save(body.clone(), cache_key)
                .await
                .map_err(|e| e.to_string())?;
            String::from_utf8_lossy(&body).into_owned()
        }
    };

    context.log(&format!("Opening {}", record_id), LogLevel::Info);
    context.navigation.go(Record::new(record_id).into());
    Ok(())
}

fn test_user() -> User {
    User::new(
        "005xx000001Sv6AAAS",
        Org::with_community("00Dxx0000001gPLEA0", Community::new("0DBxx0000000001")),
        "ada@example.com",
        "Ada Lovelace",
    )
    .with_avatar_url(Url::parse("https://example.com/ada.png").unwrap())
}

#[tokio::test]
async fn cache_miss_fetches_saves_and_navigates() {
    let mut cache = MockCache::new();
    cache
        .expect_load()
        .withf(|key| key == "latest-record")
        .times(1)
        .returning(|_| Ok(None));
    cache
        .expect_save()
        .withf(|data, key| data.as_ref() == b"001xx000003DGb2AAG" && key == "latest-record")
        .times(1)
        .returning(|_, _| Ok(()));

    let mut network = MockNetwork::new();
    network
        .expect_data()
        .withf(|request| request.base_request.url == "/services/data/v59.0/latest")
        .times(1)
        .returning(|_| {
            Ok((
                Bytes::from_static(b"001xx000003DGb2AAG"),
                ResponseMetadata::new("https://acme.example.com/services/data/v59.0/latest", 200),
            ))
        });

    let mut logger = MockLogger::new();
    logger
        .expect_log()
        .withf(|message, level| message == "Opening 001xx000003DGb2AAG" && *level == LogLevel::Info)
        .times(1)
        .return_const(());

    let mut navigation = MockNavigation::new();
    navigation
        .expect_go()
        .withf(|to| to.as_record().map(|record| record.id()) == Some("001xx000003DGb2AAG"))
        .times(1)
        .return_const(());

    let context = PluginContext::builder("com.example.records")
        .environment(Environment::Development)
        .cache(Arc::new(cache))
        .logger(Arc::new(logger))
        .network(Arc::new(network))
        .navigation(Arc::new(navigation))
        .user(test_user())
        .build()
        .unwrap();

    open_latest_record(&context).await.unwrap();

    let user = context.user.as_ref().unwrap();
    assert!(user.org().is_community());
}

#[tokio::test]
async fn cache_hit_skips_network() {
    let mut cache = MockCache::new();
    cache
        .expect_load()
        .returning(|_| Ok(Some(Bytes::from_static(b"001cached"))));

    let mut network = MockNetwork::new();
    network.expect_data().never();

    let mut logger = MockLogger::new();
    logger.expect_log().return_const(());

    let mut navigation = MockNavigation::new();
    navigation
        .expect_go()
        .withf(|to: &Destination| to.as_record().map(|r| r.id()) == Some("001cached"))
        .times(1)
        .return_const(());

    let context = PluginContext::builder("com.example.records")
        .cache(Arc::new(cache))
        .logger(Arc::new(logger))
        .network(Arc::new(network))
        .navigation(Arc::new(navigation))
        .build()
        .unwrap();

    open_latest_record(&context).await.unwrap();
}

#[test]
fn missing_network_names_the_capability() {
    let err = PluginContext::builder("com.example.records")
        .cache(Arc::new(MockCache::new()))
        .logger(Arc::new(MockLogger::new()))
        .navigation(Arc::new(MockNavigation::new()))
        .build()
        .unwrap_err();

    match err {
        Error::CapabilityMissing { capability, message } => {
            assert_eq!(capability, "Network");
            assert!(message.contains("desktop-shims"));
        }
        other => panic!("unexpected error: {}", other),
    }
}
