use std::sync::Arc;

use link_registry::prelude::*;
use link_registry::utils::code_generator::hash_code;

fn service() -> Arc<LinkService<InMemoryLinkRepository>> {
    Arc::new(LinkService::new(Arc::new(InMemoryLinkRepository::new())))
}

#[tokio::test]
async fn test_create_then_resolve_counts_click() {
    let service = service();

    let created = service
        .create_short_link(CreateLink::new("https://example.com"))
        .await
        .unwrap();

    assert_eq!(created.code, hash_code("https://example.com"));
    assert_eq!(created.short_url, format!("/{}", created.code));
    assert!(created.expires_at.is_none());

    let target = service.resolve(&created.code).await.unwrap();
    assert_eq!(target, "https://example.com");

    let link = service.stats(&created.code).await.unwrap();
    assert_eq!(link.click_count, 1);
}

#[tokio::test]
async fn test_repeated_create_keeps_counters_and_creation_time() {
    let service = service();

    let first = service
        .create_short_link(CreateLink::new("https://example.com"))
        .await
        .unwrap();
    service.resolve(&first.code).await.unwrap();
    service.resolve(&first.code).await.unwrap();
    let before = service.stats(&first.code).await.unwrap();

    let second = service
        .create_short_link(CreateLink::new("https://example.com").with_ttl_minutes(5))
        .await
        .unwrap();

    assert_eq!(second.code, first.code);
    assert!(!second.created);
    assert!(second.expires_at.is_none());

    let after = service.stats(&first.code).await.unwrap();
    assert_eq!(after.click_count, 2);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn test_alias_conflict_in_either_order() {
    for (first, second) in [("https://a.com", "https://b.com"), ("https://b.com", "https://a.com")] {
        let service = service();

        service
            .create_short_link(CreateLink::new(first).with_alias("short1"))
            .await
            .unwrap();

        let err = service
            .create_short_link(CreateLink::new(second).with_alias("short1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AliasConflict { .. }));

        let link = service.stats("short1").await.unwrap();
        assert_eq!(link.target_url, first);
    }
}

#[tokio::test]
async fn test_alias_conflict_with_derived_code() {
    let service = service();
    let derived = hash_code("https://a.com");

    service
        .create_short_link(CreateLink::new("https://b.com").with_alias(derived.clone()))
        .await
        .unwrap();

    let err = service
        .create_short_link(CreateLink::new("https://a.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AliasConflict { .. }));
}

#[tokio::test]
async fn test_zero_ttl_link_is_expired_but_inspectable() {
    let service = service();

    let created = service
        .create_short_link(CreateLink::new("https://a.com").with_ttl_minutes(0))
        .await
        .unwrap();
    assert!(created.expires_at.is_some());

    let err = service.resolve(&created.code).await.unwrap_err();
    assert!(matches!(err, AppError::Expired { .. }));

    let link = service.stats(&created.code).await.unwrap();
    assert_eq!(link.click_count, 0);
    assert!(link.last_accessed_at.is_none());
    assert_eq!(link.expires_at, Some(link.created_at));
}

#[tokio::test]
async fn test_failed_resolve_does_not_mutate() {
    let service = service();

    let err = service.resolve("missing").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
    assert!(matches!(
        service.stats("missing").await.unwrap_err(),
        AppError::NotFound { .. }
    ));
    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_clicks_are_monotonic() {
    let service = service();
    let code = service
        .create_short_link(CreateLink::new("https://a.com"))
        .await
        .unwrap()
        .code;

    let mut previous = 0;
    for expected in 1..=5u64 {
        service.resolve(&code).await.unwrap();
        let link = service.stats(&code).await.unwrap();
        assert_eq!(link.click_count, expected);
        assert!(link.click_count > previous);
        previous = link.click_count;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolves_count_every_click() {
    let service = service();
    let code = service
        .create_short_link(CreateLink::new("https://a.com"))
        .await
        .unwrap()
        .code;

    let handles: Vec<_> = (0..100)
        .map(|_| {
            let service = service.clone();
            let code = code.clone();
            tokio::spawn(async move { service.resolve(&code).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(service.stats(&code).await.unwrap().click_count, 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_of_one_alias_have_one_winner() {
    let service = service();

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_short_link(
                        CreateLink::new(format!("https://{i}.example.com")).with_alias("race"),
                    )
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(err) => assert!(matches!(err, AppError::AliasConflict { .. })),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(service.count().await.unwrap(), 1);
}
