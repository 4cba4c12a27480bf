use super::*;

#[tokio::test]
async fn test_nothing_pending() {
    let coordinator = ShutdownCoordinator::new(
        Arc::new(atomic::AtomicUsize::new(0)),
        Duration::from_millis(10),
    );
    coordinator.wait().await.unwrap();
}

#[tokio::test]
async fn test_waits_for_pending_sends() {
    let pending = Arc::new(atomic::AtomicUsize::new(2));
    let coordinator = ShutdownCoordinator::new(pending.clone(), Duration::from_secs(5));

    tokio::spawn(async move {
        for _ in 0..2 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            pending.fetch_sub(1, atomic::Ordering::SeqCst);
        }
    });

    coordinator.wait().await.unwrap();
}

#[tokio::test]
async fn test_gives_up_after_timeout() {
    let coordinator = ShutdownCoordinator::new(
        Arc::new(atomic::AtomicUsize::new(1)),
        Duration::from_millis(100),
    );
    let err = coordinator.wait().await.unwrap_err();
    assert_eq!(err.to_string(), "1 sends still pending after 100ms");
}
