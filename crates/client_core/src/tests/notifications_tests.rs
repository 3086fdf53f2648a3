use super::*;

#[tokio::test]
async fn push_broadcasts_and_keeps_notification_active() {
    let center = NotificationCenter::init(Duration::from_secs(60));
    let mut events = center.subscribe();

    let notification = Notification::success("Saved", "All good");
    center.push(notification.clone());

    assert_eq!(
        events.recv().await.expect("event"),
        NotificationEvent::Shown(notification.clone())
    );
    assert_eq!(center.active(), vec![notification]);
}

#[tokio::test]
async fn dismiss_removes_once() {
    let center = NotificationCenter::init(Duration::from_secs(60));
    let notification = Notification::error("Oops", "Something broke");
    let id = notification.id;
    center.push(notification);

    let mut events = center.subscribe();
    assert!(center.dismiss(id));
    assert!(!center.dismiss(id));
    assert!(center.active().is_empty());
    assert_eq!(
        events.recv().await.expect("event"),
        NotificationEvent::Dismissed(id)
    );
}

#[tokio::test(start_paused = true)]
async fn notifications_expire_after_ttl() {
    let center = NotificationCenter::init(Duration::from_millis(3000));
    let mut events = center.subscribe();
    let notification = Notification::success("Hi", "there");
    let id = notification.id;
    center.push(notification);

    assert!(matches!(
        events.recv().await.expect("shown"),
        NotificationEvent::Shown(_)
    ));

    tokio::time::sleep(Duration::from_millis(2999)).await;
    assert_eq!(center.active().len(), 1);

    assert_eq!(
        events.recv().await.expect("dismissed"),
        NotificationEvent::Dismissed(id)
    );
    assert!(center.active().is_empty());
}

#[test]
fn push_without_runtime_still_shows_notification() {
    let center = NotificationCenter::default();
    center.push(Notification::success("Offline", "no runtime"));
    assert_eq!(center.active().len(), 1);
}

#[test]
fn every_notification_gets_its_own_id() {
    let first = Notification::success("a", "b");
    let second = Notification::success("a", "b");
    assert_ne!(first.id, second.id);
}
