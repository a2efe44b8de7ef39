use super::*;
use pretty_assertions::assert_eq;

#[test]
fn dropping_menu_releases_store_and_ui_subscriptions() {
    let harness = Harness::new(Some(users_and_posts()));
    assert_eq!(harness.store.environment.subscriber_count(), 1);
    assert_eq!(harness.ui.requests.subscriber_count(), 1);

    let Harness {
        menu, store, ui, ..
    } = harness;
    drop(menu);

    assert_eq!(store.environment.subscriber_count(), 0);
    assert_eq!(store.route.subscriber_count(), 0);
    assert_eq!(ui.requests.subscriber_count(), 0);
}

#[test]
fn pending_debounce_after_drop_is_harmless() {
    let harness = Harness::new(Some(users_and_posts()));
    harness.menu.on_filter_input("user");
    let Harness {
        menu, scheduler, ..
    } = harness;
    drop(menu);

    scheduler.advance_by(QUIET);
    assert_eq!(scheduler.pending(), 0);
}
