use super::*;
use pretty_assertions::assert_eq;

#[test]
fn right_click_publishes_one_request_with_coordinates() {
    let harness = Harness::new(Some(users_and_posts()));
    let (published, _subscription) = harness.record_context_menus();

    harness.menu.open_context_menu(
        &RouteId::from("7"),
        &PointerEvent::new(PointerButton::Secondary, 210, 64),
    );

    let published = published.borrow();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].route, RouteId::from("7"));
    assert_eq!(published[0].position, ScreenPosition { x: 210, y: 64 });
    let actions: Vec<&str> = published[0]
        .items
        .iter()
        .map(|item| item.action.as_str())
        .collect();
    assert_eq!(actions, vec!["duplicate", "delete"]);
}

#[test]
fn left_click_publishes_nothing() {
    let harness = Harness::new(Some(users_and_posts()));
    let (published, _subscription) = harness.record_context_menus();

    let request = harness.menu.open_context_menu(
        &RouteId::from("7"),
        &PointerEvent::new(PointerButton::Primary, 210, 64),
    );

    assert_eq!(request, None);
    assert!(published.borrow().is_empty());
    assert!(harness.calls().is_empty());
}

#[test]
fn context_menu_does_not_touch_projection_or_selection() {
    let harness = Harness::new(Some(users_and_posts()));
    let (lists, _subscription) = harness.record_route_lists();

    harness
        .menu
        .dispatch(MenuAction::ContextMenu {
            route: RouteId::from("1"),
            event: PointerEvent::new(PointerButton::Secondary, 0, 0),
        })
        .expect("context menu cannot fail");

    assert_eq!(lists.borrow().len(), 1);
    assert!(harness.calls().is_empty());
}
