use super::*;
use pretty_assertions::assert_eq;

#[test]
fn select_forwards_identifier() {
    let harness = Harness::new(Some(users_and_posts()));
    harness.menu.select_route(Some(RouteId::from("2")));
    assert_eq!(harness.calls(), vec!["set_active_route:2"]);
}

#[test]
fn select_forwards_absent_identifier_without_picking_default() {
    let harness = Harness::new(Some(users_and_posts()));
    harness.menu.select_route(None);
    assert_eq!(harness.calls(), vec!["set_active_route:-"]);
}

#[test]
fn select_does_not_check_visibility() {
    let harness = Harness::new(Some(users_and_posts()));
    harness.type_and_settle("/posts");
    harness.menu.select_route(Some(RouteId::from("1")));
    harness.menu.select_route(Some(RouteId::from("unknown")));
    assert_eq!(
        harness.calls(),
        vec!["set_active_route:1", "set_active_route:unknown"]
    );
}

#[test]
fn select_action_reports_requested_route() {
    let harness = Harness::new(Some(users_and_posts()));
    let effects = harness
        .menu
        .dispatch(MenuAction::Select {
            route: Some(RouteId::from("1")),
        })
        .expect("select cannot fail");
    assert_eq!(
        effects,
        vec![MenuEffect::ActiveRouteRequested {
            route: Some(RouteId::from("1"))
        }]
    );
}
