use routes_core::context_menu::ContextMenuItem;
use routes_core::model::RouteId;
use routes_core::services::RouteMenuDefinitions;

/// The route row menu: duplicate, copy, toggle, delete.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRouteMenu;

fn item(label: &str, icon: &str, action: &str, subject: &RouteId) -> ContextMenuItem {
    ContextMenuItem {
        label: label.to_string(),
        icon: icon.to_string(),
        action: action.to_string(),
        subject: subject.clone(),
        separator: false,
        confirm: None,
    }
}

impl RouteMenuDefinitions for StandardRouteMenu {
    fn route_menu(&self, route: &RouteId) -> Vec<ContextMenuItem> {
        vec![
            item("Duplicate", "content_copy", "duplicate", route),
            item(
                "Duplicate to environment",
                "input",
                "duplicate_to_environment",
                route,
            ),
            item("Copy full path", "assignment", "copy_full_path", route),
            ContextMenuItem {
                separator: true,
                ..item("Toggle", "power_settings_new", "toggle", route)
            },
            ContextMenuItem {
                confirm: Some("Confirm deletion".to_string()),
                ..item("Delete", "delete", "delete", route)
            },
        ]
    }
}
