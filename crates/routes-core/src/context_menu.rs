use std::rc::Rc;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use super::model::RouteId;
use super::services::EventsService;
use super::services::RouteMenuDefinitions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

impl PointerButton {
    /// Maps the legacy DOM `which` code (1 left, 2 middle, 3 right).
    pub fn from_which(which: u16) -> Option<Self> {
        match which {
            1 => Some(Self::Primary),
            2 => Some(Self::Auxiliary),
            3 => Some(Self::Secondary),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Auxiliary => "auxiliary",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub button: PointerButton,
    #[serde(flatten)]
    pub position: ScreenPosition,
}

impl PointerEvent {
    pub fn new(button: PointerButton, x: i32, y: i32) -> Self {
        Self {
            button,
            position: ScreenPosition { x, y },
        }
    }
}

/// One menu entry. `action` is an opaque key understood by whoever renders
/// and handles the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuItem {
    pub label: String,
    pub icon: String,
    pub action: String,
    pub subject: RouteId,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub separator: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuRequest {
    pub route: RouteId,
    pub position: ScreenPosition,
    pub items: Vec<ContextMenuItem>,
}

/// Publishes a positioned context menu for secondary-button presses on a
/// route row. Every other button is ignored.
pub struct ContextMenuDispatcher {
    definitions: Rc<dyn RouteMenuDefinitions>,
    events: EventsService,
}

impl ContextMenuDispatcher {
    pub fn new(definitions: Rc<dyn RouteMenuDefinitions>, events: EventsService) -> Self {
        Self {
            definitions,
            events,
        }
    }

    pub fn dispatch(&self, route: &RouteId, event: &PointerEvent) -> Option<ContextMenuRequest> {
        if event.button != PointerButton::Secondary {
            debug!(route_id = %route, button = event.button.label(), "context menu ignored");
            return None;
        }

        let request = ContextMenuRequest {
            route: route.clone(),
            position: event.position,
            items: self.definitions.route_menu(route),
        };
        debug!(
            route_id = %route,
            x = event.position.x,
            y = event.position.y,
            items = request.items.len(),
            "context menu published"
        );
        self.events.context_menu_events.emit(request.clone());
        Some(request)
    }
}
