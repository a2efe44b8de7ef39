use serde::Deserialize;
use serde::Serialize;

use super::context_menu::ContextMenuRequest;
use super::context_menu::PointerEvent;
use super::model::ContainerHandle;
use super::model::RouteId;

/// Discrete inputs the routes menu reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MenuAction {
    /// Raw text of the search field after a keystroke.
    Filter {
        text: String,
    },
    ClearFilter,
    Select {
        #[serde(default)]
        route: Option<RouteId>,
    },
    AddRoute,
    ContextMenu {
        route: RouteId,
        event: PointerEvent,
    },
    Mount {
        container: ContainerHandle,
    },
    Unmount,
    /// Lets `ms` milliseconds of virtual time pass.
    Advance {
        ms: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum MenuEffect {
    ActiveRouteRequested {
        route: Option<RouteId>,
    },
    RouteAdded {
        route: RouteId,
    },
    ScrolledToBottom {
        container: ContainerHandle,
    },
    ContextMenuPublished {
        request: ContextMenuRequest,
    },
}
