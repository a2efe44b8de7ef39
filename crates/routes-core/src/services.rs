//! Contracts for the collaborators the routes menu reads from and writes to.
//!
//! Everything behind these traits (the environment store, persistence, the
//! mock server, the renderer) is owned by the host application.

use std::sync::Arc;

use super::context_menu::ContextMenuItem;
use super::context_menu::ContextMenuRequest;
use super::error::ServiceError;
use super::model::ContainerHandle;
use super::model::DuplicatedRoutes;
use super::model::Environment;
use super::model::EnvironmentsStatuses;
use super::model::Route;
use super::model::RouteId;
use super::model::ScrollDirection;
use super::model::Settings;
use super::stream::Stream;

/// Read-only view of the application store. Streams are expected to replay
/// their current value to new subscribers.
pub trait Store {
    fn select_active_environment(&self) -> Stream<Option<Arc<Environment>>>;
    fn select_active_route(&self) -> Stream<Option<Route>>;
    fn select_settings(&self) -> Stream<Settings>;
    fn select_environments_status(&self) -> Stream<EnvironmentsStatuses>;
    fn select_duplicated_routes(&self) -> Stream<DuplicatedRoutes>;
}

pub trait EnvironmentsService {
    /// Appends a new route at the end of the active environment.
    fn add_route(&self) -> Result<RouteId, ServiceError>;

    /// `None` asks the store to pick its own default.
    fn set_active_route(&self, route: Option<RouteId>);
}

pub trait UiService {
    fn scroll(&self, container: ContainerHandle, direction: ScrollDirection);
    fn scroll_to_bottom(&self, container: ContainerHandle);
    fn scroll_requests(&self) -> Stream<ScrollDirection>;
}

/// Supplies the context menu entries for a route row.
pub trait RouteMenuDefinitions {
    fn route_menu(&self, route: &RouteId) -> Vec<ContextMenuItem>;
}

/// Application-wide event channels.
#[derive(Debug, Clone, Default)]
pub struct EventsService {
    pub context_menu_events: Stream<ContextMenuRequest>,
}

impl EventsService {
    pub fn new() -> Self {
        Self::default()
    }
}
