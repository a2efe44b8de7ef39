//! The routes menu controller.
//!
//! Owns the filtered route list pipeline for its whole lifetime and turns UI
//! inputs into calls on the injected collaborators. Dropping a `RoutesMenu`
//! releases every subscription it holds.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use tracing::warn;

use super::actions::MenuAction;
use super::actions::MenuEffect;
use super::config::FilterConfig;
use super::context_menu::ContextMenuDispatcher;
use super::context_menu::ContextMenuRequest;
use super::context_menu::PointerEvent;
use super::error::RoutesMenuError;
use super::model::ContainerHandle;
use super::model::DuplicatedRoutes;
use super::model::Environment;
use super::model::EnvironmentsStatuses;
use super::model::Route;
use super::model::RouteId;
use super::model::Settings;
use super::projection::project_routes;
use super::projection::search_text;
use super::projection::source_routes;
use super::scheduler::Scheduler;
use super::scroll::ListScrollCoordinator;
use super::services::EnvironmentsService;
use super::services::EventsService;
use super::services::RouteMenuDefinitions;
use super::services::Store;
use super::services::UiService;
use super::stream::Stream;

/// Collaborators handed to the controller at construction.
#[derive(Clone)]
pub struct RoutesMenuDeps {
    pub store: Rc<dyn Store>,
    pub environments: Rc<dyn EnvironmentsService>,
    pub events: EventsService,
    pub ui: Rc<dyn UiService>,
    pub menus: Rc<dyn RouteMenuDefinitions>,
    pub scheduler: Scheduler,
}

pub struct RoutesMenu {
    environments: Rc<dyn EnvironmentsService>,
    scheduler: Scheduler,
    filter_input: Stream<String>,
    route_list: Stream<Vec<Route>>,
    active_environment: Stream<Option<Arc<Environment>>>,
    active_route: Stream<Option<Route>>,
    settings: Stream<Settings>,
    environments_status: Stream<EnvironmentsStatuses>,
    duplicated_routes: Stream<DuplicatedRoutes>,
    context_menu: ContextMenuDispatcher,
    scroll: ListScrollCoordinator,
}

impl RoutesMenu {
    pub fn new(deps: RoutesMenuDeps, config: &FilterConfig) -> Self {
        let RoutesMenuDeps {
            store,
            environments,
            events,
            ui,
            menus,
            scheduler,
        } = deps;

        let active_environment = store.select_active_environment().replay_latest();
        let filter_input = Stream::new();
        let route_list = project_routes(
            &source_routes(&active_environment),
            &search_text(&filter_input, &scheduler, config.debounce()),
        );

        Self {
            environments,
            scheduler,
            filter_input,
            route_list,
            active_environment,
            active_route: store.select_active_route().replay_latest(),
            settings: store.select_settings().replay_latest(),
            environments_status: store.select_environments_status().replay_latest(),
            duplicated_routes: store.select_duplicated_routes().replay_latest(),
            context_menu: ContextMenuDispatcher::new(menus, events),
            scroll: ListScrollCoordinator::new(ui),
        }
    }

    /// The filtered route list; the only input the list renderer needs.
    pub fn route_list(&self) -> &Stream<Vec<Route>> {
        &self.route_list
    }

    pub fn filtered_routes(&self) -> Option<Vec<Route>> {
        self.route_list.latest()
    }

    pub fn active_environment(&self) -> &Stream<Option<Arc<Environment>>> {
        &self.active_environment
    }

    pub fn active_route(&self) -> &Stream<Option<Route>> {
        &self.active_route
    }

    pub fn settings(&self) -> &Stream<Settings> {
        &self.settings
    }

    pub fn environments_status(&self) -> &Stream<EnvironmentsStatuses> {
        &self.environments_status
    }

    pub fn duplicated_routes(&self) -> &Stream<DuplicatedRoutes> {
        &self.duplicated_routes
    }

    pub fn is_route_active(&self, route: &RouteId) -> bool {
        self.active_route
            .latest()
            .flatten()
            .is_some_and(|active| &active.id == route)
    }

    pub fn is_route_duplicated(&self, route: &RouteId) -> bool {
        let Some(environment) = self.active_environment.latest().flatten() else {
            return false;
        };
        self.duplicated_routes
            .latest()
            .and_then(|duplicates| duplicates.get(&environment.id).cloned())
            .is_some_and(|ids| ids.contains(route))
    }

    /// Raw search field text; becomes the query after the debounce window.
    pub fn on_filter_input(&self, text: impl Into<String>) {
        self.filter_input.emit(text.into());
    }

    pub fn clear_filter(&self) {
        self.on_filter_input(String::new());
    }

    /// Forwards `route` as-is; resolving `None` is up to the store.
    pub fn select_route(&self, route: Option<RouteId>) {
        debug!(route_id = ?route, "select route");
        self.environments.set_active_route(route);
    }

    /// Appends a route through the environments service, then scrolls the
    /// mounted list to the bottom.
    pub fn add_route(&self) -> Result<RouteId, RoutesMenuError> {
        let route = self.environments.add_route().map_err(|err| {
            warn!(error = %err, "add route failed");
            RoutesMenuError::AddRoute(err)
        })?;
        debug!(route_id = %route, "route added");
        self.scroll.scroll_to_bottom();
        Ok(route)
    }

    pub fn open_context_menu(
        &self,
        route: &RouteId,
        event: &PointerEvent,
    ) -> Option<ContextMenuRequest> {
        self.context_menu.dispatch(route, event)
    }

    pub fn mount(&self, container: ContainerHandle) {
        self.scroll.mount(container);
    }

    pub fn unmount(&self) {
        self.scroll.unmount();
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn dispatch(&self, action: MenuAction) -> Result<Vec<MenuEffect>, RoutesMenuError> {
        let effects = match action {
            MenuAction::Filter { text } => {
                self.on_filter_input(text);
                Vec::new()
            }
            MenuAction::ClearFilter => {
                self.clear_filter();
                Vec::new()
            }
            MenuAction::Select { route } => {
                self.select_route(route.clone());
                vec![MenuEffect::ActiveRouteRequested { route }]
            }
            MenuAction::AddRoute => {
                let route = self.add_route()?;
                let mut effects = vec![MenuEffect::RouteAdded { route }];
                if let Some(container) = self.scroll.container() {
                    effects.push(MenuEffect::ScrolledToBottom { container });
                }
                effects
            }
            MenuAction::ContextMenu { route, event } => self
                .open_context_menu(&route, &event)
                .map(|request| MenuEffect::ContextMenuPublished { request })
                .into_iter()
                .collect(),
            MenuAction::Mount { container } => {
                self.mount(container);
                Vec::new()
            }
            MenuAction::Unmount => {
                self.unmount();
                Vec::new()
            }
            MenuAction::Advance { ms } => {
                self.scheduler.advance_by(Duration::from_millis(ms));
                Vec::new()
            }
        };
        Ok(effects)
    }
}

#[cfg(test)]
mod tests;
