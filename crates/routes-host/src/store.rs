use std::cell::RefCell;
use std::sync::Arc;

use routes_core::model::DuplicatedRoutes;
use routes_core::model::Environment;
use routes_core::model::EnvironmentId;
use routes_core::model::EnvironmentStatus;
use routes_core::model::EnvironmentsStatuses;
use routes_core::model::Route;
use routes_core::model::RouteId;
use routes_core::model::Settings;
use routes_core::services::Store;
use routes_core::stream::Stream;
use tracing::debug;

use crate::error::HostError;

#[derive(Debug, Default)]
struct StoreState {
    environments: Vec<Arc<Environment>>,
    active_environment: Option<EnvironmentId>,
    active_route: Option<RouteId>,
}

/// In-memory application store. Every selector replays its current value.
#[derive(Debug)]
pub struct MemoryStore {
    state: RefCell<StoreState>,
    active_environment: Stream<Option<Arc<Environment>>>,
    active_route: Stream<Option<Route>>,
    settings: Stream<Settings>,
    statuses: Stream<EnvironmentsStatuses>,
    duplicates: Stream<DuplicatedRoutes>,
}

impl MemoryStore {
    /// The first environment, if any, becomes active with no active route.
    pub fn new(environments: Vec<Environment>) -> Self {
        let environments: Vec<Arc<Environment>> = environments.into_iter().map(Arc::new).collect();
        let store = Self {
            state: RefCell::new(StoreState {
                active_environment: environments.first().map(|environment| environment.id.clone()),
                environments,
                active_route: None,
            }),
            active_environment: Stream::seeded(None),
            active_route: Stream::seeded(None),
            settings: Stream::seeded(Settings::default()),
            statuses: Stream::seeded(EnvironmentsStatuses::new()),
            duplicates: Stream::seeded(DuplicatedRoutes::new()),
        };
        store.publish();
        store
    }

    pub fn environments(&self) -> Vec<Arc<Environment>> {
        self.state.borrow().environments.clone()
    }

    pub fn current_environment(&self) -> Option<Arc<Environment>> {
        let state = self.state.borrow();
        let id = state.active_environment.as_ref()?;
        find(&state.environments, id).cloned()
    }

    pub fn set_active_environment(&self, id: &EnvironmentId) -> Result<(), HostError> {
        {
            let mut state = self.state.borrow_mut();
            if find(&state.environments, id).is_none() {
                return Err(HostError::UnknownEnvironment(id.clone()));
            }
            state.active_environment = Some(id.clone());
            state.active_route = None;
        }
        self.publish();
        Ok(())
    }

    /// Swaps in a new snapshot of an existing environment.
    pub fn replace_environment(&self, environment: Environment) -> Result<(), HostError> {
        {
            let mut state = self.state.borrow_mut();
            let slot = state
                .environments
                .iter_mut()
                .find(|existing| existing.id == environment.id)
                .ok_or_else(|| HostError::UnknownEnvironment(environment.id.clone()))?;
            *slot = Arc::new(environment);
        }
        self.publish();
        Ok(())
    }

    /// `None` selects the first route of the active environment. An unknown
    /// id leaves no route active.
    pub fn set_active_route(&self, route: Option<RouteId>) {
        let resolved = match route {
            Some(id) => Some(id),
            None => self
                .current_environment()
                .and_then(|environment| environment.routes.first().map(|first| first.id.clone())),
        };
        self.state.borrow_mut().active_route = resolved;
        self.publish_active_route();
    }

    pub fn set_settings(&self, settings: Settings) {
        self.settings.emit(settings);
    }

    pub fn set_environment_status(&self, id: EnvironmentId, status: EnvironmentStatus) {
        let mut statuses = self.statuses.latest().unwrap_or_default();
        statuses.insert(id, status);
        self.statuses.emit(statuses);
    }

    fn publish(&self) {
        let (current, duplicates) = {
            let state = self.state.borrow();
            let current = state
                .active_environment
                .as_ref()
                .and_then(|id| find(&state.environments, id).cloned());
            let duplicates: DuplicatedRoutes = state
                .environments
                .iter()
                .map(|environment| (environment.id.clone(), environment.duplicated_route_ids()))
                .filter(|(_, ids)| !ids.is_empty())
                .collect();
            (current, duplicates)
        };
        debug!(
            environment_id = ?current.as_ref().map(|environment| environment.id.clone()),
            "store published"
        );
        self.duplicates.emit(duplicates);
        self.active_environment.emit(current);
        self.publish_active_route();
    }

    fn publish_active_route(&self) {
        let route = {
            let state = self.state.borrow();
            state.active_route.as_ref().and_then(|id| {
                let environment_id = state.active_environment.as_ref()?;
                find(&state.environments, environment_id)?.route(id).cloned()
            })
        };
        self.active_route.emit(route);
    }
}

fn find<'a>(environments: &'a [Arc<Environment>], id: &EnvironmentId) -> Option<&'a Arc<Environment>> {
    environments.iter().find(|environment| &environment.id == id)
}

impl Store for MemoryStore {
    fn select_active_environment(&self) -> Stream<Option<Arc<Environment>>> {
        self.active_environment.clone()
    }

    fn select_active_route(&self) -> Stream<Option<Route>> {
        self.active_route.clone()
    }

    fn select_settings(&self) -> Stream<Settings> {
        self.settings.clone()
    }

    fn select_environments_status(&self) -> Stream<EnvironmentsStatuses> {
        self.statuses.clone()
    }

    fn select_duplicated_routes(&self) -> Stream<DuplicatedRoutes> {
        self.duplicates.clone()
    }
}
