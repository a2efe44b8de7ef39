use std::rc::Rc;

use routes_core::error::ServiceError;
use routes_core::model::Route;
use routes_core::model::RouteId;
use routes_core::services::EnvironmentsService;
use tracing::debug;
use uuid::Uuid;

use crate::store::MemoryStore;

/// Environment mutations applied straight to a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryEnvironmentsService {
    store: Rc<MemoryStore>,
}

impl MemoryEnvironmentsService {
    pub fn new(store: Rc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl EnvironmentsService for MemoryEnvironmentsService {
    /// Appends a blank GET route to the active environment and makes it the
    /// active route.
    fn add_route(&self) -> Result<RouteId, ServiceError> {
        let current = self
            .store
            .current_environment()
            .ok_or(ServiceError::NoActiveEnvironment)?;
        let route = Route::new(Uuid::new_v4().to_string(), "", "");
        let id = route.id.clone();

        let mut next = current.as_ref().clone();
        next.routes.push(route);
        self.store
            .replace_environment(next)
            .map_err(|_| ServiceError::UnknownEnvironment(current.id.clone()))?;
        debug!(environment_id = %current.id, route_id = %id, "route appended");

        self.store.set_active_route(Some(id.clone()));
        Ok(id)
    }

    fn set_active_route(&self, route: Option<RouteId>) {
        self.store.set_active_route(route);
    }
}
