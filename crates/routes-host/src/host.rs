use std::rc::Rc;

use routes_core::menu::RoutesMenuDeps;
use routes_core::model::Environment;
use routes_core::scheduler::Scheduler;
use routes_core::services::EventsService;

use crate::environments::MemoryEnvironmentsService;
use crate::menus::StandardRouteMenu;
use crate::store::MemoryStore;
use crate::ui::RecordingUi;

/// In-memory collaborators wired together for running the routes menu
/// without a renderer.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    pub store: Rc<MemoryStore>,
    pub environments: Rc<MemoryEnvironmentsService>,
    pub ui: Rc<RecordingUi>,
    pub events: EventsService,
    pub scheduler: Scheduler,
}

impl HeadlessHost {
    pub fn new(environments: Vec<Environment>) -> Self {
        let store = Rc::new(MemoryStore::new(environments));
        Self {
            environments: Rc::new(MemoryEnvironmentsService::new(store.clone())),
            store,
            ui: Rc::new(RecordingUi::new()),
            events: EventsService::new(),
            scheduler: Scheduler::new(),
        }
    }

    pub fn deps(&self) -> RoutesMenuDeps {
        RoutesMenuDeps {
            store: self.store.clone(),
            environments: self.environments.clone(),
            events: self.events.clone(),
            ui: self.ui.clone(),
            menus: Rc::new(StandardRouteMenu),
            scheduler: self.scheduler.clone(),
        }
    }
}
