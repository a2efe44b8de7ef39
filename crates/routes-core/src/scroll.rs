use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use super::model::ContainerHandle;
use super::model::ScrollDirection;
use super::services::UiService;
use super::stream::Subscription;

/// Relays scroll actions to the UI service for the mounted list container.
/// Without a mounted container every action is skipped.
pub struct ListScrollCoordinator {
    ui: Rc<dyn UiService>,
    container: Rc<Cell<Option<ContainerHandle>>>,
    _requests: Subscription,
}

impl ListScrollCoordinator {
    pub fn new(ui: Rc<dyn UiService>) -> Self {
        let container: Rc<Cell<Option<ContainerHandle>>> = Rc::new(Cell::new(None));
        let requests = ui.scroll_requests().subscribe({
            let ui = ui.clone();
            let container = container.clone();
            move |direction: &ScrollDirection| match container.get() {
                Some(handle) => ui.scroll(handle, *direction),
                None => debug!(direction = direction.label(), "scroll skipped, no container"),
            }
        });
        Self {
            ui,
            container,
            _requests: requests,
        }
    }

    pub fn mount(&self, container: ContainerHandle) {
        self.container.set(Some(container));
    }

    pub fn unmount(&self) {
        self.container.set(None);
    }

    pub fn container(&self) -> Option<ContainerHandle> {
        self.container.get()
    }

    /// Returns the container that was scrolled, if any.
    pub fn scroll_to_bottom(&self) -> Option<ContainerHandle> {
        let container = self.container.get()?;
        self.ui.scroll_to_bottom(container);
        Some(container)
    }
}
