use std::cell::RefCell;

use routes_core::model::ContainerHandle;
use routes_core::model::ScrollDirection;
use routes_core::services::UiService;
use routes_core::stream::Stream;
use serde::Serialize;

/// A scroll the UI was asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "scroll", rename_all = "snake_case")]
pub enum ScrollCommand {
    Scroll {
        container: ContainerHandle,
        direction: ScrollDirection,
    },
    ToBottom {
        container: ContainerHandle,
    },
}

/// Headless UI service that records scroll commands instead of moving a
/// real viewport.
#[derive(Debug, Default)]
pub struct RecordingUi {
    commands: RefCell<Vec<ScrollCommand>>,
    requests: Stream<ScrollDirection>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits an external scroll request, as a keyboard shortcut would.
    pub fn request_scroll(&self, direction: ScrollDirection) {
        self.requests.emit(direction);
    }

    pub fn commands(&self) -> Vec<ScrollCommand> {
        self.commands.borrow().clone()
    }

    /// Returns and clears the recorded commands.
    pub fn take_commands(&self) -> Vec<ScrollCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }
}

impl UiService for RecordingUi {
    fn scroll(&self, container: ContainerHandle, direction: ScrollDirection) {
        self.commands.borrow_mut().push(ScrollCommand::Scroll {
            container,
            direction,
        });
    }

    fn scroll_to_bottom(&self, container: ContainerHandle) {
        self.commands
            .borrow_mut()
            .push(ScrollCommand::ToBottom { container });
    }

    fn scroll_requests(&self) -> Stream<ScrollDirection> {
        self.requests.clone()
    }
}
