use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;
pub(super) use std::sync::Arc;

use pretty_assertions::assert_eq;

pub(super) use super::RoutesMenu;
pub(super) use super::RoutesMenuDeps;
pub(super) use crate::actions::MenuAction;
pub(super) use crate::actions::MenuEffect;
pub(super) use crate::config::FilterConfig;
pub(super) use crate::context_menu::ContextMenuItem;
pub(super) use crate::context_menu::ContextMenuRequest;
pub(super) use crate::context_menu::PointerButton;
pub(super) use crate::context_menu::PointerEvent;
pub(super) use crate::context_menu::ScreenPosition;
pub(super) use crate::error::RoutesMenuError;
pub(super) use crate::error::ServiceError;
pub(super) use crate::model::ContainerHandle;
pub(super) use crate::model::DuplicatedRoutes;
pub(super) use crate::model::Environment;
pub(super) use crate::model::EnvironmentsStatuses;
pub(super) use crate::model::Route;
pub(super) use crate::model::RouteId;
pub(super) use crate::model::ScrollDirection;
pub(super) use crate::model::Settings;
pub(super) use crate::scheduler::Scheduler;
pub(super) use crate::services::EnvironmentsService;
pub(super) use crate::services::EventsService;
pub(super) use crate::services::RouteMenuDefinitions;
pub(super) use crate::services::Store;
pub(super) use crate::services::UiService;
pub(super) use crate::stream::Stream;
pub(super) use crate::stream::Subscription;

mod context_menu;
mod selection;
mod teardown;

pub(super) const QUIET: std::time::Duration = std::time::Duration::from_millis(50);

/// Ordered record of every outward call, shared by all fakes.
type CallLog = Rc<RefCell<Vec<String>>>;

struct FakeStore {
    environment: Stream<Option<Arc<Environment>>>,
    route: Stream<Option<Route>>,
    settings: Stream<Settings>,
    statuses: Stream<EnvironmentsStatuses>,
    duplicates: Stream<DuplicatedRoutes>,
}

impl Store for FakeStore {
    fn select_active_environment(&self) -> Stream<Option<Arc<Environment>>> {
        self.environment.clone()
    }

    fn select_active_route(&self) -> Stream<Option<Route>> {
        self.route.clone()
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

/// Appends `new-N` routes to the store's environment, like the real service.
struct FakeEnvironments {
    store: Rc<FakeStore>,
    calls: CallLog,
    fail: Cell<bool>,
    added: Cell<usize>,
}

impl EnvironmentsService for FakeEnvironments {
    fn add_route(&self) -> Result<RouteId, ServiceError> {
        self.calls.borrow_mut().push("add_route".to_string());
        if self.fail.get() {
            return Err(ServiceError::Rejected("read-only environment".to_string()));
        }
        let Some(current) = self.store.environment.latest().flatten() else {
            return Err(ServiceError::NoActiveEnvironment);
        };
        self.added.set(self.added.get() + 1);
        let id = RouteId(format!("new-{}", self.added.get()));
        let mut next = current.as_ref().clone();
        next.routes.push(Route::new(id.clone(), "", ""));
        self.store.environment.emit(Some(Arc::new(next)));
        Ok(id)
    }

    fn set_active_route(&self, route: Option<RouteId>) {
        let label = route.map_or_else(|| "-".to_string(), |id| id.0);
        self.calls.borrow_mut().push(format!("set_active_route:{label}"));
    }
}

struct FakeUi {
    requests: Stream<ScrollDirection>,
    calls: CallLog,
}

impl UiService for FakeUi {
    fn scroll(&self, container: ContainerHandle, direction: ScrollDirection) {
        self.calls
            .borrow_mut()
            .push(format!("scroll:{}:{}", container.0, direction.label()));
    }

    fn scroll_to_bottom(&self, container: ContainerHandle) {
        self.calls
            .borrow_mut()
            .push(format!("scroll_to_bottom:{}", container.0));
    }

    fn scroll_requests(&self) -> Stream<ScrollDirection> {
        self.requests.clone()
    }
}

struct FakeMenus;

impl RouteMenuDefinitions for FakeMenus {
    fn route_menu(&self, route: &RouteId) -> Vec<ContextMenuItem> {
        ["duplicate", "delete"]
            .into_iter()
            .map(|action| ContextMenuItem {
                label: action.to_string(),
                icon: action.to_string(),
                action: action.to_string(),
                subject: route.clone(),
                separator: false,
                confirm: None,
            })
            .collect()
    }
}

struct Harness {
    menu: RoutesMenu,
    scheduler: Scheduler,
    store: Rc<FakeStore>,
    environments: Rc<FakeEnvironments>,
    ui: Rc<FakeUi>,
    events: EventsService,
    calls: CallLog,
}

impl Harness {
    fn new(environment: Option<Environment>) -> Self {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let store = Rc::new(FakeStore {
            environment: Stream::seeded(environment.map(Arc::new)),
            route: Stream::seeded(None),
            settings: Stream::seeded(Settings::default()),
            statuses: Stream::seeded(EnvironmentsStatuses::new()),
            duplicates: Stream::seeded(DuplicatedRoutes::new()),
        });
        let environments = Rc::new(FakeEnvironments {
            store: store.clone(),
            calls: calls.clone(),
            fail: Cell::new(false),
            added: Cell::new(0),
        });
        let ui = Rc::new(FakeUi {
            requests: Stream::new(),
            calls: calls.clone(),
        });
        let events = EventsService::new();
        let scheduler = Scheduler::new();
        let menu = RoutesMenu::new(
            RoutesMenuDeps {
                store: store.clone(),
                environments: environments.clone(),
                events: events.clone(),
                ui: ui.clone(),
                menus: Rc::new(FakeMenus),
                scheduler: scheduler.clone(),
            },
            &FilterConfig::default(),
        );
        Self {
            menu,
            scheduler,
            store,
            environments,
            ui,
            events,
            calls,
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn type_and_settle(&self, text: &str) {
        self.menu.on_filter_input(text);
        self.scheduler.advance_by(QUIET);
    }

    fn visible_ids(&self) -> Vec<String> {
        self.menu
            .filtered_routes()
            .unwrap_or_default()
            .into_iter()
            .map(|route| route.id.0)
            .collect()
    }

    fn record_route_lists(&self) -> (Rc<RefCell<Vec<Vec<Route>>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription = self
            .menu
            .route_list()
            .subscribe(move |routes| sink.borrow_mut().push(routes.clone()));
        (seen, subscription)
    }

    fn record_context_menus(&self) -> (Rc<RefCell<Vec<ContextMenuRequest>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription = self
            .events
            .context_menu_events
            .subscribe(move |request| sink.borrow_mut().push(request.clone()));
        (seen, subscription)
    }
}

fn users_and_posts() -> Environment {
    Environment::new(
        "env-1",
        "Demo",
        vec![
            Route::new("1", "/users", ""),
            Route::new("2", "/posts", "user data"),
        ],
    )
}

#[test]
fn harness_starts_with_full_list() {
    let harness = Harness::new(Some(users_and_posts()));
    assert_eq!(harness.visible_ids(), vec!["1", "2"]);
    assert!(harness.calls().is_empty());
}
