//! Runs a scripted sequence of menu inputs against in-memory collaborators
//! and writes everything observable as JSON lines.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use routes_core::actions::MenuAction;
use routes_core::actions::MenuEffect;
use routes_core::config::FilterConfig;
use routes_core::context_menu::ContextMenuRequest;
use routes_core::menu::RoutesMenu;
use routes_core::model::Environment;
use routes_core::model::RouteId;
use routes_core::model::ScrollDirection;
use routes_host::HeadlessHost;
use routes_host::ScrollCommand;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    /// External scroll request, e.g. from a keyboard shortcut.
    Scroll { scroll: ScrollDirection },
    Action(MenuAction),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayEvent {
    Routes { routes: Vec<RouteId> },
    ContextMenu { request: ContextMenuRequest },
    Scroll { command: ScrollCommand },
    Effect { effect: MenuEffect },
}

pub fn parse_script(raw: &str) -> Result<Vec<Step>, serde_yaml::Error> {
    serde_yaml::from_str(raw)
}

pub fn replay(
    environment: Environment,
    config: &FilterConfig,
    steps: Vec<Step>,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let host = HeadlessHost::new(vec![environment]);
    let menu = RoutesMenu::new(host.deps(), config);

    let events: Rc<RefCell<Vec<ReplayEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let _routes = menu.route_list().subscribe({
        let events = events.clone();
        move |routes| {
            events.borrow_mut().push(ReplayEvent::Routes {
                routes: routes.iter().map(|route| route.id.clone()).collect(),
            })
        }
    });
    let _menus = host.events.context_menu_events.subscribe({
        let events = events.clone();
        move |request| {
            events.borrow_mut().push(ReplayEvent::ContextMenu {
                request: request.clone(),
            })
        }
    });

    flush(&events, &host, out)?;
    for step in steps {
        match step {
            Step::Scroll { scroll } => host.ui.request_scroll(scroll),
            Step::Action(action) => {
                for effect in menu.dispatch(action)? {
                    events.borrow_mut().push(ReplayEvent::Effect { effect });
                }
            }
        }
        flush(&events, &host, out)?;
    }
    Ok(())
}

fn flush(
    events: &RefCell<Vec<ReplayEvent>>,
    host: &HeadlessHost,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut pending = std::mem::take(&mut *events.borrow_mut());
    pending.extend(
        host.ui
            .take_commands()
            .into_iter()
            .map(|command| ReplayEvent::Scroll { command }),
    );
    for event in pending {
        writeln!(out, "{}", serde_json::to_string(&event)?)?;
    }
    Ok(())
}
