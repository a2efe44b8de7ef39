//! The filtered route list: active environment routes combined with the
//! debounced search text.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::model::Environment;
use super::model::Route;
use super::scheduler::Scheduler;
use super::stream::Stream;

/// Keeps the routes matching `query`, in their original order.
pub fn filter_routes(routes: &[Route], query: &str) -> Vec<Route> {
    routes
        .iter()
        .filter(|route| route.matches(query))
        .cloned()
        .collect()
}

/// Debounced query text, starting with an immediate empty query.
pub fn search_text(input: &Stream<String>, scheduler: &Scheduler, quiet: Duration) -> Stream<String> {
    input.debounce(scheduler, quiet).start_with(String::new())
}

/// Present environments only, with repeats of the previous one dropped.
pub fn source_routes(
    active_environment: &Stream<Option<Arc<Environment>>>,
) -> Stream<Arc<Environment>> {
    active_environment
        .filter_map(|environment| environment.clone())
        .distinct_until_changed()
}

pub fn project_routes(
    source: &Stream<Arc<Environment>>,
    search: &Stream<String>,
) -> Stream<Vec<Route>> {
    source
        .combine_latest(search)
        .map(|(environment, query)| {
            let routes = filter_routes(&environment.routes, query);
            debug!(
                environment_id = %environment.id,
                query = %query,
                total = environment.routes.len(),
                kept = routes.len(),
                "route list projected"
            );
            routes
        })
        .replay_latest()
}
