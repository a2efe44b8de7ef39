use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub String);

impl RouteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RouteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RouteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentId(pub String);

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EnvironmentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single mock endpoint. Fields this crate does not interpret are kept in
/// `extra` so a loaded environment round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "uuid")]
    pub id: RouteId,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_method() -> String {
    "get".to_string()
}

impl Route {
    pub fn new(
        id: impl Into<RouteId>,
        endpoint: impl Into<String>,
        documentation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            method: default_method(),
            endpoint: endpoint.into(),
            documentation: documentation.into(),
            extra: Map::new(),
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Case-sensitive, unanchored substring match on endpoint or
    /// documentation. An empty query matches every route.
    pub fn matches(&self, query: &str) -> bool {
        self.endpoint.contains(query) || self.documentation.contains(query)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(rename = "uuid")]
    pub id: EnvironmentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Environment {
    pub fn new(id: impl Into<EnvironmentId>, name: impl Into<String>, routes: Vec<Route>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            routes,
            extra: Map::new(),
        }
    }

    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.routes.iter().find(|route| &route.id == id)
    }

    /// Route ids sharing a method and endpoint with an earlier route.
    pub fn duplicated_route_ids(&self) -> BTreeSet<RouteId> {
        let mut seen = BTreeSet::new();
        self.routes
            .iter()
            .filter(|route| !seen.insert((route.method.as_str(), route.endpoint.as_str())))
            .map(|route| route.id.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub truncate_route_name: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvironmentStatus {
    pub running: bool,
    pub needs_restart: bool,
}

pub type EnvironmentsStatuses = BTreeMap<EnvironmentId, EnvironmentStatus>;

pub type DuplicatedRoutes = BTreeMap<EnvironmentId, BTreeSet<RouteId>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Top,
    Bottom,
}

impl ScrollDirection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Opaque handle to the scrollable element hosting the route list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerHandle(pub u64);
