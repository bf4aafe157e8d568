//! Directions responses from the external route fetcher.

use serde::{Deserialize, Serialize};

use crate::{Route, RouteError, RouteResult};

/// A routing response: zero or more candidate routes plus the service's
/// status fields.
///
/// The session treats a response with no routes as a routing error — the
/// currently driven route is retained.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,

    /// Service status code, e.g. `"Ok"` or `"NoRoute"`.
    #[serde(default)]
    pub code: Option<String>,

    /// Human-readable error message from the service, if any.
    #[serde(default)]
    pub message: Option<String>,
}

impl DirectionsResponse {
    /// Decode a response from the fetcher's JSON payload.
    pub fn from_json(json: &str) -> RouteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Consume the response, returning its candidate routes.
    ///
    /// Every candidate is validated; an empty response yields
    /// [`RouteError::NoRoutes`] carrying the service message when present.
    pub fn into_routes(self) -> RouteResult<Vec<Route>> {
        if self.routes.is_empty() {
            return Err(RouteError::NoRoutes {
                message: self
                    .message
                    .or(self.code)
                    .unwrap_or_else(|| "response contained no routes".into()),
            });
        }
        for route in &self.routes {
            route.validate()?;
        }
        Ok(self.routes)
    }
}
