//! Root marker and route index.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body returned by `GET /`.
pub const ROOT_MARKER: &str = "GO TO /docs!";

/// One entry in the route index.
#[derive(Debug, Serialize)]
pub struct RouteDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
}

/// Route index response payload.
#[derive(Debug, Serialize)]
pub struct DocsResponse {
    pub version: &'static str,
    pub routes: &'static [RouteDoc],
}

const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        method: "POST",
        path: "/places/",
        summary: "Create a place; any id in the body is ignored",
    },
    RouteDoc {
        method: "GET",
        path: "/places/",
        summary: "List all places",
    },
    RouteDoc {
        method: "GET",
        path: "/place/{place_id}",
        summary: "Get one place, or null if it does not exist",
    },
    RouteDoc {
        method: "PUT",
        path: "/place/update",
        summary: "Partially update the place named by the body's id",
    },
    RouteDoc {
        method: "DELETE",
        path: "/place/{place_id}/delete",
        summary: "Delete a place and return its last state",
    },
    RouteDoc {
        method: "GET",
        path: "/health",
        summary: "Service and database health",
    },
];

/// GET / -- fixed marker pointing at the route index.
async fn root() -> Json<[&'static str; 1]> {
    Json([ROOT_MARKER])
}

/// GET /docs
async fn docs() -> Json<DocsResponse> {
    Json(DocsResponse {
        version: env!("CARGO_PKG_VERSION"),
        routes: ROUTES,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/docs", get(docs))
}
