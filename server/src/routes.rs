//! HTTP routes for the grid API.
//!
//! | Route | Body | Response |
//! |---|---|---|
//! | `GET /api/grid` | | grid state |
//! | `POST /api/cell` | `{row, col, type}` | `{success, updated, state}` |
//! | `POST /api/solve` | `{algorithm?}` | solve report, or `{error}` with 400 |
//! | `POST /api/reset` | | grid state |
//! | `POST /api/generate` | `{density?}` | grid state |

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use gridpath_board::{Algorithm, DEFAULT_DENSITY, GridState, SolveError, SolveReport};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::service::GridService;

/// Build the API router around `service`.
pub fn router(service: GridService) -> Router {
    Router::new()
        .route("/api/grid", get(get_grid))
        .route("/api/cell", post(set_cell))
        .route("/api/solve", post(solve))
        .route("/api/reset", post(reset))
        .route("/api/generate", post(generate))
        .with_state(service)
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CellRequest {
    pub row: i64,
    pub col: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellResponse {
    /// The request was handled; see `updated` for whether the board changed.
    pub success: bool,
    pub updated: bool,
    pub state: GridState,
}

fn default_algorithm() -> String {
    Algorithm::Bfs.as_str().to_owned()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolveRequest {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_density() -> f64 {
    DEFAULT_DENSITY
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "default_density")]
    pub density: f64,
}

/// Errors reported to API clients.
#[derive(Debug)]
pub enum ApiError {
    Solve(SolveError),
}

impl From<SolveError> for ApiError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Solve(SolveError::InvalidAlgorithm(_)) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid algorithm" })),
            )
                .into_response(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn get_grid(State(svc): State<GridService>) -> Json<GridState> {
    Json(svc.state().await)
}

pub async fn set_cell(
    State(svc): State<GridService>,
    Json(req): Json<CellRequest>,
) -> Json<CellResponse> {
    let up = svc.set_cell(req.row, req.col, &req.kind).await;
    info!(
        "cell {} at ({}, {}): updated={}",
        req.kind, req.row, req.col, up.updated
    );
    Json(CellResponse {
        success: true,
        updated: up.updated,
        state: up.state,
    })
}

pub async fn solve(
    State(svc): State<GridService>,
    Json(req): Json<SolveRequest>,
) -> Result<Json<SolveReport>, ApiError> {
    match svc.solve(&req.algorithm).await {
        Ok(report) => {
            info!(
                "solve {}: success={} path_length={} nodes_explored={}",
                report.algorithm, report.success, report.path_length, report.nodes_explored
            );
            Ok(Json(report))
        }
        Err(e) => {
            info!("solve rejected: {e}");
            Err(e.into())
        }
    }
}

pub async fn reset(State(svc): State<GridService>) -> Json<GridState> {
    info!("reset");
    Json(svc.reset().await)
}

pub async fn generate(
    State(svc): State<GridService>,
    Json(req): Json<GenerateRequest>,
) -> Json<GridState> {
    info!("generate maze with density {}", req.density);
    Json(svc.generate(req.density).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use gridpath_board::{Board, Coord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::Value;

    fn service() -> GridService {
        GridService::new(Board::new(3, 3).unwrap(), StdRng::seed_from_u64(1))
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn cell(row: i64, col: i64, kind: &str) -> Json<CellRequest> {
        Json(CellRequest {
            row,
            col,
            kind: kind.to_owned(),
        })
    }

    #[tokio::test]
    async fn grid_state_shape() {
        let Json(state) = get_grid(State(service())).await;
        let v = serde_json::to_value(state).unwrap();
        assert_eq!(v["rows"], 3);
        assert_eq!(v["cols"], 3);
        assert_eq!(v["grid"], json!([[0, 0, 0], [0, 0, 0], [0, 0, 0]]));
        assert_eq!(v["start"], Value::Null);
        assert_eq!(v["end"], Value::Null);
    }

    #[tokio::test]
    async fn set_cell_always_succeeds_but_reports_update() {
        let svc = service();
        let Json(r) = set_cell(State(svc.clone()), cell(0, 0, "start")).await;
        assert!(r.success && r.updated);
        assert_eq!(r.state.start, Some(Coord::new(0, 0)));

        let Json(r) = set_cell(State(svc.clone()), cell(0, 0, "wall")).await;
        assert!(r.success);
        assert!(!r.updated);
        assert_eq!(r.state.grid[0][0], 2);
    }

    #[tokio::test]
    async fn set_cell_outside_i32_is_silently_rejected() {
        let svc = service();
        let req: CellRequest =
            serde_json::from_str(r#"{"row": 4294967296, "col": 0, "type": "wall"}"#).unwrap();
        let resp = set_cell(State(svc.clone()), Json(req)).await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let v = body_json(resp).await;
        assert_eq!(v["success"], true);
        assert_eq!(v["updated"], false);
        assert_eq!(v["state"]["grid"], json!([[0, 0, 0], [0, 0, 0], [0, 0, 0]]));
    }

    #[tokio::test]
    async fn solve_without_markers_is_unsuccessful_report() {
        let req = Json(SolveRequest {
            algorithm: "bfs".into(),
        });
        let resp = solve(State(service()), req).await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({
                "success": false,
                "path": [],
                "visited": [],
                "path_length": 0,
                "nodes_explored": 0,
                "algorithm": "bfs",
            })
        );
    }

    #[tokio::test]
    async fn solve_unknown_algorithm_is_error_shape() {
        let req = Json(SolveRequest {
            algorithm: "dijkstra".into(),
        });
        let resp = solve(State(service()), req).await.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await, json!({ "error": "Invalid algorithm" }));
    }

    #[tokio::test]
    async fn solve_finds_path() {
        let svc = service();
        set_cell(State(svc.clone()), cell(0, 0, "start")).await;
        set_cell(State(svc.clone()), cell(2, 2, "end")).await;
        set_cell(State(svc.clone()), cell(0, 1, "wall")).await;
        let req = Json(SolveRequest {
            algorithm: "bfs".into(),
        });
        let resp = solve(State(svc), req).await.into_response();
        let v = body_json(resp).await;
        assert_eq!(v["success"], true);
        assert_eq!(v["path_length"], 5);
        assert_eq!(v["nodes_explored"], 7);
        assert_eq!(v["path"][1], json!({"row": 1, "col": 0}));
    }

    #[test]
    fn request_defaults() {
        let s: SolveRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(s.algorithm, "bfs");
        let g: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(g.density, 0.3);
        let c: CellRequest =
            serde_json::from_str(r#"{"row": 1, "col": 2, "type": "wall"}"#).unwrap();
        assert_eq!(c.kind, "wall");
    }

    #[tokio::test]
    async fn reset_and_generate_return_state() {
        let svc = service();
        let Json(g) = generate(State(svc.clone()), Json(GenerateRequest { density: 0.0 })).await;
        assert!(g.start.is_some());
        assert!(g.grid.iter().flatten().all(|&code| code != 1));
        let Json(r) = reset(State(svc)).await;
        assert_eq!(r.start, None);
        assert_eq!(r.end, None);
    }

    #[test]
    fn router_builds() {
        let _ = router(service());
    }
}
