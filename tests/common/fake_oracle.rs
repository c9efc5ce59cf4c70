//! Stand-in for the scoring service, served over real HTTP so `HttpOracle` is exercised end to
//! end.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use pairing::oracle::{EntityListing, Explanation, ExplanationRequest, ScoreRequest, ScoreResponse};

type Pair = (u64, u64);

#[derive(Default)]
pub struct FakeOracle {
    scores: HashMap<Pair, f64>,
    failing: HashSet<Pair>,
    malformed: HashSet<Pair>,
    slow: HashMap<Pair, Duration>,
    liquors: Vec<EntityListing>,
    ingredients: Vec<EntityListing>,
}

struct Shared {
    oracle: FakeOracle,
    score_calls: AtomicUsize,
}

pub struct RunningFakeOracle {
    pub addr: SocketAddr,
    shared: Arc<Shared>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl RunningFakeOracle {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn score_calls(&self) -> usize {
        self.shared.score_calls.load(Ordering::SeqCst)
    }
}

impl Drop for RunningFakeOracle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn listing(id: u64, name: &str) -> EntityListing {
    EntityListing {
        id,
        name: name.to_string(),
    }
}

impl FakeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for pairs with no explicit entry.
    pub fn default_score(liquor_id: u64, ingredient_id: u64) -> f64 {
        ((liquor_id * 7 + ingredient_id * 3) % 110) as f64 / 10.0 - 5.0
    }

    pub fn score(mut self, liquor_id: u64, ingredient_id: u64, score: f64) -> Self {
        self.scores.insert((liquor_id, ingredient_id), score);
        self
    }

    pub fn fail(mut self, liquor_id: u64, ingredient_id: u64) -> Self {
        self.failing.insert((liquor_id, ingredient_id));
        self
    }

    pub fn malformed(mut self, liquor_id: u64, ingredient_id: u64) -> Self {
        self.malformed.insert((liquor_id, ingredient_id));
        self
    }

    pub fn slow(mut self, liquor_id: u64, ingredient_id: u64, delay: Duration) -> Self {
        self.slow.insert((liquor_id, ingredient_id), delay);
        self
    }

    pub fn liquors(mut self, liquors: Vec<EntityListing>) -> Self {
        self.liquors = liquors;
        self
    }

    pub fn ingredients(mut self, ingredients: Vec<EntityListing>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub async fn spawn(self) -> RunningFakeOracle {
        let shared = Arc::new(Shared {
            oracle: self,
            score_calls: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/score-only", post(score_handler))
            .route("/explanation-only", post(explanation_handler))
            .route("/liquors", get(liquors_handler))
            .route("/ingredients", get(ingredients_handler))
            .with_state(Arc::clone(&shared));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake oracle");
        let addr = listener.local_addr().expect("fake oracle addr");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        RunningFakeOracle {
            addr,
            shared,
            shutdown_tx: Some(shutdown_tx),
        }
    }
}

async fn score_handler(
    State(shared): State<Arc<Shared>>,
    Json(request): Json<ScoreRequest>,
) -> Response {
    shared.score_calls.fetch_add(1, Ordering::SeqCst);
    let pair = (request.liquor_id, request.ingredient_id);
    let oracle = &shared.oracle;

    if let Some(delay) = oracle.slow.get(&pair) {
        tokio::time::sleep(*delay).await;
    }
    if oracle.failing.contains(&pair) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "model error").into_response();
    }
    if oracle.malformed.contains(&pair) {
        return Json(serde_json::json!({"value": "n/a"})).into_response();
    }

    let score = oracle
        .scores
        .get(&pair)
        .copied()
        .unwrap_or_else(|| FakeOracle::default_score(pair.0, pair.1));
    Json(ScoreResponse { score }).into_response()
}

async fn explanation_handler(Json(request): Json<ExplanationRequest>) -> Json<Explanation> {
    Json(Explanation {
        explanation: format!(
            "{} pairs with {}",
            request.liquor_id, request.ingredient_id
        ),
        gpt_explanation: request.score.map(|s| format!("score {:.1}", s)),
    })
}

async fn liquors_handler(State(shared): State<Arc<Shared>>) -> Json<Vec<EntityListing>> {
    Json(shared.oracle.liquors.clone())
}

async fn ingredients_handler(State(shared): State<Arc<Shared>>) -> Json<Vec<EntityListing>> {
    Json(shared.oracle.ingredients.clone())
}
