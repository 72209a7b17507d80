//! Local stand-in for the external moderation endpoint
//!
//! Speaks the same wire contract as the real classifier (request
//! `{"input"}`, response `{"results": [{"flagged", "categories"}]}`) and
//! flags content by keyword, so the comment gate is driven over real HTTP
//! with deterministic verdicts.

use std::net::SocketAddr;

use axum::{routing::post, Json, Router};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Keyword → category rules the stub flags on
const RULES: &[(&str, &str)] = &[
    ("moron", "harassment"),
    ("jump off the bridge", "self-harm"),
];

async fn classify(Json(body): Json<Value>) -> Json<Value> {
    let input = body["input"].as_str().unwrap_or_default().to_lowercase();

    let mut flagged = false;
    let mut categories = Map::new();
    for (keyword, category) in RULES {
        let hit = input.contains(keyword);
        flagged |= hit;
        categories.insert((*category).to_string(), Value::Bool(hit));
    }

    Json(json!({
        "results": [{
            "flagged": flagged,
            "categories": categories,
        }]
    }))
}

/// Running stub server
pub struct ModerationStub {
    pub endpoint: String,
    _handle: JoinHandle<()>,
}

impl ModerationStub {
    /// Start the stub on an ephemeral port
    pub async fn start() -> anyhow::Result<Self> {
        let app = Router::new().route("/v1/moderations", post(classify));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            endpoint: format!("http://{addr}/v1/moderations"),
            _handle: handle,
        })
    }
}
