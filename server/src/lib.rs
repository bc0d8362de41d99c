use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub title: String,
}

#[derive(Deserialize)]
pub struct UpdateItem {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Items keyed by id. Ids ascend from 1, and `BTreeMap` iteration returns
/// them in id order, which is creation order.
#[derive(Debug, Default)]
pub struct Table {
    pub next_id: u64,
    pub rows: BTreeMap<u64, Item>,
}

pub type Db = Arc<RwLock<Table>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Table::default()));
    Router::new()
        .route("/api/to-dos", get(list_items).post(create_item))
        .route("/api/to-dos/{id}", put(update_item))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    info!(%addr, "serving to-do API");
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let table = db.read().await;
    Json(table.rows.values().cloned().collect())
}

/// New items always start open, whatever the client sent.
async fn create_item(
    State(db): State<Db>,
    Json(input): Json<CreateItem>,
) -> (StatusCode, Json<Item>) {
    let mut table = db.write().await;
    table.next_id += 1;
    let item = Item {
        id: table.next_id,
        title: input.title,
        completed: false,
    };
    table.rows.insert(item.id, item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateItem>,
) -> Result<Json<Item>, StatusCode> {
    let mut table = db.write().await;
    let item = table.rows.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        item.title = title;
    }
    if let Some(completed) = input.completed {
        item.completed = completed;
    }
    Ok(Json(item.clone()))
}
