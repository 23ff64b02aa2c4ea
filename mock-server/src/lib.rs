//! In-process stand-in for the public mock REST API the front-end talks to.
//!
//! Serves `users` and `posts` from a fixed set of fixtures. Writes are
//! acknowledged with the representation the real service would return but
//! are never applied, so every `GET` keeps answering with the fixtures.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "postId")]
    pub post_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct PostInput {
    #[serde(rename = "postId", default)]
    pub post_id: u64,
    pub title: String,
    pub body: String,
}

/// A collection served under `/{PATH}`.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    const PATH: &'static str;
    type Input: DeserializeOwned + Send + 'static;

    fn id(&self) -> u64;
    fn from_input(id: u64, input: Self::Input) -> Self;
    fn table(fixtures: &Fixtures) -> &[Self];
}

impl Record for User {
    const PATH: &'static str = "users";
    type Input = UserInput;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_input(id: u64, input: UserInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
        }
    }

    fn table(fixtures: &Fixtures) -> &[Self] {
        &fixtures.users
    }
}

impl Record for Post {
    const PATH: &'static str = "posts";
    type Input = PostInput;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_input(id: u64, input: PostInput) -> Self {
        Self {
            id,
            post_id: input.post_id,
            title: input.title,
            body: input.body,
        }
    }

    fn table(fixtures: &Fixtures) -> &[Self] {
        &fixtures.posts
    }
}

#[derive(Clone, Debug, Default)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
}

impl Fixtures {
    pub fn seeded() -> Self {
        let users = [
            ("Leanne Graham", "Sincere@april.biz"),
            ("Ervin Howell", "Shanna@melissa.tv"),
            ("Clementine Bauch", "Nathan@yesenia.net"),
        ]
        .into_iter()
        .zip(1..)
        .map(|((name, email), id)| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
        .collect();
        let posts = [
            ("sunt aut facere repellat", "quia et suscipit suscipit recusandae"),
            ("qui est esse", "est rerum tempore vitae sequi sint"),
            ("ea molestias quasi", "et iusto sed quo iure voluptatem"),
            ("eum et est occaecati", "ullam et saepe reiciendis voluptatem"),
        ]
        .into_iter()
        .zip(1..)
        .map(|((title, body), id)| Post {
            id,
            post_id: 1,
            title: title.to_string(),
            body: body.to_string(),
        })
        .collect();
        Self { users, posts }
    }
}

pub type Db = Arc<Fixtures>;

pub fn app() -> Router {
    app_with(Fixtures::seeded())
}

pub fn app_with(fixtures: Fixtures) -> Router {
    let db: Db = Arc::new(fixtures);
    Router::new()
        .merge(resource::<User>())
        .merge(resource::<Post>())
        .with_state(db)
}

fn resource<R: Record>() -> Router<Db> {
    Router::new()
        .route(&format!("/{}", R::PATH), get(list::<R>).post(create::<R>))
        .route(
            &format!("/{}/{{id}}", R::PATH),
            get(get_one::<R>).put(update::<R>).delete(delete::<R>),
        )
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn find<R: Record>(db: &Fixtures, id: u64) -> Option<&R> {
    R::table(db).iter().find(|record| record.id() == id)
}

async fn list<R: Record>(State(db): State<Db>) -> Json<Vec<R>> {
    Json(R::table(&db).to_vec())
}

async fn create<R: Record>(
    State(db): State<Db>,
    Json(input): Json<R::Input>,
) -> (StatusCode, Json<R>) {
    // Every create gets the same id: nothing is stored.
    let id = R::table(&db).len() as u64 + 1;
    tracing::debug!(resource = R::PATH, id, "create acknowledged");
    (StatusCode::CREATED, Json(R::from_input(id, input)))
}

async fn get_one<R: Record>(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<R>, StatusCode> {
    find::<R>(&db, id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update<R: Record>(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<R::Input>,
) -> Result<Json<R>, StatusCode> {
    if find::<R>(&db, id).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    tracing::debug!(resource = R::PATH, id, "update acknowledged");
    Ok(Json(R::from_input(id, input)))
}

async fn delete<R: Record>(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if find::<R>(&db, id).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    tracing::debug!(resource = R::PATH, id, "delete acknowledged");
    Ok(Json(serde_json::json!({})))
}
