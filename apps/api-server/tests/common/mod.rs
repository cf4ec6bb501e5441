//! Integration test harness: app assembly, fixture generation, and the
//! seed/teardown lifecycle around each test case.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::Value;
use uuid::Uuid;

use api_server::config::AppConfig;
use api_server::handlers;
use api_server::state::AppState;
use blog_core::domain::{Author, BlogPost, PostDraft};
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostStore;

/// Number of fixture posts seeded before each test case.
pub const SEED_COUNT: usize = 10;

const TITLES: [&str; 3] = ["Clickbait #1", "Clickbait #2", "Clickbait #3"];

const FIRST_NAMES: [&str; 8] = [
    "Jane", "John", "Ada", "Linus", "Grace", "Alan", "Edsger", "Barbara",
];

const LAST_NAMES: [&str; 8] = [
    "Doe", "Smith", "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Kay",
];

const WORDS: [&str; 16] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "magna", "aliqua",
];

pub mod routes {
    use uuid::Uuid;

    pub const POSTS: &str = "/posts";

    pub fn post(id: Uuid) -> String {
        format!("/posts/{id}")
    }

    /// Legacy alias for deleting a post without the collection prefix.
    pub fn post_alias(id: Uuid) -> String {
        format!("/{id}")
    }
}

/// Generate one synthetic blog post draft: a random clickbait title,
/// random prose, and a random author pair.
pub fn generate_post() -> PostDraft {
    let mut rng = rand::thread_rng();

    let title = *TITLES.choose(&mut rng).expect("title list is non-empty");
    let first = *FIRST_NAMES.choose(&mut rng).expect("name list is non-empty");
    let last = *LAST_NAMES.choose(&mut rng).expect("name list is non-empty");

    let word_count = rng.gen_range(8..=20);
    let content = (0..word_count)
        .map(|_| *WORDS.choose(&mut rng).expect("word list is non-empty"))
        .collect::<Vec<_>>()
        .join(" ");

    PostDraft {
        title: title.to_string(),
        content,
        author: Author::new(first, last),
        created: Some(Utc::now()),
    }
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Parsed JSON body, or `Null` if the response has no JSON body.
    pub body: Value,
}

impl TestResponse {
    pub fn id(&self) -> Uuid {
        self.body["id"]
            .as_str()
            .expect("response body should contain 'id'")
            .parse()
            .expect("'id' should be a uuid")
    }
}

/// A test-scoped application over a fresh store.
///
/// Per test case the store moves through
/// `EMPTY -> SEEDED(10) -> mutated -> DROPPED`; every test owns its own
/// store, so the suite needs no cross-test locking.
pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    /// Connect the store (a test-scoped in-memory instance unless
    /// `TEST_DATABASE_URL` points at a real backend) and seed it with
    /// fixture data.
    pub async fn spawn_seeded() -> (Self, Vec<BlogPost>) {
        let config = AppConfig::from_test_env();
        let state = match config.database_url.as_deref() {
            Some(url) => AppState::new(Some(url)).await,
            None => AppState::with_store(Arc::new(InMemoryPostStore::new())),
        };
        let app = Self { state };
        let seeded = app.seed_posts().await;
        (app, seeded)
    }

    /// Bulk-insert [`SEED_COUNT`] generated posts, bypassing the API.
    pub async fn seed_posts(&self) -> Vec<BlogPost> {
        let drafts = (0..SEED_COUNT).map(|_| generate_post()).collect();
        self.state
            .posts
            .insert_many(drafts)
            .await
            .expect("Failed to seed posts")
    }

    /// Irreversibly erase the entire store content.
    pub async fn teardown(&self) {
        self.state
            .posts
            .clear()
            .await
            .expect("Failed to drop the store");
    }

    /// Direct store count, independent of the HTTP surface.
    pub async fn store_count(&self) -> u64 {
        self.state
            .posts
            .count()
            .await
            .expect("Failed to count posts")
    }

    /// A post picked straight from the store, for id-based test input.
    pub async fn any_post(&self) -> BlogPost {
        self.state
            .posts
            .find_all()
            .await
            .expect("Failed to query posts")
            .into_iter()
            .next()
            .expect("store should be seeded")
    }

    async fn service(
        &self,
    ) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
    {
        test::init_service(
            App::new()
                .app_data(web::Data::new(self.state.clone()))
                .configure(handlers::configure_routes),
        )
        .await
    }

    async fn send(&self, req: Request) -> TestResponse {
        let app = self.service().await;
        let res = test::call_service(&app, req).await;
        let status = res.status().as_u16();
        let bytes = test::read_body(res).await;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse { status, body }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(test::TestRequest::get().uri(path).to_request())
            .await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        self.send(
            test::TestRequest::post()
                .uri(path)
                .set_json(body)
                .to_request(),
        )
        .await
    }

    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        self.send(
            test::TestRequest::put()
                .uri(path)
                .set_json(body)
                .to_request(),
        )
        .await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.send(test::TestRequest::delete().uri(path).to_request())
            .await
    }
}

/// Keep the generator honest: titles come from the fixed set and the
/// author pair is drawn from the fixture name lists.
#[core::prelude::v1::test]
fn generated_posts_use_the_fixture_pools() {
    for _ in 0..32 {
        let draft = generate_post();
        assert!(TITLES.contains(&draft.title.as_str()));
        assert!(FIRST_NAMES.contains(&draft.author.first_name.as_str()));
        assert!(LAST_NAMES.contains(&draft.author.last_name.as_str()));
        assert!(!draft.content.is_empty());
        assert!(draft.created.is_some());
    }
}
