// tests/support/helpers.rs
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderValue, Request, StatusCode, header},
    response::Response,
};
use chrono::Duration;
use quill_blog::{
    application::{
        dto::AuthenticatedUser,
        ports::security::{CsrfIntent, CsrfTokenManager},
        services::{ApplicationServices, Repositories, ServiceSettings},
    },
    domain::{
        article::{ArticleContent, ArticleSlug, ArticleTitle, ArticleWriteRepository, NewArticle},
        user::{Email, NewUser, PasswordHash, Pseudonym, Roles, UserId, UserRepository},
    },
    infrastructure::{
        repositories::InMemoryContentStore, security::csrf::HmacCsrfTokenManager,
        util::DefaultSlugGenerator,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;

use super::mocks::{
    DummyTokenManager, InMemoryPhotoStorage, ScriptedCaptcha, SteppingClock, StrictPasswordHasher,
    fixed_now,
};

pub const CSRF_SECRET: &[u8] = b"test-csrf-secret-with-at-least-32-bytes!";
pub const PHOTO_MAX_BYTES: usize = 64 * 1024;
pub const ADMIN_PASSWORD: &str = "123456.Admin";

pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryContentStore>,
    pub photos: Arc<InMemoryPhotoStorage>,
    pub csrf: Arc<HmacCsrfTokenManager>,
    _photo_dir: TempDir,
}

impl TestApp {
    /// Application over an empty store.
    pub fn empty() -> Self {
        let store = Arc::new(InMemoryContentStore::new());
        let photos = Arc::new(InMemoryPhotoStorage::default());
        let csrf = Arc::new(HmacCsrfTokenManager::new(CSRF_SECRET).expect("csrf manager"));

        let services = Arc::new(ApplicationServices::new(
            Repositories {
                users: store.clone(),
                article_writes: store.clone(),
                article_reads: store.clone(),
                comments: store.clone(),
            },
            Arc::new(StrictPasswordHasher),
            Arc::new(DummyTokenManager),
            csrf.clone(),
            Arc::new(ScriptedCaptcha),
            photos.clone(),
            Arc::new(SteppingClock::new()),
            Arc::new(DefaultSlugGenerator),
            ServiceSettings {
                home_article_count: 3,
                photo_max_bytes: PHOTO_MAX_BYTES,
            },
        ));

        let photo_dir = tempfile::tempdir().expect("photo dir");
        let router = build_router(HttpState {
            services: Arc::clone(&services),
            photo_directory: photo_dir.path().to_path_buf(),
            photo_max_bytes: PHOTO_MAX_BYTES,
            allowed_origins: vec!["http://localhost:3000".into()],
        });

        Self {
            router,
            services,
            store,
            photos,
            csrf,
            _photo_dir: photo_dir,
        }
    }

    /// Application whose store already holds the administrator (id 1) and a
    /// plain reader (id 2) that the mock bearer tokens resolve to.
    pub async fn seeded() -> Self {
        let app = Self::empty();
        app.insert_user("admin@example.org", "Admin", Roles::admin())
            .await;
        app.insert_user("reader@example.org", "Reader", Roles::user())
            .await;
        app
    }

    pub async fn insert_user(&self, email: &str, pseudonym: &str, roles: Roles) -> UserId {
        let user = UserRepository::insert(
            self.store.as_ref(),
            NewUser {
                email: Email::new(email).unwrap(),
                pseudonym: Pseudonym::new(pseudonym).unwrap(),
                password_hash: PasswordHash::new(format!("hash::{ADMIN_PASSWORD}")).unwrap(),
                roles,
                registration_date: fixed_now(),
            },
        )
        .await
        .expect("insert user");
        user.id
    }

    /// Writes an article straight into the store, `minutes` after the fixed
    /// test instant.
    pub async fn insert_article(&self, title: &str, content: &str, minutes: i64) -> (i64, String) {
        let slug = slug::slugify(title);
        let article = ArticleWriteRepository::insert(
            self.store.as_ref(),
            NewArticle {
                title: ArticleTitle::new(title).unwrap(),
                slug: ArticleSlug::new(slug.clone()).unwrap(),
                content: ArticleContent::new(content).unwrap(),
                publication_date: fixed_now() + Duration::minutes(minutes),
                author_id: UserId::new(1).unwrap(),
            },
        )
        .await
        .expect("insert article");
        (i64::from(article.id), slug)
    }

    pub fn csrf_token(&self, intent: CsrfIntent, actor: &AuthenticatedUser) -> String {
        self.csrf.issue(intent, actor)
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let body = read_json(resp).await;
    assert_eq!(body["error"], expected_error);
}
