#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::DateTime;
use serde_json::Value;
use tower::ServiceExt;

use course_library_api::api::{create_router_with_state, ApiSettings, AppState};
use course_library_api::domain::author::{Author, AuthorId, AuthorRepository};
use course_library_api::domain::course::{Course, CourseId, CourseQuery, CourseRepository};
use course_library_api::domain::{Cache, DomainError, PaginationFilter};
use course_library_api::infrastructure::author::{
    AuthorService, CreateAuthorRequest, StorageAuthorRepository,
};
use course_library_api::infrastructure::cache::ResponseCacheService;
use course_library_api::infrastructure::course::{
    CourseFields, CourseService, StorageCourseRepository,
};
use course_library_api::infrastructure::storage::InMemoryStorage;

pub const BASE: &str = "http://localhost";

/// Course repository that counts reads
#[derive(Debug)]
pub struct CountingCourses {
    inner: Arc<dyn CourseRepository>,
    reads: Arc<AtomicUsize>,
}

#[async_trait]
impl CourseRepository for CountingCourses {
    async fn get(
        &self,
        author_id: &AuthorId,
        course_id: &CourseId,
    ) -> Result<Option<Course>, DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(author_id, course_id).await
    }

    async fn list(&self, query: &CourseQuery) -> Result<Vec<Course>, DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.list(query).await
    }

    async fn create(&self, course: Course) -> Result<Course, DomainError> {
        self.inner.create(course).await
    }

    async fn update(&self, course: Course) -> Result<Course, DomainError> {
        self.inner.update(course).await
    }

    async fn delete(&self, course_id: &CourseId) -> Result<bool, DomainError> {
        self.inner.delete(course_id).await
    }

    async fn delete_for_author(&self, author_id: &AuthorId) -> Result<usize, DomainError> {
        self.inner.delete_for_author(author_id).await
    }
}

/// Cache whose every operation fails
#[derive(Debug, Default)]
pub struct UnavailableCache;

#[async_trait]
impl Cache for UnavailableCache {
    async fn get_raw(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::cache("connection refused"))
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), DomainError> {
        Err(DomainError::cache("connection refused"))
    }
}

pub struct TestApp {
    pub router: Router,
    pub authors: Arc<AuthorService>,
    pub course_reads: Arc<AtomicUsize>,
}

impl TestApp {
    pub fn new(cache: Option<Arc<dyn Cache>>, ttl: Duration) -> Self {
        Self::with_public_base_url(cache, ttl, Some(BASE))
    }

    /// App that builds links from the request's `Host` and forwarding headers
    pub fn without_public_base_url(cache: Option<Arc<dyn Cache>>, ttl: Duration) -> Self {
        Self::with_public_base_url(cache, ttl, None)
    }

    fn with_public_base_url(
        cache: Option<Arc<dyn Cache>>,
        ttl: Duration,
        public_base_url: Option<&str>,
    ) -> Self {
        let reads = Arc::new(AtomicUsize::new(0));

        let authors: Arc<dyn AuthorRepository> = Arc::new(StorageAuthorRepository::new(
            Arc::new(InMemoryStorage::<Author>::new()),
        ));
        let courses: Arc<dyn CourseRepository> = Arc::new(CountingCourses {
            inner: Arc::new(StorageCourseRepository::new(Arc::new(
                InMemoryStorage::<Course>::new(),
            ))),
            reads: reads.clone(),
        });

        let author_service = Arc::new(AuthorService::new(authors.clone(), courses.clone()));
        let course_service = Arc::new(CourseService::new(authors, courses));

        let mut state = AppState::new(author_service.clone(), course_service).with_settings(
            ApiSettings {
                public_base_url: public_base_url.map(str::to_string),
                default_page: PaginationFilter::new(1, 10),
                cache_ttl: ttl,
            },
        );

        if let Some(cache) = cache {
            state = state.with_response_cache(Arc::new(ResponseCacheService::new(cache)));
        }

        Self {
            router: create_router_with_state(state, None, &[]),
            authors: author_service,
            course_reads: reads,
        }
    }

    pub fn uncached() -> Self {
        Self::new(None, Duration::from_secs(600))
    }

    pub fn reads(&self) -> usize {
        self.course_reads.load(Ordering::SeqCst)
    }

    /// Creates an author with `course_count` courses titled "Course 01", "Course 02", ...
    pub async fn seed_author(&self, main_category: &str, course_count: usize) -> String {
        let courses = (1..=course_count)
            .map(|n| CourseFields {
                title: format!("Course {:02}", n),
                description: Some(format!("Description of course {}", n)),
            })
            .collect();

        let author = self
            .authors
            .create(CreateAuthorRequest {
                first_name: "Jaimy".to_string(),
                last_name: format!("Johnson {}", main_category),
                date_of_birth: DateTime::parse_from_rfc3339("1980-07-23T00:00:00+00:00").unwrap(),
                main_category: main_category.to_string(),
                courses,
            })
            .await
            .unwrap();

        author.id().to_string()
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            headers,
            body: body.to_vec(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn get_with_header(&self, uri: &str, name: &str, value: &str) -> TestResponse {
        self.send(Request::get(uri).header(name, value).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> TestResponse {
        let content_type = if method == "PATCH" {
            "application/json-patch+json"
        } else {
            "application/json"
        };

        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", content_type)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Cache key of a request made against [`BASE`]
pub fn entry_key(path_and_query: &str) -> String {
    format!("{}{}", BASE, path_and_query)
}

/// Polls until the spawned cache write for `key` has landed
pub async fn wait_for_entry(cache: &Arc<dyn Cache>, key: &str) {
    for _ in 0..200 {
        if cache.exists(key).await.unwrap_or(false) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("cache entry '{}' was never written", key);
}
