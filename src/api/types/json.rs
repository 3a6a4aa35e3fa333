//! JSON and query extractors that report rejections in the API error format

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, FromRequest, FromRequestParts, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor and responder
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(json_rejection_error(&rejection)),
        }
    }
}

fn json_rejection_error(rejection: &JsonRejection) -> ApiError {
    let (status, message) = match rejection {
        JsonRejection::JsonDataError(err) => {
            (err.status(), format!("Invalid JSON data: {}", err.body_text()))
        }
        JsonRejection::JsonSyntaxError(err) => {
            (err.status(), format!("Invalid JSON syntax: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(err) => (
            err.status(),
            "Missing Content-Type header. Expected 'application/json'.".to_string(),
        ),
        other => (other.status(), "Invalid JSON request".to_string()),
    };

    let mut error = ApiError::bad_request(message).with_code("json_parse_error");
    error.status = status;
    error
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

/// Query string extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Query(value)),
            Err(rejection) => Err(query_rejection_error(&rejection)),
        }
    }
}

fn query_rejection_error(rejection: &QueryRejection) -> ApiError {
    ApiError::bad_request(format!("Invalid query string: {}", rejection.body_text()))
        .with_code("query_parse_error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Paging {
        #[serde(rename = "pageNumber")]
        page_number: Option<i32>,
    }

    #[tokio::test]
    async fn test_json_syntax_error_is_api_error() {
        let request = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let result = Json::<serde_json::Value>::from_request(request, &()).await;
        let error = result.unwrap_err();

        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.response.error.code.as_deref(), Some("json_parse_error"));
    }

    #[tokio::test]
    async fn test_json_patch_content_type_is_accepted() {
        let request = Request::builder()
            .header(header::CONTENT_TYPE, "application/json-patch+json")
            .body(Body::from("[]"))
            .unwrap();

        let Json(value) = Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap();

        assert_eq!(value, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_query_rejection_is_bad_request() {
        let (mut parts, _) = Request::builder()
            .uri("/api/authors?pageNumber=abc")
            .body(Body::empty())
            .unwrap()
            .into_parts();

        let result = Query::<Paging>::from_request_parts(&mut parts, &()).await;

        assert_eq!(result.unwrap_err().status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_query_parses() {
        let (mut parts, _) = Request::builder()
            .uri("/api/authors?pageNumber=3")
            .body(Body::empty())
            .unwrap()
            .into_parts();

        let Query(paging) = Query::<Paging>::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(paging.page_number, Some(3));
    }
}
