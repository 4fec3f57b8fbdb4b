//! Extract and validate student input: the `:id` path segment and the JSON body.

use crate::error::AppError;
use crate::model::NewStudent;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{request::Parts, StatusCode},
};
use serde::Deserialize;

/// Numeric student id from the `:id` path segment. Non-numeric ids are rejected with 400.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudentId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;
        parse_id(&raw).map(StudentId)
    }
}

pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| invalid_id())
}

fn invalid_id() -> AppError {
    AppError::Validation("invalid student id".into())
}

#[derive(Deserialize)]
struct StudentBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    grade: Option<i64>,
}

/// JSON body of create/update. The content type is not checked; any body that
/// is not a JSON object with a non-empty `name` is rejected with 400.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentPayload(pub NewStudent);

#[async_trait]
impl<S> FromRequest<S> for StudentPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(e.body_text())
                } else {
                    AppError::Validation(e.body_text())
                }
            })?;
        parse_body(&bytes).map(StudentPayload)
    }
}

pub fn parse_body(bytes: &[u8]) -> Result<NewStudent, AppError> {
    let body: StudentBody =
        serde_json::from_slice(bytes).map_err(|e| AppError::Validation(format!("invalid body: {}", e)))?;
    let name = body
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("name is required".into()))?;
    Ok(NewStudent::new(name, body.grade.unwrap_or(0)))
}

/// `?name=` filter for listing. The first `name` wins when repeated; other
/// parameters are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameFilter(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for NameFilter
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(NameFilter(first_name(pairs)))
    }
}

fn first_name(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(k, _)| k == "name")
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("4.2").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id(" 5").is_err());
        assert!(parse_id("5 ").is_err());
    }

    #[test]
    fn body_requires_name() {
        assert!(parse_body(br#"{"grade": 90}"#).is_err());
        assert!(parse_body(br#"{"name": "", "grade": 90}"#).is_err());
        assert!(parse_body(br#"{"name": null}"#).is_err());
    }

    #[test]
    fn grade_defaults_to_zero_and_is_not_range_checked() {
        let s = parse_body(br#"{"name": "Ann"}"#).unwrap();
        assert_eq!(s, NewStudent::new("Ann", 0));
        let s = parse_body(br#"{"name": "Ann", "grade": 250}"#).unwrap();
        assert_eq!(s.grade, 250);
    }

    #[test]
    fn null_grade_reads_as_zero() {
        let s = parse_body(br#"{"name": "Ann", "grade": null}"#).unwrap();
        assert_eq!(s, NewStudent::new("Ann", 0));
    }

    #[test]
    fn first_name_param_wins() {
        let pairs = vec![
            ("grade".to_string(), "9".to_string()),
            ("name".to_string(), "Ann".to_string()),
            ("name".to_string(), "Ben".to_string()),
        ];
        assert_eq!(first_name(pairs), Some("Ann".to_string()));
        assert_eq!(first_name(vec![("name".into(), String::new())]), None);
        assert_eq!(first_name(Vec::new()), None);
    }

    #[test]
    fn rejects_malformed_json_and_wrong_types() {
        assert!(parse_body(b"not json").is_err());
        assert!(parse_body(br#"["Ann"]"#).is_err());
        assert!(parse_body(br#"{"name": "Ann", "grade": "A"}"#).is_err());
    }

    #[test]
    fn ignores_client_supplied_id() {
        let s = parse_body(br#"{"id": 999, "name": "Ann", "grade": 80}"#).unwrap();
        assert_eq!(s, NewStudent::new("Ann", 80));
    }
}
