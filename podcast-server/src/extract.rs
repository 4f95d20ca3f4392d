//! Request extractors

use crate::error::ApiError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that never rejects a missing or malformed body
///
/// Unlike [`axum::Json`], this ignores `Content-Type` and treats anything that
/// is not a JSON object as `{}`. A field present with the wrong type is
/// still rejected with 400.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = podcast_core::parse_body(&bytes)?;
        Ok(Self(value))
    }
}
