use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that never rejects on content: a missing, empty or
/// malformed body yields `T::default()`.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        Ok(Self(serde_json::from_slice(&body).unwrap_or_default()))
    }
}
