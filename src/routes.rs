// Route definitions and handlers

use bytes::{Buf, BufMut, Bytes, BytesMut};
use futures::{pin_mut, Stream, TryStreamExt};

use crate::error::{handle_rejection, BodyTooLarge, BodyUnreadable};
use crate::handlers::{self, AppState};
use warp::{Filter, Rejection};

/// Largest accepted `/ask` body
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn configure_routes(
    state: AppState,
) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
    // GET /
    let health = warp::path::end()
        .and(warp::get())
        .and_then(handlers::health_handler);

    // GET /hello?name=
    let hello = warp::path("hello")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<Vec<(String, String)>>())
        .and_then(handlers::hello_handler);

    // POST /ask
    let ask = warp::path("ask")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_state(state))
        .and(limited_body(MAX_BODY_BYTES))
        .and_then(handlers::ask_handler);

    // Combine routes
    health
        .or(hello)
        .or(ask)
        .recover(handle_rejection)
        .with(warp::log("ask_service::http"))
}

fn with_state(
    state: AppState,
) -> impl Filter<Extract = (AppState,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || state.clone())
}

/// Read the whole body, capped at `limit` bytes
///
/// A declared `content-length` above the cap is rejected before reading.
/// Bodies without one (chunked, or none at all) are counted while they
/// stream in, so bodiless posts still reach the handler and get the usual 400.
fn limited_body(limit: u64) -> impl Filter<Extract = (Bytes,), Error = Rejection> + Clone {
    warp::header::optional::<u64>("content-length")
        .and_then(move |length: Option<u64>| async move {
            match length {
                Some(length) if length > limit => Err(warp::reject::custom(BodyTooLarge)),
                _ => Ok(()),
            }
        })
        .untuple_one()
        .and(warp::body::stream())
        .and_then(move |stream| collect_limited(stream, limit))
}

/// Concatenate `stream`, failing with `BodyTooLarge` once it passes `limit`
pub(crate) async fn collect_limited<S, B, E>(stream: S, limit: u64) -> Result<Bytes, Rejection>
where
    S: Stream<Item = Result<B, E>>,
    B: Buf,
{
    pin_mut!(stream);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    let mut body = BytesMut::new();
    while let Some(chunk) = stream
        .try_next()
        .await
        .map_err(|_| warp::reject::custom(BodyUnreadable))?
    {
        if body.len().saturating_add(chunk.remaining()) > limit {
            return Err(warp::reject::custom(BodyTooLarge));
        }
        body.put(chunk);
    }
    Ok(body.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn chunks(sizes: &[usize]) -> impl Stream<Item = Result<Bytes, Infallible>> {
        let chunks: Vec<Result<Bytes, Infallible>> = sizes
            .iter()
            .map(|&n| Ok(Bytes::from(vec![b'x'; n])))
            .collect();
        futures::stream::iter(chunks)
    }

    #[tokio::test]
    async fn test_collect_limited_joins_chunks() {
        let body = collect_limited(chunks(&[3, 4, 5]), 12).await.unwrap();
        assert_eq!(body.len(), 12);
    }

    #[tokio::test]
    async fn test_collect_limited_empty_body() {
        let body = collect_limited(chunks(&[]), 12).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_collect_limited_stops_past_limit_without_length() {
        // No content-length is involved: the cap applies to streamed bytes
        let err = collect_limited(chunks(&[32 * 1024, 32 * 1024, 1]), MAX_BODY_BYTES)
            .await
            .unwrap_err();
        assert!(err.find::<BodyTooLarge>().is_some());
    }

    #[tokio::test]
    async fn test_collect_limited_read_failure() {
        let stream = futures::stream::iter(vec![
            Ok(Bytes::from_static(b"{\"question\"")),
            Err("connection reset"),
        ]);
        let err = collect_limited(stream, MAX_BODY_BYTES).await.unwrap_err();
        assert!(err.find::<BodyUnreadable>().is_some());
    }
}
