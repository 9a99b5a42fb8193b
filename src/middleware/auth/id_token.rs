//! ID token 検証 → LineIdentity を extensions / LINE* ヘッダーに入れる
//!
//! - `Authorization: Bearer <id token>` を verify-id-token で検証
//! - 成功時: `LINEUserID` / `LINEDisplayName` / `LINEPictureURL` / `LINEEmail`
//! - 失敗時: 401 (body なし)。next は呼ばない

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::LineIdentity;

use super::authorizer::Authorizer;
use super::identity::propagate;
use super::rejection::AuthRejection;

/// Router 全体に ID token 認証を掛ける。
///
/// 例：
/// ```ignore
/// let authorizer = Authorizer::from_client(LineClient::new(config)?);
/// let app = middleware::auth::id_token::apply(routes, authorizer);
/// ```
pub fn apply<S>(router: Router<S>, authorizer: Authorizer) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(authorizer, id_token_middleware))
}

pub async fn id_token_middleware(
    State(authorizer): State<Authorizer>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthRejection> {
    let claims = match authorizer.authorize_id_token(req.headers()).await {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(error = %err, "id token authorization failed");
            return Err(err);
        }
    };

    if let Err(err) = propagate(&mut req, LineIdentity::from(&claims)) {
        tracing::warn!(error = %err, sub = %claims.sub, "failed to propagate line identity");
        return Err(err);
    }
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use axum::{Extension, body::to_bytes, http::StatusCode, routing::get};
    use tower::ServiceExt;

    use super::*;
    use crate::middleware::auth::authorizer::tests::{FakeLine, claims};
    use crate::services::line::IdTokenClaims;

    fn app(fake: Arc<FakeLine>, hits: Arc<AtomicUsize>) -> Router {
        let routes = Router::new().route(
            "/",
            get(move |req: Request<Body>| {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    let h = req.headers();
                    format!(
                        "{}|{}|{}|{}",
                        h["LINEUserID"].to_str().unwrap(),
                        h["LINEDisplayName"].to_str().unwrap(),
                        h["LINEPictureURL"].to_str().unwrap(),
                        h["LINEEmail"].to_str().unwrap(),
                    )
                }
            }),
        );
        apply(routes, Authorizer::new("expected", fake))
    }

    fn request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = authorization {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn verified_token_reaches_handler_once_with_headers() {
        let fake = Arc::new(FakeLine {
            claims: Some(claims("U123", Some("Alice"))),
            ..Default::default()
        });
        let hits = Arc::new(AtomicUsize::new(0));

        let res = app(fake.clone(), hits.clone())
            .oneshot(request(Some("Bearer id-token")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"U123|Alice||");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(fake.calls(), 1);
    }

    #[tokio::test]
    async fn claims_are_available_as_extensions() {
        let fake = Arc::new(FakeLine {
            claims: Some(claims("U123", Some("Alice"))),
            ..Default::default()
        });
        let routes = Router::new().route(
            "/",
            get(
                |Extension(claims): Extension<IdTokenClaims>,
                 Extension(identity): Extension<LineIdentity>| async move {
                    format!("{}:{}", claims.iss, identity.user_id)
                },
            ),
        );

        let res = apply(routes, Authorizer::new("expected", fake))
            .oneshot(request(Some("Bearer id-token")))
            .await
            .unwrap();

        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"https://access.line.me:U123");
    }

    #[tokio::test]
    async fn missing_header_is_rejected_without_remote_call() {
        let fake = Arc::new(FakeLine {
            claims: Some(claims("U123", Some("Alice"))),
            ..Default::default()
        });
        let hits = Arc::new(AtomicUsize::new(0));

        let res = app(fake.clone(), hits.clone())
            .oneshot(request(None))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(to_bytes(res.into_body(), usize::MAX).await.unwrap().is_empty());
        assert_eq!(fake.calls(), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn malformed_header_is_rejected_as_unauthorized() {
        let fake = Arc::new(FakeLine::default());
        let hits = Arc::new(AtomicUsize::new(0));

        let res = app(fake.clone(), hits.clone())
            .oneshot(request(Some("Token id-token")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(fake.calls(), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn verification_failure_never_reaches_handler() {
        let fake = Arc::new(FakeLine::default());
        let hits = Arc::new(AtomicUsize::new(0));

        let res = app(fake.clone(), hits.clone())
            .oneshot(request(Some("Bearer expired")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(fake.calls(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn client_supplied_line_headers_are_cleared() {
        let fake = Arc::new(FakeLine {
            claims: Some(claims("U123", Some("Alice"))),
            ..Default::default()
        });
        let routes = Router::new().route(
            "/",
            get(|req: Request<Body>| async move {
                let h = req.headers();
                format!(
                    "{}|{}",
                    h["LINEUserID"].to_str().unwrap(),
                    h.get("LINEStatusMessage")
                        .map(|v| v.to_str().unwrap().to_string())
                        .unwrap_or_else(|| "<none>".to_string()),
                )
            }),
        );

        let req = Request::builder()
            .uri("/")
            .header("Authorization", "Bearer t")
            .header("LINEUserID", "Uattacker")
            .header("LINEStatusMessage", "forged status")
            .body(Body::empty())
            .unwrap();

        let res = apply(routes, Authorizer::new("expected", fake))
            .oneshot(req)
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"U123|<none>");
    }
}
