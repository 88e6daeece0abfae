//! Request routing dispatch module
//!
//! An explicit router value constructed at startup and shared (by `Arc`)
//! with every connection task. No global route registry: tests build their
//! own router per server instance.

use crate::handler::static_files;
use crate::http::response;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Body of the greeting catch-all response.
pub const GREETING: &str = "Welcome to my website!";

/// What a matched route dispatches to.
#[derive(Debug, Clone)]
pub enum RouteHandler {
    /// Serve files from a directory, with the matched prefix stripped from
    /// the request path before resolution.
    StaticDir { root: PathBuf },
    /// Respond with the fixed greeting. Cannot fail.
    Greeting,
}

/// Prefix-matching router with a catch-all fallback.
///
/// Matching is deterministic longest-prefix: registered prefixes are kept
/// sorted longest-first and the first one the path starts with wins. A path
/// matching no prefix falls through to the greeting, so `/` and arbitrary
/// unmatched paths all greet. No method filtering: every HTTP method reaches
/// the same handlers.
pub struct Router {
    routes: Vec<(String, RouteHandler)>,
    fallback: RouteHandler,
}

impl Router {
    /// Build the standard route table: `/static/` served from `static_root`,
    /// everything else greeted.
    pub fn new(static_root: impl Into<PathBuf>) -> Self {
        let mut router = Self {
            routes: Vec::new(),
            fallback: RouteHandler::Greeting,
        };
        router.register(
            "/static/",
            RouteHandler::StaticDir {
                root: static_root.into(),
            },
        );
        router
    }

    /// Register a prefix route. Longer prefixes win over shorter ones
    /// regardless of registration order.
    pub fn register(&mut self, prefix: &str, handler: RouteHandler) {
        self.routes.push((prefix.to_string(), handler));
        self.routes.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    fn match_route(&self, path: &str) -> (&str, &RouteHandler) {
        self.routes
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix.as_str()))
            .map_or(("", &self.fallback), |(prefix, handler)| {
                (prefix.as_str(), handler)
            })
    }

    /// Dispatch a request path to its handler and produce the response.
    pub async fn dispatch(&self, path: &str) -> Response<Full<Bytes>> {
        match self.match_route(path) {
            (prefix, RouteHandler::StaticDir { root }) => {
                let rest = &path[prefix.len()..];
                static_files::serve(root, rest).await
            }
            (_, RouteHandler::Greeting) => response::text(GREETING),
        }
    }
}

/// Main entry point for HTTP request handling; the `service_fn` target.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    router: Arc<Router>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    logger::log_request(req.method(), req.uri().path(), req.version(), &peer_addr);

    let response = router.dispatch(req.uri().path()).await;

    let size = response.body().size_hint().exact().unwrap_or(0);
    logger::log_response(response.status(), size);

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_greets() {
        let router = Router::new("does-not-exist");
        let response = router.dispatch("/").await;
        assert_eq!(response.status(), 200);
        assert_eq!(body_text(response).await, GREETING);
    }

    #[tokio::test]
    async fn test_unmatched_path_greets() {
        let router = Router::new("does-not-exist");
        let response = router.dispatch("/anything/not/static").await;
        assert_eq!(response.status(), 200);
        assert_eq!(body_text(response).await, GREETING);
    }

    #[tokio::test]
    async fn test_static_prefix_reaches_file_responder() {
        // Root does not exist, so the static handler answers 404 while the
        // greeting would have answered 200: the path went to the right place.
        let router = Router::new("does-not-exist");
        let response = router.dispatch("/static/missing.txt").await;
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_static_without_trailing_slash_greets() {
        let router = Router::new("does-not-exist");
        let response = router.dispatch("/static").await;
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let mut router = Router::new("outer-root");
        router.register(
            "/static/deep/",
            RouteHandler::StaticDir {
                root: PathBuf::from("inner-root"),
            },
        );
        let (prefix, _) = router.match_route("/static/deep/file.txt");
        assert_eq!(prefix, "/static/deep/");
        let (prefix, _) = router.match_route("/static/file.txt");
        assert_eq!(prefix, "/static/");
    }
}
