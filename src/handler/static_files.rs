//! Static file serving module
//!
//! Resolves a prefix-stripped request path against the static root and
//! answers with the file's bytes or 404. Files are read at request time;
//! there is no cache and the root is not validated at startup.

use crate::http::{mime, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve `rest` (the request path with the route prefix already stripped)
/// from `root`. Anything that does not resolve to a regular file inside the
/// root gets a 404: missing files, directories, and traversal attempts.
pub async fn serve(root: &Path, rest: &str) -> Response<Full<Bytes>> {
    match load(root, rest).await {
        Some((content, content_type)) => response::file(content, content_type),
        None => response::not_found(),
    }
}

async fn load(root: &Path, rest: &str) -> Option<(Vec<u8>, &'static str)> {
    // Strip traversal segments before the join; trim the slash afterwards so
    // a stripped path cannot turn absolute and replace the root in join().
    let clean = rest.replace("..", "");
    let clean = clean.trim_start_matches('/');
    let candidate = root.join(clean);

    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static root not found or inaccessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    // Missing file is the common 404, not worth logging
    let candidate_canonical = candidate.canonicalize().ok()?;
    if !candidate_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {rest} -> {}",
            candidate_canonical.display()
        ));
        return None;
    }

    // Directories are never listed or indexed
    if !candidate_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&candidate_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                candidate_canonical.display()
            ));
            return None;
        }
    };

    let content_type =
        mime::content_type_for(candidate_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use std::path::PathBuf;

    fn test_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("tinyhttpd-{name}-{}", std::process::id()));
        let _ = std_fs::remove_dir_all(&root);
        std_fs::create_dir_all(&root).unwrap();
        root
    }

    #[tokio::test]
    async fn test_serves_existing_file() {
        let root = test_root("serve-file");
        std_fs::write(root.join("hello.txt"), "hi").unwrap();

        let (content, content_type) = load(&root, "hello.txt").await.unwrap();
        assert_eq!(content, b"hi");
        assert_eq!(content_type, "text/plain; charset=utf-8");
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let root = test_root("serve-missing");
        assert!(load(&root, "does-not-exist.txt").await.is_none());
    }

    #[tokio::test]
    async fn test_directory_is_none() {
        let root = test_root("serve-dir");
        std_fs::create_dir_all(root.join("subdir")).unwrap();
        assert!(load(&root, "subdir").await.is_none());
    }

    #[tokio::test]
    async fn test_missing_root_is_none() {
        let root = PathBuf::from("no-such-static-root");
        assert!(load(&root, "hello.txt").await.is_none());
    }

    #[tokio::test]
    async fn test_traversal_is_stripped() {
        let root = test_root("serve-traversal");
        std_fs::write(root.join("inside.txt"), "in").unwrap();

        // Escaping segments are removed, so this resolves (and fails) inside
        // the root instead of reaching a sibling directory.
        assert!(load(&root, "../serve-traversal/inside.txt").await.is_none());
        assert!(load(&root, "../../etc/passwd").await.is_none());
    }

    #[tokio::test]
    async fn test_serve_builds_404_response() {
        let root = test_root("serve-404");
        let response = serve(&root, "missing.txt").await;
        assert_eq!(response.status(), 404);
    }
}
