//! The compiled frontend, embedded into the binary by `build.rs`.
//!
//! Trunk names its wasm, js and css outputs with a content hash, so those
//! files are cached for good while `index.html` is always revalidated. A
//! path without an extension is a page route of the app and answers with
//! `index.html`; a missing file with an extension is a plain 404.

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;
use std::path::Path;

static FRONTEND_DIST: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX_HTML: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let requested = req.path().trim_start_matches('/');
    let path = if requested.is_empty() { INDEX_HTML } else { requested };

    if let Some(file) = FRONTEND_DIST.get_file(path) {
        return bundle_file(path, file.contents());
    }
    if Path::new(path).extension().is_some() {
        return HttpResponse::NotFound().body(format!("{path} is not part of the frontend bundle"));
    }
    match FRONTEND_DIST.get_file(INDEX_HTML) {
        Some(index) => bundle_file(INDEX_HTML, index.contents()),
        None => HttpResponse::NotFound().body("frontend bundle has no index.html"),
    }
}

fn bundle_file(path: &str, contents: &'static [u8]) -> HttpResponse {
    let cache = if path == INDEX_HTML {
        CacheControl(vec![CacheDirective::NoCache])
    } else {
        CacheControl(vec![
            CacheDirective::Public,
            CacheDirective::MaxAge(31_536_000),
            CacheDirective::Extension("immutable".to_string(), None),
        ])
    };

    HttpResponse::Ok()
        .content_type(from_path(path).first_or_octet_stream().as_ref())
        .insert_header(cache)
        .body(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn root_serves_index_html() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/history/last-run").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("<html"));
    }

    #[actix_web::test]
    async fn index_is_revalidated() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.headers().get(CACHE_CONTROL).unwrap(), "no-cache");
    }

    #[actix_web::test]
    async fn missing_asset_is_not_found() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/frontend-0a1b2c.wasm").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
