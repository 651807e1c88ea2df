//! Same-origin access to the code-generation service.
//!
//! The page calls `/api/v1/edf/genai/codegenservices/*` on the host that served
//! it. Every request under that prefix, whatever its method or route, is
//! forwarded unchanged to the configured service:
//!
//! - `GET /get-classified-domain-product-map`: classification, domain and
//!   product options for the selection bar.
//! - `POST /transform-excel`: multipart upload of one workbook sheet, answered
//!   with the sheet as table definitions.
//! - `POST /generate-notebook`: JSON request payload, answered with the
//!   notebook text and its file name.
//!
//! Upstream status, content type and body are passed back as received. An
//! unreachable service becomes `502 Bad Gateway` with an `{"error": ...}` body.

use actix_web::web::{route, scope};
use actix_web::Scope;
use common::endpoints::API_BASE;

mod forward;

pub use forward::Relay;

/// Configures and returns the Actix scope relaying the code-generation API.
pub fn configure_routes() -> Scope {
    scope(API_BASE).default_service(route().to(forward::process))
}
