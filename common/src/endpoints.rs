//! Paths of the code-generation service, relative to the page origin.

/// Prefix shared by every code-generation route.
pub const API_BASE: &str = "/api/v1/edf/genai/codegenservices";

pub const CLASSIFIED_MAP: &str = "/get-classified-domain-product-map";
pub const TRANSFORM_EXCEL: &str = "/transform-excel";
pub const GENERATE_NOTEBOOK: &str = "/generate-notebook";

/// Joins a route onto [`API_BASE`].
pub fn api_path(route: &str) -> String {
    format!("{}{}", API_BASE, route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_routes_onto_base() {
        assert_eq!(
            api_path(GENERATE_NOTEBOOK),
            "/api/v1/edf/genai/codegenservices/generate-notebook"
        );
    }
}
