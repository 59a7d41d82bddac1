//! Swagger 2.0 description of the HTTP surface.
//!
//! A stable, hand-assembled document for the single `/icon/{searchTerm}`
//! route, served verbatim at `/api-docs.json`. Matches the shape the
//! original service generated from its route annotations.

use serde_json::{json, Value};

/// Builds the API-description document.
#[must_use]
pub fn api_docs() -> Value {
    json!({
        "swagger": "2.0",
        "info": {
            "title": "icon-server",
            "version": "1.0.0"
        },
        "basePath": "/icon-server",
        "paths": {
            "/icon/{searchTerm}": {
                "get": {
                    "description": "Get a suggested icon (URL) for the search term.",
                    "produces": ["application/json"],
                    "parameters": [
                        {
                            "name": "searchTerm",
                            "description": "the search term to find an icon",
                            "in": "path",
                            "required": true,
                            "type": "string"
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Successful request"
                        },
                        "500": {
                            "description": "Error fetching suggested icon from Noun Project"
                        }
                    }
                }
            }
        },
        "definitions": {},
        "responses": {},
        "parameters": {},
        "securityDefinitions": {},
        "tags": []
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_describes_the_icon_route() {
        let docs = api_docs();

        assert_eq!(docs["swagger"], "2.0");
        assert_eq!(docs["info"]["title"], "icon-server");
        assert_eq!(docs["basePath"], "/icon-server");

        let route = &docs["paths"]["/icon/{searchTerm}"]["get"];
        assert_eq!(route["parameters"][0]["name"], "searchTerm");
        assert_eq!(route["parameters"][0]["in"], "path");
        assert!(route["responses"].get("200").is_some());
        assert!(route["responses"].get("500").is_some());
    }
}
