//! Response construction.
//!
//! # Responsibilities
//! - Wrap API results in a consistent JSON envelope
//! - Render the HTML shell around the active view
//!
//! # Envelope
//! ```text
//! { "code": 200, "success": true, "message": "", "result": { ... } }
//! ```
//! `success` is true exactly when `code` is 2xx.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

use crate::config::ShellConfig;
use crate::routing::RouteEntry;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub success: bool,
    pub message: String,
    pub result: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, result: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            success: status.is_success(),
            message: message.into(),
            result,
        }
    }

    pub fn ok(result: T) -> Self {
        Self::new(StatusCode::OK, "", Some(result))
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

const NOT_FOUND_BODY: &str = "<section class=\"not-found\"><h1>Not Found</h1><nav><a href=\"/\">Home</a></nav></section>";

/// Render the application shell with the matched view mounted, or the
/// not-found body when `route` is `None`.
pub fn render_shell(shell: &ShellConfig, route: Option<&RouteEntry>) -> String {
    let (route_name, body) = match route {
        Some(entry) => (entry.name.as_str(), entry.view.render()),
        None => ("", NOT_FOUND_BODY.to_string()),
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<div id=\"{mount}\" data-route=\"{route}\">{body}</div>\n</body>\n</html>\n",
        title = encode_text(&shell.title),
        mount = encode_double_quoted_attribute(&shell.mount_id),
        route = encode_double_quoted_attribute(route_name),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views;

    #[test]
    fn test_envelope_success_flag() {
        let ok = serde_json::to_value(ApiResponse::ok(serde_json::json!({ "content": "hello world!" }))).unwrap();
        assert_eq!(
            ok,
            serde_json::json!({
                "code": 200,
                "success": true,
                "message": "",
                "result": { "content": "hello world!" }
            })
        );

        let missing = serde_json::to_value(ApiResponse::<()>::error(StatusCode::NOT_FOUND, "No route")).unwrap();
        assert_eq!(missing["success"], false);
        assert_eq!(missing["code"], 404);
        assert!(missing["result"].is_null());
    }

    #[test]
    fn test_shell_mounts_view() {
        let entry = RouteEntry::new("/Counter", "Counter", views::counter());
        let html = render_shell(&ShellConfig::default(), Some(&entry));
        assert!(html.contains("<title>Vue App</title>"));
        assert!(html.contains("<div id=\"app\" data-route=\"Counter\"><section class=\"counter\">"));
    }

    #[test]
    fn test_shell_escapes_title() {
        let shell = ShellConfig {
            title: "<Tom & Jerry>".into(),
            mount_id: "app".into(),
        };
        let html = render_shell(&shell, None);
        assert!(html.contains("<title>&lt;Tom &amp; Jerry&gt;</title>"));
        assert!(html.contains("data-route=\"\"><section class=\"not-found\">"));
    }

    #[test]
    fn test_shell_escapes_attributes() {
        let shell = ShellConfig {
            title: "App".into(),
            mount_id: "a\"b".into(),
        };
        let html = render_shell(&shell, None);
        assert!(html.contains("<div id=\"a&quot;b\" data-route=\"\">"));
    }
}
