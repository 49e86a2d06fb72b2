//! HTTP method override for browser form submissions.

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

/// Query parameter carrying the desired verb, e.g. `?_method=PUT`.
const OVERRIDE_PARAM: &str = "_method";

/// Rewrite `POST` requests carrying `?_method=PUT` or `?_method=DELETE`
/// to the requested verb.
///
/// HTML forms can only submit GET and POST; the edit and delete forms
/// post through this override to reach the PUT and DELETE routes. Any
/// other override value is ignored and the request stays a POST.
///
/// Must be layered around the router (not on it): the rewrite has to
/// happen before routing for the new verb to take effect.
pub async fn method_override(mut req: Request, next: Next) -> Response {
    if req.method() == Method::POST {
        if let Some(wanted) = override_from_query(req.uri().query()) {
            *req.method_mut() = wanted;
        }
    }
    next.run(req).await
}

fn override_from_query(query: Option<&str>) -> Option<Method> {
    let raw = query?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == OVERRIDE_PARAM).then_some(value)
    })?;
    match raw.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
