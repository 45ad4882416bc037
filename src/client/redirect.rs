// File: ./src/client/redirect.rs
use http::Uri;

pub const MAX_REDIRECTS: usize = 5;

/// Resolves a `Location` header against the URI that produced it.
///
/// Scheme and authority are inherited when the location is relative.
pub fn resolve_location(current: &Uri, location: &str) -> Option<Uri> {
    let parsed = location.parse::<Uri>().ok()?;
    let parts = parsed.into_parts();
    let mut builder = Uri::builder();

    if let Some(scheme) = parts.scheme {
        builder = builder.scheme(scheme);
    } else if let Some(s) = current.scheme() {
        builder = builder.scheme(s.clone());
    }

    if let Some(authority) = parts.authority {
        builder = builder.authority(authority);
    } else if let Some(a) = current.authority() {
        builder = builder.authority(a.clone());
    }

    match parts.path_and_query {
        Some(pq) => builder = builder.path_and_query(pq),
        None => builder = builder.path_and_query("/"),
    }

    builder.build().ok()
}
