//! One-shot flash messages carried across the POST/redirect/GET cycle.
//!
//! The message is stored as URL-encoded JSON in a short-lived cookie, read
//! by the next page render and cleared in the same response.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

/// Cookie holding the pending flash message.
pub const FLASH_COOKIE: &str = "flash_message";

/// Flash message structure stored in cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Message type ("success" or "error"), used as a CSS class.
    #[serde(rename = "type")]
    pub message_type: String,
    /// The message content to display
    pub message: String,
}

impl FlashMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message_type: "error".to_string(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message_type: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.message_type == "error"
    }

    /// Serialize to URL-encoded JSON for cookie storage.
    pub fn to_cookie_value(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        urlencoding::encode(&json).into_owned()
    }

    /// Parses a cookie value written by [`FlashMessage::to_cookie_value`].
    pub fn from_cookie_value(value: &str) -> Option<Self> {
        let json = urlencoding::decode(value).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Builds the flash cookie.
    ///
    /// Cookie properties:
    /// - Path: / (accessible from any page)
    /// - SameSite: Lax (sent on navigation, not cross-site requests)
    /// - Max-Age: 60 (expires after 60 seconds as a safety net)
    pub fn to_cookie(&self) -> Cookie<'static> {
        Cookie::build((FLASH_COOKIE, self.to_cookie_value()))
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(60))
            .build()
    }

    /// Removes the pending message from the jar, returning it if it parses.
    pub fn take(jar: CookieJar) -> (CookieJar, Option<Self>) {
        let Some(value) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
            return (jar, None);
        };
        let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
        (jar, Self::from_cookie_value(&value))
    }
}

/// Create a redirect response with a flash message cookie.
pub fn redirect_with_flash(jar: CookieJar, url: &str, flash: FlashMessage) -> Response {
    (jar.add(flash.to_cookie()), Redirect::to(url)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::SET_COOKIE, HeaderMap, HeaderValue, StatusCode};

    #[test]
    fn test_error_flash_message() {
        let flash = FlashMessage::error("Please provide your email");
        assert_eq!(flash.message_type, "error");
        assert!(flash.is_error());
    }

    #[test]
    fn test_cookie_value_is_url_safe() {
        let flash = FlashMessage::success("Attendance confirmed! We'll see you there.");
        let value = flash.to_cookie_value();
        assert!(!value.contains(' '));
        assert!(!value.contains(';'));
        assert_eq!(FlashMessage::from_cookie_value(&value), Some(flash));
    }

    #[test]
    fn test_garbage_cookie_is_ignored() {
        assert_eq!(FlashMessage::from_cookie_value("not%20json"), None);
    }

    #[test]
    fn test_take_clears_cookie() {
        let flash = FlashMessage::error("nope");
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            HeaderValue::from_str(&format!("{FLASH_COOKIE}={}", flash.to_cookie_value())).unwrap(),
        );
        let jar = CookieJar::from_headers(&headers);

        let (jar, taken) = FlashMessage::take(jar);

        assert_eq!(taken, Some(flash));
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn test_redirect_sets_cookie() {
        let response = redirect_with_flash(CookieJar::new(), "/", FlashMessage::error("Test"));

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let header = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(header.starts_with("flash_message="));
        assert!(header.contains("Path=/"));
        assert!(header.contains("SameSite=Lax"));
        assert!(header.contains("Max-Age=60"));
    }
}
