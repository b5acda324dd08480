//! Flash messages carried across a redirect.
//!
//! A flash lives for exactly one request: the write handler sets the
//! cookie alongside its redirect, and the next rendered page consumes
//! and removes it. The payload is JSON, URL-encoded to stay within the
//! cookie value grammar.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};

use crate::errors::FieldErrors;

/// Name of the flash cookie
pub const FLASH_COOKIE: &str = "flash";

/// One status entry handed to the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Flash {
    Success { message: String },
    Error { message: String },
    FieldErrors { errors: FieldErrors },
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Flash::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Flash::Error {
            message: message.into(),
        }
    }

    pub fn field_errors(errors: FieldErrors) -> Self {
        Flash::FieldErrors { errors }
    }

    /// Store this flash in the jar, replacing any pending entry.
    pub fn set(self, jar: CookieJar) -> CookieJar {
        jar.add(self.into_cookie())
    }

    /// Consume the pending flash, removing its cookie from the jar.
    /// Pages without a pending flash leave the jar untouched.
    pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
        let flash = match jar.get(FLASH_COOKIE) {
            Some(cookie) => Self::from_cookie(cookie),
            None => return (jar, None),
        };
        let jar = jar.remove(Self::removal_cookie());
        (jar, flash)
    }

    fn into_cookie(self) -> Cookie<'static> {
        let payload = serde_json::to_string(&self).unwrap_or_default();
        let mut cookie = Cookie::new(FLASH_COOKIE, urlencoding::encode(&payload).into_owned());
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie
    }

    fn from_cookie(cookie: &Cookie<'_>) -> Option<Flash> {
        let decoded = urlencoding::decode(cookie.value()).ok()?;
        serde_json::from_str(&decoded).ok()
    }

    fn removal_cookie() -> Cookie<'static> {
        let mut cookie = Cookie::new(FLASH_COOKIE, "");
        cookie.set_path("/");
        cookie
    }
}
