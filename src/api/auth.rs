//! Login and logout against the photo backend.
//!
//! `POST /session` with `{"username": "..."}` answers with the user's
//! identifier as a JSON string (201 for a new user, 200 otherwise). That
//! identifier is the session token.

use gloo_net::http::Request;
use serde::Serialize;

use crate::config::SESSION_ENDPOINT;
use crate::core::SessionStore;
use crate::core::error::{LoginError, SessionError};
use crate::models::Session;
use crate::utils::log;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
}

/// Trim and check a username before sending it.
pub fn validate_username(username: &str) -> Result<&str, LoginError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(LoginError::InvalidUsername);
    }
    Ok(username)
}

/// Full URL of the login endpoint.
pub fn session_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SESSION_ENDPOINT)
}

/// `Authorization` header value for an active session.
pub fn bearer_header(session: &Session) -> Option<String> {
    session.token().map(|token| format!("Bearer {}", token))
}

/// Log in as `username` and persist the returned identifier.
///
/// Returns the stored token. Any failed attempt clears a stale token.
pub async fn login<S: SessionStore>(
    store: &S,
    base_url: &str,
    username: &str,
) -> Result<String, LoginError> {
    let reply = match validate_username(username) {
        Ok(username) => send_login(base_url, username).await,
        Err(e) => Err(e),
    };
    let token = settle_login(store, reply)?;
    log::debug(&format!("session started for '{}'", username.trim()));
    Ok(token)
}

/// POST the username; yields the response status and raw body.
async fn send_login(base_url: &str, username: &str) -> Result<(u16, String), LoginError> {
    let response = Request::post(&session_url(base_url))
        .json(&LoginRequest { username })
        .map_err(|e| LoginError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| LoginError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| LoginError::Network(e.to_string()))?;
    Ok((status, body))
}

/// Turn a login reply into a stored session token.
///
/// Accepts any 2xx status with a non-empty JSON string body. On failure
/// the store is cleared; a failing clear is logged and the login error wins.
pub fn settle_login<S: SessionStore>(
    store: &S,
    reply: Result<(u16, String), LoginError>,
) -> Result<String, LoginError> {
    let result = reply.and_then(|(status, body)| {
        let token = parse_login_reply(status, &body)?;
        store.store(&token)?;
        Ok(token)
    });

    if result.is_err()
        && let Err(e) = store.clear()
    {
        log::warn(&format!("could not clear stale session: {}", e));
    }
    result
}

fn parse_login_reply(status: u16, body: &str) -> Result<String, LoginError> {
    if !(200..300).contains(&status) {
        return Err(LoginError::Http(status));
    }
    let token: String =
        serde_json::from_str(body).map_err(|e| LoginError::Decode(e.to_string()))?;
    if token.is_empty() {
        return Err(LoginError::Decode("empty identifier".to_string()));
    }
    Ok(token)
}

/// Drop the session token.
pub fn logout<S: SessionStore>(store: &S) -> Result<(), SessionError> {
    store.clear()?;
    log::debug("session cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemorySessionStore;

    fn reply(status: u16, body: &str) -> Result<(u16, String), LoginError> {
        Ok((status, body.to_string()))
    }

    #[test]
    fn test_validate_username() {
        assert_eq!(validate_username("  maria "), Ok("maria"));
        assert_eq!(validate_username(""), Err(LoginError::InvalidUsername));
        assert_eq!(validate_username("   "), Err(LoginError::InvalidUsername));
    }

    #[test]
    fn test_session_url() {
        assert_eq!(
            session_url("http://localhost:3000"),
            "http://localhost:3000/session"
        );
        assert_eq!(session_url("https://api.example/"), "https://api.example/session");
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(
            bearer_header(&Session::with_token("abc123")),
            Some("Bearer abc123".to_string())
        );
        assert_eq!(bearer_header(&Session::anonymous()), None);
        assert_eq!(bearer_header(&Session::with_token("")), None);
    }

    #[test]
    fn test_settle_login_accepts_existing_and_new_user() {
        for status in [200, 201] {
            let store = MemorySessionStore::new();
            let token = settle_login(&store, reply(status, r#""u-42""#)).unwrap();
            assert_eq!(token, "u-42");
            assert_eq!(store.load(), Session::with_token("u-42"));
        }
    }

    #[test]
    fn test_settle_login_http_error() {
        let store = MemorySessionStore::new();
        assert_eq!(
            settle_login(&store, reply(500, "")),
            Err(LoginError::Http(500))
        );
        assert_eq!(
            settle_login(&store, reply(400, r#""u-42""#)),
            Err(LoginError::Http(400))
        );
        assert!(!store.load().is_active());
    }

    #[test]
    fn test_settle_login_bad_body() {
        let store = MemorySessionStore::new();
        assert!(matches!(
            settle_login(&store, reply(200, "not json")),
            Err(LoginError::Decode(_))
        ));
        assert_eq!(
            settle_login(&store, reply(201, "\"\"")),
            Err(LoginError::Decode("empty identifier".to_string()))
        );
        assert!(matches!(
            settle_login(&store, reply(200, r#"{"userId":"u-42"}"#)),
            Err(LoginError::Decode(_))
        ));
    }

    #[test]
    fn test_failed_login_clears_stale_token() {
        let failures = [
            Err(LoginError::InvalidUsername),
            Err(LoginError::Network("offline".to_string())),
            reply(403, ""),
            reply(200, "garbage"),
            reply(200, "\"\""),
        ];
        for failure in failures {
            let store = MemorySessionStore::with_token("stale");
            assert!(settle_login(&store, failure).is_err());
            assert_eq!(store.load(), Session::anonymous());
        }
    }

    #[test]
    fn test_successful_login_replaces_token() {
        let store = MemorySessionStore::with_token("old");
        settle_login(&store, reply(200, r#""new""#)).unwrap();
        assert_eq!(store.load().token(), Some("new"));
    }

    #[test]
    fn test_logout_clears_store() {
        let store = MemorySessionStore::with_token("abc123");
        logout(&store).unwrap();
        assert!(!store.load().is_active());
    }

    #[test]
    fn test_login_request_body() {
        let body = serde_json::to_string(&LoginRequest { username: "maria" }).unwrap();
        assert_eq!(body, r#"{"username":"maria"}"#);
    }
}
