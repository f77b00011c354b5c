//! Session cookies carrying the access and refresh tokens.

use actix_web::cookie::Cookie;
use actix_web::HttpResponseBuilder;
use ca_core::domain::TokenPair;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// `HttpOnly`, `Secure`, `Path=/`, session lifetime
fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(true)
        .finish()
}

/// Attach both token cookies to the response
pub fn set_session_cookies<'a>(
    response: &'a mut HttpResponseBuilder,
    tokens: &TokenPair,
) -> &'a mut HttpResponseBuilder {
    response
        .cookie(session_cookie(ACCESS_TOKEN_COOKIE, tokens.access_token.clone()))
        .cookie(session_cookie(REFRESH_TOKEN_COOKIE, tokens.refresh_token.clone()))
}

/// Expire both token cookies, keeping the flags they were set with
pub fn clear_session_cookies(response: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    for name in [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE] {
        let mut cookie = session_cookie(name, String::new());
        cookie.make_removal();
        response.cookie(cookie);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::HttpResponse;

    #[test]
    fn test_session_cookie_flags() {
        let tokens = TokenPair::new("access".to_string(), "refresh".to_string());
        let mut builder = HttpResponse::Ok();
        let response = set_session_cookies(&mut builder, &tokens).finish();

        let cookies: Vec<_> = response.cookies().collect();
        assert_eq!(cookies.len(), 2);
        for cookie in cookies {
            assert_eq!(cookie.http_only(), Some(true));
            assert_eq!(cookie.secure(), Some(true));
            assert_eq!(cookie.path(), Some("/"));
        }
    }

    #[test]
    fn test_cleared_cookies_are_expired() {
        let mut builder = HttpResponse::Ok();
        let response = clear_session_cookies(&mut builder).finish();

        let cookie = response
            .cookies()
            .find(|c| c.name() == REFRESH_TOKEN_COOKIE)
            .unwrap();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age().map(|age| age.whole_seconds()), Some(0));
        assert_eq!(cookie.http_only(), Some(true));
    }
}
