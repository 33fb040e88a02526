use axum::{extract::FromRequestParts, http::request::Parts, http::HeaderMap};
use shared_types::Lang;

/// Response language negotiated for a request.
///
/// Precedence: `?lang=` query parameter, `X-Lang` header, the `lang`
/// cookie set by the UI toggle, `Accept-Language`, then English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLang(pub Lang);

pub const LANG_COOKIE: &str = "lang";

pub fn negotiate(query: Option<&str>, headers: &HeaderMap) -> Lang {
    if let Some(lang) = query.and_then(lang_from_query) {
        return lang;
    }

    if let Some(lang) = headers
        .get("x-lang")
        .and_then(|v| v.to_str().ok())
        .and_then(Lang::from_code)
    {
        return lang;
    }

    if let Some(lang) = crate::auth::cookies::extract_cookie(headers, LANG_COOKIE)
        .as_deref()
        .and_then(Lang::from_code)
    {
        return lang;
    }

    headers
        .get(axum::http::header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(Lang::from_accept_language)
        .unwrap_or_default()
}

fn lang_from_query(query: &str) -> Option<Lang> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "lang")
        .and_then(|(_, value)| Lang::from_code(value))
}

impl<S: Send + Sync> FromRequestParts<S> for RequestLang {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestLang(negotiate(parts.uri.query(), &parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(negotiate(None, &HeaderMap::new()), Lang::En);
        assert_eq!(negotiate(Some("page=2"), &HeaderMap::new()), Lang::En);
    }

    #[test]
    fn query_beats_headers() {
        let h = headers(&[("x-lang", "en"), ("accept-language", "en-US")]);
        assert_eq!(negotiate(Some("q=dev&lang=ar"), &h), Lang::Ar);
    }

    #[test]
    fn x_lang_beats_accept_language() {
        let h = headers(&[("x-lang", "ar"), ("accept-language", "en-US,en;q=0.9")]);
        assert_eq!(negotiate(None, &h), Lang::Ar);
    }

    #[test]
    fn cookie_beats_accept_language() {
        let h = headers(&[("cookie", "theme=x; lang=ar"), ("accept-language", "en-US")]);
        assert_eq!(negotiate(None, &h), Lang::Ar);
    }

    #[test]
    fn x_lang_beats_cookie() {
        let h = headers(&[("cookie", "lang=ar"), ("x-lang", "en")]);
        assert_eq!(negotiate(None, &h), Lang::En);
    }

    #[test]
    fn accept_language_is_last_resort() {
        let h = headers(&[("accept-language", "fr-FR, ar-SA;q=0.8")]);
        assert_eq!(negotiate(None, &h), Lang::Ar);
    }

    #[test]
    fn unknown_query_value_falls_through() {
        let h = headers(&[("x-lang", "ar")]);
        assert_eq!(negotiate(Some("lang=de"), &h), Lang::Ar);
    }
}
