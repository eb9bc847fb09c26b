//! # Request Context
//!
//! Everything a request needs from the page it is issued on: the
//! anti-forgery token (read from the cookie jar) and the base path of the
//! model admin. Both are resolved once, when the editor is attached to a
//! page, and then passed around explicitly.

use super::error::TransportError;
use url::Url;

/// Default name of the anti-forgery cookie.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header the token is sent in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Admin models the editor knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminModel {
    Order,
    Product,
}

impl AdminModel {
    pub fn slug(self) -> &'static str {
        match self {
            AdminModel::Order => "order",
            AdminModel::Product => "product",
        }
    }

    /// Base used when the page path does not reveal the app label.
    pub fn fallback_base(self) -> String {
        format!("/admin/catalog/{}", self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    base: String,
    csrf_token: Option<String>,
}

impl RequestContext {
    pub fn new(base: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self {
            base: base.into(),
            csrf_token,
        }
    }

    /// Resolves the context for `model` from the page location and the
    /// page's `Cookie` header.
    ///
    /// `page` may be an absolute URL or a bare path.
    pub fn from_page(
        page: &str,
        cookie_header: &str,
        cookie_name: &str,
        model: AdminModel,
    ) -> Result<Self, TransportError> {
        let path = page_path(page)?;
        let base = admin_base(&path, model).unwrap_or_else(|| model.fallback_base());
        Ok(Self::new(base, cookie_value(cookie_header, cookie_name)))
    }

    /// e.g. `/admin/shop/order`; no trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    /// `{base}/{action}/{id}/`
    pub fn endpoint_path(&self, action: &str, id: impl std::fmt::Display) -> String {
        format!("{}/{}/{}/", self.base, action, id)
    }
}

fn page_path(page: &str) -> Result<String, TransportError> {
    let url = match Url::parse(page) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse("http://localhost/")
            .and_then(|root| root.join(page))
            .map_err(|e| TransportError::InvalidUrl(e.to_string()))?,
        Err(e) => return Err(TransportError::InvalidUrl(e.to_string())),
    };
    Ok(url.path().to_string())
}

/// `/admin/<app>/<model>` when `path` starts with `/admin/<app>/<model>/`.
fn admin_base(path: &str, model: AdminModel) -> Option<String> {
    let rest = path.strip_prefix("/admin/")?;
    let (app, rest) = rest.split_once('/')?;
    if app.is_empty() {
        return None;
    }
    let (segment, _) = rest.split_once('/')?;
    (segment == model.slug()).then(|| format!("/admin/{}/{}", app, segment))
}

/// Value of cookie `name`, or `None` when it is missing or set more than once.
fn cookie_value(header: &str, name: &str) -> Option<String> {
    let mut matches = header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string());
    let first = matches.next()?;
    matches.next().is_none().then_some(first)
}
