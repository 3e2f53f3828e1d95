//! Per-call header assembly.
//!
//! Every request starts from the subscription-key header and layers the
//! call-specific headers on top. The first value set for a header name wins,
//! so nothing added later can replace the subscription key or a value the
//! caller supplied. A fresh [`RequestHeaders`] is built for every request.

use base64::Engine;

use crate::constants::{
    AUTHORIZATION_HEADER, CALLBACK_URL_HEADER, REFERENCE_ID_HEADER, SUBSCRIPTION_KEY_HEADER,
    TARGET_ENVIRONMENT_HEADER,
};
use crate::context::{CallContext, NewResource};

#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: Vec<(&'static str, String)>,
}

impl std::fmt::Debug for RequestHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in &self.entries {
            if is_secret(name) {
                map.entry(name, &"[REDACTED]");
            } else {
                map.entry(name, value);
            }
        }
        map.finish()
    }
}

fn is_secret(name: &str) -> bool {
    name.eq_ignore_ascii_case(AUTHORIZATION_HEADER)
        || name.eq_ignore_ascii_case(SUBSCRIPTION_KEY_HEADER)
}

impl RequestHeaders {
    /// Base header set: just the subscription key.
    pub fn new(subscription_key: &str) -> Self {
        Self::default().insert(SUBSCRIPTION_KEY_HEADER, subscription_key)
    }

    /// Add a header unless one with the same name (case-insensitive) is
    /// already present.
    pub fn insert(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if !self.contains(name) {
            self.entries.push((name, value.into()));
        }
        self
    }

    /// `Authorization: Bearer <token>`. No header when `token` is `None`.
    pub fn bearer(self, token: Option<&str>) -> Self {
        match token {
            Some(t) => self.insert(AUTHORIZATION_HEADER, format!("Bearer {t}")),
            None => self,
        }
    }

    /// `Authorization: Basic base64(user:key)`, used only for token acquisition.
    pub fn basic(self, user: &str, key: &str) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{key}"));
        self.insert(AUTHORIZATION_HEADER, format!("Basic {encoded}"))
    }

    pub fn target_environment(self, environment: &str) -> Self {
        self.insert(TARGET_ENVIRONMENT_HEADER, environment)
    }

    pub fn reference_id(self, reference_id: &str) -> Self {
        self.insert(REFERENCE_ID_HEADER, reference_id)
    }

    pub fn callback_url(self, callback_url: &str) -> Self {
        self.insert(CALLBACK_URL_HEADER, callback_url)
    }

    /// Bearer token plus target environment from a call context.
    pub fn context(self, ctx: &CallContext) -> Self {
        self.bearer(ctx.access_token())
            .target_environment(ctx.target_environment())
    }

    /// Reference id plus callback URL for a resource being created.
    pub fn resource(self, resource: &NewResource) -> Self {
        self.reference_id(resource.reference_id())
            .callback_url(resource.callback_url())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
