//! One-time terms of service acknowledgment.
//!
//! The flag lives in the browser: `localStorage` when scripts run, mirrored
//! into a cookie so the server can skip the modal on later visits. Any
//! non-empty stored value counts as accepted. The flag has no expiry and is
//! not versioned against changes to the terms.

use std::collections::HashMap;

/// Storage key of the consent flag.
pub const CONSENT_KEY: &str = "tosAccepted";

/// Value written on dismissal.
pub const CONSENT_VALUE: &str = "true";

/// Cookie lifetime; effectively permanent.
const COOKIE_MAX_AGE_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Key value storage backing the consent flag.
pub trait ConsentStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, the equivalent of one browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsentStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Cookies of one HTTP request.
///
/// Writes are collected as `Set-Cookie` header values for the response.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    cookies: HashMap<String, String>,
    set_cookies: Vec<String>,
}

impl CookieStore {
    /// Parses `Cookie` request header values.
    ///
    /// Malformed pairs are skipped. The first occurrence of a name wins.
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut cookies = HashMap::new();

        for header in headers {
            for pair in header.split(';') {
                if let Some((name, value)) = pair.trim().split_once('=') {
                    let name = name.trim();
                    if !name.is_empty() {
                        cookies
                            .entry(name.to_string())
                            .or_insert_with(|| value.trim().trim_matches('"').to_string());
                    }
                }
            }
        }

        Self {
            cookies,
            set_cookies: Vec::new(),
        }
    }

    /// `Set-Cookie` values produced by [`ConsentStore::set`].
    pub fn set_cookie_headers(&self) -> &[String] {
        &self.set_cookies
    }
}

impl ConsentStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cookies.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.cookies.insert(key.to_string(), value.to_string());
        self.set_cookies.push(format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            key, value, COOKIE_MAX_AGE_SECS
        ));
    }
}

/// Whether a stored flag value means the terms were dismissed.
pub fn is_accepted(stored: Option<&str>) -> bool {
    stored.is_some_and(|value| !value.is_empty())
}

/// Decides whether the terms modal is shown.
#[derive(Debug)]
pub struct ConsentGate<S> {
    store: S,
}

impl<S: ConsentStore> ConsentGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True until the flag has been written.
    pub fn should_prompt(&self) -> bool {
        !is_accepted(self.store.get(CONSENT_KEY).as_deref())
    }

    /// Records dismissal. Declining dismisses as well.
    pub fn dismiss(&mut self) {
        self.store.set(CONSENT_KEY, CONSENT_VALUE);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
