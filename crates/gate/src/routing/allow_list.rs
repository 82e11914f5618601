//! Static host allow-list

/// Token that admits every host
pub const WILDCARD: &str = "*";

/// Hosts admitted when the allow-list is empty and debug is enabled
pub const DEBUG_FALLBACK_HOSTS: &[&str] = &["127.0.0.1", "localhost", "[::1]"];

/// Ordered list of trimmed, lowercase host patterns.
///
/// Each entry is either a literal hostname or [`WILDCARD`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    hosts: Vec<String>,
}

impl AllowList {
    /// Parse a comma-separated list.
    ///
    /// Pieces are trimmed and lowercased, empty pieces dropped and order kept.
    /// An empty result is replaced by [`DEBUG_FALLBACK_HOSTS`] when `debug` is set.
    pub fn parse(raw: &str, debug: bool) -> Self {
        let hosts: Vec<String> = raw
            .split(',')
            .map(|host| host.trim().to_lowercase())
            .filter(|host| !host.is_empty())
            .collect();

        if hosts.is_empty() && debug {
            return Self::from_hosts(DEBUG_FALLBACK_HOSTS.iter().copied());
        }

        Self { hosts }
    }

    pub fn from_hosts<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|h| h.as_ref().trim().to_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    /// Exact membership or wildcard; `host` must already be lowercased
    pub fn is_whitelisted(&self, host: &str) -> bool {
        self.hosts.iter().any(|item| item == WILDCARD || item == host)
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// Free-function form of [`AllowList::is_whitelisted`]
pub fn is_whitelisted(host: &str, allow_list: &AllowList) -> bool {
    allow_list.is_whitelisted(host)
}
