//! Subdomain extraction and domain resolution

/// Extract the subdomain label(s) of `host` under `domain`.
///
/// `foo.scalar.org` under `scalar.org` yields `foo`. Returns `None` when the
/// host does not contain the domain, when the host is the domain itself, or
/// when the domain is not separated from the rest of the host by a dot.
///
/// The first gate is a substring check, not a suffix check. The trailing-dot
/// check after cutting `domain.len()` bytes rejects most non-suffix matches.
pub fn extract_subdomain(host: &str, domain: &str) -> Option<String> {
    if !host.contains(domain) {
        return None;
    }

    let cut = host.len().checked_sub(domain.len())?;
    // host is arbitrary client input; never slice through a multi-byte char
    let candidate = host.get(..cut)?;

    candidate.strip_suffix('.').map(str::to_string)
}

/// Domain under which subdomains are recognized.
///
/// The configured domain wins when set and non-empty, otherwise the server's
/// own name is used. Both are lowercased.
pub fn resolve_domain(configured: Option<&str>, server_name: &str) -> String {
    match configured {
        Some(domain) if !domain.is_empty() => domain.to_lowercase(),
        _ => server_name.to_lowercase(),
    }
}
