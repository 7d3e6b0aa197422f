//! Domain label extraction used for per-domain usage counters.

/// Extracts the domain label counted by the metrics endpoint.
///
/// The URL is split on `/` and the third segment is taken as the host
/// (assumes `scheme://host/...`). A single leading `www.` is stripped and the
/// second-to-last dot-separated label is returned. Hosts with a single label
/// are returned whole. URLs with fewer than three `/`-separated segments have
/// no domain and yield an empty string.
///
/// This is not public-suffix aware: `example.co.uk` yields `co`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_domain("http://www.example.com/page"), "example");
/// assert_eq!(extract_domain("http://a.b.co.uk/x"), "co");
/// assert_eq!(extract_domain("example.com"), "");
/// ```
pub fn extract_domain(url: &str) -> String {
    let Some(host) = url.split('/').nth(2) else {
        return String::new();
    };

    let host = host.strip_prefix("www.").unwrap_or(host);

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 2 {
        labels[labels.len() - 2].to_string()
    } else {
        host.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain_strips_www() {
        assert_eq!(extract_domain("http://www.example.com/page"), "example");
    }

    #[test]
    fn test_extract_domain_subdomain() {
        assert_eq!(extract_domain("https://mail.example.com/inbox"), "example");
    }

    #[test]
    fn test_extract_domain_multi_part_suffix() {
        assert_eq!(extract_domain("http://a.b.co.uk/x"), "co");
    }

    #[test]
    fn test_extract_domain_without_path() {
        assert_eq!(extract_domain("https://google.com"), "google");
    }

    #[test]
    fn test_extract_domain_single_label_host() {
        assert_eq!(extract_domain("http://localhost/"), "localhost");
    }

    #[test]
    fn test_extract_domain_keeps_port_on_single_label() {
        assert_eq!(extract_domain("http://localhost:3000/x"), "localhost:3000");
    }

    #[test]
    fn test_extract_domain_port_stays_on_last_label() {
        assert_eq!(extract_domain("http://example.com:8080/x"), "example");
    }

    #[test]
    fn test_extract_domain_too_few_segments() {
        assert_eq!(extract_domain("example.com"), "");
        assert_eq!(extract_domain("http:/example.com"), "");
        assert_eq!(extract_domain(""), "");
    }

    #[test]
    fn test_extract_domain_empty_host() {
        assert_eq!(extract_domain("file:///etc/hosts"), "");
    }

    #[test]
    fn test_extract_domain_only_one_www_prefix() {
        assert_eq!(extract_domain("http://www.www.example.com/"), "example");
        assert_eq!(extract_domain("http://www.com/"), "com");
    }

    #[test]
    fn test_extract_domain_case_is_preserved() {
        assert_eq!(extract_domain("http://WWW.Example.COM/"), "Example");
    }
}
