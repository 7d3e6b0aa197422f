//! Turning a stored URL into a redirect response.
//!
//! Stored URLs are never validated. The redirect target is derived from them
//! as follows:
//!
//! - absolute URLs (`https://...`, `//host/...`) and anything that does not
//!   parse as a URL reference are used unchanged
//! - relative references (`example.com`, `../x`, `?q=1`) are resolved against
//!   the root, where every short link lives
//!
//! The result is then made header-safe by [`location_header_value`] and
//! echoed into a small HTML body by [`redirect_body`].

/// Resolves a stored URL into the redirect target.
///
/// # Examples
///
/// ```
/// use shortener::utils::redirect_target::resolve_target;
///
/// assert_eq!(resolve_target("https://example.com/a"), "https://example.com/a");
/// assert_eq!(resolve_target("example.com"), "/example.com");
/// assert_eq!(resolve_target("a/../b/?q=1"), "/b/?q=1");
/// ```
pub fn resolve_target(stored: &str) -> String {
    if !is_relative_reference(stored) {
        return stored.to_string();
    }

    let rooted = if stored.starts_with('/') {
        stored.to_string()
    } else {
        format!("/{stored}")
    };

    let (path, query) = match rooted.find('?') {
        Some(i) => rooted.split_at(i),
        None => (rooted.as_str(), ""),
    };

    let mut cleaned = clean_rooted_path(path);
    if path.ends_with('/') && !cleaned.ends_with('/') {
        cleaned.push('/');
    }
    cleaned.push_str(query);

    cleaned
}

/// Renders a target as a `Location` header value.
///
/// Bytes outside ASCII become lowercase `%xx` escapes, and CR/LF become
/// spaces. Other control characters are left in place and will be rejected
/// by the header type.
pub fn location_header_value(target: &str) -> String {
    let mut out = String::with_capacity(target.len());
    for &b in target.as_bytes() {
        match b {
            b'\r' | b'\n' => out.push(' '),
            b if b.is_ascii() => out.push(char::from(b)),
            b => out.push_str(&format!("%{b:02x}")),
        }
    }
    out
}

/// HTML body sent alongside a `302 Found`.
pub fn redirect_body(target: &str) -> String {
    format!("<a href=\"{}\">Found</a>.\n\n", html_escape(target))
}

/// Escapes the five HTML-significant characters.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// True when `s` parses as a URL reference with neither scheme nor host.
fn is_relative_reference(s: &str) -> bool {
    if s.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return false;
    }

    let (rest, fragment) = match s.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (s, None),
    };
    if fragment.is_some_and(|f| !has_valid_escapes(f)) {
        return false;
    }

    if !matches!(scheme_end(rest), SchemeScan::None) {
        return false;
    }

    let path = rest.split_once('?').map_or(rest, |(path, _)| path);

    if !path.starts_with('/') {
        // A colon here would be read as a scheme separator.
        let first_segment = path.split('/').next().unwrap_or_default();
        if first_segment.contains(':') {
            return false;
        }
    }

    if let Some(after) = path.strip_prefix("//") {
        if !after.starts_with('/') {
            let authority = after.split('/').next().unwrap_or_default();
            let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
            if !host.is_empty() {
                return false;
            }
        }
    }

    has_valid_escapes(path)
}

enum SchemeScan {
    /// A well-formed `scheme:` prefix.
    Scheme,
    /// Leading `:` with no scheme name.
    Invalid,
    /// No scheme.
    None,
}

fn scheme_end(s: &str) -> SchemeScan {
    for (i, b) in s.bytes().enumerate() {
        match b {
            b if b.is_ascii_alphabetic() => {}
            b'0'..=b'9' | b'+' | b'-' | b'.' if i > 0 => {}
            b':' if i == 0 => return SchemeScan::Invalid,
            b':' => return SchemeScan::Scheme,
            _ => return SchemeScan::None,
        }
    }
    SchemeScan::None
}

fn has_valid_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// Lexically cleans an absolute path: empty and `.` segments are dropped and
/// `..` removes the previous segment (never climbing above the root).
fn clean_rooted_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}
