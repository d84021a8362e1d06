//! Path template compilation.
//!
//! A template such as `/product/:id/:tab?` compiles into two things:
//!
//! - an anchored [`Regex`] that accepts concrete pathnames
//!   (`/product/42`, `/product/42/reviews`, `/product/42/`)
//! - a builder that substitutes [`RouteParams`] back into the template
//!
//! `:name` is a required segment and `:name?` an optional one. Names are made
//! of ASCII letters, digits and `_`; a `:` not followed by one of those is
//! kept as literal text.

use regex::Regex;

use crate::error::{RouteError, RouteResult};
use crate::options::RoutingOptions;
use crate::params::RouteParams;

/// Matches a single non-empty path segment.
const SEGMENT_PATTERN: &str = "[^/]+?";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Static(String),
    Param {
        name: String,
        optional: bool,
        /// Whether the parameter is preceded by a `/` that belongs to it.
        slash: bool,
    },
}

/// A compiled path template.
#[derive(Debug, Clone)]
pub struct CompiledPath {
    template: String,
    tokens: Vec<Token>,
    keys: Vec<String>,
    regex: Regex,
}

impl CompiledPath {
    /// Compile a template with the given matching options.
    pub fn compile(template: &str, options: &RoutingOptions) -> RouteResult<Self> {
        let tokens = tokenize(template)?;

        let keys: Vec<String> = tokens
            .iter()
            .filter_map(|token| match token {
                Token::Param { name, .. } => Some(name.clone()),
                Token::Static(_) => None,
            })
            .collect();

        let source = to_regex_source(&tokens, options);
        let regex =
            Regex::new(&source).map_err(|err| RouteError::invalid_pattern(template, err))?;

        Ok(Self {
            template: template.to_string(),
            tokens,
            keys,
            regex,
        })
    }

    /// The original template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The compiled matcher.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Parameter names in template order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Whether `pathname` matches this template.
    pub fn is_match(&self, pathname: &str) -> bool {
        self.regex.is_match(pathname)
    }

    /// Extract parameters from a matching pathname.
    ///
    /// Optional parameters that were not present are left out.
    pub fn captures(&self, pathname: &str) -> Option<RouteParams> {
        let caps = self.regex.captures(pathname)?;

        let params = self
            .keys
            .iter()
            .enumerate()
            .filter_map(|(i, key)| {
                caps.get(i + 1)
                    .map(|m| (key.as_str(), decode_segment(m.as_str())))
            })
            .collect();

        Some(params)
    }

    /// Build a concrete path from parameters.
    ///
    /// Fails with [`RouteError::MissingParam`] when a required parameter has
    /// no value. An omitted optional parameter drops its whole segment,
    /// leading slash included. Empty values count as omitted.
    pub fn build(&self, params: Option<&RouteParams>) -> RouteResult<String> {
        let mut path = String::with_capacity(self.template.len());

        for token in &self.tokens {
            match token {
                Token::Static(text) => path.push_str(text),
                Token::Param {
                    name,
                    optional,
                    slash,
                } => match params.and_then(|p| p.get(name)).filter(|v| !v.is_empty()) {
                    Some(value) => {
                        if *slash {
                            path.push('/');
                        }
                        path.push_str(&encode_segment(value));
                    }
                    None if *optional => {}
                    None => {
                        return Err(RouteError::MissingParam {
                            param: name.clone(),
                        })
                    }
                },
            }
        }

        if path.is_empty() && self.template.starts_with('/') {
            path.push('/');
        }

        Ok(path)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn tokenize(template: &str) -> RouteResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut seen: Vec<String> = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        let starts_param = c == ':' && chars.peek().copied().is_some_and(is_name_char);
        if !starts_param {
            text.push(c);
            continue;
        }

        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if !is_name_char(next) {
                break;
            }
            name.push(next);
            chars.next();
        }

        let optional = chars.next_if_eq(&'?').is_some();

        if seen.contains(&name) {
            return Err(RouteError::invalid_pattern(
                template,
                format!("duplicate parameter \":{}\"", name),
            ));
        }
        seen.push(name.clone());

        let slash = text.ends_with('/');
        if slash {
            text.pop();
        }
        if !text.is_empty() {
            tokens.push(Token::Static(std::mem::take(&mut text)));
        }

        tokens.push(Token::Param {
            name,
            optional,
            slash,
        });
    }

    if !text.is_empty() {
        tokens.push(Token::Static(text));
    }

    Ok(tokens)
}

fn to_regex_source(tokens: &[Token], options: &RoutingOptions) -> String {
    let mut body = String::new();

    for token in tokens {
        match token {
            Token::Static(text) => body.push_str(&regex::escape(text)),
            Token::Param {
                optional, slash, ..
            } => {
                let prefix = if *slash { "/" } else { "" };
                if *optional {
                    body.push_str(&format!("(?:{}({}))?", prefix, SEGMENT_PATTERN));
                } else {
                    body.push_str(&format!("{}({})", prefix, SEGMENT_PATTERN));
                }
            }
        }
    }

    let flags = if options.sensitive { "" } else { "(?i)" };

    if options.strict {
        format!("{}^{}$", flags, body)
    } else {
        // A trailing slash in the template is folded into the optional one.
        let body = body.strip_suffix('/').unwrap_or(&body);
        format!("{}^{}/?$", flags, body)
    }
}

/// Percent-encode the characters that would change the structure of a path.
fn encode_segment(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            '/' => encoded.push_str("%2F"),
            '?' => encoded.push_str("%3F"),
            '#' => encoded.push_str("%23"),
            ' ' => encoded.push_str("%20"),
            _ => encoded.push(c),
        }
    }
    encoded
}

fn decode_segment(value: &str) -> String {
    if !value.contains('%') {
        return value.to_string();
    }

    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            decoded.push((hex_value(bytes[i + 1]) << 4) | hex_value(bytes[i + 2]));
            i += 3;
            continue;
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(template: &str) -> CompiledPath {
        CompiledPath::compile(template, &RoutingOptions::default()).unwrap()
    }

    // === Build Tests ===

    #[test]
    fn test_build_required_param() {
        let path = compile("/test/:param");
        let params = RouteParams::new().with("param", 1234);

        assert_eq!(path.build(Some(&params)).unwrap(), "/test/1234");
    }

    #[test]
    fn test_build_optional_param_omitted() {
        let path = compile("/test/:param?");

        assert_eq!(path.build(None).unwrap(), "/test");
    }

    #[test]
    fn test_build_optional_param_present() {
        let path = compile("/test/:param?");
        let params = RouteParams::new().with("param", "x");

        assert_eq!(path.build(Some(&params)).unwrap(), "/test/x");
    }

    #[test]
    fn test_build_missing_required_param() {
        let path = compile("/product/:id/reviews");
        let err = path.build(Some(&RouteParams::new())).unwrap_err();

        assert_eq!(
            err,
            RouteError::MissingParam {
                param: "id".to_string()
            }
        );
    }

    #[test]
    fn test_build_static_path() {
        let path = compile("/about");
        assert_eq!(path.build(None).unwrap(), "/about");
    }

    #[test]
    fn test_build_root_with_omitted_optional() {
        let path = compile("/:lang?");
        assert_eq!(path.build(None).unwrap(), "/");
    }

    #[test]
    fn test_build_empty_optional_param_drops_segment() {
        let path = compile("/test/:param?");
        let params = RouteParams::new().with("param", "");

        assert_eq!(path.build(Some(&params)).unwrap(), "/test");
    }

    #[test]
    fn test_build_empty_required_param() {
        let path = compile("/users/:id/edit");
        let params = RouteParams::new().with("id", "");

        assert_eq!(
            path.build(Some(&params)).unwrap_err(),
            RouteError::MissingParam {
                param: "id".to_string()
            }
        );
    }

    #[test]
    fn test_build_encodes_reserved_characters() {
        let path = compile("/search/:q");
        let params = RouteParams::new().with("q", "a/b c");

        assert_eq!(path.build(Some(&params)).unwrap(), "/search/a%2Fb%20c");
    }

    #[test]
    fn test_build_ignores_extra_params() {
        let path = compile("/cart");
        let params = RouteParams::new().with("unused", 1);

        assert_eq!(path.build(Some(&params)).unwrap(), "/cart");
    }

    // === Match Tests ===

    #[test]
    fn test_match_required_param() {
        let path = compile("/product/:id");

        assert!(path.is_match("/product/42"));
        assert!(path.is_match("/product/42/"));
        assert!(!path.is_match("/product"));
        assert!(!path.is_match("/product/42/reviews"));
    }

    #[test]
    fn test_match_optional_param() {
        let path = compile("/blog/:slug?");

        assert!(path.is_match("/blog"));
        assert!(path.is_match("/blog/"));
        assert!(path.is_match("/blog/hello"));
        assert!(!path.is_match("/blog/hello/world"));
    }

    #[test]
    fn test_match_root() {
        let path = compile("/");

        assert!(path.is_match("/"));
        assert!(!path.is_match("/about"));
    }

    #[test]
    fn test_match_escapes_static_text() {
        let path = compile("/files/report.pdf");

        assert!(path.is_match("/files/report.pdf"));
        assert!(!path.is_match("/files/reportXpdf"));
    }

    #[test]
    fn test_match_case_insensitive_by_default() {
        let path = compile("/About");
        assert!(path.is_match("/about"));
    }

    #[test]
    fn test_match_sensitive() {
        let options = RoutingOptions::new().with_sensitive(true);
        let path = CompiledPath::compile("/About", &options).unwrap();

        assert!(path.is_match("/About"));
        assert!(!path.is_match("/about"));
    }

    #[test]
    fn test_match_strict_trailing_slash() {
        let options = RoutingOptions::new().with_strict(true);
        let path = CompiledPath::compile("/about", &options).unwrap();

        assert!(path.is_match("/about"));
        assert!(!path.is_match("/about/"));
    }

    // === Capture Tests ===

    #[test]
    fn test_captures_params() {
        let path = compile("/users/:user_id/orders/:order_id");
        let params = path.captures("/users/7/orders/1001").unwrap();

        assert_eq!(params.get("user_id"), Some("7"));
        assert_eq!(params.get("order_id"), Some("1001"));
    }

    #[test]
    fn test_captures_skips_absent_optional() {
        let path = compile("/blog/:slug?");
        let params = path.captures("/blog").unwrap();

        assert!(params.is_empty());
    }

    #[test]
    fn test_captures_decodes_values() {
        let path = compile("/search/:q");
        let params = path.captures("/search/a%2Fb%20c").unwrap();

        assert_eq!(params.get("q"), Some("a/b c"));
    }

    #[test]
    fn test_captures_keeps_malformed_escapes() {
        let path = compile("/s/:q");

        assert_eq!(path.captures("/s/a%+5b").unwrap().get("q"), Some("a%+5b"));
        assert_eq!(path.captures("/s/100%25").unwrap().get("q"), Some("100%"));
        assert_eq!(path.captures("/s/%zz").unwrap().get("q"), Some("%zz"));
    }

    #[test]
    fn test_captures_no_match() {
        let path = compile("/users/:id");
        assert!(path.captures("/orders/1").is_none());
    }

    // === Template Tests ===

    #[test]
    fn test_template_and_regex() {
        let path = compile("/product/:id");

        assert_eq!(path.template(), "/product/:id");
        assert_eq!(path.regex().as_str(), "(?i)^/product/([^/]+?)/?$");
    }

    #[test]
    fn test_strict_sensitive_regex() {
        let options = RoutingOptions::new().with_strict(true).with_sensitive(true);
        let path = CompiledPath::compile("/blog/:slug?", &options).unwrap();

        assert_eq!(path.regex().as_str(), "^/blog(?:/([^/]+?))?$");
    }

    #[test]
    fn test_keys_in_order() {
        let path = compile("/:a/x/:b?");
        assert_eq!(path.keys(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_literal_colon() {
        let path = compile("/time/12:/x");

        assert!(path.keys().is_empty());
        assert!(path.is_match("/time/12:/x"));
    }

    #[test]
    fn test_duplicate_param_is_invalid() {
        let result = CompiledPath::compile("/:id/:id", &RoutingOptions::default());
        assert!(matches!(result, Err(RouteError::InvalidPattern { .. })));
    }
}
