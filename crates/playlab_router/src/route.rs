//! Route patterns, the route table and hash parsing.
//!
//! Patterns are `/literal/:param` strings. Each `:name` captures one or more
//! non-`/` characters; everything else matches literally. The table is
//! scanned in declaration order and the first match wins, so order is part
//! of a table's meaning.

use crate::error::RouterError;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Range;
use tracing::{debug, instrument, warn};

/// Captured parameters, already percent-decoded.
pub type RouteParams = BTreeMap<String, String>;

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Hash returned by [`RouteTable::build_url`] for unknown route names.
pub const ROOT_URL: &str = "#/";

/// The portal's screens, in matching order.
pub const STANDARD_ROUTES: [(&str, &str); 6] = [
    ("/", "catalogue"),
    ("/games/:id", "game"),
    ("/tools/:id", "tool"),
    ("/parcours/:epic", "parcours"),
    ("/parcours/:epic/:slide", "slide"),
    ("/settings", "settings"),
];

/// A resolved route: its name and decoded parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// Route name.
    pub name: String,
    /// Decoded parameters keyed by name.
    pub params: RouteParams,
}

/// Locates `:name` placeholders, returning their byte spans and names.
fn param_spans(pattern: &str) -> Vec<(Range<usize>, &str)> {
    let bytes = pattern.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let starts_ident = bytes
            .get(i + 1)
            .is_some_and(|b| b.is_ascii_alphabetic() || *b == b'_');
        if bytes[i] == b':' && starts_ident {
            let mut end = i + 2;
            while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
                end += 1;
            }
            spans.push((i..end, &pattern[i + 1..end]));
            i = end;
        } else {
            i += 1;
        }
    }
    spans
}

/// Compiles a route pattern into an anchored regex.
///
/// `/games/:id` becomes `^/games/([^/]+)$`.
///
/// # Errors
///
/// Returns [`RouterError`] if the resulting expression does not compile.
#[instrument]
pub fn pattern_to_regex(pattern: &str) -> Result<Regex, RouterError> {
    let mut source = String::from("^");
    let mut cursor = 0;
    for (span, _) in param_spans(pattern) {
        source.push_str(&regex::escape(&pattern[cursor..span.start]));
        source.push_str("([^/]+)");
        cursor = span.end;
    }
    source.push_str(&regex::escape(&pattern[cursor..]));
    source.push('$');
    Ok(Regex::new(&source)?)
}

/// Normalizes a raw `location.hash` into a path.
///
/// Empty, `#` and `#/` give `/`; the leading `#` is dropped, a leading `/`
/// is ensured and a trailing `/` is removed except on the root.
pub fn parse_hash(raw: &str) -> String {
    if raw.is_empty() || raw == "#" || raw == "#/" {
        return "/".to_string();
    }
    let stripped = raw.strip_prefix('#').unwrap_or(raw);
    let mut path = if stripped.starts_with('/') {
        stripped.to_string()
    } else {
        format!("/{}", stripped)
    };
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

/// Prefixes `/` when missing.
pub(crate) fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// One named pattern.
#[derive(Debug, Clone)]
pub struct Route {
    name: String,
    pattern: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl Route {
    /// Compiles a route.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError`] if the pattern cannot be compiled.
    pub fn new(pattern: impl Into<String>, name: impl Into<String>) -> Result<Self, RouterError> {
        let pattern = pattern.into();
        let regex = pattern_to_regex(&pattern)?;
        let param_names = param_spans(&pattern)
            .into_iter()
            .map(|(_, name)| name.to_string())
            .collect();
        Ok(Self {
            name: name.into(),
            pattern,
            regex,
            param_names,
        })
    }

    /// Route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Placeholder names in pattern order.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Matches a normalized path, decoding captured values.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let captures = self.regex.captures(path)?;
        let params = self
            .param_names
            .iter()
            .zip(captures.iter().skip(1))
            .filter_map(|(name, group)| {
                let raw = group?.as_str();
                Some((name.clone(), percent_decode_str(raw).decode_utf8_lossy().into_owned()))
            })
            .collect();
        Some(params)
    }

    /// Substitutes placeholders, in pattern order, with encoded values.
    ///
    /// Placeholders without a value are left as written.
    pub fn fill(&self, params: &RouteParams) -> String {
        let mut path = String::with_capacity(self.pattern.len());
        let mut cursor = 0;
        for (span, name) in param_spans(&self.pattern) {
            path.push_str(&self.pattern[cursor..span.start]);
            match params.get(name) {
                Some(value) => path.extend(utf8_percent_encode(value, COMPONENT)),
                None => path.push_str(&self.pattern[span.clone()]),
            }
            cursor = span.end;
        }
        path.push_str(&self.pattern[cursor..]);
        path
    }
}

/// Ordered list of routes, scanned first-match-wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Builds a table from `(pattern, name)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError`] if any pattern cannot be compiled.
    #[instrument(skip(entries))]
    pub fn new<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, RouterError> {
        let routes = entries
            .into_iter()
            .map(|(pattern, name)| Route::new(pattern, name))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = routes.len(), "Route table built");
        Ok(Self { routes })
    }

    /// The portal's six routes.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError`] if a pattern fails to compile.
    pub fn standard() -> Result<Self, RouterError> {
        Self::new(STANDARD_ROUTES)
    }

    /// Routes in matching order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Looks a route up by name (first declared wins).
    pub fn find(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Resolves a normalized path to the first matching route.
    #[instrument(skip(self))]
    pub fn match_route(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            route.matches(path).map(|params| RouteMatch {
                name: route.name.clone(),
                params,
            })
        })
    }

    /// Builds a `#/...` URL for a named route.
    ///
    /// An unknown name logs a warning and yields [`ROOT_URL`].
    #[instrument(skip(self))]
    pub fn build_url(&self, name: &str, params: &RouteParams) -> String {
        match self.find(name) {
            Some(route) => format!("#{}", route.fill(params)),
            None => {
                warn!(route = %name, "Unknown route name");
                ROOT_URL.to_string()
            }
        }
    }
}
