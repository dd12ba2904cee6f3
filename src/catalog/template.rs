//! Route path templates and the path matcher.
//!
//! A template is a `/`-separated list of literal segments and placeholders:
//!
//! - `{name}`  - required, matches exactly one non-empty segment
//! - `{name?}` - optional, only allowed as the final segment
//!
//! Templates are compiled into an anchored [`Regex`] once, when the catalog
//! is built. The root template (`/{length?}`) is special-cased so it only
//! matches the empty path, `/`, or a purely numeric segment; otherwise it
//! would match the path of every single-segment route.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Errors raised while parsing a path template.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{0}' must start with '/'")]
    MissingLeadingSlash(String),
    #[error("template '{0}' contains an empty segment")]
    EmptySegment(String),
    #[error("template '{template}' has an unnamed or malformed placeholder '{segment}'")]
    MalformedPlaceholder { template: String, segment: String },
    #[error("template '{0}' has an optional placeholder before the last segment")]
    OptionalNotLast(String),
    #[error("template '{template}' declares placeholder '{name}' more than once")]
    DuplicatePlaceholder { template: String, name: String },
    #[error("template '{template}' compiled to an invalid pattern: {reason}")]
    Pattern { template: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder { name: String, optional: bool },
}

/// A parsed and compiled route template.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
    pattern: Regex,
}

impl PathTemplate {
    /// Parses and compiles a template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the template is not of the form
    /// `/literal/{required}/{optional?}` described in the module docs.
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| TemplateError::MissingLeadingSlash(raw.to_string()))?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                segments.push(parse_segment(raw, part)?);
            }
        }

        let mut seen = HashSet::new();
        let last = segments.len().saturating_sub(1);
        for (i, segment) in segments.iter().enumerate() {
            if let Segment::Placeholder { name, optional } = segment {
                if *optional && i != last {
                    return Err(TemplateError::OptionalNotLast(raw.to_string()));
                }
                if !seen.insert(name.as_str()) {
                    return Err(TemplateError::DuplicatePlaceholder {
                        template: raw.to_string(),
                        name: name.clone(),
                    });
                }
            }
        }

        let pattern = Regex::new(&compile(&segments)).map_err(|e| TemplateError::Pattern {
            template: raw.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            raw: raw.to_string(),
            segments,
            pattern,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this is the root template: a single optional placeholder.
    pub fn is_root(&self) -> bool {
        matches!(
            self.segments.as_slice(),
            [Segment::Placeholder { optional: true, .. }]
        )
    }

    /// Returns `true` if the concrete request `path` satisfies the template.
    ///
    /// Matching is exact: a trailing slash, an empty segment or an extra
    /// segment never matches.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }

    /// Builds a concrete example path by substituting a sample value for
    /// every placeholder.
    pub fn sample_path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(lit) => path.push_str(lit),
                Segment::Placeholder { name, .. } => path.push_str(sample_value(name)),
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    /// Expands the template into `axum` route paths.
    ///
    /// A trailing optional placeholder yields two paths, one without the
    /// segment and one with it as a required `{name}` capture.
    pub fn router_paths(&self) -> Vec<String> {
        let render = |segments: &[Segment]| {
            let mut path = String::new();
            for segment in segments {
                path.push('/');
                match segment {
                    Segment::Literal(lit) => path.push_str(lit),
                    Segment::Placeholder { name, .. } => {
                        path.push('{');
                        path.push_str(name);
                        path.push('}');
                    }
                }
            }
            if path.is_empty() {
                path.push('/');
            }
            path
        };

        match self.segments.last() {
            Some(Segment::Placeholder { optional: true, .. }) => vec![
                render(&self.segments[..self.segments.len() - 1]),
                render(&self.segments),
            ],
            _ => vec![render(&self.segments)],
        }
    }
}

impl PartialEq for PathTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for PathTemplate {}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for PathTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

fn parse_segment(template: &str, part: &str) -> Result<Segment, TemplateError> {
    if part.is_empty() {
        return Err(TemplateError::EmptySegment(template.to_string()));
    }

    let Some(inner) = part.strip_prefix('{') else {
        if part.contains(['{', '}']) {
            return Err(TemplateError::MalformedPlaceholder {
                template: template.to_string(),
                segment: part.to_string(),
            });
        }
        return Ok(Segment::Literal(part.to_string()));
    };

    let malformed = || TemplateError::MalformedPlaceholder {
        template: template.to_string(),
        segment: part.to_string(),
    };

    let inner = inner.strip_suffix('}').ok_or_else(malformed)?;
    let (name, optional) = match inner.strip_suffix('?') {
        Some(name) => (name, true),
        None => (inner, false),
    };

    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(malformed());
    }

    Ok(Segment::Placeholder {
        name: name.to_string(),
        optional,
    })
}

fn compile(segments: &[Segment]) -> String {
    if let [Segment::Placeholder { optional: true, .. }] = segments {
        return r"^(?:/[0-9]*)?$".to_string();
    }

    let mut pattern = String::from("^");
    for segment in segments {
        match segment {
            Segment::Literal(lit) => {
                pattern.push('/');
                pattern.push_str(&regex::escape(lit));
            }
            Segment::Placeholder {
                optional: false, ..
            } => pattern.push_str("/[^/]+"),
            Segment::Placeholder { optional: true, .. } => pattern.push_str("(?:/[^/]+)?"),
        }
    }
    if segments.is_empty() {
        pattern.push('/');
    }
    pattern.push('$');
    pattern
}

fn sample_value(name: &str) -> &'static str {
    match name {
        "length" => "10",
        "characters" => "ABC",
        "version" => "v4",
        "value" => "example.com",
        "namespace" => "dns",
        "prefix" => "user",
        _ => "sample",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(raw: &str) -> PathTemplate {
        PathTemplate::parse(raw).unwrap()
    }

    #[test]
    fn test_parse_segments() {
        let template = t("/from/{characters}/{length?}");
        assert_eq!(
            template.segments,
            vec![
                Segment::Literal("from".to_string()),
                Segment::Placeholder {
                    name: "characters".to_string(),
                    optional: false
                },
                Segment::Placeholder {
                    name: "length".to_string(),
                    optional: true
                },
            ]
        );
    }

    #[test]
    fn test_parse_rejects_invalid_templates() {
        assert!(matches!(
            PathTemplate::parse("alpha"),
            Err(TemplateError::MissingLeadingSlash(_))
        ));
        assert!(matches!(
            PathTemplate::parse("/alpha//x"),
            Err(TemplateError::EmptySegment(_))
        ));
        assert!(matches!(
            PathTemplate::parse("/alpha/"),
            Err(TemplateError::EmptySegment(_))
        ));
        assert!(matches!(
            PathTemplate::parse("/{}"),
            Err(TemplateError::MalformedPlaceholder { .. })
        ));
        assert!(matches!(
            PathTemplate::parse("/{length"),
            Err(TemplateError::MalformedPlaceholder { .. })
        ));
        assert!(matches!(
            PathTemplate::parse("/a{b}"),
            Err(TemplateError::MalformedPlaceholder { .. })
        ));
        assert!(matches!(
            PathTemplate::parse("/{a?}/b"),
            Err(TemplateError::OptionalNotLast(_))
        ));
        assert!(matches!(
            PathTemplate::parse("/{a}/{a}"),
            Err(TemplateError::DuplicatePlaceholder { .. })
        ));
    }

    #[test]
    fn test_literal_and_optional() {
        let template = t("/alpha/{length?}");
        assert!(template.matches("/alpha"));
        assert!(template.matches("/alpha/8"));
        assert!(template.matches("/alpha/anything"));
        assert!(!template.matches("/Alpha"));
        assert!(!template.matches("/alpha/"));
        assert!(!template.matches("/alpha/8/9"));
        assert!(!template.matches("/alphabet"));
        assert!(!template.matches("//alpha"));
    }

    #[test]
    fn test_required_placeholder() {
        let template = t("/from/{characters}/{length?}");
        assert!(template.matches("/from/abc"));
        assert!(template.matches("/from/abc/4"));
        assert!(!template.matches("/from"));
        assert!(!template.matches("/from/"));
        assert!(!template.matches("/from//4"));
        assert!(!template.matches("/from/abc/4/"));
    }

    #[test]
    fn test_literal_is_escaped() {
        let template = t("/a.b");
        assert!(template.matches("/a.b"));
        assert!(!template.matches("/aXb"));
    }

    #[test]
    fn test_root_template_matches_empty_and_numeric_only() {
        let root = t("/{length?}");
        assert!(root.is_root());
        assert!(root.matches(""));
        assert!(root.matches("/"));
        assert!(root.matches("/15"));
        assert!(root.matches("/0042"));
        assert!(!root.matches("/15a"));
        assert!(!root.matches("/alpha"));
        assert!(!root.matches("/15/"));
        assert!(!root.matches("/1/2"));
    }

    #[test]
    fn test_static_template() {
        let template = t("/uuid");
        assert!(!template.is_root());
        assert!(template.matches("/uuid"));
        assert!(!template.matches("/uuid/"));
        assert!(!template.matches("/uuid/v4"));
    }

    #[test]
    fn test_sample_path() {
        assert_eq!(t("/{length?}").sample_path(), "/10");
        assert_eq!(t("/from/{characters}/{length?}").sample_path(), "/from/ABC/10");
        assert_eq!(
            t("/uuid/v5/{value}/{namespace?}").sample_path(),
            "/uuid/v5/example.com/dns"
        );
        assert_eq!(t("/nanoid").sample_path(), "/nanoid");
        assert_eq!(t("/").sample_path(), "/");
    }

    #[test]
    fn test_router_paths() {
        assert_eq!(t("/{length?}").router_paths(), vec!["/", "/{length}"]);
        assert_eq!(
            t("/from/{characters}/{length?}").router_paths(),
            vec!["/from/{characters}", "/from/{characters}/{length}"]
        );
        assert_eq!(t("/uuid/{version}").router_paths(), vec!["/uuid/{version}"]);
    }

    #[test]
    fn test_serializes_as_raw_template() {
        let json = serde_json::to_value(t("/alpha/{length?}")).unwrap();
        assert_eq!(json, "/alpha/{length?}");
    }
}
