//! Ajaxlet name and action extraction from raw request paths.
//!
//! # Responsibilities
//! - Match the configured prefix (exact, case-sensitive)
//! - Cut the name and action segments at raw boundaries
//! - Decode each segment independently
//!
//! # Design Decisions
//! - Boundaries (`/`, `?`, `#`) are found on the undecoded string, so `%2F`
//!   never splits a token
//! - Empty segments produce no token
//! - Pure functions: no state, safe to call from any task

use std::borrow::Cow;

use super::decode::decode_segment;

/// Characters that end a segment before decoding.
const RAW_BOUNDARIES: [char; 3] = ['/', '?', '#'];

/// Both tokens of an ajax path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AjaxPath<'a> {
    pub name: Cow<'a, str>,
    pub action: Option<Cow<'a, str>>,
}

/// Locate the raw name segment and whatever follows it (boundary included).
fn name_segment<'a>(path: &'a str, prefix: &str) -> Option<(&'a str, &'a str)> {
    let rest = path.strip_prefix(prefix)?;
    let boundary = rest.find(RAW_BOUNDARIES).unwrap_or(rest.len());
    let (segment, tail) = rest.split_at(boundary);
    if segment.is_empty() {
        return None;
    }
    Some((segment, tail))
}

fn action_segment(tail: &str) -> Option<&str> {
    let rest = tail.strip_prefix('/')?;
    let boundary = rest.find(RAW_BOUNDARIES).unwrap_or(rest.len());
    let segment = &rest[..boundary];
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

/// Extract the decoded ajaxlet name that follows `prefix`.
///
/// ```
/// use ajax_dispatch::routing::extract_name;
///
/// assert_eq!(extract_name("/ajax/My+Plugin/Friend", "/ajax/").as_deref(), Some("My Plugin"));
/// assert_eq!(extract_name("/ajax/", "/ajax/"), None);
/// ```
pub fn extract_name<'a>(path: &'a str, prefix: &str) -> Option<Cow<'a, str>> {
    name_segment(path, prefix).map(|(segment, _)| decode_segment(segment))
}

/// Extract the decoded action that follows the ajaxlet name.
///
/// Returns `None` whenever [`extract_name`] would, or when the name is not
/// followed by a literal `/` and a non-empty segment.
pub fn extract_action<'a>(path: &'a str, prefix: &str) -> Option<Cow<'a, str>> {
    let (_, tail) = name_segment(path, prefix)?;
    action_segment(tail).map(decode_segment)
}

/// Extract both tokens in one pass.
pub fn split_tokens<'a>(path: &'a str, prefix: &str) -> Option<AjaxPath<'a>> {
    let (segment, tail) = name_segment(path, prefix)?;
    Some(AjaxPath {
        name: decode_segment(segment),
        action: action_segment(tail).map(decode_segment),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "/ajax/";

    fn name(path: &str) -> Option<String> {
        extract_name(path, PREFIX).map(Cow::into_owned)
    }

    fn action(path: &str) -> Option<String> {
        extract_action(path, PREFIX).map(Cow::into_owned)
    }

    #[test]
    fn test_name_table() {
        let cases: &[(&str, Option<&str>)] = &[
            ("", None),
            ("/", None),
            ("/aj", None),
            ("/ajax", None),
            ("/ajax/", None),
            ("/ajax/MyPlugin", Some("MyPlugin")),
            ("/ajax/MyPlugin/", Some("MyPlugin")),
            ("/ajax/MyPlugin/Friend", Some("MyPlugin")),
            ("/ajax/MyPlugin/Friend/", Some("MyPlugin")),
            ("/ajax/λ/Friend", Some("λ")),
            ("/ajax/%CE%BB/Friend", Some("λ")),
            ("/ajax/%ce%bb/Friend", Some("λ")),
            ("/ajax/%Ce%bB/Friend", Some("λ")),
            ("+", None),
            ("+/", None),
            ("/+", None),
            ("/aj+", None),
            ("/aj+ax", None),
            ("/ajax+/", None),
            ("/ajax+/+", None),
            ("/ajax/+", Some(" ")),
            ("/ajax/My+Plugin", Some("My Plugin")),
            ("/ajax/My+Plugin/", Some("My Plugin")),
            ("/ajax/MyPlugin/Friend+", Some("MyPlugin")),
            ("/ajax/MyPlugin/Friend+/", Some("MyPlugin")),
            ("/ajax/My+Plugin/Friend", Some("My Plugin")),
            ("/ajax/My+Plugin/Friend/", Some("My Plugin")),
            ("/ajax/My+Plugin/Friend+", Some("My Plugin")),
            ("/ajax/My+Plugin/Friend+/", Some("My Plugin")),
            ("%2F", None),
            ("%2F/", None),
            ("/%2F", None),
            ("/aj%2F", None),
            ("/aj%2Fax", None),
            ("/ajax%2F/", None),
            ("/ajax%2F/%2F", None),
            ("/ajax/%2F", Some("/")),
            ("/ajax/My%2FPlugin", Some("My/Plugin")),
            ("/ajax/My%2FPlugin/", Some("My/Plugin")),
            ("/ajax/My%2FPlugin/A", Some("My/Plugin")),
            ("/ajax/My%2FPlugin/%2F", Some("My/Plugin")),
            ("/ajax/MyPlugin%2F", Some("MyPlugin/")),
            ("/ajax/MyPlugin%2F/", Some("MyPlugin/")),
            ("/ajax/MyPlugin%2F/A", Some("MyPlugin/")),
            ("/ajax/MyPlugin%2F/%2F", Some("MyPlugin/")),
            ("/ajax/My%2FPlugin%2F", Some("My/Plugin/")),
            ("/ajax/My%2FPlugin%2F/", Some("My/Plugin/")),
            ("/ajax/My%2FPlugin%2F/A", Some("My/Plugin/")),
            ("/ajax/My%2FPlugin%2F/%2F", Some("My/Plugin/")),
            ("/ajax/MyPlugin/Friend%2F", Some("MyPlugin")),
            ("/ajax/MyPlugin/Friend%2F/", Some("MyPlugin")),
            ("/ajax/My%2FPlugin/Friend", Some("My/Plugin")),
            ("/ajax/My%2FPlugin/Friend/", Some("My/Plugin")),
            ("/ajax/My%2FPlugin/Friend%2F", Some("My/Plugin")),
            ("/ajax/My%2FPlugin/Friend%2F/", Some("My/Plugin")),
        ];

        for (path, expected) in cases {
            assert_eq!(name(path).as_deref(), *expected, "name of {path:?}");
        }
    }

    #[test]
    fn test_action_table() {
        let cases: &[(&str, Option<&str>)] = &[
            ("", None),
            ("/", None),
            ("/aj", None),
            ("/ajax", None),
            ("/ajax/", None),
            ("/ajax/MyPlugin", None),
            ("/ajax/MyPlugin/", None),
            ("/ajax/MyPlugin/Friend", Some("Friend")),
            ("/ajax/MyPlugin/Friend/", Some("Friend")),
            ("/ajax/MyPlugin/λ", Some("λ")),
            ("/ajax/MyPlugin/%CE%BB", Some("λ")),
            ("/ajax/MyPlugin/%ce%bb", Some("λ")),
            ("/ajax/MyPlugin/%Ce%bB", Some("λ")),
            ("+", None),
            ("+/", None),
            ("/+", None),
            ("/aj+", None),
            ("/aj+ax", None),
            ("/ajax+/", None),
            ("/ajax+/+", None),
            ("/ajax/My+Plugin", None),
            ("/ajax/My+Plugin/", None),
            ("/ajax/MyPlugin/Friend+", Some("Friend ")),
            ("/ajax/MyPlugin/Friend+/", Some("Friend ")),
            ("/ajax/My+Plugin/Friend", Some("Friend")),
            ("/ajax/My+Plugin/Friend/", Some("Friend")),
            ("/ajax/My+Plugin/Friend+", Some("Friend ")),
            ("/ajax/My+Plugin/Friend+/", Some("Friend ")),
            ("%2F", None),
            ("%2F/", None),
            ("/%2F", None),
            ("/aj%2F", None),
            ("/aj%2Fax", None),
            ("/ajax%2F/", None),
            ("/ajax%2F/%2F", None),
            ("/ajax/My%2FPlugin", None),
            ("/ajax/My%2FPlugin/", None),
            ("/ajax/MyPlugin/Friend%2F", Some("Friend/")),
            ("/ajax/MyPlugin/Friend%2F/", Some("Friend/")),
            ("/ajax/My%2FPlugin/Friend", Some("Friend")),
            ("/ajax/My%2FPlugin/Friend/", Some("Friend")),
            ("/ajax/My%2FPlugin/Friend%2F", Some("Friend/")),
            ("/ajax/My%2FPlugin/Friend%2F/", Some("Friend/")),
        ];

        for (path, expected) in cases {
            assert_eq!(action(path).as_deref(), *expected, "action of {path:?}");
        }
    }

    #[test]
    fn test_query_and_fragment_end_segments() {
        assert_eq!(name("/ajax/MyPlugin?param=1").as_deref(), Some("MyPlugin"));
        assert_eq!(name("/ajax/MyPlugin#frag?x=1").as_deref(), Some("MyPlugin"));
        assert_eq!(action("/ajax/MyPlugin?param=1"), None);
        assert_eq!(action("/ajax/MyPlugin#frag/Friend"), None);
        assert_eq!(action("/ajax/MyPlugin/Friend?x=1").as_deref(), Some("Friend"));
        assert_eq!(action("/ajax/MyPlugin/Friend#top").as_deref(), Some("Friend"));
        assert_eq!(action("/ajax/MyPlugin/?x=1"), None);
    }

    #[test]
    fn test_remainder_starting_at_boundary() {
        assert_eq!(name("/ajax//Friend"), None);
        assert_eq!(action("/ajax//Friend"), None);
        assert_eq!(name("/ajax/?x=1"), None);
        assert_eq!(name("/ajax/#frag"), None);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(name("/AJAX/MyPlugin"), None);
        assert_eq!(extract_name("/api/v2/Thing", "/api/v2/").as_deref(), Some("Thing"));
    }

    #[test]
    fn test_split_tokens_agrees_with_single_extractors() {
        let paths = [
            "/ajax/",
            "/ajax/MyPlugin",
            "/ajax/My%2FPlugin/Friend%2F?x=1",
            "/ajax/My+Plugin/Friend+/",
            "/other/MyPlugin/Friend",
        ];
        for path in paths {
            let split = split_tokens(path, PREFIX);
            assert_eq!(split.as_ref().map(|p| p.name.clone()), extract_name(path, PREFIX));
            assert_eq!(
                split.and_then(|p| p.action),
                extract_action(path, PREFIX),
                "{path:?}"
            );
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let path = "/ajax/%CE%BB/Friend+?x=1";
        assert_eq!(extract_name(path, PREFIX), extract_name(path, PREFIX));
        assert_eq!(extract_action(path, PREFIX), extract_action(path, PREFIX));
    }
}
