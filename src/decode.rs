//! Extract → repair → degrade ladder for model replies.
//!
//! The upstream model is not contractually guaranteed to emit valid JSON, or
//! any JSON at all. This module is the documented degradation contract that
//! keeps `classify` total over whatever text comes back:
//!
//! 1. take the outermost `{...}` span of the reply,
//! 2. parse it as JSON; on failure strip trailing commas and parse once more,
//! 3. otherwise fall back to a degraded [`ClassificationResult`].
//!
//! Availability is traded for precision on purpose: a mangled reply renders
//! as an `Unrecognized` classification, never as an error.

use serde::Deserialize;
use tracing::warn;

use crate::taxonomy::Category;
use crate::types::ClassificationResult;

/// The reply shape the prompt asks for. Every field is optional so a partial
/// object still decodes.
#[derive(Debug, Deserialize)]
struct RawClassification {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    suggested_response: Option<String>,
}

/// Decode a raw model reply into a result, degrading instead of failing.
pub fn decode_reply(raw_reply: &str) -> ClassificationResult {
    let Some(span) = extract_outermost_object(raw_reply) else {
        warn!("reply contained no JSON object, degrading");
        return ClassificationResult::degraded(raw_reply);
    };

    let raw = match parse_with_repair(span) {
        Some(raw) => raw,
        None => {
            warn!("reply JSON unrecoverable after repair pass, degrading");
            return ClassificationResult::degraded(raw_reply);
        }
    };

    let categories = raw
        .categories
        .iter()
        .filter(|label| !label.trim().is_empty())
        .map(|label| Category::from_label(label))
        .collect();
    ClassificationResult::new(raw.summary, categories, raw.suggested_response)
}

fn parse_with_repair(span: &str) -> Option<RawClassification> {
    match serde_json::from_str(span) {
        Ok(raw) => Some(raw),
        Err(_) => {
            let repaired = strip_trailing_commas(span);
            serde_json::from_str(&repaired).ok()
        }
    }
}

/// The outermost `{...}` span: first `{` through last `}`, inclusive.
///
/// Explanatory prose may precede or follow the JSON, so the span must cover
/// the largest enclosed object; a balanced or non-greedy match would stop at
/// the first nested closer and lose the tail of the object.
pub(crate) fn extract_outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Remove commas that directly precede `}` or `]`, outside string literals.
/// This is the single repair pass the ladder allows.
pub(crate) fn strip_trailing_commas(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut in_str = false;
    let mut escape = false;
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if in_str {
            if escape {
                escape = false;
            } else if c == '\\' {
                escape = true;
            } else if c == '"' {
                in_str = false;
            }
            out.push(c);
            i += 1;
            continue;
        }
        match c {
            '"' => {
                in_str = true;
                out.push(c);
                i += 1;
            }
            ',' => {
                let mut j = i + 1;
                while j < bytes.len() && (bytes[j] as char).is_ascii_whitespace() {
                    j += 1;
                }
                if j < bytes.len() && (bytes[j] == b'}' || bytes[j] == b']') {
                    i += 1; // drop this comma
                } else {
                    out.push(',');
                    i += 1;
                }
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[test]
    fn clean_reply_decodes() {
        let reply = r#"{"categories":["Vulgar"],"summary":"rude message","suggested_response":"Please be respectful."}"#;
        let result = decode_reply(reply);
        assert_eq!(result.categories(), &[Category::Vulgar]);
        assert!(result.is_harmful());
        assert_eq!(result.summary(), "rude message");
        assert_eq!(result.suggested_response(), Some("Please be respectful."));
    }

    #[test]
    fn prose_around_the_object_is_ignored() {
        let reply = "Sure! Here is the classification you asked for:\n\
                     {\"categories\":[\"Supportive\"],\"summary\":\"kind words\"}\n\
                     Let me know if you need anything else.";
        let result = decode_reply(reply);
        assert_eq!(result.categories(), &[Category::Supportive]);
        assert!(!result.is_harmful());
    }

    #[test]
    fn nested_objects_survive_outermost_extraction() {
        // A balanced-from-the-left match would stop at the inner closer.
        let reply = r#"note {"categories":["Spam"],"summary":"ad {link} inside"} trailing"#;
        let result = decode_reply(reply);
        assert_eq!(result.categories(), &[Category::Spam]);
        assert_eq!(result.summary(), "ad {link} inside");
    }

    #[test]
    fn trailing_commas_are_repaired() {
        let reply = r#"{"categories":["Supportive"],"summary":"nice",}"#;
        let result = decode_reply(reply);
        assert_eq!(result.categories(), &[Category::Supportive]);
        assert!(!result.is_harmful());
        assert_eq!(result.summary(), "nice");
    }

    #[test]
    fn trailing_comma_inside_array_is_repaired() {
        let reply = r#"{"categories":["Vulgar","Harassment",],"summary":"hostile",}"#;
        let result = decode_reply(reply);
        assert_eq!(
            result.categories(),
            &[Category::Vulgar, Category::Harassment]
        );
    }

    #[test]
    fn comma_inside_string_literal_is_kept() {
        let repaired = strip_trailing_commas(r#"{"summary":"a, }","categories":[],}"#);
        assert_eq!(repaired, r#"{"summary":"a, }","categories":[]}"#);
    }

    #[test]
    fn reply_without_json_degrades() {
        let reply = "Sure, here is my answer: this looks fine.";
        let result = decode_reply(reply);
        assert_eq!(result.categories(), &[Category::Unrecognized]);
        assert_eq!(result.summary(), reply);
        assert!(result.suggested_response().is_none());
        assert!(!result.is_harmful());
    }

    #[test]
    fn degraded_summary_is_clipped_to_200_chars() {
        let reply = "no json here ".repeat(40);
        let result = decode_reply(&reply);
        assert_eq!(result.categories(), &[Category::Unrecognized]);
        assert_eq!(
            result.summary(),
            reply.chars().take(200).collect::<String>()
        );
    }

    #[test]
    fn unrecoverable_json_degrades() {
        let reply = r#"{"categories": ["Vulgar" this is not json at all"#;
        let result = decode_reply(reply);
        assert_eq!(result.categories(), &[Category::Unrecognized]);
    }

    #[test]
    fn close_before_open_degrades() {
        let reply = "} nothing useful {";
        let result = decode_reply(reply);
        assert_eq!(result.categories(), &[Category::Unrecognized]);
    }

    #[test]
    fn unknown_category_strings_are_preserved() {
        let reply = r#"{"categories":["Vulgar","Passive aggressive"],"summary":"edgy"}"#;
        let result = decode_reply(reply);
        assert_eq!(
            result.categories(),
            &[
                Category::Vulgar,
                Category::Other("Passive aggressive".to_string())
            ]
        );
        assert!(result.is_harmful());
    }

    #[test]
    fn missing_fields_fall_back() {
        let reply = r#"{"categories":[]}"#;
        let result = decode_reply(reply);
        assert!(result.categories().is_empty());
        assert_eq!(result.summary(), defaults::NO_SUMMARY);
        assert!(result.suggested_response().is_none());
        assert!(!result.is_harmful());
    }

    #[tracing_test::traced_test]
    #[test]
    fn degrade_path_logs_a_warning() {
        let _ = decode_reply("nothing structured in here");
        assert!(logs_contain("degrading"));
    }

    #[test]
    fn outermost_span_covers_first_to_last_brace() {
        assert_eq!(extract_outermost_object("a {b} c {d} e"), Some("{b} c {d}"));
        assert_eq!(extract_outermost_object("no braces"), None);
        assert_eq!(extract_outermost_object("} backwards {"), None);
    }
}
