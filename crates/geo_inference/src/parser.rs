//! Two-stage parsing of model output into an [`AnalysisResult`].
//!
//! Stage one expects the requested JSON object, tolerating code fences and
//! surrounding prose. When that fails, stage two scans the raw text line by
//! line. Either way the caller gets a fully populated record.

use geo_core::types::{DEFAULT_CONTEXT, DEFAULT_IMPACT, DEFAULT_SUMMARY, DEFAULT_TIMELINE};
use geo_core::{AnalysisResult, Sentiment};
use serde_json::{Map, Value};
use thiserror::Error;

const FENCE: &str = "```";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAnalysis {
    /// The response contained the requested JSON object.
    Parsed(AnalysisResult),
    /// The response was rebuilt by the line heuristic.
    Recovered {
        analysis: AnalysisResult,
        reason: String,
    },
}

impl ParsedAnalysis {
    pub fn analysis(&self) -> &AnalysisResult {
        match self {
            ParsedAnalysis::Parsed(analysis) => analysis,
            ParsedAnalysis::Recovered { analysis, .. } => analysis,
        }
    }

    pub fn into_analysis(self) -> AnalysisResult {
        match self {
            ParsedAnalysis::Parsed(analysis) => analysis,
            ParsedAnalysis::Recovered { analysis, .. } => analysis,
        }
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self, ParsedAnalysis::Recovered { .. })
    }
}

pub fn parse_analysis(raw: &str) -> ParsedAnalysis {
    match parse_structured(raw) {
        Ok(analysis) => ParsedAnalysis::Parsed(analysis),
        Err(e) => ParsedAnalysis::Recovered {
            analysis: recover_from_lines(raw),
            reason: e.to_string(),
        },
    }
}

pub fn parse_structured(raw: &str) -> Result<AnalysisResult, ParseError> {
    let payload = extract_json_object(strip_code_fence(raw));
    match serde_json::from_str::<Value>(payload)? {
        Value::Object(fields) => Ok(overlay_defaults(&fields)),
        other => Err(ParseError::NotAnObject(json_kind(&other))),
    }
}

/// Removes a surrounding code fence, with or without a language tag.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix(FENCE) else {
        return text;
    };

    let tag_len: usize = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .map(char::len_utf8)
        .sum();
    let after_tag = &rest[tag_len..];
    let rest = if after_tag.is_empty() || after_tag.starts_with(char::is_whitespace) || after_tag.starts_with('{') {
        after_tag
    } else {
        rest
    };

    let rest = rest.trim_start();
    rest.strip_suffix(FENCE).unwrap_or(rest).trim_end()
}

/// Greedy `{ ... }` span: first opening brace to last closing brace.
pub fn extract_json_object(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

fn overlay_defaults(fields: &Map<String, Value>) -> AnalysisResult {
    let text = |key: &str, default: &str| {
        fields
            .get(key)
            .and_then(truthy_text)
            .unwrap_or_else(|| default.to_string())
    };

    let sentiment = fields
        .get("sentiment")
        .and_then(truthy_text)
        .and_then(|label| Sentiment::from_label(&label))
        .unwrap_or_default();

    let key_takeaways = match fields.get("keyTakeaways") {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    };

    AnalysisResult {
        summary: text("summary", DEFAULT_SUMMARY),
        geopolitical_context: text("geopoliticalContext", DEFAULT_CONTEXT),
        impact_for_india: text("impactForIndia", DEFAULT_IMPACT),
        sentiment,
        key_takeaways,
        timeline: text("timeline", DEFAULT_TIMELINE),
    }
}

/// Text for a truthy JSON value; `None` for null, false, 0 and "".
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Heuristic recovery over the non-empty lines of a raw response.
pub fn recover_from_lines(raw: &str) -> AnalysisResult {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let find = |needle: &str| {
        lines
            .iter()
            .find(|line| line.to_lowercase().contains(needle))
            .copied()
    };

    let summary = find("summary")
        .or_else(|| lines.first().copied())
        .unwrap_or(DEFAULT_SUMMARY);
    let context = find("context")
        .or_else(|| lines.get(1).copied())
        .unwrap_or(DEFAULT_CONTEXT);
    let impact = match find("impact") {
        Some(line) => line.to_string(),
        None => {
            let rest = lines.get(2..).unwrap_or_default().join(" ");
            if rest.is_empty() {
                DEFAULT_IMPACT.to_string()
            } else {
                rest
            }
        }
    };

    AnalysisResult {
        summary: summary.to_string(),
        geopolitical_context: context.to_string(),
        impact_for_india: impact,
        sentiment: Sentiment::Neutral,
        key_takeaways: Vec::new(),
        timeline: DEFAULT_TIMELINE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_json_with_language_tag() {
        let raw = "```json\n{\"summary\":\"S\",\"sentiment\":\"positive\"}\n```";
        let parsed = parse_analysis(raw);
        assert!(!parsed.is_recovered());

        let analysis = parsed.into_analysis();
        assert_eq!(analysis.summary, "S");
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert_eq!(analysis.geopolitical_context, DEFAULT_CONTEXT);
        assert_eq!(analysis.impact_for_india, DEFAULT_IMPACT);
        assert_eq!(analysis.timeline, DEFAULT_TIMELINE);
        assert!(analysis.key_takeaways.is_empty());
    }

    #[test]
    fn test_complete_json_passes_through() {
        let raw = r#"{
            "summary": "Talks resumed.",
            "geopoliticalContext": "Years of standoff.",
            "impactForIndia": "Eases pressure on the LAC.",
            "sentiment": "negative",
            "keyTakeaways": ["One", "Two"],
            "timeline": "Short-term"
        }"#;
        let analysis = parse_structured(raw).unwrap();
        assert_eq!(
            analysis,
            AnalysisResult {
                summary: "Talks resumed.".to_string(),
                geopolitical_context: "Years of standoff.".to_string(),
                impact_for_india: "Eases pressure on the LAC.".to_string(),
                sentiment: Sentiment::Negative,
                key_takeaways: vec!["One".to_string(), "Two".to_string()],
                timeline: "Short-term".to_string(),
            }
        );
    }

    #[test]
    fn test_falsy_fields_get_defaults() {
        let raw = r#"{"summary":"","geopoliticalContext":null,"impactForIndia":0,"sentiment":"","keyTakeaways":"not a list","timeline":false}"#;
        assert_eq!(parse_structured(raw).unwrap(), AnalysisResult::default());
    }

    #[test]
    fn test_unknown_sentiment_is_neutral() {
        let analysis = parse_structured(r#"{"sentiment":"positive/negative"}"#).unwrap();
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        let analysis = parse_structured(r#"{"sentiment":"Negative"}"#).unwrap();
        assert_eq!(analysis.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_json_surrounded_by_prose() {
        let raw = "Here is the analysis you asked for:\n{\"summary\":\"Inner {braces} kept\"}\nHope this helps!";
        let analysis = parse_structured(raw).unwrap();
        assert_eq!(analysis.summary, "Inner {braces} kept");
    }

    #[test]
    fn test_bare_fence_without_tag() {
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  ```JSON {\"a\":1}```  "), "{\"a\":1}");
        assert_eq!(strip_code_fence("no fence"), "no fence");
    }

    #[test]
    fn test_non_object_json_is_recovered() {
        let parsed = parse_analysis("42");
        assert!(parsed.is_recovered());
        assert_eq!(parsed.analysis().summary, "42");
        assert!(matches!(parse_structured("[1, 2]"), Err(ParseError::NotAnObject("an array"))));
    }

    #[test]
    fn test_unparseable_response_is_recovered() {
        let raw = "The Summary: talks resumed\nGeopolitical context: long standoff\nImpact on India: fewer patrols\nMore text";
        let parsed = parse_analysis(raw);
        match &parsed {
            ParsedAnalysis::Recovered { reason, .. } => assert!(reason.contains("not valid JSON")),
            ParsedAnalysis::Parsed(_) => panic!("expected recovery"),
        }

        let analysis = parsed.into_analysis();
        assert_eq!(analysis.summary, "The Summary: talks resumed");
        assert_eq!(analysis.geopolitical_context, "Geopolitical context: long standoff");
        assert_eq!(analysis.impact_for_india, "Impact on India: fewer patrols");
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert!(analysis.key_takeaways.is_empty());
        assert_eq!(analysis.timeline, DEFAULT_TIMELINE);
    }

    #[test]
    fn test_recovery_falls_back_to_line_positions() {
        let analysis = recover_from_lines("first line\n\n  second line  \nthird\nfourth");
        assert_eq!(analysis.summary, "first line");
        assert_eq!(analysis.geopolitical_context, "second line");
        assert_eq!(analysis.impact_for_india, "third fourth");
    }

    #[test]
    fn test_recovery_of_empty_response() {
        assert_eq!(recover_from_lines(""), AnalysisResult::default());
        assert_eq!(recover_from_lines("\n \n"), AnalysisResult::default());

        let analysis = recover_from_lines("only one line");
        assert_eq!(analysis.summary, "only one line");
        assert_eq!(analysis.geopolitical_context, DEFAULT_CONTEXT);
        assert_eq!(analysis.impact_for_india, DEFAULT_IMPACT);
    }

    #[test]
    fn test_truncated_json_is_recovered() {
        let parsed = parse_analysis("{\"summary\": \"cut off");
        assert!(parsed.is_recovered());
        assert_eq!(parsed.analysis().summary, "{\"summary\": \"cut off");
    }
}
