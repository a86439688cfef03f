/// Renders the analyst instruction for one article. Title and body are embedded verbatim.
pub fn analysis_prompt(title: &str, content: &str) -> String {
    format!(
        r#"
You are a geopolitical analyst specializing in India's international relations and strategic affairs. Analyze the following news article and provide a comprehensive 500-word report focusing specifically on how this development impacts India.

Title: {title}
Content: {content}

IMPORTANT: Return ONLY valid JSON format. Do not include any markdown formatting, code blocks, or additional text.

Provide a detailed analysis in this exact JSON format:

{{
  "summary": "A concise 2-3 sentence summary of the main event",
  "geopoliticalContext": "A detailed explanation of the global geopolitical context and background (100-150 words)",
  "impactForIndia": "A comprehensive 500-word analysis covering: 1) Economic implications for India (trade, investment, supply chains, currency, market access), 2) Diplomatic and foreign policy implications (bilateral relations, multilateral forums, strategic partnerships), 3) Security and defense implications (border security, regional stability, military cooperation), 4) Long-term strategic implications for India's position in the region and globally, 5) Potential opportunities and challenges for India, 6) Recommendations for India's response strategy",
  "sentiment": "positive/negative/neutral",
  "keyTakeaways": ["Key point 1", "Key point 2", "Key point 3", "Key point 4"],
  "timeline": "Expected timeline for when these impacts might materialize (immediate/short-term/medium-term/long-term)"
}}

Focus specifically on:
- How this affects India's economic interests and trade relations
- Impact on India's diplomatic relationships and foreign policy
- Security implications for India's borders and regional stability
- India's strategic positioning in global affairs
- Specific sectors or regions in India that might be affected
- Potential policy responses India should consider

Make the analysis detailed, specific, and actionable for Indian policymakers and stakeholders. Return ONLY the JSON object, no other text.
"#
    )
}

/// Pulls the `Title:` line back out of a rendered prompt.
pub(crate) fn prompt_title(prompt: &str) -> Option<&str> {
    prompt
        .lines()
        .find_map(|line| line.strip_prefix("Title: "))
        .map(str::trim)
}
