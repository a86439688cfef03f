//! Placeholder descriptions for articles whose upstream text is too thin to show.

/// Topic buckets in match priority order. The first bucket whose keywords
/// appear in the lower-cased title wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicCategory {
    China,
    UnitedStates,
    Economic,
    Security,
    Diplomatic,
    General,
}

const KEYWORDS: [(TopicCategory, &[&str]); 5] = [
    (TopicCategory::China, &["china", "chinese"]),
    (TopicCategory::UnitedStates, &["usa", "america", "united states"]),
    (TopicCategory::Economic, &["economic", "trade"]),
    (TopicCategory::Security, &["security", "defense"]),
    (TopicCategory::Diplomatic, &["diplomatic", "foreign"]),
];

impl TopicCategory {
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| title.contains(w)))
            .map(|(category, _)| *category)
            .unwrap_or(TopicCategory::General)
    }

    pub fn description(&self) -> &'static str {
        match self {
            TopicCategory::China => "Recent developments in India-China relations highlight ongoing diplomatic efforts and strategic considerations in the region. This development could have significant implications for regional stability and bilateral cooperation.",
            TopicCategory::UnitedStates => "Strategic developments in India-US partnership continue to evolve, reflecting the deepening cooperation between the two nations in various sectors including defense, technology, and regional security.",
            TopicCategory::Economic => "Economic developments affecting India's international trade relations and domestic economic policies. These changes could impact India's position in the global economic landscape.",
            TopicCategory::Security => "Security-related developments that could influence India's defense posture and regional security dynamics. These updates are crucial for understanding India's strategic position.",
            TopicCategory::Diplomatic => "Diplomatic developments involving India's foreign policy and international relations. These updates provide insights into India's global engagement and strategic partnerships.",
            TopicCategory::General => "Important geopolitical development that could have significant implications for India's international relations, economic policies, and strategic positioning in the global arena.",
        }
    }
}

pub fn synthesize_description(title: &str) -> &'static str {
    TopicCategory::classify(title).description()
}
