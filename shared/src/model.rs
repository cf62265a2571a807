use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Shown whenever the gateway omits its own disclaimer.
pub const DEFAULT_DISCLAIMER: &str = "Probabilistic assessment. Not a definitive verdict.";

#[derive(Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
    Video,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [ContentKind::Text, ContentKind::Image, ContentKind::Video];

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Text => "Text",
            ContentKind::Image => "Image",
            ContentKind::Video => "Video",
        }
    }
}

#[derive(Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SignalWeight {
    Low,
    Medium,
    High,
}

/// One explainable detection signal. The gateway's ordering is the display
/// ordering; it is never re-sorted on this side.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DetectionSignal {
    pub label: String,
    pub weight: SignalWeight,
    #[serde(default)]
    pub detail: String,
}

/// Verdict payload returned by the analysis gateway.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub ai_probability: f64,
    pub signals: Vec<DetectionSignal>,
    #[serde(default)]
    pub metrics: HashMap<String, serde_json::Value>,
    pub processing_time_ms: u64,
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

fn default_disclaimer() -> String {
    DEFAULT_DISCLAIMER.to_string()
}

/// Classification derived from the AI probability. Computed wherever the
/// probability is rendered so the gauge and the history list always agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    LikelyAi,
    Uncertain,
    LikelyHuman,
}

impl Verdict {
    pub fn classify(ai_probability: f64) -> Self {
        if ai_probability > 70.0 {
            Verdict::LikelyAi
        } else if ai_probability > 45.0 {
            Verdict::Uncertain
        } else {
            Verdict::LikelyHuman
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::LikelyAi => "Likely AI Generated",
            Verdict::Uncertain => "Uncertain",
            Verdict::LikelyHuman => "Likely Human-Created",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Verdict::LikelyAi => "likely-ai",
            Verdict::Uncertain => "uncertain",
            Verdict::LikelyHuman => "likely-human",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_boundary_exact() {
        assert_eq!(Verdict::classify(71.0), Verdict::LikelyAi);
        assert_eq!(Verdict::classify(70.0), Verdict::Uncertain);
        assert_eq!(Verdict::classify(46.0), Verdict::Uncertain);
        assert_eq!(Verdict::classify(45.0), Verdict::LikelyHuman);
        assert_eq!(Verdict::classify(0.0), Verdict::LikelyHuman);
        assert_eq!(Verdict::classify(100.0), Verdict::LikelyAi);
    }

    #[test]
    fn disclaimer_defaults_when_absent() {
        let json = r#"{
            "ai_probability": 82.0,
            "signals": [],
            "processing_time_ms": 340
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.disclaimer, DEFAULT_DISCLAIMER);
        assert!(result.metrics.is_empty());
    }

    #[test]
    fn signal_order_survives_deserialization() {
        let json = r#"{
            "ai_probability": 55.0,
            "signals": [
                {"label": "High perplexity variance", "weight": "high", "detail": "2.31"},
                {"label": "Low burstiness", "weight": "medium"},
                {"label": "Common n-gram overlap", "weight": "low"}
            ],
            "processing_time_ms": 12
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = result.signals.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            ["High perplexity variance", "Low burstiness", "Common n-gram overlap"]
        );
        assert_eq!(result.signals[1].detail, "");
    }

    #[test]
    fn unknown_gateway_fields_are_ignored() {
        let json = r#"{
            "content_type": "text",
            "prediction": "ai_generated",
            "ai_probability": 90.0,
            "human_probability": 10.0,
            "signals": [],
            "metrics": {"perplexity": 12.4, "burstiness": "low"},
            "processing_time_ms": 87,
            "disclaimer": "Custom note."
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.ai_probability, 90.0);
        assert_eq!(result.metrics.len(), 2);
        assert_eq!(result.disclaimer, "Custom note.");
    }
}
