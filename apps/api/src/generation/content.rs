//! Content schema variants and their fixed fallback values.
//!
//! Both variants deserialize with every field required, so a response
//! missing a key is rejected by name at parse time instead of surfacing as
//! a field-access fault later. The fallback values satisfy the exact same
//! schema, which keeps rendering unaware of which path produced the content.

use serde::{Deserialize, Serialize};

use crate::generation::pipeline::ContentSchema;

// ────────────────────────────────────────────────────────────────────────────
// Portfolio variant (name/role/skills flow)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub company: String,
    pub role: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Literal scene description for a downstream image generator.
    pub image_prompt: String,
    pub tech: String,
    pub desc: String,
    pub impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

/// The rich content shape produced for the form flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub tagline: String,
    pub bio: String,
    pub stats: Vec<Stat>,
    pub hard_skills: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub testimonials: Vec<Testimonial>,
}

impl ContentSchema for PortfolioContent {
    const SCHEMA_NAME: &'static str = "portfolio";

    /// Stable placeholder signalling degraded operation. No error detail
    /// leaks into the payload; that goes to the server log instead.
    fn fallback() -> Self {
        Self {
            tagline: "Server Connection Failed".to_string(),
            bio: "Check API Key.".to_string(),
            stats: Vec::new(),
            hard_skills: Vec::new(),
            timeline: Vec::new(),
            projects: vec![Project {
                title: "Error".to_string(),
                image_prompt: "red warning sign 3d render".to_string(),
                tech: "Error".to_string(),
                desc: "Error".to_string(),
                impact: "0".to_string(),
            }],
            education: Vec::new(),
            testimonials: Vec::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Archetype variant (trait-vector flow)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeStat {
    pub label: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeProject {
    pub title: String,
    pub desc: String,
}

/// The compact content shape produced for the trait-vector flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeContent {
    pub tagline: String,
    pub bio: String,
    /// One-sentence "user manual" line for the matched style.
    pub manual: String,
    pub stats: Vec<ArchetypeStat>,
    pub projects: Vec<ArchetypeProject>,
}

impl ContentSchema for ArchetypeContent {
    const SCHEMA_NAME: &'static str = "archetype";

    fn fallback() -> Self {
        Self {
            tagline: "Offline Mode".to_string(),
            bio: "AI unavailable.".to_string(),
            manual: "System requires manual reboot.".to_string(),
            stats: vec![ArchetypeStat {
                label: "Error".to_string(),
                value: 0,
            }],
            projects: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::sanitizer::parse_content;

    /// Fallback values must pass the same schema check as successful
    /// content, so rendering never branches on which path produced it.
    #[test]
    fn test_portfolio_fallback_round_trips_through_the_parser() {
        let json = serde_json::to_string(&PortfolioContent::fallback()).unwrap();
        let parsed: PortfolioContent = parse_content(&json).unwrap();
        assert_eq!(parsed.tagline, "Server Connection Failed");
        assert_eq!(parsed.projects.len(), 1);
        assert_eq!(parsed.projects[0].image_prompt, "red warning sign 3d render");
    }

    #[test]
    fn test_archetype_fallback_round_trips_through_the_parser() {
        let json = serde_json::to_string(&ArchetypeContent::fallback()).unwrap();
        let parsed: ArchetypeContent = parse_content(&json).unwrap();
        assert_eq!(parsed.tagline, "Offline Mode");
        assert_eq!(parsed.stats.len(), 1);
        assert_eq!(parsed.stats[0].value, 0);
        assert!(parsed.projects.is_empty());
    }

    #[test]
    fn test_fallbacks_are_stable_across_calls() {
        let a = serde_json::to_value(PortfolioContent::fallback()).unwrap();
        let b = serde_json::to_value(PortfolioContent::fallback()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_portfolio_missing_top_level_key_fails_by_name() {
        let mut value = serde_json::to_value(PortfolioContent::fallback()).unwrap();
        value.as_object_mut().unwrap().remove("timeline");
        let err = serde_json::from_value::<PortfolioContent>(value).unwrap_err();
        assert!(err.to_string().contains("timeline"));
    }

    #[test]
    fn test_archetype_missing_manual_fails_by_name() {
        let mut value = serde_json::to_value(ArchetypeContent::fallback()).unwrap();
        value.as_object_mut().unwrap().remove("manual");
        let err = serde_json::from_value::<ArchetypeContent>(value).unwrap_err();
        assert!(err.to_string().contains("manual"));
    }
}
