// All LLM prompt constants and builders for the generation pipelines.
// Prompt building is deterministic string substitution; no network, no
// randomness. Each template enumerates the full required JSON shape so the
// generator has no ambiguity about structure.

use crate::archetype::TraitVector;

/// Portfolio (form flow) prompt template.
/// Replace: {name}, {role}, {skills}
pub const PORTFOLIO_PROMPT_TEMPLATE: &str = r#"Create a JSON portfolio for: Name: {name}, Role: {role}, Skills: {skills}.
REQUIREMENTS:
1. Output VALID JSON ONLY. No markdown code fences, no text outside the JSON object.
2. Structure:
{
    "tagline": "Str", "bio": "Str", "stats": [{"label":"Str","value":"Str"}],
    "hard_skills": ["Str"], "timeline": [{"year":"Str","company":"Str","role":"Str","achievements":["Str"]}],
    "projects": [
        {
            "title":"Str",
            "image_prompt": "A LITERAL, PHYSICAL description of the project for an image generator. Do NOT use abstract words like 'solution' or 'efficiency'. DESCRIBE THE OBJECTS. Example: 'A close up of a circuit board with glowing red lights', 'A laptop screen displaying a medical x-ray interface', 'A futuristic drone flying over a farm field'.",
            "tech":"Str", "desc":"Str", "impact":"Str"
        }
    ],
    "education": [{"degree":"Str","school":"Str","year":"Str"}], "testimonials": [{"quote":"Str","author":"Str"}]
}"#;

/// Archetype (trait-vector flow) prompt template.
/// Replace: {archetype}, {structure}, {energy}, {warmth}
pub const ARCHETYPE_PROMPT_TEMPLATE: &str = r#"Generate a JSON portfolio for a designer with the '{archetype}' aesthetic.
Traits: Structure {structure}%, Energy {energy}%, Warmth {warmth}%.

Generate unique 'stats' relevant to this specific personality (e.g., Cyber has 'Uptime', Botanical has 'Growth Rate').

Output valid JSON only:
{
    "tagline": "Short Header",
    "bio": "Two sentence bio.",
    "manual": "A 1-sentence 'User Manual' or generalized fact about this style.",
    "stats": [
        {"label": "Unique Stat 1", "value": 85},
        {"label": "Unique Stat 2", "value": 90},
        {"label": "Unique Stat 3", "value": 40}
    ],
    "projects": [
        {"title": "Project A", "desc": "Desc"},
        {"title": "Project B", "desc": "Desc"},
        {"title": "Project C", "desc": "Desc"}
    ]
}"#;

/// Builds the portfolio generation prompt from validated form fields.
pub fn build_portfolio_prompt(name: &str, role: &str, skills: &str) -> String {
    PORTFOLIO_PROMPT_TEMPLATE
        .replace("{name}", name)
        .replace("{role}", role)
        .replace("{skills}", skills)
}

/// Builds the archetype generation prompt from the resolved archetype and
/// the caller's trait vector.
pub fn build_archetype_prompt(archetype: &str, traits: &TraitVector) -> String {
    ARCHETYPE_PROMPT_TEMPLATE
        .replace("{archetype}", archetype)
        .replace("{structure}", &traits.structure.to_string())
        .replace("{energy}", &traits.energy.to_string())
        .replace("{warmth}", &traits.warmth.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_prompt_substitutes_all_placeholders() {
        let prompt = build_portfolio_prompt("Ada", "Engineer", "Rust,C++");
        assert!(prompt.contains("Name: Ada"));
        assert!(prompt.contains("Role: Engineer"));
        assert!(prompt.contains("Skills: Rust,C++"));
        assert!(!prompt.contains("{name}"));
        assert!(!prompt.contains("{role}"));
        assert!(!prompt.contains("{skills}"));
    }

    #[test]
    fn test_portfolio_prompt_enumerates_required_shape() {
        let prompt = build_portfolio_prompt("Ada", "Engineer", "Rust");
        for key in [
            "\"tagline\"",
            "\"bio\"",
            "\"stats\"",
            "\"hard_skills\"",
            "\"timeline\"",
            "\"projects\"",
            "\"education\"",
            "\"testimonials\"",
            "\"image_prompt\"",
        ] {
            assert!(prompt.contains(key), "prompt must require {key}");
        }
        assert!(prompt.contains("VALID JSON ONLY"));
    }

    #[test]
    fn test_image_prompt_guidance_demands_literal_descriptions() {
        let prompt = build_portfolio_prompt("Ada", "Engineer", "Rust");
        assert!(prompt.contains("LITERAL, PHYSICAL"));
        assert!(prompt.contains("DESCRIBE THE OBJECTS"));
    }

    #[test]
    fn test_archetype_prompt_substitutes_all_placeholders() {
        let traits = crate::archetype::TraitVector::new(80, 20, 40).unwrap();
        let prompt = build_archetype_prompt("bauhaus", &traits);
        assert!(prompt.contains("'bauhaus' aesthetic"));
        assert!(prompt.contains("Structure 80%"));
        assert!(prompt.contains("Energy 20%"));
        assert!(prompt.contains("Warmth 40%"));
        for placeholder in ["{archetype}", "{structure}", "{energy}", "{warmth}"] {
            assert!(!prompt.contains(placeholder));
        }
    }

    #[test]
    fn test_archetype_prompt_enumerates_required_shape() {
        let traits = crate::archetype::TraitVector::new(50, 50, 50).unwrap();
        let prompt = build_archetype_prompt("midnight", &traits);
        for key in ["\"tagline\"", "\"bio\"", "\"manual\"", "\"stats\"", "\"projects\""] {
            assert!(prompt.contains(key), "prompt must require {key}");
        }
        assert!(prompt.contains("valid JSON only"));
    }

    #[test]
    fn test_prompt_building_is_deterministic() {
        let a = build_portfolio_prompt("Ada", "Engineer", "Rust");
        let b = build_portfolio_prompt("Ada", "Engineer", "Rust");
        assert_eq!(a, b);
    }
}
