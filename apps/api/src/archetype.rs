//! Archetype classification — nearest-neighbor matching over a fixed
//! trait-space reference set.
//!
//! A `TraitVector` places a designer in a 3D space (structure, energy,
//! warmth), each axis 0–100. Classification finds the closest of 10 fixed
//! reference points by squared Euclidean distance. Pure and deterministic:
//! equidistant references resolve to the lowest index, so the order of
//! `ARCHETYPE_REFERENCES` is part of the contract.

use serde::Serialize;
use thiserror::Error;

/// The 10 reference archetypes in fixed index order.
pub const ARCHETYPE_REFERENCES: [(&str, [i64; 3]); 10] = [
    ("swiss", [100, 0, 0]),
    ("cyber", [100, 100, 0]),
    ("brutal", [0, 100, 0]),
    ("ethereal", [10, 10, 100]),
    ("midnight", [50, 50, 30]),
    ("paper", [30, 20, 90]),
    ("bauhaus", [80, 60, 80]),
    ("y2k", [40, 90, 50]),
    ("botanical", [20, 10, 70]),
    ("obsidian", [90, 10, 20]),
];

/// A trait component outside [0,100]. Caller misuse, not a classifier fault.
#[derive(Debug, Error)]
#[error("{name} must be between 0 and 100, got {value}")]
pub struct TraitRangeError {
    name: &'static str,
    value: i64,
}

/// A validated point in trait space. Construct via `TraitVector::new`, which
/// rejects out-of-range components instead of clamping them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TraitVector {
    pub structure: i64,
    pub energy: i64,
    pub warmth: i64,
}

impl TraitVector {
    pub fn new(structure: i64, energy: i64, warmth: i64) -> Result<Self, TraitRangeError> {
        for (name, value) in [
            ("structure", structure),
            ("energy", energy),
            ("warmth", warmth),
        ] {
            if !(0..=100).contains(&value) {
                return Err(TraitRangeError { name, value });
            }
        }
        Ok(Self {
            structure,
            energy,
            warmth,
        })
    }

    fn as_array(&self) -> [i64; 3] {
        [self.structure, self.energy, self.warmth]
    }
}

/// Returns the label of the reference point closest to `traits`.
/// Strict `<` while scanning in index order keeps ties on the lowest index.
pub fn classify(traits: &TraitVector) -> &'static str {
    let point = traits.as_array();
    let (mut best_label, first) = ARCHETYPE_REFERENCES[0];
    let mut best_distance = squared_distance(&point, &first);

    for &(label, reference) in &ARCHETYPE_REFERENCES[1..] {
        let distance = squared_distance(&point, &reference);
        if distance < best_distance {
            best_label = label;
            best_distance = distance;
        }
    }

    best_label
}

fn squared_distance(a: &[i64; 3], b: &[i64; 3]) -> i64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_set_has_ten_labeled_points() {
        assert_eq!(ARCHETYPE_REFERENCES.len(), 10);
        assert_eq!(ARCHETYPE_REFERENCES[0].0, "swiss");
        assert_eq!(ARCHETYPE_REFERENCES[9].0, "obsidian");
    }

    #[test]
    fn test_every_reference_point_self_matches() {
        for (label, [s, e, w]) in ARCHETYPE_REFERENCES {
            let traits = TraitVector::new(s, e, w).unwrap();
            assert_eq!(classify(&traits), label, "reference {label} must self-match");
        }
    }

    #[test]
    fn test_pure_structure_matches_swiss() {
        let traits = TraitVector::new(100, 0, 0).unwrap();
        assert_eq!(classify(&traits), "swiss");
    }

    #[test]
    fn test_high_warmth_matches_ethereal() {
        let traits = TraitVector::new(10, 10, 100).unwrap();
        assert_eq!(classify(&traits), "ethereal");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let traits = TraitVector::new(42, 77, 13).unwrap();
        let first = classify(&traits);
        for _ in 0..100 {
            assert_eq!(classify(&traits), first);
        }
    }

    #[test]
    fn test_classify_always_returns_a_known_label() {
        let labels: Vec<&str> = ARCHETYPE_REFERENCES.iter().map(|(l, _)| *l).collect();
        for s in (0..=100).step_by(25) {
            for e in (0..=100).step_by(25) {
                for w in (0..=100).step_by(25) {
                    let traits = TraitVector::new(s, e, w).unwrap();
                    assert!(labels.contains(&classify(&traits)));
                }
            }
        }
    }

    /// [95,5,10] is equidistant from swiss [100,0,0] and obsidian [90,10,20]
    /// (squared distance 150 to both). The lower index wins.
    #[test]
    fn test_equidistant_tie_resolves_to_lowest_index() {
        let traits = TraitVector::new(95, 5, 10).unwrap();
        assert_eq!(classify(&traits), "swiss");
    }

    #[test]
    fn test_out_of_range_components_are_rejected() {
        assert!(TraitVector::new(101, 0, 0).is_err());
        assert!(TraitVector::new(0, -1, 0).is_err());
        assert!(TraitVector::new(0, 0, 1000).is_err());
        assert!(TraitVector::new(0, 0, 100).is_ok());
    }

    #[test]
    fn test_range_error_names_the_offending_trait() {
        let err = TraitVector::new(50, 150, 50).unwrap_err();
        assert!(err.to_string().contains("energy"));
        assert!(err.to_string().contains("150"));
    }
}
