//! Concept Aggregator - per-tag accuracy and weak-concept flags

use serde::Serialize;

pub const DEFAULT_CONCEPT: &str = "General";
const WEAK_ACCURACY: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptStat {
    pub correct_count: u32,
    pub total_count: u32,
}

impl ConceptStat {
    pub fn accuracy(&self) -> f64 {
        self.correct_count as f64 / self.total_count as f64
    }

    /// Strictly below 50%; exactly half is not weak.
    pub fn is_weak(&self) -> bool {
        self.accuracy() < WEAK_ACCURACY
    }
}

/// Tag for observation `idx`. Missing or empty tags map to `"General"`.
pub fn concept_at(concepts: &[String], idx: usize) -> &str {
    match concepts.get(idx).map(|tag| tag.as_str()) {
        Some(tag) if !tag.is_empty() => tag,
        _ => DEFAULT_CONCEPT,
    }
}

/// Accumulates stats per tag in first-seen order. Iteration is driven by
/// `responses`; `concepts` is only read by index.
pub fn concept_stats(responses: &[bool], concepts: &[String]) -> Vec<(String, ConceptStat)> {
    let mut stats: Vec<(String, ConceptStat)> = Vec::new();

    for (idx, &correct) in responses.iter().enumerate() {
        let tag = concept_at(concepts, idx);
        let pos = match stats.iter().position(|(name, _)| name == tag) {
            Some(pos) => pos,
            None => {
                stats.push((tag.to_string(), ConceptStat::default()));
                stats.len() - 1
            }
        };
        let stat = &mut stats[pos].1;
        stat.total_count += 1;
        if correct {
            stat.correct_count += 1;
        }
    }

    stats
}

pub fn weak_concepts(responses: &[bool], concepts: &[String]) -> Vec<String> {
    concept_stats(responses, concepts)
        .into_iter()
        .filter(|(_, stat)| stat.is_weak())
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_half_correct_is_not_weak() {
        let weak = weak_concepts(&[true, false], &tags(&["A", "A"]));
        assert!(weak.is_empty());
    }

    #[test]
    fn test_boundary_cases() {
        let responses = [true, false, false, false, true, true];
        let concepts = tags(&["Half", "Half", "None", "None", "All", "All"]);
        assert_eq!(weak_concepts(&responses, &concepts), vec!["None".to_string()]);
    }

    #[test]
    fn test_first_seen_order() {
        let responses = [false, true, false, false, false];
        let concepts = tags(&["Z", "M", "A", "M", "Z"]);
        let stats = concept_stats(&responses, &concepts);
        let names: Vec<&str> = stats.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Z", "M", "A"]);
        assert_eq!(weak_concepts(&responses, &concepts), tags(&["Z", "A"]));
    }

    #[test]
    fn test_missing_and_empty_tags_default_to_general() {
        let responses = [false, false, true];
        let concepts = tags(&["", ""]);
        let stats = concept_stats(&responses, &concepts);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].0, DEFAULT_CONCEPT);
        assert_eq!(
            stats[0].1,
            ConceptStat {
                correct_count: 1,
                total_count: 3
            }
        );
    }

    #[test]
    fn test_whitespace_tag_is_its_own_concept() {
        let stats = concept_stats(&[false, true], &tags(&["  ", ""]));
        let names: Vec<&str> = stats.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["  ", DEFAULT_CONCEPT]);
    }

    #[test]
    fn test_extra_concepts_are_ignored() {
        let stats = concept_stats(&[true], &tags(&["A", "B", "C"]));
        assert_eq!(stats.len(), 1);
    }
}
