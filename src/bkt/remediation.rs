//! Remediation Resolver - one resource per weak concept
//!
//! Curated concepts resolve from a static table; anything else gets a
//! synthesized search link so resolution never fails.

use serde::Serialize;

const SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

#[derive(Debug, Clone, Copy)]
struct CuratedVideo {
    title: &'static str,
    url: &'static str,
}

const NEWTON_URL: &str = "https://www.youtube.com/watch?v=kKKM8Y-u7ds";
const LIMITS_URL: &str = "https://www.youtube.com/watch?v=riXcZT2ICjA";
const ML_INTRO_URL: &str = "https://www.youtube.com/watch?v=ukzFI9rgwfU";
const REGRESSION_URL: &str = "https://www.youtube.com/watch?v=nk2CQITm_eo";

static REMEDIATION_TABLE: &[(&str, CuratedVideo)] = &[
    (
        "First Law (Inertia)",
        CuratedVideo {
            title: "Newton's First Law - Inertia Deep Dive",
            url: NEWTON_URL,
        },
    ),
    (
        "Second Law (F=ma)",
        CuratedVideo {
            title: "F=ma Problem Solving Masterclass",
            url: NEWTON_URL,
        },
    ),
    (
        "Third Law (Action-Reaction)",
        CuratedVideo {
            title: "Action-Reaction Pairs Explained",
            url: NEWTON_URL,
        },
    ),
    (
        "Friction and Normal Force",
        CuratedVideo {
            title: "Friction Forces - Complete Guide",
            url: NEWTON_URL,
        },
    ),
    (
        "Standard Limits",
        CuratedVideo {
            title: "Standard Limits You Must Know",
            url: LIMITS_URL,
        },
    ),
    (
        "Continuity Definition",
        CuratedVideo {
            title: "Continuity - When Functions Break",
            url: LIMITS_URL,
        },
    ),
    (
        "Euler's Limit",
        CuratedVideo {
            title: "The Number e and Euler's Limit",
            url: LIMITS_URL,
        },
    ),
    (
        "ML Fundamentals",
        CuratedVideo {
            title: "Machine Learning Crash Course",
            url: ML_INTRO_URL,
        },
    ),
    (
        "Supervised vs Unsupervised",
        CuratedVideo {
            title: "Supervised vs Unsupervised Learning Explained",
            url: ML_INTRO_URL,
        },
    ),
    (
        "Overfitting",
        CuratedVideo {
            title: "Overfitting vs Underfitting - How to Fix",
            url: ML_INTRO_URL,
        },
    ),
    (
        "Cost Function",
        CuratedVideo {
            title: "Understanding Cost Functions in ML",
            url: REGRESSION_URL,
        },
    ),
    (
        "Bias-Variance Tradeoff",
        CuratedVideo {
            title: "Bias-Variance Tradeoff Explained Simply",
            url: REGRESSION_URL,
        },
    ),
    (
        "Gradient Descent",
        CuratedVideo {
            title: "Gradient Descent Step by Step",
            url: REGRESSION_URL,
        },
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemediationVideo {
    pub title: String,
    pub url: String,
    pub concept: String,
}

fn curated(concept: &str) -> Option<CuratedVideo> {
    REMEDIATION_TABLE
        .iter()
        .find(|(name, _)| *name == concept)
        .map(|(_, video)| *video)
}

pub fn fallback_video(concept: &str, subject_id: &str, topic_title: &str) -> RemediationVideo {
    let query = format!("{concept} {subject_id} tutorial");
    RemediationVideo {
        title: format!("Remediation: {concept} in {topic_title}"),
        url: format!("{SEARCH_URL}{}", urlencoding::encode(&query)),
        concept: concept.to_string(),
    }
}

pub fn resolve(weak_concepts: &[String], subject_id: &str, topic_title: &str) -> Vec<RemediationVideo> {
    weak_concepts
        .iter()
        .map(|concept| match curated(concept) {
            Some(video) => RemediationVideo {
                title: video.title.to_string(),
                url: video.url.to_string(),
                concept: concept.clone(),
            },
            None => fallback_video(concept, subject_id, topic_title),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_curated_lookup() {
        let videos = resolve(&tags(&["Overfitting"]), "ml", "Intro to ML");
        assert_eq!(
            videos,
            vec![RemediationVideo {
                title: "Overfitting vs Underfitting - How to Fix".to_string(),
                url: ML_INTRO_URL.to_string(),
                concept: "Overfitting".to_string(),
            }]
        );
    }

    #[test]
    fn test_unknown_concept_falls_back_to_search() {
        let videos = resolve(&tags(&["L'Hopital's Rule"]), "calculus", "Limits & Continuity");
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Remediation: L'Hopital's Rule in Limits & Continuity");
        assert_eq!(
            videos[0].url,
            "https://www.youtube.com/results?search_query=L%27Hopital%27s%20Rule%20calculus%20tutorial"
        );
    }

    #[test]
    fn test_one_record_per_concept_in_order() {
        let weak = tags(&["Entropy", "Gradient Descent", "General", "Standard Limits"]);
        let videos = resolve(&weak, "physics", "Thermodynamics");
        let concepts: Vec<&str> = videos.iter().map(|v| v.concept.as_str()).collect();
        assert_eq!(concepts, vec!["Entropy", "Gradient Descent", "General", "Standard Limits"]);
    }

    #[test]
    fn test_fallback_url_has_no_raw_reserved_characters() {
        let video = fallback_video("Second Law / Carnot?&#", "physics", "Thermo");
        let query = video.url.strip_prefix(SEARCH_URL).unwrap();
        assert!(query
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.~%".contains(c)));
    }

    #[test]
    fn test_table_has_no_duplicates() {
        for (idx, (name, _)) in REMEDIATION_TABLE.iter().enumerate() {
            assert!(REMEDIATION_TABLE[idx + 1..].iter().all(|(other, _)| other != name));
        }
        assert!(curated("Cost Function").is_some());
        assert!(curated("cost function").is_none());
    }
}
