use std::collections::BTreeSet;

use wellpath_core::models::context::Recommendation;

use crate::payload::RecommendationInput;

/// Normalize upstream recommendations.
///
/// Strings become a title with an empty description. Objects take their
/// title from `title` then `heading`, and their description from `body`,
/// `description`, then `text`. A missing title becomes `"<prefix> N"`,
/// numbered from 1 by position.
pub fn normalize_recommendations(inputs: &[RecommendationInput], title_prefix: &str) -> Vec<Recommendation> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| match input {
            RecommendationInput::Text(text) => Recommendation {
                title: text.trim().to_string(),
                description: String::new(),
            },
            RecommendationInput::Entry(entry) => {
                let title = first_present([&entry.title, &entry.heading])
                    .unwrap_or_else(|| format!("{title_prefix} {}", i + 1));
                let description =
                    first_present([&entry.body, &entry.description, &entry.text]).unwrap_or_default();
                Recommendation { title, description }
            }
        })
        .collect()
}

/// Trim, drop blanks and de-duplicate lab suggestions.
///
/// Set semantics: the result is sorted, not in first-seen order. That is
/// fine for advisory bullets; callers that need the original order must
/// not rely on this.
pub fn normalize_labs(labs: &[String]) -> Vec<String> {
    labs.iter()
        .map(|lab| lab.trim())
        .filter(|lab| !lab.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn first_present<const N: usize>(candidates: [&Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
