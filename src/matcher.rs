//! First-match lookup of titles against the scanned candidates.
//!
//! Linear scan per title (titles × candidates). Candidates stay available
//! after being matched, so several titles may resolve to the same file.

use log::debug;

use crate::models::{Candidate, CopyPlan, MatchOutcome, TitleEntry};
use crate::normalize::{contains_key, normalize};

/// Build the destination file name for a matched title.
/// Path separators in the composed name are replaced with `-`.
pub fn output_name(index: usize, title: &str, ext: &str) -> String {
    format!("{}. {}.{}", index, title, ext).replace(['/', '\\'], "-")
}

pub struct Matcher<'a> {
    candidates: &'a [Candidate],
    ext: String,
}

impl<'a> Matcher<'a> {
    pub fn new(candidates: &'a [Candidate], ext: &str) -> Self {
        Self {
            candidates,
            ext: ext.to_string(),
        }
    }

    /// First candidate, in discovery order, whose stem contains `key`.
    pub fn first_hit(&self, key: &str) -> Option<&'a Candidate> {
        self.candidates
            .iter()
            .find(|c| contains_key(&c.stem_norm, key))
    }

    /// Every candidate whose stem contains `key`, in discovery order.
    pub fn hits(&self, key: &str) -> Vec<&'a Candidate> {
        self.candidates
            .iter()
            .filter(|c| contains_key(&c.stem_norm, key))
            .collect()
    }

    pub fn resolve(&self, entry: &TitleEntry) -> MatchOutcome {
        let key = normalize(&entry.title);
        let hit = self.first_hit(&key);
        debug!(
            "#{} {:?} key={:?} -> {:?}",
            entry.index,
            entry.title,
            key,
            hit.map(|c| &c.path)
        );
        match hit {
            Some(candidate) => MatchOutcome::Copy(CopyPlan {
                index: entry.index,
                title: entry.title.clone(),
                dest_name: output_name(entry.index, &entry.title, &self.ext),
                source: candidate.path.clone(),
            }),
            None => MatchOutcome::Miss {
                index: entry.index,
                title: entry.title.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(index: usize, title: &str) -> TitleEntry {
        TitleEntry { index, title: title.to_string() }
    }

    fn source_of(outcome: MatchOutcome) -> Option<PathBuf> {
        match outcome {
            MatchOutcome::Copy(plan) => Some(plan.source),
            MatchOutcome::Miss { .. } => None,
        }
    }

    #[test]
    fn test_output_name() {
        assert_eq!(
            output_name(1, "Eye of the Beholder (2024)", "crt"),
            "1. Eye of the Beholder (2024).crt"
        );
        assert_eq!(output_name(12, "AC/DC Rock\\Roll", "crt"), "12. AC-DC Rock-Roll.crt");
    }

    #[test]
    fn test_first_match_wins() {
        let candidates = vec![
            Candidate::new("elite cr", "/src/A/Elite [cr].crt"),
            Candidate::new("elite", "/src/B/Elite.crt"),
        ];
        let matcher = Matcher::new(&candidates, "crt");
        assert_eq!(
            source_of(matcher.resolve(&entry(1, "Elite"))),
            Some(PathBuf::from("/src/A/Elite [cr].crt"))
        );
        assert_eq!(matcher.hits("elite").len(), 2);
    }

    #[test]
    fn test_empty_key_never_matches() {
        let candidates = vec![
            Candidate::new("", "/src/.crt"),
            Candidate::new("elite", "/src/Elite.crt"),
        ];
        let matcher = Matcher::new(&candidates, "crt");
        let outcome = matcher.resolve(&entry(3, "!!! (1999)"));
        assert_eq!(outcome, MatchOutcome::Miss { index: 3, title: "!!! (1999)".to_string() });
        assert!(matcher.hits("").is_empty());
    }

    #[test]
    fn test_reuse_tolerance() {
        let candidates = vec![Candidate::new("summer games ii", "/src/Summer Games II.crt")];
        let matcher = Matcher::new(&candidates, "crt");
        let first = source_of(matcher.resolve(&entry(1, "Summer Games")));
        let second = source_of(matcher.resolve(&entry(2, "Summer Games II (1985)")));
        assert_eq!(first, Some(PathBuf::from("/src/Summer Games II.crt")));
        assert_eq!(first, second);
    }

    #[test]
    fn test_substring_not_token_match() {
        let candidates = vec![Candidate::new("pitstop ii", "/src/Pitstop II.crt")];
        let matcher = Matcher::new(&candidates, "crt");
        // "stop" is contained mid-word, which still counts
        assert!(source_of(matcher.resolve(&entry(1, "Stop"))).is_some());
        // Key longer than the stem never matches
        assert!(source_of(matcher.resolve(&entry(2, "Pitstop II Deluxe"))).is_none());
    }

    #[test]
    fn test_end_to_end_plan() {
        let candidates = vec![Candidate::new(
            "eye of the beholder",
            "/src/Eye of the Beholder.crt",
        )];
        let matcher = Matcher::new(&candidates, "crt");
        let outcomes: Vec<MatchOutcome> = [
            entry(1, "Eye of the Beholder (2024)"),
            entry(2, "NoSuchGame"),
        ]
        .iter()
        .map(|e| matcher.resolve(e))
        .collect();

        assert_eq!(
            outcomes[0],
            MatchOutcome::Copy(CopyPlan {
                index: 1,
                title: "Eye of the Beholder (2024)".to_string(),
                dest_name: "1. Eye of the Beholder (2024).crt".to_string(),
                source: PathBuf::from("/src/Eye of the Beholder.crt"),
            })
        );
        assert_eq!(outcomes[1], MatchOutcome::Miss { index: 2, title: "NoSuchGame".to_string() });
    }
}
