//! Line repetition, refrains and verse/chorus structure

use serde::Serialize;
use std::collections::BTreeMap;
use verse_voice_config::FeatureLimits;

/// Case-folded line -> positions where it occurs
pub type RefrainMap = BTreeMap<String, Vec<usize>>;

/// Build a refrain map over lines at least `min_chars` long (after folding)
pub fn refrain_map(lines: &[String], min_chars: usize) -> RefrainMap {
    let mut map = RefrainMap::new();
    for (i, line) in lines.iter().enumerate() {
        let folded = line.trim().to_lowercase();
        if folded.chars().count() >= min_chars {
            map.entry(folded).or_default().push(i);
        }
    }
    map
}

/// Repetition statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepetitionAnalysis {
    /// Distinct lines occurring more than once
    pub refrain_count: usize,
    /// Every counted line with its positions
    pub map: RefrainMap,
}

impl RepetitionAnalysis {
    /// Lines that repeat, with their positions
    pub fn refrains(&self) -> impl Iterator<Item = (&String, &Vec<usize>)> {
        self.map.iter().filter(|(_, positions)| positions.len() > 1)
    }
}

/// Count refrains (lines repeated verbatim, ignoring case)
pub fn analyze_repetition(lines: &[String], limits: &FeatureLimits) -> RepetitionAnalysis {
    let map = refrain_map(lines, limits.refrain_min_chars);
    let refrain_count = map.values().filter(|positions| positions.len() > 1).count();
    RepetitionAnalysis { refrain_count, map }
}

/// Detect a chorus recurring every few lines
///
/// A line that comes back after a gap inside the configured range suggests
/// verse/chorus alternation.
pub fn detect_verse_chorus(lines: &[String], limits: &FeatureLimits) -> bool {
    if lines.len() < limits.periodicity_min_lines {
        return false;
    }

    let gap_range = limits.chorus_gap_min..=limits.chorus_gap_max;
    refrain_map(lines, limits.periodicity_min_chars)
        .values()
        .filter(|positions| positions.len() >= 2)
        .any(|positions| {
            positions
                .windows(2)
                .any(|pair| gap_range.contains(&(pair[1] - pair[0])))
        })
}

/// Detect ABAB or AABA shapes within consecutive groups of four lines
///
/// Diagnostic only; the classifier does not weigh it.
pub fn detect_song_structure(lines: &[String]) -> bool {
    if lines.len() < 4 {
        return false;
    }

    let folded: Vec<String> = lines.iter().map(|l| l.trim().to_lowercase()).collect();
    folded.chunks_exact(4).any(|group| {
        let abab = group[0] == group[2] || group[1] == group[3];
        let aaba = group[0] == group[1] && group[1] == group[3];
        abab || aaba
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_refrain_count_is_case_insensitive() {
        let limits = FeatureLimits::default();
        let text = lines(&[
            "Bajo la luz de la luna",
            "Cantando nuestra canción",
            "bajo la luz de la LUNA",
            "Late fuerte el corazón",
        ]);
        let result = analyze_repetition(&text, &limits);
        assert_eq!(result.refrain_count, 1);

        let refrains: Vec<_> = result.refrains().collect();
        assert_eq!(refrains.len(), 1);
        assert_eq!(refrains[0].0, "bajo la luz de la luna");
        assert_eq!(refrains[0].1, &vec![0, 2]);
    }

    #[test]
    fn test_short_lines_never_refrains() {
        let limits = FeatureLimits::default();
        assert_eq!(analyze_repetition(&lines(&["abc", "abc"]), &limits).refrain_count, 0);
        assert_eq!(analyze_repetition(&lines(&["Oh!", "oh!"]), &limits).refrain_count, 0);
        assert_eq!(analyze_repetition(&lines(&["abcd", "abcd"]), &limits).refrain_count, 1);
    }

    #[test]
    fn test_verse_chorus_gap() {
        let limits = FeatureLimits::default();
        let text = lines(&[
            "Canta conmigo esta noche",
            "verso uno",
            "verso dos",
            "Canta conmigo esta noche",
            "verso tres",
            "verso cuatro",
        ]);
        assert!(detect_verse_chorus(&text, &limits));
    }

    #[test]
    fn test_verse_chorus_requires_six_lines() {
        let limits = FeatureLimits::default();
        let text = lines(&[
            "Canta conmigo esta noche",
            "verso uno",
            "verso dos",
            "Canta conmigo esta noche",
            "verso tres",
        ]);
        assert!(!detect_verse_chorus(&text, &limits));
    }

    #[test]
    fn test_verse_chorus_widest_gap() {
        let limits = FeatureLimits::default();
        let verses = [
            "verso uno",
            "verso dos",
            "verso tres",
            "verso cuatro",
            "verso cinco",
            "verso seis",
            "verso siete",
            "verso ocho",
        ];
        let chorus_after = |gap: usize| {
            let mut text = vec!["Canta conmigo esta noche"];
            text.extend(&verses[..gap - 1]);
            text.push("Canta conmigo esta noche");
            lines(&text)
        };

        assert!(detect_verse_chorus(&chorus_after(8), &limits));
        assert!(!detect_verse_chorus(&chorus_after(9), &limits));
    }

    #[test]
    fn test_verse_chorus_ignores_short_lines() {
        let limits = FeatureLimits::default();
        let five = lines(&["abcde", "uno", "dos", "abcde", "tres", "cuatro"]);
        assert!(!detect_verse_chorus(&five, &limits));

        let six = lines(&["abcdef", "uno", "dos", "abcdef", "tres", "cuatro"]);
        assert!(detect_verse_chorus(&six, &limits));
    }

    #[test]
    fn test_adjacent_repeats_are_not_a_chorus() {
        let limits = FeatureLimits::default();
        let text = lines(&[
            "En el cielo las estrellas",
            "En el cielo las estrellas",
            "Brillan con amor",
            "Brillan con amor",
            "Canta conmigo esta canción",
            "Canta conmigo esta canción",
        ]);
        assert!(!detect_verse_chorus(&text, &limits));
    }

    #[test]
    fn test_song_structure() {
        assert!(detect_song_structure(&lines(&["a", "b", "A", "c"])));
        assert!(detect_song_structure(&lines(&["x", "x", "y", "x"])));
        assert!(!detect_song_structure(&lines(&["a", "b", "c", "d", "a"])));
        assert!(!detect_song_structure(&lines(&["a", "b", "a"])));
    }
}
