//! Content classification
//!
//! An ordered decision table over [`LineFeatures`]. Rules are tried in
//! order and the first one that matches decides the category; text no rule
//! claims is [`ContentCategory::Generic`].
//!
//! Song comes first because song lyrics routinely carry poem signals
//! (rhyme, emotive words, even line lengths) while the reverse is rare.

use serde::Serialize;
use verse_voice_config::AnalysisConfig;
use verse_voice_core::ContentCategory;

use crate::features::LineFeatures;

/// Outcome of one rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleVerdict {
    pub matched: bool,
    /// Indicator score the rule computed, matched or not
    pub score: i32,
    /// Signals that fired
    pub notes: Vec<String>,
}

/// One row of the decision table
#[derive(Clone, Copy)]
pub struct ClassificationRule {
    pub category: ContentCategory,
    pub name: &'static str,
    pub evaluate: fn(&LineFeatures, &AnalysisConfig) -> RuleVerdict,
}

/// Rules in precedence order
pub const DECISION_TABLE: [ClassificationRule; 3] = [
    ClassificationRule {
        category: ContentCategory::Song,
        name: "song",
        evaluate: evaluate_song,
    },
    ClassificationRule {
        category: ContentCategory::Poem,
        name: "poem",
        evaluate: evaluate_poem,
    },
    ClassificationRule {
        category: ContentCategory::Narrative,
        name: "narrative",
        evaluate: evaluate_narrative,
    },
];

/// Classifier result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub category: ContentCategory,
    /// Score of the deciding rule (0 for generic text)
    pub score: i32,
    pub notes: Vec<String>,
    /// Computed for every category
    pub has_rhyme_pattern: bool,
    pub line_count: usize,
}

/// Weighted song score
pub fn evaluate_song(features: &LineFeatures, config: &AnalysisConfig) -> RuleVerdict {
    let rules = &config.song;
    let lexical = &features.lexical;
    let mut verdict = RuleVerdict::default();

    if lexical.direct_musical > 0 {
        verdict.score += rules.direct_vocabulary_weight;
        verdict.notes.push(format!("direct musical vocabulary ({})", lexical.direct_musical));
    }
    if lexical.interjection_lines >= rules.min_interjection_lines {
        verdict.score += rules.interjection_weight;
        verdict
            .notes
            .push(format!("interjections on {} lines", lexical.interjection_lines));
    }
    if features.refrain_count > 0 {
        verdict.score += rules.refrain_weight;
        verdict.notes.push(format!("{} repeated line(s)", features.refrain_count));
    }
    if features.has_periodicity {
        verdict.score += rules.periodicity_weight;
        verdict.notes.push("verse/chorus periodicity".to_string());
    }
    if lexical.exclusive_musical > 0 {
        verdict.score += rules.exclusive_vocabulary_weight;
        verdict.notes.push("rhythm and dance vocabulary".to_string());
    }
    if features.shape.short_line_count >= rules.min_short_lines {
        verdict.score += rules.short_line_weight;
        verdict.notes.push("short rhythmic lines".to_string());
    }
    if lexical.narrative_penalty_hits >= rules.narrative_penalty_min_hits {
        verdict.score -= rules.narrative_penalty;
        verdict.notes.push("narrative penalty".to_string());
    }

    // Ambiguous words only reinforce a score that already has support
    if verdict.score >= rules.ambiguous_gate && lexical.ambiguous_musical > 0 {
        let bonus = (lexical.ambiguous_musical as i32).min(rules.ambiguous_max_bonus);
        verdict.score += bonus;
    }

    verdict.matched =
        features.line_count >= rules.min_lines && verdict.score >= rules.score_threshold;
    verdict
}

/// Poem indicator count, vetoed by song cues
pub fn evaluate_poem(features: &LineFeatures, config: &AnalysisConfig) -> RuleVerdict {
    let rules = &config.poem;
    let mut verdict = RuleVerdict::default();

    if features.line_count < rules.min_lines {
        return verdict;
    }

    if features.shape.similar_length_ratio > rules.similar_length_ratio {
        verdict.score += rules.similar_length_weight;
        verdict.notes.push("even line lengths".to_string());
    }
    if features.rhyme.has_rhyme_pattern {
        verdict.score += rules.rhyme_weight;
        verdict.notes.push(format!("{} rhyming pair(s)", features.rhyme.pair_count));
    }
    if features.lexical.poetic >= rules.poetic_min_hits {
        verdict.score += rules.poetic_weight;
        verdict.notes.push("poetic vocabulary".to_string());
    }
    if features.has_stanza_breaks {
        verdict.score += rules.stanza_weight;
        verdict.notes.push("stanza breaks".to_string());
    }
    if features.shape.medium_line_ratio > rules.medium_line_ratio {
        verdict.score += rules.medium_line_weight;
        verdict.notes.push("medium-length lines".to_string());
    }

    if features.lexical.strong_song_cues > 0 || features.refrain_count > 0 {
        verdict.notes.push("vetoed by song cues".to_string());
        return verdict;
    }

    verdict.matched = verdict.score >= rules.indicator_threshold;
    verdict
}

/// Any narrative marker phrase
pub fn evaluate_narrative(features: &LineFeatures, _config: &AnalysisConfig) -> RuleVerdict {
    let hits = features.lexical.narrative_markers;
    RuleVerdict {
        matched: hits > 0,
        score: hits as i32,
        notes: if hits > 0 {
            vec![format!("{} narrative marker(s)", hits)]
        } else {
            Vec::new()
        },
    }
}

/// Classify extracted features. Total: always yields a category.
pub fn classify(features: &LineFeatures, config: &AnalysisConfig) -> Classification {
    let decided = DECISION_TABLE.iter().find_map(|rule| {
        let verdict = (rule.evaluate)(features, config);
        tracing::trace!(
            rule = rule.name,
            matched = verdict.matched,
            score = verdict.score,
            "Evaluated classification rule"
        );
        verdict.matched.then(|| (rule, verdict))
    });

    let (category, score, notes) = match decided {
        Some((rule, verdict)) => {
            let mut notes = vec![format!("classified as {}", rule.name)];
            notes.extend(verdict.notes);
            (rule.category, verdict.score, notes)
        }
        None => (
            ContentCategory::Generic,
            0,
            vec!["general text, standard settings".to_string()],
        ),
    };

    Classification {
        category,
        score,
        notes,
        has_rhyme_pattern: features.rhyme.has_rhyme_pattern,
        line_count: features.line_count,
    }
}
