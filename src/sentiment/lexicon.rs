//! Sentiment lexicon: lowercased word -> integer score in [-5, 5].
//!
//! A compact AFINN-style default is embedded so the scorer works out of the
//! box; the full AFINN-111 list (or any `word<TAB>score` file) can be loaded
//! with the `data-loading` feature.

use fxhash::FxHashMap;

#[cfg(feature = "data-loading")]
use std::path::Path;

#[cfg(feature = "data-loading")]
use crate::utils::error::{LexiconError, LexiconResult};

/// Embedded default word list, an AFINN-style subset weighted towards the
/// vocabulary of paper abstracts.
static DEFAULT_LEXICON: phf::Map<&'static str, i32> = phf::phf_map! {
    "abandon" => -2,
    "abuse" => -3,
    "accept" => 1,
    "accepted" => 1,
    "accurate" => 2,
    "achieve" => 2,
    "achieved" => 2,
    "achievement" => 2,
    "advantage" => 2,
    "advantages" => 2,
    "ambitious" => 2,
    "amazing" => 4,
    "avoid" => -1,
    "awesome" => 4,
    "awful" => -3,
    "bad" => -3,
    "benefit" => 2,
    "benefits" => 2,
    "best" => 3,
    "better" => 2,
    "block" => -1,
    "breakthrough" => 3,
    "brilliant" => 4,
    "broken" => -1,
    "catastrophic" => -4,
    "challenge" => -1,
    "challenges" => -1,
    "clear" => 1,
    "clearly" => 1,
    "confuse" => -2,
    "confusing" => -2,
    "conflict" => -2,
    "crisis" => -3,
    "critical" => -2,
    "damage" => -3,
    "danger" => -2,
    "dead" => -3,
    "defect" => -3,
    "defects" => -3,
    "difficult" => -1,
    "doubt" => -1,
    "easy" => 1,
    "effective" => 2,
    "effectively" => 2,
    "elegant" => 2,
    "error" => -2,
    "errors" => -2,
    "excellent" => 3,
    "exceptional" => 3,
    "fail" => -2,
    "failed" => -2,
    "fails" => -2,
    "failure" => -2,
    "failures" => -2,
    "fake" => -3,
    "fast" => 1,
    "fault" => -2,
    "faults" => -2,
    "fraud" => -4,
    "free" => 1,
    "gain" => 2,
    "gains" => 2,
    "good" => 3,
    "great" => 3,
    "greater" => 3,
    "greatest" => 3,
    "hard" => -1,
    "harm" => -2,
    "harmful" => -2,
    "help" => 2,
    "helpful" => 2,
    "helps" => 2,
    "ignore" => -1,
    "ignored" => -2,
    "important" => 2,
    "impossible" => -2,
    "improve" => 2,
    "improved" => 2,
    "improvement" => 2,
    "improvements" => 2,
    "improves" => 2,
    "improving" => 2,
    "inability" => -2,
    "inadequate" => -2,
    "incorrect" => -2,
    "ineffective" => -2,
    "innovative" => 2,
    "insufficient" => -2,
    "interesting" => 2,
    "lack" => -2,
    "lacking" => -1,
    "limit" => -1,
    "limitation" => -1,
    "limitations" => -1,
    "limited" => -1,
    "lose" => -3,
    "loss" => -3,
    "lost" => -3,
    "meaningful" => 2,
    "mislead" => -3,
    "misleading" => -3,
    "missing" => -2,
    "mistake" => -2,
    "mistakes" => -2,
    "negative" => -2,
    "notable" => 2,
    "novel" => 2,
    "outstanding" => 5,
    "perfect" => 3,
    "poor" => -2,
    "positive" => 2,
    "powerful" => 2,
    "problem" => -2,
    "problems" => -2,
    "progress" => 2,
    "promising" => 2,
    "reliable" => 2,
    "risk" => -2,
    "risks" => -2,
    "robust" => 2,
    "severe" => -2,
    "significance" => 1,
    "solid" => 2,
    "solution" => 1,
    "solutions" => 1,
    "solve" => 2,
    "solved" => 2,
    "solves" => 1,
    "strength" => 2,
    "strong" => 2,
    "struggle" => -2,
    "substantial" => 1,
    "succeed" => 3,
    "success" => 2,
    "successful" => 3,
    "successfully" => 3,
    "superb" => 5,
    "superior" => 2,
    "support" => 2,
    "supports" => 2,
    "terrible" => -3,
    "threat" => -2,
    "threats" => -2,
    "useful" => 2,
    "useless" => -2,
    "valuable" => 2,
    "weak" => -2,
    "weakness" => -2,
    "weaknesses" => -2,
    "win" => 4,
    "worse" => -3,
    "worst" => -3,
    "wrong" => -2,
};

/// Read-only word -> score table consulted by the scorer.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: FxHashMap<String, i32>,
}

impl Lexicon {
    /// The embedded AFINN-style default.
    pub fn afinn() -> Self {
        Self {
            entries: DEFAULT_LEXICON
                .entries()
                .map(|(word, score)| (word.to_string(), *score))
                .collect(),
        }
    }

    /// Build a lexicon from `(word, score)` pairs. Words are lowercased;
    /// later duplicates win.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(word, score)| (word.into().to_lowercase(), score))
                .collect(),
        }
    }

    /// Score for an already-lowercased word.
    pub fn score_of(&self, word: &str) -> Option<i32> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a `word<TAB>score` list such as the AFINN-111 distribution file.
    #[cfg(feature = "data-loading")]
    pub fn from_tsv_path(path: impl AsRef<Path>) -> LexiconResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_tsv_reader(file)
    }

    /// Load `word<TAB>score` records from any reader.
    #[cfg(feature = "data-loading")]
    pub fn from_tsv_reader<R: std::io::Read>(reader: R) -> LexiconResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut entries = FxHashMap::default();
        for (index, record) in csv_reader.records().enumerate() {
            let line = index as u64 + 1;
            let record = record.map_err(|e| LexiconError::parse_at(e.to_string(), line))?;
            let word = record
                .get(0)
                .ok_or_else(|| LexiconError::parse_at("missing word field", line))?;
            let score: i64 = record
                .get(1)
                .ok_or_else(|| LexiconError::parse_at("missing score field", line))?
                .trim()
                .parse()
                .map_err(|_| LexiconError::parse_at("score is not an integer", line))?;
            if !(-5..=5).contains(&score) {
                return Err(LexiconError::ScoreOutOfRange {
                    word: word.to_string(),
                    score,
                });
            }
            entries.insert(word.to_lowercase(), score as i32);
        }
        Ok(Self { entries })
    }
}
