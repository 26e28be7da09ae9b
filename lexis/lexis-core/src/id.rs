//! Human-readable identifiers for synsets and lemmas.
//!
//! A synset is named `<first-lemma>.<pos>.<NN>` (`dog.n.01`) and a lemma is
//! named `<synset-id>.<surface-form>` (`dog.n.01.dog`). Surface forms may
//! themselves contain dots (`st._john's_wort`, `.22_caliber`), so a synset
//! identifier is split at its last two dots and a lemma identifier at the
//! first `.<pos>.<NN>.` sense marker.

use crate::error::{LexisError, Result};
use crate::types::PartOfSpeech;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static SENSE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.[nvasr]\.\d+\.").expect("sense marker pattern is valid")
});

/// Canonical identifier of a synset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SynsetName {
    lemma: String,
    pos: PartOfSpeech,
    sense: u32,
}

impl SynsetName {
    pub fn new(lemma: impl Into<String>, pos: PartOfSpeech, sense: u32) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
            sense,
        }
    }

    /// Parse a `<lemma>.<pos>.<NN>` identifier.
    ///
    /// The sense number must already be in canonical form (at least two
    /// digits, no extra leading zeros), so a parsed name always displays as
    /// the text it was parsed from.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || {
            LexisError::invalid_identifier(format!(
                "'{}' is not a synset identifier of the form <lemma>.<pos>.<NN>",
                s
            ))
        };

        let mut parts = s.rsplitn(3, '.');
        let sense = parts.next().ok_or_else(invalid)?;
        let pos = parts.next().ok_or_else(invalid)?;
        let lemma = parts.next().ok_or_else(invalid)?;

        if lemma.is_empty() || sense.is_empty() || !sense.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut pos_chars = pos.chars();
        let pos = match (pos_chars.next(), pos_chars.next()) {
            (Some(c), None) => PartOfSpeech::from_letter(c).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };

        let raw_sense = sense;
        let sense = sense.parse::<u32>().map_err(|_| invalid())?;
        if format!("{:02}", sense) != raw_sense {
            return Err(invalid());
        }

        Ok(Self::new(lemma, pos, sense))
    }

    /// The lemma the name was formed from.
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    pub fn sense(&self) -> u32 {
        self.sense
    }
}

impl fmt::Display for SynsetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{:02}", self.lemma, self.pos.letter(), self.sense)
    }
}

impl FromStr for SynsetName {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for SynsetName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SynsetName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Identifier of a lemma: its synset plus the surface form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LemmaName {
    synset: SynsetName,
    form: String,
}

impl LemmaName {
    pub fn new(synset: SynsetName, form: impl Into<String>) -> Self {
        Self {
            synset,
            form: form.into(),
        }
    }

    /// Parse a `<synset-id>.<surface-form>` identifier.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || {
            LexisError::invalid_identifier(format!(
                "'{}' is not a lemma identifier of the form <synset-id>.<form>",
                s
            ))
        };

        let marker = SENSE_MARKER.find(s).ok_or_else(invalid)?;
        let synset = SynsetName::parse(&s[..marker.end() - 1])?;
        let form = &s[marker.end()..];
        if form.is_empty() {
            return Err(invalid());
        }

        Ok(Self::new(synset, form))
    }

    pub fn synset(&self) -> &SynsetName {
        &self.synset
    }

    /// The surface form.
    pub fn form(&self) -> &str {
        &self.form
    }
}

impl fmt::Display for LemmaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.synset, self.form)
    }
}

impl FromStr for LemmaName {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for LemmaName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LemmaName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
