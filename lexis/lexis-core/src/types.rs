//! Shared vocabulary types: parts of speech, relation kinds and depth bounds.

use crate::error::{LexisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Part of speech of a synset.
///
/// Serialized as the single letter used in synset identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "s")]
    AdjectiveSatellite,
    #[serde(rename = "r")]
    Adverb,
}

impl PartOfSpeech {
    /// Every part of speech, in identifier-letter order n, v, a, s, r.
    pub const ALL: [PartOfSpeech; 5] = [
        Self::Noun,
        Self::Verb,
        Self::Adjective,
        Self::AdjectiveSatellite,
        Self::Adverb,
    ];

    /// The identifier letter (`n`, `v`, `a`, `s`, `r`).
    pub fn letter(&self) -> char {
        match self {
            Self::Noun => 'n',
            Self::Verb => 'v',
            Self::Adjective => 'a',
            Self::AdjectiveSatellite => 's',
            Self::Adverb => 'r',
        }
    }

    /// Parse an identifier letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'n' => Some(Self::Noun),
            'v' => Some(Self::Verb),
            'a' => Some(Self::Adjective),
            's' => Some(Self::AdjectiveSatellite),
            'r' => Some(Self::Adverb),
            _ => None,
        }
    }

    /// Dense index, used for per-part-of-speech tables.
    pub fn index(&self) -> usize {
        match self {
            Self::Noun => 0,
            Self::Verb => 1,
            Self::Adjective => 2,
            Self::AdjectiveSatellite => 3,
            Self::Adverb => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::AdjectiveSatellite => "adjective-satellite",
            Self::Adverb => "adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for PartOfSpeech {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        let mut chars = lowered.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(pos) = Self::from_letter(c) {
                return Ok(pos);
            }
        }

        match lowered.as_str() {
            "noun" => Ok(Self::Noun),
            "verb" => Ok(Self::Verb),
            "adj" | "adjective" => Ok(Self::Adjective),
            "adj-sat" | "adjective-satellite" | "satellite" => Ok(Self::AdjectiveSatellite),
            "adv" | "adverb" => Ok(Self::Adverb),
            _ => Err(LexisError::invalid_identifier(format!(
                "Invalid part of speech '{}'. Must be one of: n, v, a, s, r",
                s
            ))),
        }
    }
}

/// Typed relation between two synsets or two lemmas.
///
/// The set is closed: every traversal selects its edges through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    // Taxonomic
    Hypernym,
    InstanceHypernym,
    Hyponym,
    InstanceHyponym,
    // Part-whole
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    // Semantic
    Entailment,
    Cause,
    AlsoSee,
    VerbGroup,
    SimilarTo,
    Attribute,
    // Domain
    TopicDomain,
    RegionDomain,
    UsageDomain,
    InTopicDomain,
    InRegionDomain,
    InUsageDomain,
    // Lemma only
    Antonym,
    DerivationallyRelatedForm,
    Pertainym,
}

impl RelationKind {
    pub const ALL: [RelationKind; 25] = [
        Self::Hypernym,
        Self::InstanceHypernym,
        Self::Hyponym,
        Self::InstanceHyponym,
        Self::MemberHolonym,
        Self::SubstanceHolonym,
        Self::PartHolonym,
        Self::MemberMeronym,
        Self::SubstanceMeronym,
        Self::PartMeronym,
        Self::Entailment,
        Self::Cause,
        Self::AlsoSee,
        Self::VerbGroup,
        Self::SimilarTo,
        Self::Attribute,
        Self::TopicDomain,
        Self::RegionDomain,
        Self::UsageDomain,
        Self::InTopicDomain,
        Self::InRegionDomain,
        Self::InUsageDomain,
        Self::Antonym,
        Self::DerivationallyRelatedForm,
        Self::Pertainym,
    ];

    /// Edges followed when walking up the taxonomy.
    pub const UPWARD: [RelationKind; 2] = [Self::Hypernym, Self::InstanceHypernym];

    /// Dense index into fixed-size edge tables.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The kind that every edge of this kind is mirrored by.
    ///
    /// `None` for directional kinds (entailment, cause, pertainym), which the
    /// lexical database records one way only.
    pub fn inverse(&self) -> Option<RelationKind> {
        let inverse = match self {
            Self::Hypernym => Self::Hyponym,
            Self::Hyponym => Self::Hypernym,
            Self::InstanceHypernym => Self::InstanceHyponym,
            Self::InstanceHyponym => Self::InstanceHypernym,
            Self::MemberHolonym => Self::MemberMeronym,
            Self::MemberMeronym => Self::MemberHolonym,
            Self::SubstanceHolonym => Self::SubstanceMeronym,
            Self::SubstanceMeronym => Self::SubstanceHolonym,
            Self::PartHolonym => Self::PartMeronym,
            Self::PartMeronym => Self::PartHolonym,
            Self::TopicDomain => Self::InTopicDomain,
            Self::InTopicDomain => Self::TopicDomain,
            Self::RegionDomain => Self::InRegionDomain,
            Self::InRegionDomain => Self::RegionDomain,
            Self::UsageDomain => Self::InUsageDomain,
            Self::InUsageDomain => Self::UsageDomain,
            Self::AlsoSee
            | Self::VerbGroup
            | Self::SimilarTo
            | Self::Attribute
            | Self::Antonym
            | Self::DerivationallyRelatedForm => *self,
            Self::Entailment | Self::Cause | Self::Pertainym => return None,
        };
        Some(inverse)
    }

    /// Kinds that only connect lemmas, never synsets.
    pub fn is_lemma_only(&self) -> bool {
        matches!(
            self,
            Self::Antonym | Self::DerivationallyRelatedForm | Self::Pertainym
        )
    }

    /// Relation kinds valid between synsets.
    pub fn synset_kinds() -> impl Iterator<Item = RelationKind> {
        Self::ALL.into_iter().filter(|kind| !kind.is_lemma_only())
    }

    /// The snake_case name used in snapshots and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hypernym => "hypernym",
            Self::InstanceHypernym => "instance_hypernym",
            Self::Hyponym => "hyponym",
            Self::InstanceHyponym => "instance_hyponym",
            Self::MemberHolonym => "member_holonym",
            Self::SubstanceHolonym => "substance_holonym",
            Self::PartHolonym => "part_holonym",
            Self::MemberMeronym => "member_meronym",
            Self::SubstanceMeronym => "substance_meronym",
            Self::PartMeronym => "part_meronym",
            Self::Entailment => "entailment",
            Self::Cause => "cause",
            Self::AlsoSee => "also_see",
            Self::VerbGroup => "verb_group",
            Self::SimilarTo => "similar_to",
            Self::Attribute => "attribute",
            Self::TopicDomain => "topic_domain",
            Self::RegionDomain => "region_domain",
            Self::UsageDomain => "usage_domain",
            Self::InTopicDomain => "in_topic_domain",
            Self::InRegionDomain => "in_region_domain",
            Self::InUsageDomain => "in_usage_domain",
            Self::Antonym => "antonym",
            Self::DerivationallyRelatedForm => "derivationally_related_form",
            Self::Pertainym => "pertainym",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = LexisError;

    /// Accepts snake_case or kebab-case names, singular or plural
    /// (`hypernym`, `also-see`, `similar_tos`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        let singular = normalized
            .strip_suffix('s')
            .filter(|stem| !stem.is_empty())
            .unwrap_or(&normalized);

        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized || kind.as_str() == singular)
            .ok_or_else(|| {
                LexisError::invalid_identifier(format!("Unknown relation kind '{}'", s))
            })
    }
}

/// Hop bound for closures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    /// Stop after the given number of hops
    Bounded(usize),
    /// Follow edges until nothing new is reachable
    #[default]
    Unbounded,
}

impl Depth {
    /// Whether a node `hops` edges away from the start may still be expanded.
    pub fn allows(&self, hops: usize) -> bool {
        match self {
            Self::Bounded(limit) => hops < *limit,
            Self::Unbounded => true,
        }
    }
}

impl From<Option<usize>> for Depth {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Self::Unbounded, Self::Bounded)
    }
}
