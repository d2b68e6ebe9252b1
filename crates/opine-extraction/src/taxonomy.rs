//! Closed taxonomy of grammatical relations relevant to opinion mining.
//!
//! Labels follow the conjunction-collapsed Stanford dependency scheme. A
//! relation in the primary subset seeds round-1 extraction; recognized but
//! non-primary relations are known to the parser vocabulary and never form a
//! bare pattern.

use serde::{Deserialize, Serialize};

/// A recognized relation kind, or `Unrecognized` for any other label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    // Primary (9)
    Amod,
    Nsubj,
    Nsubjpass,
    Dobj,
    Acomp,
    Advmod,
    Xcomp,
    Nn,
    ConjAnd,
    // Recognized, non-primary (10)
    ConjOr,
    ConjBut,
    Cop,
    Neg,
    Det,
    Aux,
    Rcmod,
    Ccomp,
    PrepOf,
    PrepWith,
    // Everything else
    Unrecognized,
}

impl RelationKind {
    /// Relations that seed primary extraction.
    pub const PRIMARY: [RelationKind; 9] = [
        Self::Amod,
        Self::Nsubj,
        Self::Nsubjpass,
        Self::Dobj,
        Self::Acomp,
        Self::Advmod,
        Self::Xcomp,
        Self::Nn,
        Self::ConjAnd,
    ];

    /// Exact label lookup. Unknown labels map to `Unrecognized`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "amod" => Self::Amod,
            "nsubj" => Self::Nsubj,
            "nsubjpass" => Self::Nsubjpass,
            "dobj" => Self::Dobj,
            "acomp" => Self::Acomp,
            "advmod" => Self::Advmod,
            "xcomp" => Self::Xcomp,
            "nn" | "compound" => Self::Nn,
            "conj_and" => Self::ConjAnd,
            "conj_or" => Self::ConjOr,
            "conj_but" => Self::ConjBut,
            "cop" => Self::Cop,
            "neg" => Self::Neg,
            "det" => Self::Det,
            "aux" => Self::Aux,
            "rcmod" => Self::Rcmod,
            "ccomp" => Self::Ccomp,
            "prep_of" => Self::PrepOf,
            "prep_with" => Self::PrepWith,
            _ => Self::Unrecognized,
        }
    }

    /// Canonical label, `None` for `Unrecognized`.
    pub fn label(self) -> Option<&'static str> {
        let label = match self {
            Self::Amod => "amod",
            Self::Nsubj => "nsubj",
            Self::Nsubjpass => "nsubjpass",
            Self::Dobj => "dobj",
            Self::Acomp => "acomp",
            Self::Advmod => "advmod",
            Self::Xcomp => "xcomp",
            Self::Nn => "nn",
            Self::ConjAnd => "conj_and",
            Self::ConjOr => "conj_or",
            Self::ConjBut => "conj_but",
            Self::Cop => "cop",
            Self::Neg => "neg",
            Self::Det => "det",
            Self::Aux => "aux",
            Self::Rcmod => "rcmod",
            Self::Ccomp => "ccomp",
            Self::PrepOf => "prep_of",
            Self::PrepWith => "prep_with",
            Self::Unrecognized => return None,
        };
        Some(label)
    }

    pub fn is_recognized(self) -> bool {
        self != Self::Unrecognized
    }

    /// Whether a triple with this relation becomes a primary pattern.
    pub fn is_primary(self) -> bool {
        Self::PRIMARY.contains(&self)
    }

    /// Conjunctive coordination. Ancestors joined by it are never pruned as redundant.
    pub fn is_conjunctive(self) -> bool {
        self == Self::ConjAnd
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label().unwrap_or("unrecognized"))
    }
}
