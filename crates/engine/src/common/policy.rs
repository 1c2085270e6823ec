//! Fit policy selection.
//!
//! A fit policy decides which of several adequately-sized candidates (free
//! memory regions or free fixed partitions) receives a process. It provides:
//! 1. **First fit:** the earliest candidate, in scan order, that is large enough.
//! 2. **Best fit:** the smallest adequate candidate.
//! 3. **Worst fit:** the largest adequate candidate.
//!
//! Best and worst fit break ties on size by keeping the earliest candidate
//! seen, implemented as a fold with strict inequality. Scan order is ascending
//! start address for dynamic memory and declaration order for fixed partitions,
//! so "earliest" means lowest start / first declared.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// Rule for selecting among multiple adequately-sized free regions or partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitPolicy {
    /// First adequate candidate in scan order.
    #[default]
    #[serde(alias = "First")]
    First,
    /// Smallest adequate candidate; ties keep the earliest.
    #[serde(alias = "Best")]
    Best,
    /// Largest adequate candidate; ties keep the earliest.
    #[serde(alias = "Worst")]
    Worst,
}

impl FitPolicy {
    /// All policies, in the order comparison mode runs them.
    pub const ALL: [Self; 3] = [Self::First, Self::Best, Self::Worst];

    /// Selects a candidate for a request of `need` units.
    ///
    /// `candidates` yields `(key, size)` pairs in scan order; the returned
    /// value is the `key` of the chosen candidate. Candidates smaller than
    /// `need` are never chosen. Returns `None` when no candidate is adequate.
    ///
    /// The fold keeps the earliest-seen candidate on size ties: a later
    /// candidate replaces the current choice only when its size compares
    /// strictly better.
    pub fn choose<I>(self, candidates: I, need: u64) -> Option<usize>
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let mut adequate = candidates.into_iter().filter(|&(_, size)| size >= need);
        match self {
            Self::First => adequate.next().map(|(key, _)| key),
            Self::Best => adequate
                .fold(None, |best: Option<(usize, u64)>, (key, size)| match best {
                    Some((_, chosen)) if size >= chosen => best,
                    _ => Some((key, size)),
                })
                .map(|(key, _)| key),
            Self::Worst => adequate
                .fold(None, |worst: Option<(usize, u64)>, (key, size)| match worst {
                    Some((_, chosen)) if size <= chosen => worst,
                    _ => Some((key, size)),
                })
                .map(|(key, _)| key),
        }
    }
}

impl fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Best => write!(f, "best"),
            Self::Worst => write!(f, "worst"),
        }
    }
}

impl FromStr for FitPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "best" => Ok(Self::Best),
            "worst" => Ok(Self::Worst),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}
