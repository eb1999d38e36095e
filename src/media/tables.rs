//! breakpoint, expression and unit interval tables

use std::collections::BTreeMap;

use strsim::levenshtein;

use super::types::{Length, Unit};

/// named width/height thresholds
pub type Breakpoints = BTreeMap<String, Length>;

/// static expression name -> literal media feature string
pub type MediaExpressions = BTreeMap<String, String>;

/// unit -> smallest step used to turn `>`/`<` into `min-`/`max-`
pub type UnitIntervals = BTreeMap<Unit, f64>;

/// max edit distance for "did you mean" suggestions
pub const SUGGESTION_THRESHOLD: usize = 2;

/// the breakpoint and expression tables that conditions resolve against
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    pub breakpoints: Breakpoints,
    pub expressions: MediaExpressions,
}

impl Tables {
    pub fn new(breakpoints: Breakpoints, expressions: MediaExpressions) -> Self {
        Self {
            breakpoints,
            expressions,
        }
    }

    pub fn breakpoint(&self, name: &str) -> Option<Length> {
        self.breakpoints.get(name).copied()
    }

    pub fn expression(&self, name: &str) -> Option<&str> {
        self.expressions.get(name).map(String::as_str)
    }

    pub fn is_expression(&self, name: &str) -> bool {
        self.expressions.contains_key(name)
    }

    /// copy of these tables with `breakpoints`/`expressions` layered on top
    ///
    /// overrides win on key collisions; every other base entry is kept.
    pub fn merged(&self, breakpoints: &Breakpoints, expressions: &MediaExpressions) -> Tables {
        let mut merged = self.clone();
        merged
            .breakpoints
            .extend(breakpoints.iter().map(|(k, v)| (k.clone(), *v)));
        merged
            .expressions
            .extend(expressions.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// breakpoint names close to `name`, nearest first
    pub fn similar_breakpoints(&self, name: &str) -> Vec<String> {
        let query = name.to_lowercase();
        let mut matches: Vec<(usize, &String)> = self
            .breakpoints
            .keys()
            .map(|key| (levenshtein(&query, &key.to_lowercase()), key))
            .filter(|(distance, _)| *distance <= SUGGESTION_THRESHOLD)
            .collect();

        matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        matches.into_iter().map(|(_, key)| key.clone()).collect()
    }
}
