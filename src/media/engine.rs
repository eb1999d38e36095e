//! engine: owned state plus the operations callers use
//!
//! the engine holds the scope (the only mutable state), the unit intervals
//! and the static fallback settings, and hands out a [`MediaContext`]
//! borrowing them for each call.

use std::ops::{Deref, DerefMut};

use super::compose::{media, Media};
use super::context::{MediaContext, StaticFallback, Strictness};
use super::error::MediaError;
use super::intercept::intercepts_static_breakpoint;
use super::scope::{Entry, Scope};
use super::tables::{Breakpoints, MediaExpressions, Tables, UnitIntervals};
use super::types::ParsedExpression;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct Engine {
    scope: Scope,
    intervals: UnitIntervals,
    fallback: StaticFallback,
    media_support: bool,
    strictness: Strictness,
}

impl Engine {
    pub fn new(tables: Tables, intervals: UnitIntervals) -> Self {
        Self {
            scope: Scope::new(tables),
            intervals,
            fallback: StaticFallback::default(),
            media_support: true,
            strictness: Strictness::Strict,
        }
    }

    /// build an engine from a loaded config file
    pub fn from_config(config: &Config) -> Self {
        let tables = Tables::new(
            config.breakpoints.clone(),
            config.media_expressions.clone(),
        );
        let settings = &config.settings;

        Self::new(tables, config.unit_intervals.clone())
            .with_fallback(StaticFallback::new(
                settings.static_breakpoint.clone(),
                settings.static_expressions.clone(),
            ))
            .with_media_support(settings.media_support)
            .with_strictness(Strictness::from_strict(settings.strict))
    }

    pub fn with_fallback(mut self, fallback: StaticFallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_media_support(mut self, media_support: bool) -> Self {
        self.media_support = media_support;
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn set_media_support(&mut self, media_support: bool) {
        self.media_support = media_support;
    }

    pub fn set_strictness(&mut self, strictness: Strictness) {
        self.strictness = strictness;
    }

    pub fn fallback(&self) -> &StaticFallback {
        &self.fallback
    }

    pub fn fallback_mut(&mut self) -> &mut StaticFallback {
        &mut self.fallback
    }

    pub fn intervals(&self) -> &UnitIntervals {
        &self.intervals
    }

    pub fn media_support(&self) -> bool {
        self.media_support
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }

    /// snapshot of the current state for a single evaluation
    pub fn context(&self) -> MediaContext<'_> {
        MediaContext::new(self.scope.tables(), &self.intervals, &self.fallback)
            .with_media_support(self.media_support)
            .with_strictness(self.strictness)
    }

    pub fn compile(&self, condition: &str) -> Result<String, MediaError> {
        self.context().compile(condition)
    }

    pub fn parse(&self, condition: &str) -> Result<ParsedExpression, MediaError> {
        self.context().parse(condition)
    }

    pub fn media<S: AsRef<str>>(&self, conditions: &[S]) -> Result<Media, MediaError> {
        media(conditions, &self.context())
    }

    pub fn intercepts<S: AsRef<str>>(&self, conditions: &[S]) -> Result<bool, MediaError> {
        intercepts_static_breakpoint(conditions, &self.context())
    }

    /// run `block` with breakpoint/expression overrides layered on top
    ///
    /// the previous tables come back when the block finishes, returns an
    /// error or panics.
    pub fn with_context<R>(
        &mut self,
        breakpoints: &Breakpoints,
        expressions: &MediaExpressions,
        block: impl FnOnce(&mut Engine) -> R,
    ) -> R {
        let entry = self.scope.open(breakpoints, expressions);
        let mut guard = EngineGuard {
            engine: self,
            entry,
        };
        block(&mut *guard)
    }
}

/// restores the engine's scope to its depth at entry when dropped
struct EngineGuard<'a> {
    engine: &'a mut Engine,
    entry: Entry,
}

impl Deref for EngineGuard<'_> {
    type Target = Engine;

    fn deref(&self) -> &Engine {
        self.engine
    }
}

impl DerefMut for EngineGuard<'_> {
    fn deref_mut(&mut self) -> &mut Engine {
        self.engine
    }
}

impl Drop for EngineGuard<'_> {
    fn drop(&mut self) {
        self.engine.scope.close(self.entry);
    }
}
