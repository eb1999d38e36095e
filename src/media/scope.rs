//! scoped configuration context
//!
//! a [`Scope`] owns the active breakpoint/expression tables and a stack of
//! snapshots. entering a context layers overrides on top of whatever is
//! active; leaving it puts the exact previous tables back. tweakpoints
//! defined inside a context never outlive it, on any exit path.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use super::tables::{Breakpoints, MediaExpressions, Tables};

#[derive(Debug, Clone, Default)]
pub struct Scope {
    current: Tables,
    saved: Vec<Tables>,
    // depth that pop and restore_to cannot go below while a guard is live
    floor: usize,
}

/// where a guarded context was entered
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    depth: usize,
    floor: usize,
}

impl Scope {
    pub fn new(tables: Tables) -> Self {
        Self {
            current: tables,
            saved: Vec::new(),
            floor: 0,
        }
    }

    /// the tables conditions currently resolve against
    pub fn tables(&self) -> &Tables {
        &self.current
    }

    /// number of contexts currently entered
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// snapshot the active tables and install `active ∪ overrides`
    pub fn push(&mut self, breakpoints: &Breakpoints, expressions: &MediaExpressions) {
        let merged = self.current.merged(breakpoints, expressions);
        let previous = std::mem::replace(&mut self.current, merged);
        self.saved.push(previous);
        debug!(
            depth = self.saved.len(),
            breakpoints = breakpoints.len(),
            expressions = expressions.len(),
            "entered media context"
        );
    }

    /// restore the most recent snapshot
    ///
    /// false if no context is active, or if the top context belongs to an
    /// enclosing guard.
    pub fn pop(&mut self) -> bool {
        if self.saved.len() <= self.floor {
            debug!(depth = self.saved.len(), "media context is guarded, not leaving");
            return false;
        }
        self.leave()
    }

    fn leave(&mut self) -> bool {
        match self.saved.pop() {
            Some(previous) => {
                self.current = previous;
                debug!(depth = self.saved.len(), "left media context");
                true
            }
            None => false,
        }
    }

    /// unwind until `depth` contexts remain, stopping at guarded ones
    pub fn restore_to(&mut self, depth: usize) {
        let depth = depth.max(self.floor);
        while self.saved.len() > depth {
            self.leave();
        }
    }

    /// push a context that only [`Scope::close`] may leave
    pub(crate) fn open(
        &mut self,
        breakpoints: &Breakpoints,
        expressions: &MediaExpressions,
    ) -> Entry {
        let entry = Entry {
            depth: self.depth(),
            floor: self.floor,
        };
        self.push(breakpoints, expressions);
        self.floor = self.depth();
        entry
    }

    /// leave everything pushed since `entry` was opened
    pub(crate) fn close(&mut self, entry: Entry) {
        self.floor = entry.floor;
        while self.saved.len() > entry.depth {
            self.leave();
        }
    }

    /// enter a context that is left when the returned guard drops
    pub fn enter(
        &mut self,
        breakpoints: &Breakpoints,
        expressions: &MediaExpressions,
    ) -> ScopeGuard<'_> {
        let entry = self.open(breakpoints, expressions);
        ScopeGuard { scope: self, entry }
    }

    /// run `block` with the overrides active, then restore
    ///
    /// the block may enter further contexts. restoration also happens when
    /// the block returns an error or panics.
    pub fn with_context<R>(
        &mut self,
        breakpoints: &Breakpoints,
        expressions: &MediaExpressions,
        block: impl FnOnce(&mut Scope) -> R,
    ) -> R {
        let mut guard = self.enter(breakpoints, expressions);
        block(&mut *guard)
    }
}

/// restores the scope to its depth at entry when dropped
pub struct ScopeGuard<'a> {
    scope: &'a mut Scope,
    entry: Entry,
}

impl Deref for ScopeGuard<'_> {
    type Target = Scope;

    fn deref(&self) -> &Scope {
        self.scope
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Scope {
        self.scope
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.scope.close(self.entry);
    }
}
