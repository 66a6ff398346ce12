// Copyright (c) Stratalist Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::{
    fmt,
    iter,
    mem,
};

use getset::CopyGetters;
use tracing::{
    instrument,
    trace,
};

use crate::{
    arena::{
        NodeArena,
        NodeId,
        HEAD,
    },
    errs::ListError,
    level_generator::{
        GeometricalLevelGenerator,
        LevelGenerator,
    },
    skipnode::SkipNode,
};

/// Default level cap, matching [`SkipList::new`].
pub const DEFAULT_MAX_LEVEL: usize = 5;

/// Default promotion probability, matching [`SkipList::new`].
pub const DEFAULT_PROBABILITY: f64 = 0.7;

/// An ordered container over a multi-level linked structure.
///
/// Values are kept in ascending order on the base level; each higher level
/// links a geometrically thinning subset of the nodes below it, so the
/// descent performed by [`insert`], [`search`], and [`remove`] visits
/// `O(log n)` nodes on average.
///
/// Duplicates are allowed: inserting an equal value adds a distinct node, and
/// [`remove`] unlinks at most one occurrence per call (the first one the
/// descent meets).
///
/// The list exclusively owns its nodes. [`search`] hands out a borrow scoped
/// to the list, so the borrow checker rules out holding a hit across any
/// later mutation.
///
/// [`insert`]: SkipList::insert
/// [`search`]: SkipList::search
/// [`remove`]: SkipList::remove
#[derive(CopyGetters)]
pub struct SkipList<V> {
    arena: NodeArena<V>,
    /// Upper bound on any node's level. Fixed at construction.
    #[getset(get_copy = "pub")]
    max_level: usize,
    /// Chance of promoting a new node one level higher. Fixed at
    /// construction.
    #[getset(get_copy = "pub")]
    probability: f64,
    /// Highest level currently in use, in `1..=max_level`.
    #[getset(get_copy = "pub")]
    level: usize,
    len: usize,
    level_generator: GeometricalLevelGenerator,
}

impl<V> SkipList<V> {
    /// Create an empty list with the default configuration,
    /// `(max_level, probability) = (5, 0.7)`.
    pub fn new() -> Self {
        let gen = GeometricalLevelGenerator::new(DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY);
        Self::build(DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY, gen)
    }

    /// Create an empty list with an explicit configuration.
    ///
    /// Rejects `max_level < 1` and probabilities outside the open interval
    /// `(0, 1)`; an ill-formed list is never constructed.
    pub fn with_config(max_level: usize, probability: f64) -> Result<Self, ListError> {
        Self::validate(max_level, probability)?;
        let gen = GeometricalLevelGenerator::new(max_level, probability);
        Ok(Self::build(max_level, probability, gen))
    }

    /// Like [`with_config`], but the leveling draws come from a seeded
    /// generator: two lists built from the same seed and fed the same
    /// insertions end up with identical level topology.
    ///
    /// [`with_config`]: SkipList::with_config
    pub fn with_seed(max_level: usize, probability: f64, seed: u64) -> Result<Self, ListError> {
        Self::validate(max_level, probability)?;
        let gen = GeometricalLevelGenerator::seeded(max_level, probability, seed);
        Ok(Self::build(max_level, probability, gen))
    }

    fn validate(max_level: usize, probability: f64) -> Result<(), ListError> {
        if max_level == 0 {
            return Err(ListError::InvalidMaxLevel(max_level));
        }
        // written so NaN fails the inner comparisons and is rejected too
        if !(probability > 0.0 && probability < 1.0) {
            return Err(ListError::InvalidProbability(probability));
        }
        Ok(())
    }

    fn build(max_level: usize, probability: f64, gen: GeometricalLevelGenerator) -> Self {
        SkipList {
            arena: NodeArena::with_head(max_level),
            max_level,
            probability,
            level: 1,
            len: 0,
            level_generator: gen,
        }
    }

    /// Number of live values, duplicates counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff the list holds no values: `level == 1` and the head has no
    /// base-level successor.
    pub fn is_empty(&self) -> bool {
        self.level == 1 && self.arena.get(HEAD).forward[0].is_none()
    }

    /// Drop every value and return to the freshly-constructed empty state.
    /// The configuration is kept.
    pub fn clear(&mut self) {
        self.arena.reset(self.max_level);
        self.level = 1;
        self.len = 0;
    }

    /// Move the contents out in constant time, leaving `self` as a fresh
    /// empty list with the same configuration. The emptied list remains
    /// fully usable; inserting into it behaves exactly like inserting into a
    /// newly constructed one.
    ///
    /// The moved-out list keeps its generator, but the emptied list draws
    /// from a fresh, unseeded one: a list built via [`with_seed`] does not
    /// stay deterministic after `take`.
    ///
    /// [`with_seed`]: SkipList::with_seed
    pub fn take(&mut self) -> Self {
        let gen = GeometricalLevelGenerator::new(self.max_level, self.probability);
        let fresh = Self::build(self.max_level, self.probability, gen);
        mem::replace(self, fresh)
    }

    /// The value stored at `id`. Only the head slot holds no value.
    fn value_of(&self, id: NodeId) -> &V {
        self.arena
            .get(id)
            .value
            .as_ref()
            .expect("only the head slot holds no value")
    }

    /// Node ids reachable from the head along the level-`lvl` chain.
    fn chain_at(&self, lvl: usize) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.arena.get(HEAD).forward[lvl], move |&id| {
            self.arena.get(id).forward[lvl]
        })
    }

    /// Values along the level-`lvl` chain, in ascending order.
    fn values_at(&self, lvl: usize) -> impl Iterator<Item = &V> + '_ {
        self.chain_at(lvl).map(move |id| self.value_of(id))
    }
}

impl<V> SkipList<V>
where
    V: Ord,
{
    /// Insert `value`, keeping the base-level chain ordered.
    ///
    /// Equal values are inserted as new, distinct nodes; nothing is merged or
    /// replaced. The splice either fully completes across every level of the
    /// new node or (on a fatal allocation failure, before any link moves)
    /// leaves the list unmodified.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: V) {
        let mut update = vec![HEAD; self.max_level];
        let mut cursor = HEAD;
        for lvl in (0..self.level).rev() {
            while let Some(next) = self.arena.get(cursor).forward[lvl] {
                if self.value_of(next) < &value {
                    cursor = next;
                } else {
                    break;
                }
            }
            update[lvl] = cursor;
        }

        let new_level = self.level_generator.random();
        if new_level > self.level {
            // update[self.level..new_level] already point at head; no
            // existing node reaches that high
            trace!(from = self.level, to = new_level, "raising active level");
            self.level = new_level;
        }

        let id = self.arena.alloc(SkipNode::new(value, new_level));
        for lvl in 0..new_level {
            let succ = self.arena.get(update[lvl]).forward[lvl];
            self.arena.get_mut(id).forward[lvl] = succ;
            self.arena.get_mut(update[lvl]).forward[lvl] = Some(id);
        }
        self.len += 1;
    }

    /// Look `value` up, returning a borrow of the first match met by the
    /// level descent, or `None` on a miss.
    ///
    /// Traversal advances on the ordering comparison; the final hit test is
    /// the equality comparison.
    pub fn search(&self, value: &V) -> Option<&V> {
        let mut cursor = HEAD;
        for lvl in (0..self.level).rev() {
            while let Some(next) = self.arena.get(cursor).forward[lvl] {
                if self.value_of(next) < value {
                    cursor = next;
                } else {
                    break;
                }
            }
        }
        let candidate = self.arena.get(cursor).forward[0]?;
        let found = self.value_of(candidate);
        (found == value).then_some(found)
    }

    /// True iff at least one occurrence of `value` is present.
    pub fn contains(&self, value: &V) -> bool {
        self.search(value).is_some()
    }

    /// Remove and return the first occurrence of `value` met by the level
    /// descent. A miss, including on an empty list, is a no-op returning
    /// `None`.
    #[instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, value: &V) -> Option<V> {
        let mut update = vec![HEAD; self.max_level];
        let mut cursor = HEAD;
        for lvl in (0..self.level).rev() {
            while let Some(next) = self.arena.get(cursor).forward[lvl] {
                if self.value_of(next) < value {
                    cursor = next;
                } else {
                    break;
                }
            }
            update[lvl] = cursor;
        }

        let target = self.arena.get(cursor).forward[0]?;
        if self.value_of(target) != value {
            return None;
        }

        // the target's level span is contiguous from 0, so once an update
        // node no longer points at it the chain cannot resume higher up
        for lvl in 0..self.level {
            if self.arena.get(update[lvl]).forward[lvl] != Some(target) {
                break;
            }
            let succ = self.arena.get(target).forward[lvl];
            self.arena.get_mut(update[lvl]).forward[lvl] = succ;
        }

        while self.level > 1 && self.arena.get(HEAD).forward[self.level - 1].is_none() {
            self.level -= 1;
            trace!(to = self.level, "shrinking active level");
        }

        self.len -= 1;
        self.arena.dealloc(target).into_inner()
    }
}

impl<V> Default for SkipList<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Value-semantic copy: the clone gets the same configuration and the same
/// multiset of values, re-inserted from the source's base-level chain in
/// ascending order through a fresh level generator. The skip-level topology
/// is therefore re-randomized rather than structurally duplicated; only
/// value-set and ordering semantics carry over. The fresh generator is
/// unseeded, so a source built via [`SkipList::with_seed`] does not hand its
/// determinism down to clones.
impl<V> Clone for SkipList<V>
where
    V: Ord + Clone,
{
    fn clone(&self) -> Self {
        let gen = GeometricalLevelGenerator::new(self.max_level, self.probability);
        let mut copy = Self::build(self.max_level, self.probability, gen);
        for value in self.values_at(0) {
            copy.insert(value.clone());
        }
        copy
    }
}

impl<V> fmt::Debug for SkipList<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values_at(0)).finish()
    }
}

/// Read-only diagnostic dump: one line per active level, top to bottom, each
/// chain's values in ascending order with an explicit `nil` terminator.
impl<V> fmt::Display for SkipList<V>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lvl in (0..self.level).rev() {
            write!(f, "Level {}: ", lvl)?;
            for value in self.values_at(lvl) {
                write!(f, "{} -> ", value)?;
            }
            writeln!(f, "nil")?;
        }
        Ok(())
    }
}
