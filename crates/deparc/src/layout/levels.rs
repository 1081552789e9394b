//! Vertical level assignment.

use log::{debug, trace};

use deparc_core::document::ArcSet;

/// The level of every arc, indexed by arc index.
///
/// Level 1 is the lowest shelf above the tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels {
    levels: Vec<u32>,
    max_level: u32,
}

impl Levels {
    /// Level of the arc at `arc_index`.
    pub fn get(&self, arc_index: usize) -> Option<u32> {
        self.levels.get(arc_index).copied()
    }

    /// Highest level in use; 0 only when there are no arcs.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.levels.iter().copied()
    }

    /// Arc indices assigned to `level`, in arc index order.
    pub fn group(&self, level: u32) -> Vec<usize> {
        self.levels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == level)
            .map(|(index, _)| index)
            .collect()
    }
}

/// Assigns every arc a level so that arcs on one level never share a gap.
///
/// Arcs are processed shortest first, ties broken by source position. Each
/// adjacent-token gap keeps a floor: the highest level of any arc already
/// spanning it. An arc goes one level above the highest floor under its
/// span and raises every floor it covers to its own level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LevelAssigner;

impl LevelAssigner {
    pub fn new() -> Self {
        Self
    }

    /// Assigns levels to `arcs`.
    ///
    /// Only the gaps up to the furthest arc target carry a floor; tokens
    /// past it cannot influence any level.
    pub fn assign(&self, arcs: &ArcSet) -> Levels {
        let mut order: Vec<_> = arcs.iter().enumerate().collect();
        // Stable, so identical keys keep input order.
        order.sort_by_key(|(_, arc)| (arc.span_len(), arc.source()));

        let gap_count = arcs.iter().map(|arc| arc.target()).max().unwrap_or_default();
        let mut floors = vec![0_u32; gap_count];
        let mut levels = vec![0_u32; arcs.len()];
        let mut max_level = 0;

        for (index, arc) in order {
            let gaps = &mut floors[arc.gaps()];
            let level = gaps.iter().copied().max().unwrap_or_default() + 1;
            gaps.fill(level);

            trace!(arc = index, label = arc.label(), level; "Level assigned");
            levels[index] = level;
            max_level = max_level.max(level);
        }

        debug!(arcs = levels.len(), max_level; "Levels assigned");
        Levels { levels, max_level }
    }
}
