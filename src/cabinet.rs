//! File Cabinet State
//!
//! Open/closed state and per-item open progress for the project cabinet.
//!
//! Exactly one item is open at any time. Each item owns a timeline, keyed by
//! its id, that eases its progress toward 1 (open) or 0 (closed). Selecting an
//! item is an explicit command stamped with the current clock; rendering only
//! samples `progress(id, now)`, so none of this needs a DOM.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::ItemId;

/// Duration of every open/close timeline
pub const TRANSITION_MS: f64 = 260.0;

#[derive(Debug, Error, PartialEq)]
pub enum CabinetError {
    #[error("file cabinet needs at least one item")]
    Empty,
    #[error("duplicate item id '{0}'")]
    DuplicateId(String),
}

/// Cubic ease-in-out on [0, 1]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One item's interpolation from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl Timeline {
    /// A timeline already resting at `value`
    pub fn settled(value: f64) -> Self {
        Self { from: value, to: value, start_ms: 0.0, duration_ms: 0.0 }
    }

    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64) -> Self {
        Self { from, to, start_ms, duration_ms }
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        let value = if self.is_settled(now_ms) {
            self.to
        } else if now_ms <= self.start_ms {
            self.from
        } else {
            let t = (now_ms - self.start_ms) / self.duration_ms;
            self.from + (self.to - self.from) * ease_in_out(t)
        };
        value.clamp(0.0, 1.0)
    }

    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms
    }
}

/// State machine behind the file cabinet widget
#[derive(Debug, Clone, PartialEq)]
pub struct CabinetState {
    order: Vec<ItemId>,
    open: usize,
    timelines: HashMap<ItemId, Timeline>,
}

impl CabinetState {
    /// Build the cabinet with the first item open.
    ///
    /// Every timeline starts closed; the first item's opening transition
    /// begins at `now_ms`.
    pub fn new(ids: Vec<ItemId>, now_ms: f64) -> Result<Self, CabinetError> {
        if ids.is_empty() {
            return Err(CabinetError::Empty);
        }

        let mut seen = HashSet::new();
        for id in &ids {
            if !seen.insert(id) {
                return Err(CabinetError::DuplicateId(id.0.clone()));
            }
        }

        let timelines = ids.iter().map(|id| (id.clone(), Timeline::settled(0.0))).collect();
        let mut state = Self { order: ids, open: 0, timelines };
        state.retarget(now_ms);
        Ok(state)
    }

    pub fn open_index(&self) -> usize {
        self.open
    }

    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.order.iter().position(|other| other == id)
    }

    /// Open the item at `index`. Returns `false` (and changes nothing) for an
    /// out-of-range index.
    pub fn select_index(&mut self, index: usize, now_ms: f64) -> bool {
        if index >= self.order.len() {
            return false;
        }
        self.open = index;
        self.retarget(now_ms);
        true
    }

    /// Open the item with `id`. Returns `false` for an unknown id.
    pub fn select(&mut self, id: &ItemId, now_ms: f64) -> bool {
        match self.index_of(id) {
            Some(index) => self.select_index(index, now_ms),
            None => false,
        }
    }

    /// Point every timeline at its target for the current open item.
    ///
    /// A timeline in flight restarts from its current value, so the last
    /// selection wins.
    fn retarget(&mut self, now_ms: f64) {
        for (index, id) in self.order.iter().enumerate() {
            let target = if index == self.open { 1.0 } else { 0.0 };
            let timeline = self.timelines.entry(id.clone()).or_insert_with(|| Timeline::settled(0.0));
            let current = timeline.value_at(now_ms);

            if timeline.is_settled(now_ms) && current == target {
                continue;
            }
            *timeline = Timeline::new(current, target, now_ms, TRANSITION_MS);
        }
    }

    /// Open progress of `id` at `now_ms` (0 closed, 1 open)
    pub fn progress(&self, id: &ItemId, now_ms: f64) -> f64 {
        self.timelines.get(id).map(|t| t.value_at(now_ms)).unwrap_or(0.0)
    }

    /// True while any timeline is still moving
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.timelines.values().any(|t| !t.is_settled(now_ms))
    }

    /// Position of a closed item within the closed stack.
    ///
    /// Counts closed items before it in list order, so the stack has no gap
    /// where the open item would be. `None` for the open item.
    pub fn closed_rank(&self, id: &ItemId) -> Option<usize> {
        let index = self.index_of(id)?;
        if index == self.open {
            return None;
        }
        Some((0..index).filter(|&j| j != self.open).count())
    }

    /// Closed items in stack order as `(rank, list index, id)`
    pub fn closed_items(&self) -> Vec<(usize, usize, ItemId)> {
        self.order
            .iter()
            .enumerate()
            .filter_map(|(index, id)| self.closed_rank(id).map(|rank| (rank, index, id.clone())))
            .collect()
    }
}
