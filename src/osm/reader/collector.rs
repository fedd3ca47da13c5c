// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::model::{NodeElement, Signal};
use super::Options;

/// Helper object used for picking [Signals](Signal) out of
/// [node elements](NodeElement), as per the provided [Options].
pub(super) struct SignalCollector<'a> {
    options: &'a Options<'a>,
    signals: Vec<Signal>,
    untagged: usize,
    outside: usize,
}

impl<'a> SignalCollector<'a> {
    /// Create a new, empty collector.
    pub(super) fn new(options: &'a Options<'a>) -> Self {
        Self {
            options,
            signals: Vec::default(),
            untagged: 0,
            outside: 0,
        }
    }

    pub(super) fn add(&mut self, n: NodeElement) {
        if !self.has_tag(&n) {
            self.untagged += 1;
        } else if !self.is_in_bbox(&n) {
            self.outside += 1;
        } else {
            self.signals.push(Signal {
                osm_id: n.id,
                position: n.position,
            });
        }
    }

    /// Returns all accepted signals, in the order they were added.
    pub(super) fn finish(self) -> Vec<Signal> {
        log::debug!(
            "loaded {} traffic signals (skipped {} nodes without the required tag and {} outside of the bounding box)",
            self.signals.len(),
            self.untagged,
            self.outside,
        );
        self.signals
    }

    fn has_tag(&self, n: &NodeElement) -> bool {
        match self.options.tag {
            None => true,
            Some((k, v)) => n.tags.get(k).is_some_and(|value| value == v),
        }
    }

    fn is_in_bbox(&self, n: &NodeElement) -> bool {
        match self.options.bbox {
            None => true,
            Some(bbox) => bbox.contains(n.position),
        }
    }
}
