//! Proximity links between nodes, backed by a fixed pool of line slots.
//!
//! The pool never grows. Pairs are scanned in ascending nested index order
//! (`i < j`), so when more pairs qualify than there are slots, the earliest
//! pairs win and the rest are dropped.

use glam::Vec3;

use crate::constants::{CONNECTION_OPACITY_MAX, CONNECTION_OPACITY_MIN, CONNECTION_OPACITY_SPAN};
use crate::node::Node;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Connection {
    pub pair: (usize, usize),
    pub from: Vec3,
    pub to: Vec3,
    pub opacity: f32,
    pub visible: bool,
}

/// Closer pairs draw more opaque, clamped to `[0.05, 0.3]`.
#[inline]
pub fn connection_opacity(distance: f32, threshold: f32) -> f32 {
    (CONNECTION_OPACITY_MAX - (distance / threshold) * CONNECTION_OPACITY_SPAN)
        .clamp(CONNECTION_OPACITY_MIN, CONNECTION_OPACITY_MAX)
}

pub struct ConnectionPool {
    slots: Vec<Connection>,
    active: usize,
}

impl ConnectionPool {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![Connection::default(); size],
            active: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn visible_count(&self) -> usize {
        self.active
    }

    /// Every slot, including hidden ones.
    pub fn slots(&self) -> &[Connection] {
        &self.slots
    }

    /// Slots claimed by the last recompute, in claim order.
    pub fn visible(&self) -> &[Connection] {
        &self.slots[..self.active]
    }

    /// Rebuild the visible set from current node positions.
    ///
    /// Returns the number of visible connections.
    pub fn recompute(&mut self, nodes: &[Node], threshold: f32) -> usize {
        let capacity = self.slots.len();
        let mut claimed = 0usize;
        'scan: for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                if claimed == capacity {
                    break 'scan;
                }
                let a = nodes[i].position;
                let b = nodes[j].position;
                let distance = a.distance(b);
                if distance < threshold {
                    let slot = &mut self.slots[claimed];
                    slot.pair = (i, j);
                    slot.from = a;
                    slot.to = b;
                    slot.opacity = connection_opacity(distance, threshold);
                    slot.visible = true;
                    claimed += 1;
                }
            }
        }
        for slot in &mut self.slots[claimed..] {
            slot.visible = false;
        }
        self.active = claimed;
        claimed
    }

    pub fn hide_all(&mut self) {
        for slot in &mut self.slots {
            slot.visible = false;
        }
        self.active = 0;
    }
}
