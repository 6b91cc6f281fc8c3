//! Front-to-back ordering of windows.
//!
//! The stack is a flat list of ids, index 0 farthest back. Windows never
//! point at each other; closing one is a removal from this list.

use alloc::vec::Vec;

use vitrine_abi::{WindowFlags, WindowId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Layer {
    Background,
    Normal,
    Foreground,
}

impl Layer {
    fn of(flags: WindowFlags) -> Self {
        if flags.is_background() {
            Layer::Background
        } else if flags.is_foreground() {
            Layer::Foreground
        } else {
            Layer::Normal
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ZStack {
    order: Vec<WindowId>,
}

impl ZStack {
    pub const fn new() -> Self {
        Self { order: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids from farthest back to frontmost.
    #[inline]
    pub fn back_to_front(&self) -> &[WindowId] {
        &self.order
    }

    #[inline]
    pub fn position(&self, id: WindowId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    /// Place a new window at the natural position: the front.
    pub fn push(&mut self, id: WindowId) {
        self.order.push(id);
    }

    pub fn remove(&mut self, id: WindowId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.order.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Move `id` to the frontmost slot, keeping everyone else in order.
    pub fn raise(&mut self, id: WindowId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let raised = self.order.remove(idx);
        self.order.push(raised);
        true
    }

    /// Re-establish the placement pins: background first, foreground last,
    /// normal windows in between. Relative order inside each layer is kept,
    /// so calling this again moves nothing. Returns whether anything moved.
    pub fn reassign(&mut self, flags_of: impl Fn(WindowId) -> WindowFlags) -> bool {
        let mut keyed: Vec<(Layer, WindowId)> = self
            .order
            .iter()
            .map(|&id| (Layer::of(flags_of(id)), id))
            .collect();
        if keyed.windows(2).all(|pair| pair[0].0 <= pair[1].0) {
            return false;
        }

        // Stable: equal layers keep their current relative order.
        keyed.sort_by_key(|&(layer, _)| layer);
        self.order = keyed.into_iter().map(|(_, id)| id).collect();
        true
    }

    /// Everything stacked in front of `id`, nearest first.
    pub fn above(&self, id: WindowId) -> &[WindowId] {
        match self.position(id) {
            Some(idx) => &self.order[idx + 1..],
            None => &[],
        }
    }
}
