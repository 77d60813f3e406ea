/// Per-cell search bookkeeping for one run.
#[derive(Clone, Debug)]
pub struct Slot {
    /// Cost from the start.
    pub g: f64,
    /// Memoized heuristic estimate to the goal, computed at most once per run.
    pub h: Option<f64>,
    /// `g + h`.
    pub f: f64,
    /// Slot index of the predecessor on the best known route.
    pub parent: Option<usize>,
    pub opened: bool,
    pub closed: bool,
    /// Visited while scanning a jump (JPS only).
    pub tested: bool,
    generation: u32,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: None,
            f: 0.0,
            parent: None,
            opened: false,
            closed: false,
            tested: false,
            generation: 0,
        }
    }
}

/// Transient search fields for every cell of a grid, indexed by the grid's
/// slot index.
///
/// The grid itself stays immutable during a search. Slots are invalidated
/// lazily: [`begin`](Self::begin) bumps a generation counter and a slot from
/// an older generation reads as untouched, so starting a new run costs
/// nothing per cell.
#[derive(Debug, Default)]
pub struct SearchState {
    slots: Vec<Slot>,
    generation: u32,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run over a grid with `len` slots.
    pub(crate) fn begin(&mut self, len: usize) {
        if self.slots.len() < len {
            self.slots.resize(len, Slot::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Counter wrapped: old generations could alias the new one.
            for s in &mut self.slots {
                s.generation = 0;
            }
            self.generation = 1;
        }
    }

    /// Mutable slot for `idx`, reset first if it belongs to an older run.
    #[inline]
    pub(crate) fn slot_mut(&mut self, idx: usize) -> &mut Slot {
        let generation = self.generation;
        let s = &mut self.slots[idx];
        if s.generation != generation {
            *s = Slot {
                generation,
                ..Slot::default()
            };
        }
        s
    }

    /// The slot for `idx` if the current run touched it.
    #[inline]
    pub fn slot(&self, idx: usize) -> Option<&Slot> {
        self.slots
            .get(idx)
            .filter(|s| s.generation == self.generation && self.generation != 0)
    }

    #[inline]
    pub fn is_opened(&self, idx: usize) -> bool {
        self.slot(idx).is_some_and(|s| s.opened)
    }

    #[inline]
    pub fn is_closed(&self, idx: usize) -> bool {
        self.slot(idx).is_some_and(|s| s.closed)
    }

    #[inline]
    pub fn is_tested(&self, idx: usize) -> bool {
        self.slot(idx).is_some_and(|s| s.tested)
    }

    #[inline]
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.slot(idx).and_then(|s| s.parent)
    }

    /// Number of slots closed in the current run.
    pub fn closed_count(&self) -> usize {
        (0..self.slots.len()).filter(|&i| self.is_closed(i)).count()
    }

    /// Number of slots marked tested in the current run.
    pub fn tested_count(&self) -> usize {
        (0..self.slots.len()).filter(|&i| self.is_tested(i)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_run_invalidates_previous_slots() {
        let mut st = SearchState::new();
        st.begin(4);
        {
            let s = st.slot_mut(2);
            s.g = 3.0;
            s.closed = true;
            s.parent = Some(1);
        }
        assert!(st.is_closed(2));
        assert_eq!(st.parent(2), Some(1));
        assert_eq!(st.closed_count(), 1);

        st.begin(4);
        assert!(st.slot(2).is_none());
        assert!(!st.is_closed(2));
        let s = st.slot_mut(2);
        assert_eq!(s.g, 0.0);
        assert!(s.parent.is_none());
        assert!(s.h.is_none());
    }

    #[test]
    fn begin_grows_storage() {
        let mut st = SearchState::new();
        st.begin(2);
        st.slot_mut(1).tested = true;
        st.begin(10);
        st.slot_mut(9).opened = true;
        assert!(st.is_opened(9));
        assert!(!st.is_tested(1));
        assert_eq!(st.tested_count(), 0);
    }

    #[test]
    fn untouched_before_first_run() {
        let st = SearchState::new();
        assert!(st.slot(0).is_none());
        assert_eq!(st.closed_count(), 0);
    }
}
