//! Per-page view state: the loading/ready/error machine plus stale-response
//! tracking.

/// Fetch state for one page's data. Starts at `Loading`, moves to `Ready` on
/// a successful fetch or `Error` on a failed one; a manual retry or refetch
/// returns it to `Loading`. Never partially populated: an error discards
/// whatever was in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// One page's slot: fetch state, a generation counter for discarding stale
/// responses, and a flag blocking overlapping writes.
///
/// Every fetch start bumps the generation; a response is applied only when it
/// carries the current generation, so a fetch the user navigated away from
/// (or superseded with a newer one) is dropped silently.
#[derive(Debug)]
pub struct PageSlot<T> {
    data: Loadable<T>,
    generation: u64,
    mutating: bool,
}

impl<T> Default for PageSlot<T> {
    fn default() -> Self {
        Self {
            data: Loadable::Loading,
            generation: 0,
            mutating: false,
        }
    }
}

impl<T> PageSlot<T> {
    pub fn data(&self) -> &Loadable<T> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Loadable<T> {
        &mut self.data
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark a fetch as started: enter loading and return the generation the
    /// eventual response must carry to be applied.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.data = Loadable::Loading;
        self.generation
    }

    /// Apply a fetch result. Returns false when the result was stale and
    /// dropped.
    pub fn apply(&mut self, generation: u64, result: Result<T, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.data = match result {
            Ok(data) => Loadable::Ready(data),
            Err(message) => Loadable::Error(message),
        };
        true
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    /// Claim the write lock for this page. Returns false when a write is
    /// already in flight.
    pub fn begin_mutation(&mut self) -> bool {
        if self.mutating {
            return false;
        }
        self.mutating = true;
        true
    }

    pub fn end_mutation(&mut self) {
        self.mutating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slot_starts_loading() {
        let slot: PageSlot<Vec<u32>> = PageSlot::default();
        assert!(slot.data().is_loading());
        assert!(!slot.is_mutating());
    }

    #[test]
    fn successful_fetch_transitions_to_ready() {
        let mut slot: PageSlot<Vec<u32>> = PageSlot::default();
        let generation = slot.begin_fetch();
        assert!(slot.apply(generation, Ok(vec![1, 2, 3])));
        assert_eq!(slot.data().as_ready(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn failed_fetch_transitions_to_error_without_data() {
        let mut slot: PageSlot<Vec<u32>> = PageSlot::default();
        let generation = slot.begin_fetch();
        assert!(slot.apply(generation, Err("API error: 500".into())));
        assert_eq!(slot.data().error(), Some("API error: 500"));
        assert_eq!(slot.data().as_ready(), None);
    }

    #[test]
    fn retry_from_error_reenters_loading() {
        let mut slot: PageSlot<Vec<u32>> = PageSlot::default();
        let generation = slot.begin_fetch();
        slot.apply(generation, Err("boom".into()));
        slot.begin_fetch();
        assert!(slot.data().is_loading());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut slot: PageSlot<Vec<u32>> = PageSlot::default();
        let stale = slot.begin_fetch();
        let current = slot.begin_fetch();
        assert!(!slot.apply(stale, Ok(vec![9])));
        assert!(slot.data().is_loading());
        assert!(slot.apply(current, Ok(vec![1])));
        assert_eq!(slot.data().as_ready(), Some(&vec![1]));
    }

    #[test]
    fn stale_error_does_not_clobber_newer_data() {
        let mut slot: PageSlot<Vec<u32>> = PageSlot::default();
        let stale = slot.begin_fetch();
        let current = slot.begin_fetch();
        slot.apply(current, Ok(vec![1]));
        assert!(!slot.apply(stale, Err("late failure".into())));
        assert_eq!(slot.data().as_ready(), Some(&vec![1]));
    }

    #[test]
    fn mutation_lock_blocks_overlapping_writes() {
        let mut slot: PageSlot<Vec<u32>> = PageSlot::default();
        assert!(slot.begin_mutation());
        assert!(!slot.begin_mutation());
        slot.end_mutation();
        assert!(slot.begin_mutation());
    }
}
