use crate::container::SlotContainer;
use crate::error::{ScrollerError, ScrollerResult};
use crate::extensions::ScrollerObserver;

use super::IntervalScroller;

impl<C: SlotContainer> IntervalScroller<C> {
    /// Registers an observer. Ids must be non-empty and unique per field.
    pub fn register_observer(&mut self, observer: Box<dyn ScrollerObserver>) -> ScrollerResult<()> {
        if self.destroyed {
            return Err(ScrollerError::InvalidObserver(
                "cannot register observers on a destroyed field".to_owned(),
            ));
        }
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ScrollerError::InvalidObserver(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.contains_key(&observer_id) {
            return Err(ScrollerError::InvalidObserver(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.insert(observer_id, observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        self.observers.shift_remove(observer_id).is_some()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers.contains_key(observer_id)
    }
}
