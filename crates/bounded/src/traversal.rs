use super::{
    Error,
    OrderedList,
};
use tracing::debug;

/// A forward-only traversal over the items of an [`OrderedList`].
///
/// Created by [`OrderedList::traversal`].
///
/// The traversal does not borrow its list in between steps and thus allows
/// the list to be modified while the traversal is outstanding. Every step
/// after such a structural modification fails with
/// [`Error::ConcurrentModification`]. A traversal cannot be restarted,
/// request a new one from the list instead.
///
/// Advancing the traversal with any other list than the one it was created
/// from, including clones of that list, fails the same way.
#[derive(Debug)]
pub struct Traversal {
    /// The identity of the list the traversal was created from.
    list: usize,
    /// The epoch of the list at the time of creation.
    epoch: usize,
    /// The 0-based index of the next item to yield.
    next: usize,
}

impl Traversal {
    /// Creates a new traversal for the list with the given identity and epoch.
    pub(crate) fn new(list: usize, epoch: usize) -> Self {
        Self {
            list,
            epoch,
            next: 0,
        }
    }

    /// Ensures that the list is the one the traversal was created from and
    /// that it has not been modified since.
    fn ensure_unmodified<T>(&self, list: &OrderedList<T>) -> Result<(), Error> {
        if list.id() != self.list {
            debug!(
                expected = self.list,
                found = list.id(),
                "rejected traversal step over foreign ordered list"
            );
            return Err(Error::ConcurrentModification)
        }
        if list.epoch() != self.epoch {
            debug!(
                expected = self.epoch,
                found = list.epoch(),
                "rejected traversal step over modified ordered list"
            );
            return Err(Error::ConcurrentModification)
        }
        Ok(())
    }

    /// Yields the next item of the list in position order.
    ///
    /// Returns `Ok(None)` once all items have been yielded.
    ///
    /// # Errors
    ///
    /// - If the list is not the one the traversal was created from.
    /// - If the list has been structurally modified since the traversal was created.
    pub fn next<'a, T>(&mut self, list: &'a OrderedList<T>) -> Result<Option<&'a T>, Error> {
        self.ensure_unmodified(list)?;
        let item = list.as_slice().get(self.next);
        if item.is_some() {
            self.next += 1;
        }
        Ok(item)
    }

    /// Returns the number of items the traversal is going to yield.
    ///
    /// # Errors
    ///
    /// - If the list is not the one the traversal was created from.
    /// - If the list has been structurally modified since the traversal was created.
    pub fn remaining<T>(&self, list: &OrderedList<T>) -> Result<usize, Error> {
        self.ensure_unmodified(list)?;
        Ok(list.len().saturating_sub(self.next))
    }
}
