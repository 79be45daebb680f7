use super::{
    Error,
    Traversal,
};
use alloc::vec::Vec;
use core::{
    iter::IntoIterator,
    slice,
    sync::atomic::{
        AtomicUsize,
        Ordering,
    },
};
use tracing::{
    debug,
    trace,
};

/// The maximum size of ordered lists created via [`OrderedList::new`].
pub const DEFAULT_MAXIMUM_SIZE: usize = 10;

/// Source of the identities of all ordered lists.
static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Returns an identity that no other ordered list has been given so far.
fn fresh_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A finite ordered collection of comparable items with a movable cursor.
///
/// The collection may hold up to a maximum number of items that is fixed
/// upon construction. From a client's perspective items are numbered
/// starting at one (1).
///
/// The current position is the item that [`OrderedList::item`],
/// [`OrderedList::insert`] and [`OrderedList::remove`] operate on.
/// It always satisfies `1 <= position <= max(1, len)`.
#[derive(Debug)]
pub struct OrderedList<T> {
    /// Distinguishes this list from all other lists including its clones.
    id: usize,
    /// The number of items the list may hold at most.
    maximum_size: usize,
    /// The items in the order of their position numbers.
    elements: Vec<T>,
    /// The 1-based current position.
    position: usize,
    /// Incremented upon every structural modification of the list.
    ///
    /// Used by [`Traversal`] to detect modifications in between its steps.
    epoch: usize,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::with_maximum_size(DEFAULT_MAXIMUM_SIZE)
    }
}

impl<T> Clone for OrderedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            id: fresh_id(),
            maximum_size: self.maximum_size,
            elements: self.elements.clone(),
            position: self.position,
            epoch: self.epoch,
        }
    }
}

impl<T> PartialEq for OrderedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.maximum_size == other.maximum_size
            && self.position == other.position
            && self.elements == other.elements
    }
}

impl<T> Eq for OrderedList<T> where T: Eq {}

impl<T> OrderedList<T> {
    /// Creates a new empty ordered list with a maximum size of
    /// [`DEFAULT_MAXIMUM_SIZE`] items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty ordered list that may hold up to `maximum_size` items.
    ///
    /// # Panics
    ///
    /// If `maximum_size` is zero.
    pub fn with_maximum_size(maximum_size: usize) -> Self {
        assert!(
            maximum_size > 0,
            "tried to create an ordered list with a maximum size of zero"
        );
        Self {
            id: fresh_id(),
            maximum_size,
            elements: Vec::with_capacity(maximum_size),
            position: 1,
            epoch: 0,
        }
    }

    /// Returns the number of items stored in the ordered list.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the maximum number of items the ordered list may hold.
    #[inline]
    pub fn maximum_size(&self) -> usize {
        self.maximum_size
    }

    /// Returns `true` if the ordered list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the ordered list is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.maximum_size()
    }

    /// Returns the 1-based current position.
    ///
    /// The first item is at position 1 and the last at position `len`.
    /// An empty list reports position 1.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the items in the order of their position numbers.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator yielding shared references to the items in position order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<T> {
        self.elements.iter()
    }

    /// Returns a new traversal over the items in position order.
    ///
    /// Unlike [`OrderedList::iter`] the traversal does not borrow the list
    /// in between its steps. Advancing it after the list has been
    /// structurally modified fails with [`Error::ConcurrentModification`].
    #[inline]
    pub fn traversal(&self) -> Traversal {
        Traversal::new(self.id, self.epoch)
    }

    /// Returns the identity of the ordered list.
    #[inline]
    pub(crate) fn id(&self) -> usize {
        self.id
    }

    /// Returns the current modification epoch of the ordered list.
    #[inline]
    pub(crate) fn epoch(&self) -> usize {
        self.epoch
    }

    /// Returns a shared reference to the item at the current position.
    ///
    /// # Errors
    ///
    /// If the ordered list is empty.
    pub fn item(&self) -> Result<&T, Error> {
        self.ensure_not_empty()?;
        Ok(&self.elements[self.position - 1])
    }

    /// Returns an exclusive reference to the item at the current position.
    ///
    /// # Errors
    ///
    /// If the ordered list is empty.
    pub fn item_mut(&mut self) -> Result<&mut T, Error> {
        self.ensure_not_empty()?;
        Ok(&mut self.elements[self.position - 1])
    }

    /// Advances the current position by one unless it already is the last position.
    ///
    /// # Errors
    ///
    /// If the ordered list is empty.
    pub fn next_position(&mut self) -> Result<(), Error> {
        self.ensure_not_empty()?;
        if self.position < self.len() {
            self.position += 1;
        }
        Ok(())
    }

    /// Moves the current position back by one unless it already is the first position.
    ///
    /// # Errors
    ///
    /// If the ordered list is empty.
    pub fn previous_position(&mut self) -> Result<(), Error> {
        self.ensure_not_empty()?;
        if self.position > 1 {
            self.position -= 1;
        }
        Ok(())
    }

    /// Sets the current position.
    ///
    /// Values below one are treated as one and values beyond the last
    /// position are treated as the last position (or one if the list is
    /// empty).
    pub fn set_position(&mut self, position: isize) {
        self.position = clamp_position(position, self.len().max(1));
    }

    /// Removes the item at the current position and returns it.
    ///
    /// The successor of the removed item (if any) takes over the current
    /// position. If the last item was removed the current position moves to
    /// the new last item, or to one if the list became empty.
    ///
    /// # Errors
    ///
    /// If the ordered list is empty.
    pub fn remove(&mut self) -> Result<T, Error> {
        self.ensure_not_empty()?;
        let removed = self.elements.remove(self.position - 1);
        self.repair_position();
        self.touch("remove");
        Ok(removed)
    }

    /// Removes the item at the given 1-based position and returns it.
    ///
    /// The current position is only changed if it exceeds the length of the
    /// list after the removal. In that case it is set to the new last
    /// position, or to one if the list became empty.
    ///
    /// # Errors
    ///
    /// - If the ordered list is empty.
    /// - If the position does not refer to an item of the list.
    pub fn remove_at(&mut self, position: usize) -> Result<T, Error> {
        self.ensure_not_empty()?;
        if position == 0 || position > self.len() {
            debug!(
                position,
                len = self.len(),
                "rejected removal at illegal position"
            );
            return Err(Error::IllegalPosition)
        }
        let removed = self.elements.remove(position - 1);
        self.repair_position();
        self.touch("remove_at");
        Ok(removed)
    }

    /// Removes all items from the ordered list and resets the current position to one.
    pub fn remove_all(&mut self) {
        self.elements.clear();
        self.position = 1;
        self.touch("remove_all");
    }

    /// Ensures that the ordered list holds at least one item.
    fn ensure_not_empty(&self) -> Result<(), Error> {
        if self.is_empty() {
            debug!("rejected operation on empty ordered list");
            return Err(Error::EmptyCollection)
        }
        Ok(())
    }

    /// Ensures that the ordered list may hold at least one more item.
    fn ensure_not_full(&self) -> Result<(), Error> {
        if self.is_full() {
            debug!(
                maximum_size = self.maximum_size(),
                "rejected insertion into full ordered list"
            );
            return Err(Error::CapacityExceeded)
        }
        Ok(())
    }

    /// Clamps the current position back into `1..=max(1, len)` after a removal.
    fn repair_position(&mut self) {
        if self.position > self.len() {
            self.position = self.len().max(1);
        }
    }

    /// Registers a structural modification of the ordered list.
    fn touch(&mut self, operation: &'static str) {
        self.epoch = self.epoch.wrapping_add(1);
        trace!(
            operation,
            len = self.len(),
            position = self.position,
            "modified ordered list"
        );
    }
}

impl<T> OrderedList<T>
where
    T: Ord,
{
    /// Inserts the item at the current position.
    ///
    /// The item previously at the current position (if any) becomes the
    /// successor of the new item. The current position does not change so
    /// that [`OrderedList::item`] yields the new item afterwards.
    ///
    /// # Note
    ///
    /// In order to append an item behind the last one use
    /// [`OrderedList::insert_at`].
    ///
    /// # Errors
    ///
    /// If the ordered list is full.
    pub fn insert(&mut self, new_item: T) -> Result<(), Error> {
        self.ensure_not_full()?;
        self.elements.insert(self.position - 1, new_item);
        self.touch("insert");
        Ok(())
    }

    /// Inserts the item at the given 1-based position.
    ///
    /// Positions below one are treated as one and positions beyond the last
    /// one append the item. Afterwards the current position refers to the
    /// inserted item.
    ///
    /// # Errors
    ///
    /// If the ordered list is full.
    pub fn insert_at(&mut self, new_item: T, position: isize) -> Result<(), Error> {
        self.ensure_not_full()?;
        let position = clamp_position(position, self.len() + 1);
        self.elements.insert(position - 1, new_item);
        self.position = position;
        self.touch("insert_at");
        Ok(())
    }

    /// Sorts the items into ascending order by their natural ordering.
    ///
    /// The relative order of equal items is unspecified. Afterwards the
    /// current position refers to the last item.
    pub fn sort(&mut self) {
        self.elements.sort_unstable();
        self.position = self.len().max(1);
        self.touch("sort");
    }
}

/// Clamps a client provided position into `1..=last`.
fn clamp_position(position: isize, last: usize) -> usize {
    usize::try_from(position).map_or(1, |position| position.clamp(1, last))
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Creates an ordered list with the given maximum size holding the given items.
    ///
    /// The current position is left at the last item.
    fn list_of(maximum_size: usize, items: &[u8]) -> OrderedList<u8> {
        let mut list = OrderedList::with_maximum_size(maximum_size);
        for &item in items {
            list.insert_at(item, isize::MAX).unwrap();
        }
        list
    }

    #[test]
    fn new_works() {
        let list = <OrderedList<u8>>::new();
        assert!(list.is_empty());
        assert!(!list.is_full());
        assert_eq!(list.len(), 0);
        assert_eq!(list.position(), 1);
        assert_eq!(list.maximum_size(), DEFAULT_MAXIMUM_SIZE);
        assert_eq!(list.item(), Err(Error::EmptyCollection));
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    #[should_panic]
    fn zero_maximum_size_panics() {
        let _ = <OrderedList<u8>>::with_maximum_size(0);
    }

    #[test]
    fn insert_keeps_position() {
        let mut list = OrderedList::with_maximum_size(4);
        assert_eq!(list.insert(b'A'), Ok(()));
        assert_eq!(list.item(), Ok(&b'A'));
        assert_eq!(list.insert(b'B'), Ok(()));
        assert_eq!(list.item(), Ok(&b'B'));
        assert_eq!(list.position(), 1);
        assert_eq!(list.as_slice(), b"BA");
        list.set_position(2);
        assert_eq!(list.insert(b'C'), Ok(()));
        assert_eq!(list.item(), Ok(&b'C'));
        assert_eq!(list.position(), 2);
        assert_eq!(list.as_slice(), b"BCA");
    }

    #[test]
    fn insert_at_clamps_position() {
        let mut list = OrderedList::with_maximum_size(5);
        assert_eq!(list.insert_at(b'A', 7), Ok(()));
        assert_eq!(list.position(), 1);
        assert_eq!(list.insert_at(b'B', 0), Ok(()));
        assert_eq!(list.position(), 1);
        assert_eq!(list.insert_at(b'C', -3), Ok(()));
        assert_eq!(list.position(), 1);
        assert_eq!(list.as_slice(), b"CBA");
        assert_eq!(list.insert_at(b'D', 4), Ok(()));
        assert_eq!(list.position(), 4);
        assert_eq!(list.insert_at(b'E', 2), Ok(()));
        assert_eq!(list.position(), 2);
        assert_eq!(list.item(), Ok(&b'E'));
        assert_eq!(list.as_slice(), b"CEBAD");
    }

    #[test]
    fn insert_into_full_list_fails() {
        let mut list = list_of(2, b"AB");
        assert!(list.is_full());
        assert_eq!(list.insert(b'C'), Err(Error::CapacityExceeded));
        assert_eq!(list.insert_at(b'C', 1), Err(Error::CapacityExceeded));
        assert_eq!(list.as_slice(), b"AB");
        assert_eq!(list.position(), 2);
    }

    #[test]
    fn capacity_scenario_works() {
        let mut list = OrderedList::with_maximum_size(3);
        list.insert_at(b'A', 1).unwrap();
        assert_eq!(list.as_slice(), b"A");
        assert_eq!(list.position(), 1);
        list.insert_at(b'B', 1).unwrap();
        assert_eq!(list.as_slice(), b"BA");
        assert_eq!(list.position(), 1);
        list.insert_at(b'C', 5).unwrap();
        assert_eq!(list.as_slice(), b"BAC");
        assert_eq!(list.position(), 3);
        assert_eq!(list.insert(b'D'), Err(Error::CapacityExceeded));
        assert_eq!(list.remove_at(2), Ok(b'A'));
        assert_eq!(list.as_slice(), b"BC");
        assert_eq!(list.position(), 2);
    }

    #[test]
    fn next_and_previous_position_work() {
        let mut list = list_of(3, b"ABC");
        list.set_position(1);
        assert_eq!(list.previous_position(), Ok(()));
        assert_eq!(list.position(), 1);
        assert_eq!(list.next_position(), Ok(()));
        assert_eq!(list.item(), Ok(&b'B'));
        assert_eq!(list.next_position(), Ok(()));
        assert_eq!(list.item(), Ok(&b'C'));
        // Already at the last position.
        assert_eq!(list.next_position(), Ok(()));
        assert_eq!(list.position(), 3);
        assert_eq!(list.previous_position(), Ok(()));
        assert_eq!(list.item(), Ok(&b'B'));
    }

    #[test]
    fn cursor_moves_on_empty_list_fail() {
        let mut list = <OrderedList<u8>>::new();
        assert_eq!(list.next_position(), Err(Error::EmptyCollection));
        assert_eq!(list.previous_position(), Err(Error::EmptyCollection));
        assert_eq!(list.position(), 1);
    }

    #[test]
    fn set_position_clamps() {
        let mut list = list_of(5, b"ABC");
        let cases = [
            (isize::MIN, 1),
            (-10, 1),
            (0, 1),
            (1, 1),
            (2, 2),
            (3, 3),
            (4, 3),
            (isize::MAX, 3),
        ];
        for (given, expected) in cases {
            list.set_position(given);
            assert_eq!(list.position(), expected);
        }
        list.remove_all();
        list.set_position(isize::MIN);
        assert_eq!(list.position(), 1);
        list.set_position(42);
        assert_eq!(list.position(), 1);
    }

    #[test]
    fn remove_works() {
        let mut list = list_of(5, b"ABCD");
        list.set_position(2);
        // Removing a non-last item keeps the position.
        assert_eq!(list.remove(), Ok(b'B'));
        assert_eq!(list.position(), 2);
        assert_eq!(list.item(), Ok(&b'C'));
        // Removing the last item moves the position to the new last item.
        list.set_position(3);
        assert_eq!(list.remove(), Ok(b'D'));
        assert_eq!(list.position(), 2);
        assert_eq!(list.as_slice(), b"AC");
        assert_eq!(list.remove(), Ok(b'C'));
        assert_eq!(list.position(), 1);
        // Removing the only item resets the position to one.
        assert_eq!(list.remove(), Ok(b'A'));
        assert!(list.is_empty());
        assert_eq!(list.position(), 1);
        assert_eq!(list.remove(), Err(Error::EmptyCollection));
    }

    #[test]
    fn remove_at_works() {
        let mut list = list_of(5, b"ABCD");
        list.set_position(2);
        assert_eq!(list.remove_at(4), Ok(b'D'));
        assert_eq!(list.position(), 2);
        // The position number stays even though its item shifted.
        assert_eq!(list.remove_at(1), Ok(b'A'));
        assert_eq!(list.position(), 2);
        assert_eq!(list.item(), Ok(&b'C'));
        assert_eq!(list.remove_at(2), Ok(b'C'));
        assert_eq!(list.position(), 1);
        assert_eq!(list.remove_at(1), Ok(b'B'));
        assert_eq!(list.position(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_at_illegal_position_fails() {
        let mut list = <OrderedList<u8>>::new();
        assert_eq!(list.remove_at(1), Err(Error::EmptyCollection));
        let mut list = list_of(3, b"AB");
        assert_eq!(list.remove_at(0), Err(Error::IllegalPosition));
        assert_eq!(list.remove_at(3), Err(Error::IllegalPosition));
        assert_eq!(list.as_slice(), b"AB");
        assert_eq!(list.position(), 2);
    }

    #[test]
    fn remove_all_works() {
        let mut list = list_of(3, b"ABC");
        list.remove_all();
        assert!(list.is_empty());
        assert_eq!(list.position(), 1);
        assert_eq!(list.maximum_size(), 3);
        // Removing all items from an empty list is fine, too.
        list.remove_all();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn sort_works() {
        let mut list = list_of(10, b"DBECAB");
        list.set_position(2);
        list.sort();
        assert_eq!(list.as_slice(), b"ABBCDE");
        assert_eq!(list.position(), 6);
        assert_eq!(list.item(), Ok(&b'E'));
        let mut empty = <OrderedList<u8>>::new();
        empty.sort();
        assert_eq!(empty.position(), 1);
    }

    #[test]
    fn item_mut_works() {
        let mut list = list_of(3, b"AB");
        *list.item_mut().unwrap() = b'Z';
        assert_eq!(list.as_slice(), b"AZ");
        list.remove_all();
        assert_eq!(list.item_mut(), Err(Error::EmptyCollection));
    }

    #[test]
    fn len_tracks_inserts_and_removes() {
        use rand::{
            rngs::SmallRng,
            Rng,
            SeedableRng,
        };
        let mut rng = SmallRng::seed_from_u64(42);
        let mut list = <OrderedList<u32>>::with_maximum_size(16);
        let mut expected_len = 0;
        for _ in 0..1_000 {
            let position = rng.gen_range(-2, 20);
            match rng.gen_range(0, 3) {
                0 => {
                    if list.insert_at(rng.gen(), position).is_ok() {
                        expected_len += 1;
                    }
                }
                1 => {
                    if list.insert(rng.gen()).is_ok() {
                        expected_len += 1;
                    }
                }
                _ => {
                    if list.remove_at(position.max(0) as usize).is_ok() {
                        expected_len -= 1;
                    }
                }
            }
            assert_eq!(list.len(), expected_len);
            assert!(list.len() <= list.maximum_size());
            assert!(list.position() >= 1);
            assert!(list.position() <= list.len().max(1));
        }
    }

    #[test]
    fn clone_compares_equal() {
        let list = list_of(4, b"ABC");
        let copy = list.clone();
        assert_eq!(copy, list);
        assert_eq!(copy.position(), 3);
        assert_eq!(copy.maximum_size(), 4);
        assert_ne!(list_of(5, b"ABC"), list);
    }

    #[test]
    fn clones_have_distinct_ids() {
        let list = list_of(4, b"ABC");
        let copy = list.clone();
        assert_ne!(list.id(), copy.id());
        assert_eq!(list.epoch(), copy.epoch());
        assert_ne!(list.id(), list_of(4, b"ABC").id());
    }

    #[test]
    fn into_iter_works() {
        let list = list_of(4, b"CAB");
        let mut collected = [0; 3];
        for (slot, item) in collected.iter_mut().zip(&list) {
            *slot = *item;
        }
        assert_eq!(&collected, b"CAB");
    }
}
