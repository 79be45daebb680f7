use super::Error;
use core::{
    fmt::{
        self,
        Display,
        Formatter,
    },
    iter::FromIterator,
    slice,
};
use rand::Rng;
use std::vec;
use tracing::{
    debug,
    trace,
};

/// The initial capacity of bags created via [`Bag::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// An unordered collection of items that may contain duplicates.
///
/// There is no restriction on the number of items a bag may hold.
#[derive(Debug, Clone)]
pub struct Bag<T> {
    items: Vec<T>,
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut bag = Self::default();
        bag.extend(iter);
        bag
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> Bag<T> {
    /// Creates a new empty bag with an initial capacity of [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty bag with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of items in the bag.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the bag is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of items the bag may hold before it needs to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns an iterator yielding shared references to the items of the bag.
    ///
    /// The order of the yielded items is unspecified.
    #[inline]
    pub fn iter(&self) -> slice::Iter<T> {
        self.items.iter()
    }

    /// Adds the item to the bag.
    ///
    /// Doubles the capacity of the bag if it is full.
    pub fn add(&mut self, new_item: T) {
        if self.len() == self.capacity() {
            let additional = self.capacity().max(1);
            self.items.reserve_exact(additional);
            trace!(capacity = self.capacity(), "grew bag");
        }
        self.items.push(new_item);
    }

    /// Removes a uniformly chosen item from the bag and returns it.
    ///
    /// # Errors
    ///
    /// If the bag is empty.
    pub fn remove_random(&mut self) -> Result<T, Error> {
        self.remove_random_with(&mut rand::thread_rng())
    }

    /// Removes an item chosen uniformly by the given random number generator.
    ///
    /// # Errors
    ///
    /// If the bag is empty.
    pub fn remove_random_with<R>(&mut self, rng: &mut R) -> Result<T, Error>
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            debug!("rejected random removal from empty bag");
            return Err(Error::EmptyCollection)
        }
        let index = rng.gen_range(0, self.len());
        Ok(self.items.swap_remove(index))
    }
}

impl<T> Bag<T>
where
    T: PartialEq,
{
    /// Returns `true` if the bag contains the item.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Removes one occurrence of the item from the bag and returns it.
    ///
    /// # Errors
    ///
    /// If the item is not contained in the bag.
    pub fn remove(&mut self, item: &T) -> Result<T, Error> {
        match self.items.iter().position(|contained| contained == item) {
            Some(index) => Ok(self.items.swap_remove(index)),
            None => {
                debug!(len = self.len(), "rejected removal of missing bag item");
                Err(Error::NoSuchElement)
            }
        }
    }

    /// Returns `true` if both bags have the same size and every item of
    /// either bag is contained in the other.
    ///
    /// # Note
    ///
    /// Only containment is checked, not how often an item occurs.
    pub fn same_items(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|item| other.contains(item))
            && other.iter().all(|item| self.contains(item))
    }
}

impl<T> Bag<T>
where
    T: Clone,
{
    /// Adds clones of all items of the other bag to this bag.
    pub fn add_all(&mut self, other: &Self) {
        self.extend(other.iter().cloned());
    }

    /// Returns a new bag holding the items of both bags.
    ///
    /// Duplicates are preserved and neither bag is modified.
    pub fn union(&self, other: &Self) -> Self {
        let mut union = Self::default();
        union.add_all(other);
        union.add_all(self);
        union
    }
}

impl<T> PartialEq for Bag<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.same_items(other)
    }
}

impl<T> Eq for Bag<T> where T: Eq {}

impl<T> Display for Bag<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut prefix = " ";
        for item in self {
            write!(f, "{}{}", prefix, item)?;
            prefix = ", ";
        }
        write!(f, " }}")
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Bag<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
