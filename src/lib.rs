#![forbid(unsafe_code)]


pub use bag::{
    Bag,
    Error as BagError,
    DEFAULT_CAPACITY,
};
pub use bounded::{
    Error as OrderedListError,
    OrderedList,
    Traversal,
    DEFAULT_MAXIMUM_SIZE,
};
use core::fmt::{
    self,
    Display,
    Formatter,
};

/// Errors of either abstract data type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation on an ordered list failed.
    OrderedList(OrderedListError),
    /// An operation on a bag failed.
    Bag(BagError),
}

impl From<OrderedListError> for Error {
    fn from(err: OrderedListError) -> Self {
        Self::OrderedList(err)
    }
}

impl From<BagError> for Error {
    fn from(err: BagError) -> Self {
        Self::Bag(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrderedList(err) => Display::fmt(err, f),
            Self::Bag(err) => Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OrderedList(err) => Some(err),
            Self::Bag(err) => Some(err),
        }
    }
}
