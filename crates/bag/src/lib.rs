#![forbid(unsafe_code)]

pub mod bag;

pub use self::bag::{
    Bag,
    DEFAULT_CAPACITY,
};
use core::fmt::{
    self,
    Display,
    Formatter,
};

/// Errors that may occure when operating on a bag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation requires at least one item but the bag is empty.
    EmptyCollection,
    /// The requested item is not contained in the bag.
    NoSuchElement,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection => write!(f, "the bag is empty"),
            Self::NoSuchElement => write!(f, "the item is not contained in the bag"),
        }
    }
}

impl std::error::Error for Error {}
