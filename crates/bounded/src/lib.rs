#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

pub mod ordered_list;
pub mod traversal;

pub use self::{
    ordered_list::{
        OrderedList,
        DEFAULT_MAXIMUM_SIZE,
    },
    traversal::Traversal,
};
use core::fmt::{
    self,
    Display,
    Formatter,
};

/// Errors that may occure when operating on an ordered list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation requires at least one item but the list is empty.
    EmptyCollection,
    /// An insertion was attempted on a full list.
    CapacityExceeded,
    /// The given position does not refer to an item of the list.
    IllegalPosition,
    /// A traversal was advanced after its list was structurally modified.
    ConcurrentModification,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection => write!(f, "the ordered list is empty"),
            Self::CapacityExceeded => write!(f, "the ordered list is full"),
            Self::IllegalPosition => {
                write!(f, "the position does not refer to an item of the ordered list")
            }
            Self::ConcurrentModification => {
                write!(f, "the ordered list was modified during traversal")
            }
        }
    }
}

impl core::error::Error for Error {}
