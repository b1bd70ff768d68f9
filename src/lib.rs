//! An ordered index of unique integer keys implemented with an AVL tree.
//!
//! [`AvlIndex`] supports insertion, deletion, membership search and the three
//! depth-first traversals. Balance is restored by rotations after every
//! insertion and deletion, keeping the tree height logarithmic in the number of keys.
//!
//! Rejected operations (inserting a present key, deleting an absent one) are
//! reported as [`InsertOutcome`] and [`DeleteOutcome`] values and never alter the index.

mod error;
mod index;
mod traverse;
mod tree;

pub use error::{DeleteOutcome, IndexError, InsertOutcome, Result};
pub use index::AvlIndex;
pub use traverse::{Order, Traverse};
