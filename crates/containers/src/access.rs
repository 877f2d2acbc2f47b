//! Uniform access to the record behind a container element
//!
//! Containers hold records by value, behind `Tracked`, or behind ownership
//! handles. [`HasRecord`] lets the algorithms read the record through any of
//! those layers.

use roster_core::{Category, Record, Tracked};
use std::rc::Rc;
use std::sync::Arc;

/// An element that exposes a [`Record`]
pub trait HasRecord {
    /// The underlying record
    fn record(&self) -> &Record;

    /// Identifier of the underlying record
    fn id(&self) -> u32 {
        self.record().id()
    }

    /// Category of the underlying record
    fn category(&self) -> Category {
        self.record().category()
    }
}

impl HasRecord for Record {
    fn record(&self) -> &Record {
        self
    }
}

impl<T: HasRecord> HasRecord for Tracked<T> {
    fn record(&self) -> &Record {
        (**self).record()
    }
}

impl<T: HasRecord + ?Sized> HasRecord for Box<T> {
    fn record(&self) -> &Record {
        (**self).record()
    }
}

impl<T: HasRecord + ?Sized> HasRecord for Arc<T> {
    fn record(&self) -> &Record {
        (**self).record()
    }
}

impl<T: HasRecord + ?Sized> HasRecord for Rc<T> {
    fn record(&self) -> &Record {
        (**self).record()
    }
}
