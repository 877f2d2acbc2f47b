//! The record value under test
//!
//! A `Record` is a category tag plus an integer identifier. Records order by
//! identifier only, through [`Record::cmp_by_id`]. There is no `PartialEq`:
//! callers compare fields.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One of the two symbolic categories a record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Category `A`
    A,
    /// Category `B`
    B,
}

impl Category {
    /// Single-character tag
    pub fn tag(self) -> char {
        match self {
            Category::A => 'A',
            Category::B => 'B',
        }
    }

    /// Parse a single-character tag
    pub fn from_tag(tag: char) -> Result<Self> {
        match tag {
            'A' => Ok(Category::A),
            'B' => Ok(Category::B),
            other => Err(Error::InvalidCategory(other)),
        }
    }

    /// The other category
    pub fn flipped(self) -> Self {
        match self {
            Category::A => Category::B,
            Category::B => Category::A,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A category-tagged record with a positive identifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Record {
    category: Category,
    id: u32,
}

impl Record {
    /// Create a record
    pub fn new(category: Category, id: u32) -> Self {
        Record { category, id }
    }

    /// Category tag
    pub fn category(&self) -> Category {
        self.category
    }

    /// Identifier
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Same identifier, different category
    pub fn with_category(self, category: Category) -> Self {
        Record { category, ..self }
    }

    /// Ascending order by identifier
    pub fn cmp_by_id(&self, other: &Record) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.category, self.id)
    }
}
