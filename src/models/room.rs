//! Room model.

use serde::{Deserialize, Serialize};

/// Room classification.
///
/// Lab sessions require [`RoomType::Lab`]; everything else takes a
/// classroom. Online rooms exist in the data but are never auto-allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    Classroom,
    Lab,
    Online,
}

/// A physical (or virtual) teaching room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Room number as used on campus (e.g. "1NB002").
    pub number: String,
    /// Room classification.
    pub room_type: RoomType,
    /// Seating capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a new room.
    pub fn new(id: impl Into<String>, number: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            room_type,
            capacity: 0,
        }
    }

    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>, number: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, number, RoomType::Classroom).with_capacity(capacity)
    }

    /// Creates a lab.
    pub fn lab(id: impl Into<String>, number: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, number, RoomType::Lab).with_capacity(capacity)
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}
