use crate::drawing::{DrawingSnapshot, DrawingSource};
use crate::error::RecordError;
use std::time::SystemTime;

/// A saved painting as handed over by the persistence layer. Every field is
/// required at construction, so nothing downstream has to guess about
/// missing names or drawings.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintRecord {
    name: String,
    created: SystemTime,
    drawing: DrawingSnapshot,
}

impl PaintRecord {
    pub fn new(
        name: impl Into<String>,
        created: SystemTime,
        drawing: DrawingSnapshot,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }
        Ok(Self {
            name,
            created,
            drawing,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created(&self) -> SystemTime {
        self.created
    }

    pub fn drawing(&self) -> &DrawingSnapshot {
        &self.drawing
    }
}

impl DrawingSource for PaintRecord {
    fn snapshot(&self) -> DrawingSnapshot {
        self.drawing.clone()
    }
}
