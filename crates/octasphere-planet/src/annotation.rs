//! Per-vertex debug annotations.
//!
//! After a successful rebuild the builder can report every grid vertex
//! (grid coordinate, flat index and final position) to an [`AnnotationSink`],
//! typically to place labelled handles in an editor view. Annotations are not
//! part of the mesh, and a failing sink never aborts a rebuild.

use glam::Vec3;
use tracing::{debug, trace};

use crate::AnnotationError;

/// One grid vertex as reported to an [`AnnotationSink`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexAnnotation {
    /// Grid column.
    pub grid_x: usize,
    /// Grid row.
    pub grid_z: usize,
    /// Flat vertex index `grid_z * width + grid_x`.
    pub index: usize,
    /// Final displaced position.
    pub position: Vec3,
    /// Whether the text label for this vertex should be drawn.
    pub labels_visible: bool,
}

impl VertexAnnotation {
    /// Label text, e.g. `x: 1, z: 0, idx: 1`.
    pub fn label(&self) -> String {
        format!("x: {}, z: {}, idx: {}", self.grid_x, self.grid_z, self.index)
    }
}

/// Receiver of per-vertex annotations from the embedding application.
pub trait AnnotationSink {
    /// Drop every annotation from the previous rebuild.
    fn clear(&mut self);

    /// Record one vertex.
    fn annotate(&mut self, annotation: VertexAnnotation) -> Result<(), AnnotationError>;

    /// Show or hide labels on every recorded annotation. Returns how many
    /// annotations were updated.
    fn set_labels_visible(&mut self, visible: bool) -> usize;
}

/// Discards all annotations.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAnnotationSink;

impl AnnotationSink for NoopAnnotationSink {
    fn clear(&mut self) {}

    fn annotate(&mut self, _annotation: VertexAnnotation) -> Result<(), AnnotationError> {
        Ok(())
    }

    fn set_labels_visible(&mut self, _visible: bool) -> usize {
        0
    }
}

/// Keeps every annotation in memory.
#[derive(Clone, Debug, Default)]
pub struct CollectingAnnotationSink {
    annotations: Vec<VertexAnnotation>,
}

impl CollectingAnnotationSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotations recorded since the last clear.
    pub fn annotations(&self) -> &[VertexAnnotation] {
        &self.annotations
    }
}

impl AnnotationSink for CollectingAnnotationSink {
    fn clear(&mut self) {
        self.annotations.clear();
    }

    fn annotate(&mut self, annotation: VertexAnnotation) -> Result<(), AnnotationError> {
        self.annotations.push(annotation);
        Ok(())
    }

    fn set_labels_visible(&mut self, visible: bool) -> usize {
        for a in &mut self.annotations {
            a.labels_visible = visible;
        }
        self.annotations.len()
    }
}

/// Emits each annotation as a `trace` event.
#[derive(Clone, Debug, Default)]
pub struct TracingAnnotationSink {
    emitted: usize,
}

impl TracingAnnotationSink {
    /// Create a sink with no recorded annotations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of annotations emitted since the last clear.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl AnnotationSink for TracingAnnotationSink {
    fn clear(&mut self) {
        self.emitted = 0;
    }

    fn annotate(&mut self, annotation: VertexAnnotation) -> Result<(), AnnotationError> {
        trace!(
            x = annotation.grid_x,
            z = annotation.grid_z,
            index = annotation.index,
            position = ?annotation.position,
            "vertex annotation"
        );
        self.emitted += 1;
        Ok(())
    }

    fn set_labels_visible(&mut self, visible: bool) -> usize {
        debug!(visible, count = self.emitted, "annotation labels");
        self.emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(index: usize) -> VertexAnnotation {
        VertexAnnotation {
            grid_x: index % 5,
            grid_z: index / 5,
            index,
            position: Vec3::Y,
            labels_visible: false,
        }
    }

    #[test]
    fn test_label_text() {
        assert_eq!(sample(7).label(), "x: 2, z: 1, idx: 7");
    }

    #[test]
    fn test_collecting_sink_records_and_clears() {
        let mut sink = CollectingAnnotationSink::new();
        sink.annotate(sample(0)).unwrap();
        sink.annotate(sample(1)).unwrap();
        assert_eq!(sink.annotations().len(), 2);
        sink.clear();
        assert!(sink.annotations().is_empty());
    }

    #[test]
    fn test_collecting_sink_toggles_labels() {
        let mut sink = CollectingAnnotationSink::new();
        for i in 0..3 {
            sink.annotate(sample(i)).unwrap();
        }
        assert_eq!(sink.set_labels_visible(true), 3);
        assert!(sink.annotations().iter().all(|a| a.labels_visible));
    }

    #[test]
    fn test_tracing_sink_counts() {
        let mut sink = TracingAnnotationSink::new();
        sink.annotate(sample(3)).unwrap();
        assert_eq!(sink.emitted(), 1);
        assert_eq!(sink.set_labels_visible(true), 1);
        sink.clear();
        assert_eq!(sink.emitted(), 0);
    }

    #[test]
    fn test_noop_sink_accepts_everything() {
        let mut sink = NoopAnnotationSink;
        assert!(sink.annotate(sample(0)).is_ok());
        assert_eq!(sink.set_labels_visible(true), 0);
    }
}
