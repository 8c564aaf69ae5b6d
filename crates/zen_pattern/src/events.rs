//! Event types and sinks for observing generation runs.
//!
//! This module defines [`GenerationEvent`] and a set of sinks to collect or forward
//! events while a scene is composed via
//! [`crate::compose::generate_scene_with_events`]. Sinks are a side channel: they never
//! draw from the random stream, so observing a run does not change its scene.
use crate::grid::{Cell, Grid};
use crate::palette::Palette;
use crate::params::GenerationParameters;
use crate::scene::Motif;

/// Describes events emitted while composing a scene.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    /// Emitted once parameters are validated and the palette is drawn.
    RunStarted {
        /// Parameters of the run.
        params: GenerationParameters,
        /// Resolved placement grid.
        grid: Grid,
        /// Palette drawn for the run.
        palette: Palette,
    },

    /// Emitted when a cell's occupancy draw exceeded the density.
    CellSkipped {
        /// The skipped cell.
        cell: Cell,
        /// The occupancy draw that caused the skip.
        occupancy: f64,
    },

    /// Emitted after a motif was placed and its shape generated.
    MotifPlaced {
        /// The occupied cell.
        cell: Cell,
        /// Resolved placement.
        motif: Motif,
        /// Palette index the colour was taken from.
        palette_index: usize,
    },

    /// Emitted when the scene is complete.
    RunFinished {
        /// Counters for the run.
        summary: RunSummary,
    },
}

/// Counters describing a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Grid cells visited; always `cols * rows`.
    pub cells_visited: usize,
    /// Cells that received a motif.
    pub motifs_placed: usize,
    /// Cells left empty.
    pub cells_skipped: usize,
    /// Top-level instructions in the scene, background included.
    pub instructions: usize,
}

/// A generic event sink that accepts [`GenerationEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: GenerationEvent);

    /// Whether events are observed at all. Producers skip building events when `false`.
    fn wants_events(&self) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: GenerationEvent) {}

    #[inline]
    fn wants_events(&self) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<GenerationEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<GenerationEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[GenerationEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skipped(col: usize) -> GenerationEvent {
        GenerationEvent::CellSkipped {
            cell: Cell::new(col, 0),
            occupancy: 0.9,
        }
    }

    #[test]
    fn vec_sink_collects_events_in_order() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(skipped(0));
        sink.send(skipped(1));
        assert_eq!(sink.len(), 2);
        let cols: Vec<_> = sink
            .into_inner()
            .into_iter()
            .filter_map(|e| match e {
                GenerationEvent::CellSkipped { cell, .. } => Some(cell.col),
                _ => None,
            })
            .collect();
        assert_eq!(cols, vec![0, 1]);
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(skipped(3));
        sink.send(GenerationEvent::RunFinished {
            summary: RunSummary::default(),
        });
        assert_eq!(count, 2);
    }

    #[test]
    fn unit_sink_discards() {
        EventSink::send(&mut (), skipped(0));
        assert!(!().wants_events());
        assert!(VecSink::new().wants_events());
    }
}
