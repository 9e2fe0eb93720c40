// src/lattice/history.rs

use super::entanglement::Site;
use crate::core::{Gate, Pauli};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The gates of a lattice at one instant, together with its entanglement metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    cells: Vec<Gate>,
    entanglement: usize,
}

impl Frame {
    pub(crate) fn new(cells: Vec<Gate>, entanglement: usize) -> Self {
        Self { cells, entanglement }
    }

    /// Gates of the frame, leftmost first.
    pub fn cells(&self) -> &[Gate] {
        &self.cells
    }

    /// Symbols of the frame, leftmost first.
    pub fn symbols(&self) -> Vec<Pauli> {
        self.cells.iter().map(Gate::pauli).collect()
    }

    /// Entanglement metric when the frame was captured.
    pub fn entanglement(&self) -> usize {
        self.entanglement
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` for a frame of an empty lattice.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// A new frame with `left` identity cells before and `right` after.
    pub fn padded(&self, left: usize, right: usize) -> Frame {
        let mut cells = Vec::with_capacity(left + self.cells.len() + right);
        cells.extend(std::iter::repeat_n(Gate::identity(), left));
        cells.extend_from_slice(&self.cells);
        cells.extend(std::iter::repeat_n(Gate::identity(), right));
        Frame { cells, entanglement: self.entanglement }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, gate) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", gate)?;
        }
        Ok(())
    }
}

/// Every frame of an evolution, aligned to one coordinate system.
///
/// All frames have the same length, that of the largest (final) lattice, and
/// position `p` of every frame refers to site `leftmost_site + p`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    leftmost_site: Site,
    frames: Vec<Frame>,
}

impl History {
    /// The frames in capture order; frame `t` is the state after `t` steps.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames (steps taken plus one).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` if no frame was captured.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Common length of all frames.
    pub fn width(&self) -> usize {
        self.frames.first().map_or(0, Frame::len)
    }

    /// Site coordinate of position 0 in every frame.
    pub fn leftmost_site(&self) -> Site {
        self.leftmost_site
    }

    /// The entanglement metric of each frame, in order.
    pub fn entanglement_series(&self) -> Vec<usize> {
        self.frames.iter().map(Frame::entanglement).collect()
    }

    /// The last captured frame.
    pub fn final_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Iterates over the frames.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            writeln!(f, "{}", frame)?;
        }
        Ok(())
    }
}

/// Collects frames of a growing lattice and aligns them once at the end.
///
/// Each capture remembers the site coordinate of its leftmost cell; frames
/// captured earlier are narrower and are padded with identities on both sides
/// when [`HistoryBuilder::finish`] lays them into the final frame's coordinates.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuilder {
    captures: Vec<(Site, Frame)>,
}

impl HistoryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame whose position 0 sits at `leftmost_site`.
    pub fn record(&mut self, leftmost_site: Site, frame: Frame) {
        self.captures.push((leftmost_site, frame));
    }

    /// Number of frames recorded so far.
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    /// `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    /// Pads every capture to the common span of all captures.
    pub fn finish(self) -> History {
        let left = self.captures.iter().map(|(site, _)| *site).min().unwrap_or(0);
        let right = self
            .captures
            .iter()
            .map(|(site, frame)| site + frame.len() as Site)
            .max()
            .unwrap_or(left);

        let frames = self
            .captures
            .into_iter()
            .map(|(site, frame)| {
                let pad_left = (site - left) as usize;
                let pad_right = (right - site - frame.len() as Site) as usize;
                frame.padded(pad_left, pad_right)
            })
            .collect();

        History { leftmost_site: left, frames }
    }
}
