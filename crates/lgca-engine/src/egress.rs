//! Frame export.
//!
//! The driver hands each frame to a [`FrameSink`] before stepping. Sinks
//! only ever see a read-only [`Frame`]; anything kept past the call must be
//! copied out, as [`FrameRecorder`] does.

use std::error::Error;
use std::fmt;

use lgca_arena::Frame;
use lgca_core::{FrameAccess, Shape, StepError, StepId};

/// Error type returned by sink implementations.
pub type SinkError = Box<dyn Error + Send + Sync>;

/// Consumer of frames produced by [`LatticeGasWorld::run`](crate::LatticeGasWorld::run).
pub trait FrameSink {
    /// Receive the frame for `step`.
    ///
    /// # Errors
    ///
    /// Any error aborts the run with [`RunError::Export`].
    fn write_frame(&mut self, step: StepId, frame: &Frame<'_>) -> Result<(), SinkError>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn write_frame(&mut self, step: StepId, frame: &Frame<'_>) -> Result<(), SinkError> {
        (**self).write_frame(step, frame)
    }
}

// ── RunError ───────────────────────────────────────────────────────

/// Errors that abort a multi-step run.
#[derive(Debug)]
pub enum RunError {
    /// A step failed.
    Step(StepError),
    /// The sink rejected a frame.
    Export {
        /// Step id of the rejected frame.
        step: StepId,
        /// Sink error message.
        reason: String,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(e) => write!(f, "step failed: {e}"),
            Self::Export { step, reason } => {
                write!(f, "export of frame {step} failed: {reason}")
            }
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Step(e) => Some(e),
            Self::Export { .. } => None,
        }
    }
}

impl From<StepError> for RunError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

// ── FrameRecorder ──────────────────────────────────────────────────

/// Owned copy of one exported frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedFrame {
    /// Step id the frame was exported at.
    pub step: StepId,
    /// Grid shape.
    pub shape: Shape,
    /// Cell values, one `Vec` per row.
    pub rows: Vec<Vec<u8>>,
}

/// In-memory sink that keeps a copy of every frame it receives.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    frames: Vec<RecordedFrame>,
    limit: Option<usize>,
}

impl FrameRecorder {
    /// Unbounded recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder that fails once more than `limit` frames are offered.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            frames: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Frames recorded so far, in arrival order.
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    /// Number of frames recorded.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Take ownership of the recorded frames, leaving the recorder empty.
    pub fn into_frames(self) -> Vec<RecordedFrame> {
        self.frames
    }
}

impl FrameSink for FrameRecorder {
    fn write_frame(&mut self, step: StepId, frame: &Frame<'_>) -> Result<(), SinkError> {
        if let Some(limit) = self.limit {
            if self.frames.len() >= limit {
                return Err(format!("recorder full ({limit} frames)").into());
            }
        }
        self.frames.push(RecordedFrame {
            step,
            shape: frame.shape(),
            rows: frame.to_rows(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lgca_core::PropagatorError;
    use lgca_test_utils::pair_from_rows;

    #[test]
    fn recorder_copies_rows() {
        let pair = pair_from_rows(&[&[1, 0], &[0, 10]]);
        let mut rec = FrameRecorder::new();
        rec.write_frame(StepId(3), &pair.frame(StepId(3))).unwrap();

        assert_eq!(rec.len(), 1);
        let f = &rec.frames()[0];
        assert_eq!(f.step, StepId(3));
        assert_eq!(f.shape, Shape::new(2, 2));
        assert_eq!(f.rows, vec![vec![1, 0], vec![0, 10]]);
    }

    #[test]
    fn limited_recorder_rejects_overflow() {
        let pair = pair_from_rows(&[&[0]]);
        let mut rec = FrameRecorder::with_limit(1);
        assert!(rec.write_frame(StepId(0), &pair.frame(StepId(0))).is_ok());
        let err = rec
            .write_frame(StepId(1), &pair.frame(StepId(1)))
            .unwrap_err();
        assert!(err.to_string().contains("full"));
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn run_error_display_and_source() {
        let step = RunError::from(StepError::PropagatorFailed {
            name: "propagate".into(),
            reason: PropagatorError::ShapeMismatch {
                expected: Shape::new(2, 2),
                found: Shape::new(3, 3),
            },
        });
        assert!(step.source().is_some());
        assert!(step.to_string().starts_with("step failed"));

        let export = RunError::Export {
            step: StepId(7),
            reason: "disk full".into(),
        };
        assert!(export.source().is_none());
        assert!(export.to_string().contains("disk full"));
    }
}
