//! Precomputed reveal animation.
use std::sync::Arc;

use rand::Rng;

use crate::render::{Frame, RenderSettings, RenderState, render_frame};

/// Progress steps between the first and last frame; the sequence holds one
/// more frame than this.
pub const ANIMATION_STEPS: u32 = 20;

/// Ordered reveal frames, progress `0, 1/20, ..., 1`. Never resized.
#[derive(Debug, Clone)]
pub struct AnimationSequence {
    frames: Vec<Arc<Frame>>,
}

impl AnimationSequence {
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame for a free-running cursor, wrapping modulo the sequence length.
    #[must_use]
    pub fn frame_at(&self, cursor: usize) -> Option<&Arc<Frame>> {
        let index = cursor.checked_rem(self.frames.len())?;
        self.frames.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Frame>> {
        self.frames.iter()
    }
}

/// Renders every reveal frame. Confetti differs between calls.
#[expect(clippy::float_arithmetic, reason = "Progress is a step fraction")]
pub fn build_animation<R>(settings: &RenderSettings, rng: &mut R) -> AnimationSequence
where
    R: Rng + ?Sized,
{
    let frames = (0..=ANIMATION_STEPS)
        .map(|step| {
            let progress = f64::from(step) / f64::from(ANIMATION_STEPS);
            Arc::new(render_frame(RenderState::reveal(progress), settings, rng))
        })
        .collect();
    AnimationSequence { frames }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::countdown::TargetMoment;
    use crate::error::{AppError, AppResult};

    fn settings() -> AppResult<RenderSettings> {
        let target = "2025-10-10".parse::<TargetMoment>()?;
        Ok(RenderSettings::for_target(target, "sans-serif", "Happy Birthday!"))
    }

    #[test]
    #[expect(clippy::float_arithmetic, reason = "Expected progress is a step fraction")]
    fn animation_has_twenty_one_ordered_frames() -> AppResult<()> {
        let mut rng = StdRng::seed_from_u64(7);
        let sequence = build_animation(&settings()?, &mut rng);
        if sequence.is_empty() || sequence.len() != 21 {
            return Err(AppError::validation(format!(
                "Expected 21 frames, got {}",
                sequence.len()
            )));
        }
        for (step, frame) in sequence.iter().enumerate() {
            let step = u32::try_from(step).map_err(|err| AppError::validation(err.to_string()))?;
            let expected = f64::from(step) / 20.0;
            let progress = frame
                .progress()
                .ok_or_else(|| AppError::validation("Animation frame must be a reveal"))?;
            if progress.to_bits() != expected.to_bits() {
                return Err(AppError::validation(format!(
                    "Frame {} has progress {}",
                    step, progress
                )));
            }
        }
        Ok(())
    }

    #[test]
    fn frame_at_wraps_cursor() -> AppResult<()> {
        let mut rng = StdRng::seed_from_u64(7);
        let sequence = build_animation(&settings()?, &mut rng);
        let first = sequence
            .frame_at(0)
            .ok_or_else(|| AppError::validation("Missing first frame"))?;
        let wrapped = sequence
            .frame_at(21)
            .ok_or_else(|| AppError::validation("Missing wrapped frame"))?;
        if !Arc::ptr_eq(first, wrapped) {
            return Err(AppError::validation("Cursor 21 should wrap to frame 0"));
        }
        Ok(())
    }
}
