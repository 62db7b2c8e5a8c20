//! Poll-driven display state: countdown text plus the image to show next.

use std::sync::Arc;
use std::time::Instant;

use rand::Rng;

use crate::animation::{AnimationSequence, build_animation};
use crate::countdown::{Clock, CountdownLabels, CountdownResult, CountdownView, TargetMoment};
use crate::render::{Frame, RenderSettings, render_placeholder};

/// Controller phase. `Waiting` moves to `Celebrating` at most once.
#[derive(Debug)]
pub enum Phase {
    Waiting,
    Celebrating {
        sequence: AnimationSequence,
        cursor: usize,
    },
}

/// Result of one poll.
#[derive(Debug, Clone)]
pub struct PollOutput {
    pub text: String,
    pub reached: bool,
    pub frame: Arc<Frame>,
}

/// Owns all countdown/animation state for one hosting process.
///
/// Polls are expected to be serialized by the owner; nothing here locks.
pub struct DisplayController<C, R> {
    view: CountdownView<C>,
    render: RenderSettings,
    rng: R,
    phase: Phase,
}

impl<C, R> DisplayController<C, R>
where
    C: Clock,
    R: Rng,
{
    #[must_use]
    pub const fn new(
        target: TargetMoment,
        labels: CountdownLabels,
        render: RenderSettings,
        clock: C,
        rng: R,
    ) -> Self {
        Self {
            view: CountdownView::new(clock, target, labels),
            render,
            rng,
            phase: Phase::Waiting,
        }
    }

    /// Countdown half of the controller, without the animation state.
    #[must_use]
    pub const fn view(&self) -> &CountdownView<C> {
        &self.view
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub const fn is_celebrating(&self) -> bool {
        matches!(self.phase, Phase::Celebrating { .. })
    }

    /// Countdown against the controller's clock, without touching state.
    #[must_use]
    pub fn countdown(&self) -> CountdownResult {
        self.view.current()
    }

    /// Placeholder image used to seed a page before its first poll.
    #[must_use]
    pub fn initial_placeholder(&self) -> Frame {
        render_placeholder(&self.render)
    }

    /// Advances the display by one tick.
    ///
    /// While waiting, returns the live countdown and a fresh placeholder. The
    /// first poll that sees the target reached builds the animation; from then
    /// on every poll returns the celebration text and the next frame.
    pub fn poll(&mut self) -> PollOutput {
        let countdown = self.countdown();
        if countdown.reached && !self.is_celebrating() {
            self.enter_celebration();
        }

        match &mut self.phase {
            Phase::Waiting => PollOutput {
                text: countdown.text,
                reached: false,
                frame: Arc::new(render_placeholder(&self.render)),
            },
            Phase::Celebrating { sequence, cursor } => {
                let frame = match sequence.frame_at(*cursor) {
                    Some(frame) => Arc::clone(frame),
                    None => Arc::new(render_placeholder(&self.render)),
                };
                *cursor = cursor
                    .saturating_add(1)
                    .checked_rem(sequence.len())
                    .unwrap_or(0);
                PollOutput {
                    text: self.view.labels().celebration_text.clone(),
                    reached: true,
                    frame,
                }
            }
        }
    }

    fn enter_celebration(&mut self) {
        tracing::info!(
            "Target moment {} reached, building reveal animation",
            self.view.target()
        );
        let started = Instant::now();
        let sequence = build_animation(&self.render, &mut self.rng);
        tracing::debug!(
            "Built {} reveal frames in {} ms",
            sequence.len(),
            started.elapsed().as_millis()
        );
        self.phase = Phase::Celebrating {
            sequence,
            cursor: 0,
        };
    }
}
