use embassy_time::{Duration, Instant, Timer};

use crate::animation::{AnimationSlot, Step};
use crate::color::Rgb;
use crate::config::RendererConfig;
use crate::driver::{StripDriver, StripGuard};
use crate::error::RenderStepFailed;
use crate::intent::DisplayIntent;
use crate::state::AnimationState;

/// Result of a renderer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// When the renderer wants to be called again.
    pub next_deadline: Instant,
    /// How long to wait until then (zero if a step is already due).
    pub sleep_duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    /// Run a step on the next call
    Now,
    /// Run a step once the deadline passes
    At(Instant),
    /// Frame is static, only watch the state
    Hold,
}

/// Animation loop - drives the strip from the shared display state
///
/// Each call to [`step`](Self::step) reads the [`AnimationState`] once. A
/// changed intent drops the running routine, even halfway through, and
/// starts the new one from its first step. Sleeps never exceed the
/// configured poll interval, so a change is picked up within one interval.
pub struct Renderer<'a, D: StripDriver, const MAX_LEDS: usize> {
    // External dependencies and configuration
    state: &'a AnimationState,
    strip: StripGuard<D>,
    config: RendererConfig,
    led_count: usize,

    // Internal state
    intent: DisplayIntent,
    animation: AnimationSlot,
    next_step: NextStep,
    frame_buffer: [Rgb; MAX_LEDS],
    failed_steps: u32,
}

impl<'a, D: StripDriver, const MAX_LEDS: usize> Renderer<'a, D, MAX_LEDS> {
    /// Create a renderer that starts in [`DisplayIntent::Idle`]
    ///
    /// Pixels past the rendered range are cleared once and stay off.
    pub fn new(state: &'a AnimationState, mut driver: D, config: &RendererConfig) -> Self {
        let led_count = config.led_count.min(MAX_LEDS).min(driver.len());
        for index in led_count..driver.len() {
            driver.set_pixel(index, config.palette.off);
        }
        Self {
            state,
            strip: StripGuard::new(driver, config.palette.off),
            config: *config,
            led_count,
            intent: DisplayIntent::Idle,
            animation: AnimationSlot::off(config),
            next_step: NextStep::Now,
            frame_buffer: [config.palette.off; MAX_LEDS],
            failed_steps: 0,
        }
    }

    /// Process one renderer step
    ///
    /// This is the main loop body. The caller waits `sleep_duration` before
    /// calling it again.
    pub fn step(&mut self, now: Instant) -> FrameResult {
        self.observe_state();

        let due = match self.next_step {
            NextStep::Now => true,
            NextStep::At(deadline) => now >= deadline,
            NextStep::Hold => false,
        };
        if due {
            self.run_step(now);
        }

        let poll = self.config.poll_interval;
        let sleep_duration = match self.next_step {
            NextStep::Now => Duration::from_ticks(0),
            NextStep::At(deadline) if deadline > now => (deadline - now).min(poll),
            NextStep::At(_) => Duration::from_ticks(0),
            NextStep::Hold => poll,
        };

        FrameResult {
            next_deadline: now + sleep_duration,
            sleep_duration,
        }
    }

    /// Run one step and wait until the next one
    pub async fn tick(&mut self) {
        let result = self.step(Instant::now());
        Timer::after(result.sleep_duration).await;
    }

    /// Turn the strip off
    ///
    /// Also happens when the renderer is dropped.
    pub fn release(&mut self) {
        self.strip.release();
    }

    /// Intent currently being rendered
    pub const fn intent(&self) -> DisplayIntent {
        self.intent
    }

    /// Routine currently running
    pub const fn animation(&self) -> &AnimationSlot {
        &self.animation
    }

    /// Last painted frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer[..self.led_count]
    }

    /// Number of steps whose strip write failed
    pub const fn failed_steps(&self) -> u32 {
        self.failed_steps
    }

    pub const fn driver(&self) -> &D {
        self.strip.driver()
    }

    /// Swap the routine when the shared intent changed
    fn observe_state(&mut self) {
        let intent = self.state.get();
        if intent == self.intent {
            return;
        }
        info!(
            "renderer: {} -> {}",
            self.intent.as_str(),
            intent.as_str()
        );
        self.intent = intent;
        self.animation = AnimationSlot::for_intent(intent, &self.config);
        self.next_step = NextStep::Now;
    }

    fn run_step(&mut self, now: Instant) {
        let frame = &mut self.frame_buffer[..self.led_count];
        let mut step = self.animation.step(frame);
        if step == Step::Complete {
            info!("renderer: {} complete, idling", self.animation.name());
            self.animation = AnimationSlot::off(&self.config);
            step = self.animation.step(frame);
        }

        let written = match write_frame(&mut self.strip, frame) {
            Ok(()) => true,
            Err(err) => {
                warn!("{}", err);
                self.failed_steps = self.failed_steps.saturating_add(1);
                false
            }
        };

        self.next_step = match step {
            Step::Next(delay) => NextStep::At(self.step_base(now) + delay),
            // A static frame that failed to reach the strip is repainted on the next poll
            Step::Hold | Step::Complete if !written => NextStep::At(now + self.config.poll_interval),
            Step::Hold | Step::Complete => NextStep::Hold,
        };
    }

    /// Time the next step is scheduled from
    ///
    /// Steps are paced from the previous deadline. If we've fallen more than
    /// one poll interval behind, pace from now instead of bursting to catch up.
    fn step_base(&self, now: Instant) -> Instant {
        match self.next_step {
            NextStep::At(deadline) if now <= deadline + self.config.poll_interval => deadline,
            _ => now,
        }
    }
}

fn write_frame<D: StripDriver>(
    strip: &mut StripGuard<D>,
    frame: &[Rgb],
) -> Result<(), RenderStepFailed<D::Error>> {
    let driver = strip.driver_mut();
    for (index, color) in frame.iter().enumerate() {
        driver.set_pixel(index, *color);
    }
    driver.flush().map_err(RenderStepFailed)
}
