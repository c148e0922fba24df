#![no_std]

#[macro_use]
mod fmt;

pub mod animation;
pub mod color;
pub mod config;
pub mod decision;
pub mod driver;
pub mod error;
pub mod intent;
pub mod math8;
pub mod renderer;
pub mod resolver;
pub mod schedule;
pub mod state;
pub mod zones;

pub use animation::{Animation, AnimationSlot, Step};
pub use config::{AnimationTimings, DeciderConfig, RendererConfig};
pub use decision::{Decider, ScheduleSource, ScheduleStore, is_month_boundary, next_refresh_at};
pub use driver::{SmartLedsStrip, StripDriver, StripGuard};
pub use error::{CapacityError, RenderStepFailed, ScheduleError};
pub use intent::DisplayIntent;
pub use renderer::{FrameResult, Renderer};
pub use resolver::resolve;
pub use schedule::{Category, CategorySet, Day, Schedule, Week};
pub use state::AnimationState;
pub use zones::ZoneLayout;

pub use color::{Palette, Rgb};
pub use embassy_time::{Duration, Instant};
