//! Circular, auto-advancing card carousel.
//!
//! The engine knows nothing about the DOM. A view feeds it the viewport width
//! and user input, and reads back one [`RenderTuple`] per visible card.

mod error;
mod layout;
mod projection;
mod state;
mod timer;
mod window;

pub use error::CarouselError;
pub use layout::{resolve, LayoutProfile, ViewportObserver, BREAKPOINTS};
pub use projection::{project, Activation, RenderTuple};
pub use state::{Carousel, CarouselEvent, CarouselState};
pub use timer::{AutoAdvance, ManualScheduler, Scheduler, TimerHandle, AUTO_ADVANCE_INTERVAL};
pub use window::{circular_index, visible_window, WindowEntry, DEFAULT_RADIUS};
