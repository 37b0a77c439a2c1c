use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::errors::CarouselError;

pub const ROTATION_PERIOD: Duration = Duration::from_secs(5);

/// Which testimonial is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialCarousel {
    index: usize,
    len: usize,
}

impl TestimonialCarousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn tick(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Jump straight to `index`, e.g. from a pagination dot.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }
}

/// Running rotation timer. Dropping the handle stops it.
pub struct RotationHandle(JoinHandle<()>);

impl RotationHandle {
    pub fn stop(self) {}
}

impl Drop for RotationHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Advances `carousel` every `period` until the handle is dropped or the
/// carousel itself goes away.
pub fn spawn_rotation(carousel: &Arc<Mutex<TestimonialCarousel>>, period: Duration) -> RotationHandle {
    let weak = Arc::downgrade(carousel);
    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        loop {
            ticker.tick().await;
            let Some(carousel) = weak.upgrade() else {
                break;
            };
            let mut carousel = carousel.lock().unwrap_or_else(|e| e.into_inner());
            carousel.tick();
            tracing::trace!(index = carousel.index(), "testimonial rotated");
        }
    });
    RotationHandle(task)
}
