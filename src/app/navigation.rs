//! Per-navigation tokens
//!
//! Each section activation bumps a shared generation counter. Work started
//! under an older generation checks its token after every await and drops
//! its result instead of drawing over the newer section.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Navigation {
    generation: Arc<AtomicU64>,
}

impl Navigation {
    /// Start a new navigation; every earlier token goes stale.
    pub fn begin(&self) -> NavToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        NavToken {
            generation,
            current: Arc::clone(&self.generation),
        }
    }

    /// Token for work that belongs to the navigation already on screen.
    pub fn current(&self) -> NavToken {
        NavToken {
            generation: self.generation.load(Ordering::SeqCst),
            current: Arc::clone(&self.generation),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavToken {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl NavToken {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
