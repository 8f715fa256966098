//! Display pacing for the computer code breaker

use std::thread;
use std::time::Duration;

/// Delays inserted before the computer's guesses so a human can follow along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause before the first guess
    pub opening: Duration,
    /// Pause before every later guess
    pub between: Duration,
}

impl Pacing {
    /// Half a second before the opener, one second between guesses
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            opening: Duration::from_millis(500),
            between: Duration::from_secs(1),
        }
    }

    /// No delays (headless runs and tests)
    #[must_use]
    pub const fn none() -> Self {
        Self {
            opening: Duration::ZERO,
            between: Duration::ZERO,
        }
    }

    /// Delay owed before a guess
    #[must_use]
    pub const fn delay(self, first_guess: bool) -> Duration {
        if first_guess { self.opening } else { self.between }
    }

    /// Sleep for the delay owed before a guess
    pub fn pause(self, first_guess: bool) {
        let delay = self.delay(first_guess);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::interactive()
    }
}
