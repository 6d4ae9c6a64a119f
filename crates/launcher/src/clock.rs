//! The live clock shown on the main page
use std::time::Duration;

use relm4::SharedState;
use time::OffsetDateTime;

pub static CLOCK: SharedState<Clock> = SharedState::new();

/// How often the clock label refreshes
const TICK_INTERVAL: Duration = Duration::from_secs(10);

pub fn init_update_loop() {
    relm4::spawn_blocking(|| {
        loop {
            CLOCK.write().update();

            std::thread::sleep(TICK_INTERVAL);
        }
    });
}

#[derive(Debug)]
pub struct Clock {
    time: OffsetDateTime,
}

impl Default for Clock {
    fn default() -> Self {
        let mut clock = Self {
            time: OffsetDateTime::UNIX_EPOCH,
        };

        clock.update();

        clock
    }
}

impl Clock {
    pub fn update(&mut self) {
        // The local offset can be unavailable in secondary threads; a UTC
        // clock beats a frozen one.
        self.time = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    }

    pub fn time(&self) -> OffsetDateTime {
        self.time
    }
}
