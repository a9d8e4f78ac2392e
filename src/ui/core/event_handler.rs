use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::{Duration, Instant};

/// Terminal input source for the main loop.
///
/// Never blocks: when no input is pending it sleeps for one poll interval
/// and reports a tick once the tick rate has elapsed.
pub struct EventHandler {
    tick_rate: Duration,
    poll_interval: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_rates(Duration::from_millis(100), Duration::from_millis(25))
    }

    pub fn with_rates(tick_rate: Duration, poll_interval: Duration) -> Self {
        Self {
            tick_rate,
            poll_interval,
            last_tick: Instant::now(),
        }
    }

    /// Next pending input, or a tick/idle marker after one poll interval.
    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        if poll(Duration::ZERO)? {
            return Ok(match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Resize(width, height) => EventType::Resize(width, height),
                _ => EventType::Other,
            });
        }

        tokio::time::sleep(self.poll_interval).await;
        Ok(self.tick_or_idle())
    }

    fn tick_or_idle(&mut self) -> EventType {
        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
            EventType::Tick
        } else {
            EventType::Other
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
