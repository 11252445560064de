//! The native media primitive the player drives.
//!
//! Decoding and output belong to the host. The core only needs transport
//! controls, position/duration, and progress notifications.

use std::time::{Duration, Instant};

use tracing::trace;

use super::timer::Clock;

/// Minimum interval between `TimeUpdate` notifications while playing.
pub const TIME_UPDATE_INTERVAL: Duration = Duration::from_millis(250);

/// Notifications emitted by a media primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback position changed
    TimeUpdate,
    /// Enough data is available to start playing
    CanPlay,
    /// Playback reached the end of the track
    Ended,
}

/// Transport controls and position of a playable source.
pub trait MediaElement {
    fn set_source(&mut self, url: &str);
    fn source(&self) -> Option<&str>;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);

    /// Total length in seconds, `None` until known.
    fn duration(&self) -> Option<f64>;

    fn play(&mut self);
    fn pause(&mut self);
}

/// Media primitives polled from the host loop for notifications.
pub trait MediaEvents {
    /// Notifications produced since the last poll, in emission order.
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}

/// Clock-driven stand-in for a real audio element.
///
/// Every source reports the same configured duration once it becomes
/// playable (on the first poll after `set_source`).
#[derive(Debug)]
pub struct SimulatedMedia<C: Clock> {
    clock: C,
    track_duration: f64,
    source: Option<String>,
    duration: Option<f64>,
    /// Position when playback was last started, paused, or seeked
    position: f64,
    /// Set while playing
    started_at: Option<Instant>,
    last_update: Option<Instant>,
    can_play_sent: bool,
    queued: Vec<MediaEvent>,
}

impl<C: Clock> SimulatedMedia<C> {
    pub fn new(clock: C, track_duration: f64) -> Self {
        Self {
            clock,
            track_duration,
            source: None,
            duration: None,
            position: 0.0,
            started_at: None,
            last_update: None,
            can_play_sent: false,
            queued: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    fn end(&self) -> f64 {
        self.duration.unwrap_or(f64::INFINITY)
    }

    fn position_at(&self, now: Instant) -> f64 {
        match self.started_at {
            Some(started) => (self.position + (now - started).as_secs_f64()).min(self.end()),
            None => self.position,
        }
    }
}

impl<C: Clock> MediaElement for SimulatedMedia<C> {
    fn set_source(&mut self, url: &str) {
        trace!(url, "simulated source set");
        self.source = Some(url.to_string());
        self.duration = None;
        self.position = 0.0;
        self.started_at = None;
        self.last_update = None;
        self.can_play_sent = false;
        self.queued.clear();
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn current_time(&self) -> f64 {
        self.position_at(self.clock.now())
    }

    fn set_current_time(&mut self, seconds: f64) {
        let now = self.clock.now();
        self.position = seconds.clamp(0.0, self.end());
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
        self.queued.push(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn play(&mut self) {
        if self.source.is_none() || self.started_at.is_some() {
            return;
        }
        if self.position >= self.end() {
            self.position = 0.0;
        }
        self.started_at = Some(self.clock.now());
    }

    fn pause(&mut self) {
        let now = self.clock.now();
        self.position = self.position_at(now);
        self.started_at = None;
    }
}

impl<C: Clock> MediaEvents for SimulatedMedia<C> {
    fn poll_events(&mut self) -> Vec<MediaEvent> {
        let mut events = std::mem::take(&mut self.queued);

        if self.source.is_some() && !self.can_play_sent {
            self.duration = Some(self.track_duration);
            self.can_play_sent = true;
            events.push(MediaEvent::CanPlay);
        }

        if let Some(started) = self.started_at {
            let now = self.clock.now();
            let position = self.position + (now - started).as_secs_f64();

            if position >= self.end() {
                self.position = self.end();
                self.started_at = None;
                events.push(MediaEvent::TimeUpdate);
                events.push(MediaEvent::Ended);
            } else if self
                .last_update
                .map_or(true, |last| now - last >= TIME_UPDATE_INTERVAL)
            {
                self.last_update = Some(now);
                events.push(MediaEvent::TimeUpdate);
            }
        }

        events
    }
}
