//! The playback state machine.
//!
//! `Beard` ties one media primitive to one view. User actions (`play`,
//! `pause`, `load`, `seek`) and media notifications both flow through it;
//! whichever is applied last wins.

use tracing::{debug, trace, warn};

use super::media::{MediaElement, MediaEvent, MediaEvents};
use super::mount::Mount;
use super::progress::{compute_progress_percent, SeekRequest};
use super::reporter::ErrorReporter;
use super::sink::{PointerSource, View};
use super::state::{LoadRequest, PlaybackStatus, PlayerOptions, PlayerState};
use super::time::{format_time_display, is_known_duration};
use super::timer::{Clock, SystemClock};
use crate::error::PlayerError;

/// One embeddable audio player.
#[derive(Debug)]
pub struct Beard<M, V, C = SystemClock>
where
    M: MediaElement,
    V: View,
    C: Clock,
{
    media: M,
    view: V,
    clock: C,
    state: PlayerState,
    reporter: ErrorReporter,
    options: PlayerOptions,
}

impl<M, V, C> Beard<M, V, C>
where
    M: MediaElement,
    V: View,
    C: Clock,
{
    /// Mount a player: show the default text, apply the initial source, and
    /// render the paused control.
    ///
    /// An invalid initial source is reported like a failed `load`.
    pub fn initialize(mount: &Mount, media: M, view: V, clock: C, options: PlayerOptions) -> Self {
        let reporter = ErrorReporter::new(options.error_revert_delay, options.revert_policy);
        let mut player = Self {
            media,
            view,
            clock,
            state: PlayerState::default(),
            reporter,
            options,
        };

        if let Some(text) = mount.default_text.as_deref() {
            player.display_text(text);
        }

        player.render_control();

        if let Some(url) = mount.source.as_deref() {
            match player.validated(Some(url)) {
                Ok(url) => player.set_source(url),
                Err(err) => {
                    warn!(url, "initial source rejected");
                    player.report_error(&err.to_string());
                }
            }
        }

        debug!(source = ?player.state.current_source, "player initialized");
        player
    }

    fn validated<'a>(&self, url: Option<&'a str>) -> Result<&'a str, PlayerError> {
        match url {
            Some(url) if self.options.formats.is_valid(Some(url)) => Ok(url),
            _ => Err(PlayerError::InvalidSource {
                url: url.map(str::to_string),
            }),
        }
    }

    /// Switch to another track.
    ///
    /// An invalid URL is shown as a transient error and nothing else
    /// changes: playback, the loaded source, and the status text stay as
    /// they were. Otherwise playback pauses, the text is shown, and the
    /// new source is set.
    pub fn load(&mut self, request: LoadRequest) {
        let url = match self.validated(request.url.as_deref()) {
            Ok(url) => url.to_string(),
            Err(err) => {
                warn!(url = ?request.url, "load rejected");
                self.report_error(&err.to_string());
                return;
            }
        };

        self.pause();
        self.display_text(&request.text);
        self.set_source(&url);
    }

    fn set_source(&mut self, url: &str) {
        debug!(url, "source set");
        self.media.set_source(url);
        self.state.current_source = Some(url.to_string());
        self.sync_from_media();
        self.display_time();
        self.view.set_progress(0.0);
    }

    /// Start playback, or pause if already playing.
    pub fn play(&mut self) {
        if self.state.is_playing() {
            return self.pause();
        }

        if self.state.current_source.is_none() {
            debug!("play ignored: no source loaded");
            return;
        }

        self.media.play();
        self.state.status = PlaybackStatus::Playing;
        self.render_control();
        debug!("playing");
    }

    /// Halt playback.
    pub fn pause(&mut self) {
        self.media.pause();
        self.state.status = PlaybackStatus::Paused;
        self.render_control();
        debug!("paused");
    }

    /// Jump to `fraction` of the track.
    ///
    /// Ignored while the duration is unknown. The target is clamped to the
    /// track. Returns whether the seek was applied.
    pub fn seek(&mut self, fraction: f64) -> bool {
        let duration = self.media.duration();
        let target = match duration {
            Some(total) if is_known_duration(duration) => {
                SeekRequest::new(fraction).target_seconds(total)
            }
            _ => None,
        };

        let Some(target) = target else {
            debug!(fraction, ?duration, "seek ignored");
            return false;
        };

        trace!(fraction, target, "seeking");
        self.media.set_current_time(target);
        self.state.current_time_seconds = target;
        self.state.duration_seconds = duration;
        self.display_time();
        self.display_progress();
        true
    }

    /// Seek to wherever the pointer sits on the track.
    pub fn seek_to_pointer(&mut self, pointer: &dyn PointerSource) -> bool {
        self.seek(SeekRequest::from_pointer(pointer).fraction)
    }

    /// Move the hover cursor over the seek track.
    pub fn place_seek_cursor(&mut self, offset_x: f64) {
        self.view.place_cursor(offset_x);
    }

    /// React to a notification from the media primitive.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        trace!(?event, "media event");
        self.sync_from_media();

        match event {
            MediaEvent::TimeUpdate => {
                self.display_time();
                self.display_progress();
            }
            MediaEvent::CanPlay => self.display_time(),
            MediaEvent::Ended => {
                if self.state.is_playing() {
                    self.pause();
                }
            }
        }
    }

    /// Show a transient error over the status text.
    pub fn report_error(&mut self, message: &str) {
        let now = self.clock.now();
        self.reporter.report(message, now, &mut self.view);
    }

    /// Show ordinary status text.
    pub fn display_text(&mut self, text: &str) {
        self.reporter.show_text(text, &mut self.view);
    }

    /// Apply pending error reversions. Returns how many fired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        self.reporter.tick(now, &mut self.view)
    }

    fn sync_from_media(&mut self) {
        self.state.current_time_seconds = self.media.current_time();
        self.state.duration_seconds = self.media.duration();
    }

    fn display_time(&mut self) {
        let text = format_time_display(
            self.state.current_time_seconds,
            self.state.duration_seconds,
            &self.options.loading_text,
        );
        self.view.set_time(&text);
    }

    fn display_progress(&mut self) {
        let Some(duration) = self.state.duration_seconds else {
            return;
        };
        let percent = compute_progress_percent(self.state.current_time_seconds, duration);
        if percent.is_finite() {
            self.view.set_progress(percent);
        } else {
            trace!(percent, "progress not rendered");
        }
    }

    fn render_control(&mut self) {
        let playing = self.state.is_playing();
        self.view.set_playing(playing);
        if let Some(labels) = &self.options.labels {
            let label = if playing { &labels.pause } else { &labels.play };
            self.view.set_label(label);
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn current_source(&self) -> Option<&str> {
        self.state.current_source.as_deref()
    }

    /// Status text currently shown.
    pub fn display_message(&self) -> &str {
        self.reporter.text()
    }

    pub fn reporter(&self) -> &ErrorReporter {
        &self.reporter
    }

    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Direct access to the view for binding-specific state the core does
    /// not manage (e.g. hiding the seek cursor).
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<M, V, C> Beard<M, V, C>
where
    M: MediaElement + MediaEvents,
    V: View,
    C: Clock,
{
    /// Deliver pending media notifications in order, then apply due error
    /// reversions.
    pub fn pump(&mut self) {
        for event in self.media.poll_events() {
            self.handle_media_event(event);
        }
        self.tick();
    }
}
