//! Voice control over the storefront.
//!
//! [`VoiceBridge`] drives a speech recognizer and a speech synthesizer
//! through small traits, feeds transcripts to the [`commands`] table, and
//! navigates on a match. Events from the recognizer (`on_start`,
//! `on_result`, `on_error`, `on_end`) are delivered by the caller, and
//! [`VoiceBridge::tick`] processes a transcript once the speaker has paused.
//!
//! ```text
//! Uninitialized -> Initialized -> Listening <-> Idle
//!        \              any --error--> Error --reset--> Initialized
//!         `-> Unsupported
//! ```

pub mod commands;

use std::time::{Duration, Instant};

use thiserror::Error;

pub use commands::{COMMANDS, VoiceCommand, match_command};

/// How long the transcript must stay unchanged before it is processed.
pub const COMMAND_DEBOUNCE: Duration = Duration::from_millis(1500);

/// A failure reported by a platform speech API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct SpeechApiError(pub String);

/// Speech-to-text, continuous with interim results.
pub trait SpeechRecognizer {
    fn is_supported(&self) -> bool;

    /// Begin recognition. Success is confirmed later by `on_start`.
    ///
    /// # Errors
    ///
    /// The platform refused to start.
    fn start(&mut self) -> Result<(), SpeechApiError>;

    /// End recognition. Completion is confirmed later by `on_end`.
    ///
    /// # Errors
    ///
    /// The platform refused to stop.
    fn stop(&mut self) -> Result<(), SpeechApiError>;

    /// Replace the underlying recognition instance after a failure.
    ///
    /// # Errors
    ///
    /// A fresh instance could not be created.
    fn reset(&mut self) -> Result<(), SpeechApiError>;
}

/// Text-to-speech playback.
pub trait SpeechSynthesizer {
    fn is_supported(&self) -> bool;

    /// # Errors
    ///
    /// The utterance could not be queued.
    fn speak(&mut self, text: &str) -> Result<(), SpeechApiError>;

    fn cancel(&mut self);
}

/// Client-side route changes.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Errors surfaced by bridge operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Speech recognition not supported. Please try Chrome or Edge.")]
    RecognitionUnsupported,

    #[error("Speech synthesis not supported in this browser")]
    SynthesisUnsupported,

    #[error("Failed to start speech recognition")]
    StartFailed(#[source] SpeechApiError),

    #[error("Failed to stop speech recognition")]
    StopFailed(#[source] SpeechApiError),

    #[error("Speech synthesis error: {0}")]
    Synthesis(#[source] SpeechApiError),
}

/// Recognition lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecognitionState {
    #[default]
    Uninitialized,
    Initialized,
    Listening,
    Idle,
    Error,
    Unsupported,
}

/// Connects speech APIs, the command table, and navigation.
pub struct VoiceBridge<R, S, N> {
    recognizer: R,
    synthesizer: S,
    navigator: N,
    state: RecognitionState,
    transcript: String,
    heard_at: Option<Instant>,
    modal_open: bool,
    speaking: bool,
    error: Option<String>,
    last_command: Option<String>,
}

impl<R: SpeechRecognizer, S: SpeechSynthesizer, N: Navigator> VoiceBridge<R, S, N> {
    pub const fn new(recognizer: R, synthesizer: S, navigator: N) -> Self {
        Self {
            recognizer,
            synthesizer,
            navigator,
            state: RecognitionState::Uninitialized,
            transcript: String::new(),
            heard_at: None,
            modal_open: false,
            speaking: false,
            error: None,
            last_command: None,
        }
    }

    /// Probe for speech recognition. Without it the bridge stays usable for
    /// speech output and reports why voice input is disabled.
    pub fn initialize(&mut self) -> RecognitionState {
        if self.recognizer.is_supported() {
            self.state = RecognitionState::Initialized;
            self.error = None;
        } else {
            tracing::warn!("Speech recognition unsupported");
            self.state = RecognitionState::Unsupported;
            self.error = Some(VoiceError::RecognitionUnsupported.to_string());
        }
        self.state
    }

    /// Ask the recognizer to start. A no-op while already listening or when
    /// recognition is unavailable.
    ///
    /// # Errors
    ///
    /// `StartFailed` when the recognizer refuses; the bridge then resets the
    /// recognizer so the next attempt can succeed.
    pub fn start_listening(&mut self) -> Result<(), VoiceError> {
        if !matches!(
            self.state,
            RecognitionState::Initialized | RecognitionState::Idle | RecognitionState::Error
        ) {
            return Ok(());
        }

        self.error = None;
        self.transcript.clear();
        self.heard_at = None;

        if let Err(e) = self.recognizer.start() {
            let error = VoiceError::StartFailed(e);
            tracing::error!(error = %error, "Recognition did not start");
            self.fail(error.to_string());
            return Err(error);
        }
        tracing::debug!("Recognition start requested");
        Ok(())
    }

    /// Ask the recognizer to stop. A no-op unless listening.
    ///
    /// # Errors
    ///
    /// `StopFailed` when the recognizer refuses; the bridge treats itself as
    /// idle regardless.
    pub fn stop_listening(&mut self) -> Result<(), VoiceError> {
        if self.state != RecognitionState::Listening {
            return Ok(());
        }
        if let Err(e) = self.recognizer.stop() {
            tracing::warn!(error = %e, "Recognition did not stop cleanly");
            self.state = RecognitionState::Idle;
            return Err(VoiceError::StopFailed(e));
        }
        Ok(())
    }

    /// Say something, interrupting anything already being said.
    ///
    /// # Errors
    ///
    /// `SynthesisUnsupported` or `Synthesis`; the message is also kept in
    /// [`Self::error`].
    pub fn speak(&mut self, text: &str) -> Result<(), VoiceError> {
        if !self.synthesizer.is_supported() {
            let error = VoiceError::SynthesisUnsupported;
            self.error = Some(error.to_string());
            return Err(error);
        }

        self.synthesizer.cancel();
        match self.synthesizer.speak(text) {
            Ok(()) => {
                self.speaking = true;
                tracing::debug!(text, "Speaking");
                Ok(())
            }
            Err(e) => {
                let error = VoiceError::Synthesis(e);
                self.speaking = false;
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    pub fn cancel_speech(&mut self) {
        if self.synthesizer.is_supported() {
            self.synthesizer.cancel();
            self.speaking = false;
        }
    }

    /// Open the voice modal and start listening.
    ///
    /// # Errors
    ///
    /// See [`Self::start_listening`].
    pub fn open_modal(&mut self) -> Result<(), VoiceError> {
        self.modal_open = true;
        self.error = None;
        self.start_listening()
    }

    /// Close the voice modal, stop listening, and silence speech.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        if let Err(e) = self.stop_listening() {
            tracing::debug!(error = %e, "Stop on close failed");
        }
        self.cancel_speech();
    }

    /// The recognizer reports that it started.
    pub fn on_start(&mut self) {
        self.state = RecognitionState::Listening;
    }

    /// A new (possibly interim) transcript arrived at `now`.
    pub fn on_result(&mut self, text: &str, now: Instant) {
        text.clone_into(&mut self.transcript);
        self.heard_at = Some(now);
    }

    /// The recognizer reported an error.
    pub fn on_error(&mut self, message: &str) {
        tracing::warn!(message, "Recognition error");
        self.fail(format!("Speech recognition error: {message}"));
    }

    /// The recognizer stopped.
    pub fn on_end(&mut self) {
        if self.state == RecognitionState::Listening {
            self.state = RecognitionState::Idle;
        }
    }

    /// Playback of the current utterance finished.
    pub const fn on_speech_end(&mut self) {
        self.speaking = false;
    }

    /// Process the transcript once [`COMMAND_DEBOUNCE`] has passed since it
    /// last changed. On a match the confirmation is spoken, navigation
    /// happens, listening stops, and the modal closes; otherwise listening
    /// continues. Each transcript is processed at most once.
    pub fn tick(&mut self, now: Instant) -> Option<&'static VoiceCommand> {
        if self.state != RecognitionState::Listening || self.transcript.is_empty() {
            return None;
        }
        let heard_at = self.heard_at?;
        if now.saturating_duration_since(heard_at) < COMMAND_DEBOUNCE {
            return None;
        }
        self.heard_at = None;

        let spoken = self.transcript.to_lowercase();
        let command = match_command(&spoken);
        self.last_command = Some(spoken);
        let command = command?;

        if let Err(e) = self.speak(command.confirmation) {
            tracing::warn!(error = %e, "Confirmation not spoken");
        }
        if let Some(path) = command.destination {
            tracing::info!(path, "Voice navigation");
            self.navigator.navigate(path);
        }
        if let Err(e) = self.stop_listening() {
            tracing::debug!(error = %e, "Stop after command failed");
        }
        self.modal_open = false;
        Some(command)
    }

    fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.state = RecognitionState::Error;
        match self.recognizer.reset() {
            Ok(()) => self.state = RecognitionState::Initialized,
            Err(e) => tracing::error!(error = %e, "Recognizer reset failed"),
        }
    }

    pub const fn state(&self) -> RecognitionState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == RecognitionState::Listening
    }

    pub fn is_supported(&self) -> bool {
        self.state != RecognitionState::Unsupported
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub const fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub const fn is_speaking(&self) -> bool {
        self.speaking
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    pub const fn navigator(&self) -> &N {
        &self.navigator
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeRecognizer {
        unsupported: bool,
        fail_start: bool,
        fail_reset: bool,
        starts: usize,
        stops: usize,
        resets: usize,
    }

    impl SpeechRecognizer for FakeRecognizer {
        fn is_supported(&self) -> bool {
            !self.unsupported
        }

        fn start(&mut self) -> Result<(), SpeechApiError> {
            self.starts += 1;
            if self.fail_start {
                Err(SpeechApiError("already started".to_string()))
            } else {
                Ok(())
            }
        }

        fn stop(&mut self) -> Result<(), SpeechApiError> {
            self.stops += 1;
            Ok(())
        }

        fn reset(&mut self) -> Result<(), SpeechApiError> {
            self.resets += 1;
            if self.fail_reset {
                Err(SpeechApiError("no instance".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct FakeSynthesizer {
        unsupported: bool,
        spoken: Vec<String>,
    }

    impl SpeechSynthesizer for FakeSynthesizer {
        fn is_supported(&self) -> bool {
            !self.unsupported
        }

        fn speak(&mut self, text: &str) -> Result<(), SpeechApiError> {
            self.spoken.push(text.to_string());
            Ok(())
        }

        fn cancel(&mut self) {}
    }

    #[derive(Default)]
    struct Routes(Vec<String>);

    impl Navigator for Routes {
        fn navigate(&mut self, path: &str) {
            self.0.push(path.to_string());
        }
    }

    type Bridge = VoiceBridge<FakeRecognizer, FakeSynthesizer, Routes>;

    fn listening_bridge() -> Bridge {
        let mut bridge = VoiceBridge::new(
            FakeRecognizer::default(),
            FakeSynthesizer::default(),
            Routes::default(),
        );
        bridge.initialize();
        bridge.open_modal().unwrap();
        bridge.on_start();
        bridge
    }

    #[test]
    fn test_command_fires_after_debounce() {
        let mut bridge = listening_bridge();
        let t0 = Instant::now();
        bridge.on_result("find machine", t0);

        assert!(bridge.tick(t0 + Duration::from_millis(1000)).is_none());
        let command = bridge.tick(t0 + COMMAND_DEBOUNCE).unwrap();

        assert_eq!(command.destination, Some("/machines"));
        assert_eq!(bridge.navigator().0, ["/machines"]);
        assert_eq!(bridge.synthesizer.spoken, ["Taking you to the machines page"]);
        assert_eq!(bridge.recognizer.stops, 1);
        assert!(!bridge.is_modal_open());
        assert_eq!(bridge.last_command(), Some("find machine"));

        bridge.on_end();
        assert_eq!(bridge.state(), RecognitionState::Idle);
    }

    #[test]
    fn test_newer_transcript_restarts_window() {
        let mut bridge = listening_bridge();
        let t0 = Instant::now();
        bridge.on_result("find", t0);
        bridge.on_result("find washer", t0 + Duration::from_millis(1000));

        assert!(bridge.tick(t0 + Duration::from_millis(2000)).is_none());
        assert!(bridge.tick(t0 + Duration::from_millis(2500)).is_some());
    }

    #[test]
    fn test_unmatched_keeps_listening() {
        let mut bridge = listening_bridge();
        let t0 = Instant::now();
        bridge.on_result("what's the weather", t0);

        assert!(bridge.tick(t0 + COMMAND_DEBOUNCE).is_none());
        assert!(bridge.is_listening());
        assert!(bridge.is_modal_open());
        assert!(bridge.navigator().0.is_empty());
    }

    #[test]
    fn test_help_speaks_without_navigating() {
        let mut bridge = listening_bridge();
        let t0 = Instant::now();
        bridge.on_result("help", t0);

        let command = bridge.tick(t0 + COMMAND_DEBOUNCE).unwrap();
        assert_eq!(command.destination, None);
        assert!(bridge.navigator().0.is_empty());
        assert!(bridge.is_speaking());
    }

    #[test]
    fn test_error_recovers_to_initialized() {
        let mut bridge = listening_bridge();
        bridge.on_error("network");

        assert_eq!(bridge.state(), RecognitionState::Initialized);
        assert_eq!(bridge.error(), Some("Speech recognition error: network"));
        assert_eq!(bridge.recognizer.resets, 1);

        bridge.start_listening().unwrap();
        assert!(bridge.error().is_none());
        assert_eq!(bridge.recognizer.starts, 2);
    }

    #[test]
    fn test_failed_start_stays_in_error_without_reset() {
        let mut bridge = VoiceBridge::new(
            FakeRecognizer {
                fail_start: true,
                fail_reset: true,
                ..FakeRecognizer::default()
            },
            FakeSynthesizer::default(),
            Routes::default(),
        );
        bridge.initialize();

        let err = bridge.start_listening().unwrap_err();
        assert!(matches!(err, VoiceError::StartFailed(_)));
        assert_eq!(bridge.state(), RecognitionState::Error);
        assert_eq!(bridge.error(), Some("Failed to start speech recognition"));
    }

    #[test]
    fn test_unsupported_is_not_fatal() {
        let mut bridge = VoiceBridge::new(
            FakeRecognizer {
                unsupported: true,
                ..FakeRecognizer::default()
            },
            FakeSynthesizer::default(),
            Routes::default(),
        );

        assert_eq!(bridge.initialize(), RecognitionState::Unsupported);
        assert!(!bridge.is_supported());
        bridge.open_modal().unwrap();
        assert_eq!(bridge.recognizer.starts, 0);
        assert!(bridge.speak("hello").is_ok());
    }

    #[test]
    fn test_speech_unsupported_sets_error() {
        let mut bridge = VoiceBridge::new(
            FakeRecognizer::default(),
            FakeSynthesizer {
                unsupported: true,
                ..FakeSynthesizer::default()
            },
            Routes::default(),
        );

        assert_eq!(bridge.speak("hi"), Err(VoiceError::SynthesisUnsupported));
        assert_eq!(
            bridge.error(),
            Some("Speech synthesis not supported in this browser")
        );
    }

    #[test]
    fn test_close_modal_stops_and_silences() {
        let mut bridge = listening_bridge();
        bridge.speak("hello").unwrap();
        bridge.close_modal();

        assert!(!bridge.is_modal_open());
        assert!(!bridge.is_speaking());
        assert_eq!(bridge.recognizer.stops, 1);
    }
}
