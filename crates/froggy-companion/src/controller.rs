//! The companion controller: orchestrates user input, the one in-flight
//! chat request, and the speech surface.

use std::sync::Arc;
use std::time::{Duration, Instant};

use froggy_ai::{ChatBackend, FactProvider};
use froggy_common::{Action, Event, EventBus, Point, SpeechStyle};
use tokio::sync::mpsc;

use crate::chat::{ChatReply, ChatRequestTask};
use crate::speech::{reading_duration, SpeechSurface};

/// Timing and wording knobs resolved from config.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// System instruction sent with every question.
    pub persona: String,
    /// Shown when a question arrives while another is still pending.
    pub wait_message: String,
    pub wait_duration: Duration,
    /// How long facts and other untimed messages stay visible.
    pub default_duration: Duration,
    pub reminder_duration: Duration,
    /// Reading speed used to time chat replies.
    pub reading_wpm: u32,
    /// Initial window position.
    pub origin: Point,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            persona: "You are a friendly chatbot who always responds in the style of a frog"
                .into(),
            wait_message: "Wait... I'm thinking...".into(),
            wait_duration: Duration::from_millis(2000),
            default_duration: Duration::from_millis(5000),
            reminder_duration: Duration::from_millis(2000),
            reading_wpm: 130,
            origin: Point::ORIGIN,
        }
    }
}

/// Controller chat state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingReply,
}

/// Drives the companion state machine.
///
/// Owns all display state; runs on the engine loop only. The single
/// in-flight [`ChatRequestTask`] talks back through the completion
/// channel, never by touching state directly.
pub struct CompanionController {
    config: ControllerConfig,
    backend: Arc<dyn ChatBackend>,
    facts: Arc<dyn FactProvider>,
    chat_tx: mpsc::Sender<ChatReply>,
    events: EventBus,

    speech: SpeechSurface,
    pending: Option<ChatRequestTask>,
    prompt_visible: bool,
    thinking: bool,
    position: Point,
    drag_anchor: Option<Point>,
}

impl CompanionController {
    pub fn new(
        config: ControllerConfig,
        style: SpeechStyle,
        backend: Arc<dyn ChatBackend>,
        facts: Arc<dyn FactProvider>,
        chat_tx: mpsc::Sender<ChatReply>,
        events: EventBus,
    ) -> Self {
        let position = config.origin;
        Self {
            config,
            backend,
            facts,
            chat_tx,
            events,
            speech: SpeechSurface::new(style),
            pending: None,
            prompt_visible: false,
            thinking: false,
            position,
            drag_anchor: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::AwaitingReply
        } else {
            Phase::Idle
        }
    }

    pub fn speech(&self) -> &SpeechSurface {
        &self.speech
    }

    pub fn speech_deadline(&self) -> Option<Instant> {
        self.speech.deadline()
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Dispatch a user input to the appropriate transition.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::OpenPrompt => {
                self.prompt_visible = true;
                self.events.publish(Event::PromptShown);
            }
            Action::HidePrompt => {
                if self.prompt_visible {
                    self.prompt_visible = false;
                    self.events.publish(Event::PromptHidden);
                }
            }
            Action::SubmitPrompt(text) => self.submit(text),
            Action::Poke => {
                let fact = self.facts.random_fact();
                self.show(format!("{fact}\nRibbit!"), self.config.default_duration);
            }
            Action::DragStart { x, y } => {
                self.drag_anchor = Some(Point { x, y });
            }
            Action::DragMove { x, y } => {
                if let Some(anchor) = self.drag_anchor {
                    self.position.x += x - anchor.x;
                    self.position.y += y - anchor.y;
                    self.events.publish(Event::Moved(self.position));
                }
            }
            Action::DragEnd => {
                self.drag_anchor = None;
            }
            Action::Quit => {
                tracing::info!("companion dismissed");
                self.events.publish(Event::Shutdown);
            }
        }
    }

    /// Start a chat request, or redisplay the wait message while one is
    /// already pending. Prompts are sent as-is, without validation.
    fn submit(&mut self, prompt: String) {
        if self.pending.is_some() {
            let message = self.config.wait_message.clone();
            self.show(message, self.config.wait_duration);
            return;
        }

        if self.prompt_visible {
            self.prompt_visible = false;
            self.events.publish(Event::PromptHidden);
        }

        let task = ChatRequestTask::spawn(
            self.backend.clone(),
            self.config.persona.clone(),
            prompt,
            self.chat_tx.clone(),
        );
        tracing::info!(id = %task.id(), "chat request started");
        self.pending = Some(task);
        self.thinking = true;
        self.events.publish(Event::ThinkingStarted);
    }

    /// Consume the completion of the in-flight request.
    pub fn handle_chat_reply(&mut self, reply: ChatReply) {
        match &self.pending {
            Some(task) if *task.id() == reply.id => {}
            _ => {
                tracing::debug!(id = %reply.id, "stale chat reply ignored");
                return;
            }
        }

        self.pending = None;
        self.thinking = false;
        self.events.publish(Event::ThinkingStopped);

        let duration = reading_duration(&reply.text, self.config.reading_wpm);
        self.show(reply.text, duration);
    }

    /// Display reminder text for the configured reminder duration.
    pub fn handle_reminder(&mut self, text: String) {
        self.show(text, self.config.reminder_duration);
    }

    fn show(&mut self, text: String, duration: Duration) {
        self.speech.show(text.clone(), duration);
        self.events.publish(Event::SpeechShown {
            text,
            duration_ms: duration.as_millis() as u64,
        });
    }

    /// Clear the speech surface if its deadline has passed.
    pub fn expire_speech(&mut self, now: Instant) {
        if self.speech.expire_if_due(now) {
            self.events.publish(Event::SpeechCleared);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::FALLBACK_REPLY;
    use async_trait::async_trait;
    use froggy_ai::AiError;
    use froggy_common::RequestId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Backend that blocks until released, counting calls.
    struct GatedBackend {
        gate: Notify,
        calls: AtomicUsize,
        reply: String,
    }

    impl GatedBackend {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                gate: Notify::new(),
                calls: AtomicUsize::new(0),
                reply: reply.to_string(),
            })
        }
    }

    #[async_trait]
    impl ChatBackend for GatedBackend {
        async fn chat(&self, _system: &str, _user: &str) -> Result<String, AiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(self.reply.clone())
        }
    }

    struct UnreachableBackend;

    #[async_trait]
    impl ChatBackend for UnreachableBackend {
        async fn chat(&self, _system: &str, _user: &str) -> Result<String, AiError> {
            Err(AiError::NetworkError("connection refused".into()))
        }
    }

    struct FixedFact;

    impl FactProvider for FixedFact {
        fn random_fact(&self) -> String {
            "A group of frogs is called an army.".into()
        }
    }

    struct Harness {
        controller: CompanionController,
        chat_rx: mpsc::Receiver<ChatReply>,
    }

    fn harness(backend: Arc<dyn ChatBackend>) -> Harness {
        let (chat_tx, chat_rx) = mpsc::channel(8);
        let controller = CompanionController::new(
            ControllerConfig::default(),
            SpeechStyle::default(),
            backend,
            Arc::new(FixedFact),
            chat_tx,
            EventBus::new(64),
        );
        Harness {
            controller,
            chat_rx,
        }
    }

    #[tokio::test]
    async fn submit_starts_a_request_and_awaits_reply() {
        let backend = GatedBackend::new("Ribbit, the pond is lovely.");
        let mut h = harness(backend.clone());

        h.controller.handle_action(Action::OpenPrompt);
        assert!(h.controller.prompt_visible());

        h.controller
            .handle_action(Action::SubmitPrompt("how is the pond?".into()));

        assert_eq!(h.controller.phase(), Phase::AwaitingReply);
        assert!(h.controller.is_thinking());
        assert!(!h.controller.prompt_visible());

        backend.gate.notify_one();
        let reply = h.chat_rx.recv().await.unwrap();
        h.controller.handle_chat_reply(reply);

        assert_eq!(h.controller.phase(), Phase::Idle);
        assert!(!h.controller.is_thinking());
        assert_eq!(
            h.controller.speech().text(),
            Some("Ribbit, the pond is lovely.")
        );
    }

    #[tokio::test]
    async fn reply_duration_follows_reading_speed() {
        let backend = GatedBackend::new(&vec!["word"; 65].join(" "));
        let mut h = harness(backend.clone());

        h.controller.handle_action(Action::SubmitPrompt("talk".into()));
        backend.gate.notify_one();
        let reply = h.chat_rx.recv().await.unwrap();
        h.controller.handle_chat_reply(reply);

        let entry = h.controller.speech().current().unwrap();
        assert_eq!(entry.duration, Duration::from_millis(30_000));
    }

    #[tokio::test]
    async fn second_submit_while_pending_shows_wait_message() {
        let backend = GatedBackend::new("eventually");
        let mut h = harness(backend.clone());

        h.controller.handle_action(Action::SubmitPrompt("first".into()));
        h.controller.handle_action(Action::SubmitPrompt("second".into()));
        tokio::task::yield_now().await;

        // Still exactly one backend call; the in-flight request is untouched.
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.controller.phase(), Phase::AwaitingReply);

        let entry = h.controller.speech().current().unwrap();
        assert_eq!(entry.text, "Wait... I'm thinking...");
        assert_eq!(entry.duration, Duration::from_millis(2000));

        backend.gate.notify_one();
        let reply = h.chat_rx.recv().await.unwrap();
        h.controller.handle_chat_reply(reply);
        assert_eq!(h.controller.phase(), Phase::Idle);

        // The wait message never queued a second request.
        assert!(h.chat_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn backend_failure_surfaces_the_fallback_text() {
        let mut h = harness(Arc::new(UnreachableBackend));

        h.controller.handle_action(Action::SubmitPrompt("hello?".into()));
        let reply = h.chat_rx.recv().await.unwrap();
        h.controller.handle_chat_reply(reply);

        assert_eq!(h.controller.speech().text(), Some(FALLBACK_REPLY));
        assert_eq!(h.controller.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn empty_prompt_is_submitted_as_is() {
        let backend = GatedBackend::new("hm?");
        let mut h = harness(backend.clone());

        h.controller.handle_action(Action::SubmitPrompt(String::new()));
        tokio::task::yield_now().await;

        assert_eq!(h.controller.phase(), Phase::AwaitingReply);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn poke_tells_a_fact_with_the_ribbit_suffix() {
        let mut h = harness(GatedBackend::new("unused"));

        h.controller.handle_action(Action::Poke);

        let entry = h.controller.speech().current().unwrap();
        assert_eq!(
            entry.text,
            "A group of frogs is called an army.\nRibbit!"
        );
        assert_eq!(entry.duration, Duration::from_millis(5000));
    }

    #[tokio::test]
    async fn poke_works_while_awaiting_a_reply() {
        let backend = GatedBackend::new("later");
        let mut h = harness(backend.clone());

        h.controller.handle_action(Action::SubmitPrompt("busy".into()));
        h.controller.handle_action(Action::Poke);

        assert_eq!(h.controller.phase(), Phase::AwaitingReply);
        assert!(h.controller.speech().text().unwrap().ends_with("Ribbit!"));
    }

    #[tokio::test]
    async fn reminder_text_shows_for_the_reminder_duration() {
        let mut h = harness(GatedBackend::new("unused"));

        h.controller
            .handle_reminder("It's time to take a break!".into());

        let entry = h.controller.speech().current().unwrap();
        assert_eq!(entry.text, "It's time to take a break!");
        assert_eq!(entry.duration, Duration::from_millis(2000));
        // Reminder text gets no suffix.
        assert!(!entry.text.contains("Ribbit"));
    }

    #[tokio::test]
    async fn escape_hides_the_prompt_without_submitting() {
        let backend = GatedBackend::new("unused");
        let mut h = harness(backend.clone());

        h.controller.handle_action(Action::OpenPrompt);
        h.controller.handle_action(Action::HidePrompt);

        assert!(!h.controller.prompt_visible());
        assert_eq!(h.controller.phase(), Phase::Idle);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn wait_path_leaves_the_prompt_visible() {
        let backend = GatedBackend::new("busy");
        let mut h = harness(backend.clone());

        h.controller.handle_action(Action::SubmitPrompt("first".into()));
        h.controller.handle_action(Action::OpenPrompt);
        h.controller.handle_action(Action::SubmitPrompt("second".into()));

        // The early-return wait path happens before the prompt is hidden.
        assert!(h.controller.prompt_visible());
    }

    #[tokio::test]
    async fn drag_moves_the_companion() {
        let mut h = harness(GatedBackend::new("unused"));

        h.controller.handle_action(Action::DragStart { x: 10.0, y: 10.0 });
        h.controller.handle_action(Action::DragMove { x: 15.0, y: 12.0 });

        assert_eq!(h.controller.position(), Point { x: 5.0, y: 2.0 });

        h.controller.handle_action(Action::DragEnd);
        h.controller.handle_action(Action::DragMove { x: 50.0, y: 50.0 });

        // No movement without a held button.
        assert_eq!(h.controller.position(), Point { x: 5.0, y: 2.0 });
    }

    #[tokio::test]
    async fn stale_reply_is_ignored() {
        let backend = GatedBackend::new("real");
        let mut h = harness(backend.clone());

        h.controller.handle_action(Action::SubmitPrompt("hi".into()));
        h.controller.handle_chat_reply(ChatReply {
            id: RequestId::new(),
            text: "imposter".into(),
        });

        assert_eq!(h.controller.phase(), Phase::AwaitingReply);
        assert!(h.controller.speech().text().is_none());
    }

    #[tokio::test]
    async fn expired_speech_is_cleared() {
        let mut h = harness(GatedBackend::new("unused"));

        h.controller.handle_reminder("blink".into());
        let deadline = h.controller.speech_deadline().unwrap();

        h.controller.expire_speech(deadline);
        assert!(h.controller.speech().text().is_none());
        assert!(h.controller.speech_deadline().is_none());
    }

    #[tokio::test]
    async fn quit_publishes_shutdown() {
        let backend = GatedBackend::new("unused");
        let (chat_tx, _chat_rx) = mpsc::channel(8);
        let events = EventBus::new(16);
        let mut rx = events.subscribe();
        let mut controller = CompanionController::new(
            ControllerConfig::default(),
            SpeechStyle::default(),
            backend,
            Arc::new(FixedFact),
            chat_tx,
            events,
        );

        controller.handle_action(Action::Quit);
        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::Shutdown));
    }
}
