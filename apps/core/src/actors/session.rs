use crate::actors::messages::{SessionEvent, SessionMessage, SessionSnapshot};
use crate::actors::speech::NoSpeech;
use crate::actors::traits::SpeechCapability;
use crate::actors::transport::TransportAdapter;
use crate::brain::{wellness_check, MessageClassifier, ResponseSelector, WellnessCheck};
use crate::error::AppError;
use crate::models::{Message, Mood};
use crate::session::{ConversationSession, PendingReply, ReplyDelays, ReplyTimer, TokioReplyTimer};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};
use tracing::{debug, error, info, instrument, warn};

// --- Constants ---
const MAILBOX_CAPACITY: usize = 32;
const EVENT_CAPACITY: usize = 64;
const ACTOR_REPLY_TIMEOUT: Duration = Duration::from_secs(5);
const LISTEN_TIMEOUT: Duration = Duration::from_secs(30);
// Longer than the largest accepted backend request timeout
const CHECKIN_TIMEOUT: Duration = Duration::from_secs(125);

/// Everything a session actor is built from.
pub struct SessionOptions {
    pub anonymous: bool,
    pub voice_enabled: bool,
    pub delays: ReplyDelays,
    /// Remote backend with local fallback. `None` answers with the local engine only.
    pub transport: Option<TransportAdapter>,
    pub speech: Arc<dyn SpeechCapability>,
    pub timer: Arc<dyn ReplyTimer>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            anonymous: true,
            voice_enabled: false,
            delays: ReplyDelays::default(),
            transport: None,
            speech: Arc::new(NoSpeech),
            timer: Arc::new(TokioReplyTimer),
        }
    }
}

/// A handle to a running conversation session.
///
/// The session itself lives inside the actor task; every operation goes through
/// the mailbox so there is exactly one writer per conversation.
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
}

impl SessionHandle {
    /// Spawns the session actor and returns its handle and event stream.
    pub fn spawn(options: SessionOptions) -> (Self, mpsc::Receiver<SessionEvent>) {
        let (sender, receiver) = mpsc::channel(MAILBOX_CAPACITY);
        let (event_sender, event_receiver) = mpsc::channel(EVENT_CAPACITY);
        let runner = SessionRunner::new(receiver, sender.downgrade(), event_sender, options);
        tokio::spawn(async move { runner.run().await });
        (Self { sender }, event_receiver)
    }

    /// Submits a line of user text. Returns the appended user message; the bot
    /// reply arrives later as a `SessionEvent::BotReply`.
    #[instrument(skip(self, text), fields(length = text.len()))]
    pub async fn submit_message(&self, text: &str) -> Result<Message, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::Submit {
                text: text.to_string(),
                responder: send,
            })
            .await?;
        timeout(ACTOR_REPLY_TIMEOUT, recv).await??
    }

    #[instrument(skip(self))]
    pub async fn select_mood(&self, mood: Mood) -> Result<Message, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::SelectMood {
                mood,
                responder: send,
            })
            .await?;
        timeout(ACTOR_REPLY_TIMEOUT, recv).await??
    }

    pub async fn toggle_anonymous(&self) -> Result<bool, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::ToggleAnonymous { responder: send })
            .await?;
        Ok(timeout(ACTOR_REPLY_TIMEOUT, recv).await??)
    }

    pub async fn toggle_voice(&self) -> Result<bool, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::ToggleVoice { responder: send })
            .await?;
        timeout(ACTOR_REPLY_TIMEOUT, recv).await??
    }

    /// Listens for one utterance and submits it as a user message.
    pub async fn listen(&self) -> Result<Option<Message>, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::Listen { responder: send })
            .await?;
        timeout(LISTEN_TIMEOUT, recv).await??
    }

    #[instrument(skip(self))]
    pub async fn wellness_check(&self, stress_level: u8) -> Result<WellnessCheck, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::WellnessCheck {
                stress_level,
                responder: send,
            })
            .await?;
        Ok(timeout(CHECKIN_TIMEOUT, recv).await??)
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::Snapshot { responder: send })
            .await?;
        Ok(timeout(ACTOR_REPLY_TIMEOUT, recv).await??)
    }

    /// Tears the session down. A reply still waiting on its delay is dropped.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::Shutdown { responder: send })
            .await?;
        Ok(timeout(ACTOR_REPLY_TIMEOUT, recv).await??)
    }
}

// --- Actor Runner ---
struct SessionRunner {
    receiver: mpsc::Receiver<SessionMessage>,
    /// Weak so that dropping every handle still stops the runner
    mailbox: mpsc::WeakSender<SessionMessage>,
    events: mpsc::Sender<SessionEvent>,
    session: ConversationSession,
    transport: Option<TransportAdapter>,
    speech: Arc<dyn SpeechCapability>,
    timer: Arc<dyn ReplyTimer>,
    voice_enabled: bool,
    turn: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl SessionRunner {
    fn new(
        receiver: mpsc::Receiver<SessionMessage>,
        mailbox: mpsc::WeakSender<SessionMessage>,
        events: mpsc::Sender<SessionEvent>,
        options: SessionOptions,
    ) -> Self {
        let session = ConversationSession::with_engine(
            options.anonymous,
            MessageClassifier::new(),
            ResponseSelector::new(),
            options.delays,
        );
        Self {
            receiver,
            mailbox,
            events,
            session,
            transport: options.transport,
            speech: options.speech,
            timer: options.timer,
            voice_enabled: options.voice_enabled,
            turn: 0,
            in_flight: None,
        }
    }

    async fn run(mut self) {
        info!(session_id = %self.session.id(), "Session actor started");
        while let Some(msg) = self.receiver.recv().await {
            let stop = matches!(msg, SessionMessage::Shutdown { .. });
            if let Err(e) = self.handle_message(msg).await {
                error!("Error handling session message: {:?}", e);
            }
            if stop {
                info!(session_id = %self.session.id(), "Session actor shut down");
                return;
            }
        }
        // every handle dropped
        self.teardown();
        info!(session_id = %self.session.id(), "Session actor stopped");
    }

    async fn handle_message(&mut self, msg: SessionMessage) -> Result<(), AppError> {
        match msg {
            SessionMessage::Submit { text, responder } => {
                let result = match self.session.submit_user_message(&text) {
                    Ok(reply) => self.begin_turn(reply),
                    Err(e) => Err(e),
                };
                let _ = responder.send(result);
            }
            SessionMessage::SelectMood { mood, responder } => {
                let result = match self.session.select_mood(mood) {
                    Ok(reply) => {
                        self.emit(SessionEvent::MoodSelected(mood));
                        self.begin_turn(reply)
                    }
                    Err(e) => Err(e),
                };
                let _ = responder.send(result);
            }
            SessionMessage::ToggleAnonymous { responder } => {
                let anonymous = self.session.toggle_anonymous();
                self.emit(SessionEvent::AnonymityChanged(anonymous));
                let _ = responder.send(anonymous);
            }
            SessionMessage::ToggleVoice { responder } => {
                let result = self.toggle_voice();
                let _ = responder.send(result);
            }
            SessionMessage::Listen { responder } => {
                let result = self.listen().await;
                let _ = responder.send(result);
            }
            SessionMessage::WellnessCheck {
                stress_level,
                responder,
            } => match self.transport.clone() {
                Some(transport) => {
                    let mood = self.session.mood();
                    // The backend call must not hold up the mailbox
                    tokio::spawn(async move {
                        let check = transport.wellness_check(mood, stress_level).await;
                        let _ = responder.send(check);
                    });
                }
                None => {
                    let _ = responder.send(wellness_check(stress_level));
                }
            },
            SessionMessage::Snapshot { responder } => {
                let _ = responder.send(self.snapshot());
            }
            SessionMessage::ReplyReady { turn, reply } => {
                self.deliver_reply(turn, reply)?;
            }
            SessionMessage::Shutdown { responder } => {
                self.teardown();
                let _ = responder.send(());
            }
        }
        Ok(())
    }

    /// Publishes the freshly appended user message and schedules its reply.
    fn begin_turn(&mut self, local_reply: PendingReply) -> Result<Message, AppError> {
        let user_message = self
            .session
            .messages()
            .last()
            .cloned()
            .ok_or_else(|| AppError::Internal("User message missing after submit".to_string()))?;

        self.emit(SessionEvent::UserMessage(user_message.clone()));
        self.emit(SessionEvent::Typing(true));
        self.schedule_reply(&user_message, local_reply);
        Ok(user_message)
    }

    /// One-shot task per turn: ask the transport (if any), wait out the reply
    /// delay, then hand the reply back to the mailbox.
    fn schedule_reply(&mut self, user_message: &Message, local_reply: PendingReply) {
        self.turn += 1;
        let turn = self.turn;
        let text = user_message.text.clone();
        let is_anonymous = user_message.is_anonymous;
        let transport = self.transport.clone();
        let timer = Arc::clone(&self.timer);
        let mailbox = self.mailbox.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let reply = match transport {
                Some(transport) => transport.respond(&text, is_anonymous).await,
                None => local_reply,
            };
            timer.wait(reply.delay).await;

            match mailbox.upgrade() {
                Some(sender) => {
                    if sender
                        .send(SessionMessage::ReplyReady { turn, reply })
                        .await
                        .is_err()
                    {
                        debug!(turn, "Session closed before the reply landed");
                    }
                }
                None => debug!(turn, "Session dropped before the reply landed"),
            }
        }));
    }

    fn deliver_reply(&mut self, turn: u64, reply: PendingReply) -> Result<(), AppError> {
        if turn != self.turn || !self.session.awaiting_reply() {
            warn!(turn, current = self.turn, "Discarding stale reply");
            return Ok(());
        }
        self.in_flight = None;
        self.session.resolve_pending_reply(reply)?;
        let message = self.session.record_bot_reply()?.clone();

        self.emit(SessionEvent::Typing(false));
        self.emit(SessionEvent::BotReply(message.clone()));

        if self.voice_enabled {
            if let Err(e) = self.speech.speak(&message.text) {
                warn!("Could not speak reply: {}", e);
            }
        }
        Ok(())
    }

    fn toggle_voice(&mut self) -> Result<bool, AppError> {
        if !self.voice_enabled && !self.speech.supports_synthesis() {
            return Err(AppError::UnsupportedCapability(
                "Speech synthesis is not available on this host".to_string(),
            ));
        }
        self.voice_enabled = !self.voice_enabled;
        if !self.voice_enabled {
            self.speech.stop();
        }
        info!(voice_enabled = self.voice_enabled, "Voice toggled");
        self.emit(SessionEvent::VoiceChanged(self.voice_enabled));
        Ok(self.voice_enabled)
    }

    async fn listen(&mut self) -> Result<Option<Message>, AppError> {
        if !self.speech.supports_recognition() {
            return Err(AppError::UnsupportedCapability(
                "Speech recognition is not available on this host".to_string(),
            ));
        }
        if self.session.awaiting_reply() {
            return Err(AppError::Validation(
                "A reply is still on its way; wait for it before speaking".to_string(),
            ));
        }

        match self.speech.listen().await? {
            Some(transcript) if !transcript.trim().is_empty() => {
                let reply = self.session.submit_user_message(&transcript)?;
                self.begin_turn(reply).map(Some)
            }
            _ => {
                debug!("Nothing heard");
                Ok(None)
            }
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.session.id(),
            messages: self.session.messages().to_vec(),
            mood: self.session.mood(),
            anonymous: self.session.is_anonymous(),
            voice_enabled: self.voice_enabled,
            state: self.session.state(),
        }
    }

    /// Publishes without waiting: a listener that stops reading must not stall the session.
    fn emit(&self, event: SessionEvent) {
        match self.events.try_send(event) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(event)) => {
                warn!(?event, "Event listener is not keeping up, event dropped");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                debug!("No event listener attached");
            }
        }
    }

    fn teardown(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
            info!(session_id = %self.session.id(), "Scheduled reply cancelled by teardown");
        }
        self.speech.stop();
    }
}
