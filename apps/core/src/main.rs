// ILP Companion terminal front end
// Reads lines from stdin, prints the conversation to stdout, logs to stderr.

use anyhow::Context;
use ilp_companion::actors::{
    ChatBackend, CommandSpeech, HttpChatBackend, NoSpeech, SessionEvent, SessionHandle,
    SessionOptions, SpeechCapability, TransportAdapter,
};
use ilp_companion::brain::{EMOTIONAL_SUGGESTIONS, GENERAL_SUGGESTIONS, WELLNESS_RESOURCES};
use ilp_companion::config::AppConfig;
use ilp_companion::error::AppError;
use ilp_companion::models::{Message, Mood, Sender};
use ilp_companion::session::TokioReplyTimer;
use ilp_companion::telemetry;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const BOT_NAME: &str = "Maya";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Say(String),
    Mood(String),
    Anonymous,
    Voice,
    Listen,
    CheckIn(String),
    Suggest,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Say(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim().to_string()),
        None => (rest, String::new()),
    };
    match name.to_lowercase().as_str() {
        "mood" => Command::Mood(arg),
        "anon" | "anonymous" => Command::Anonymous,
        "voice" => Command::Voice,
        "listen" => Command::Listen,
        "checkin" => Command::CheckIn(arg),
        "suggest" => Command::Suggest,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /mood <great|good|okay|struggling>  share how you feel (before chatting)");
    println!("  /anon                               toggle anonymous mode");
    println!("  /voice                              toggle spoken replies");
    println!("  /listen                             speak instead of typing");
    println!("  /checkin <1-10>                     wellness check-in with your stress level");
    println!("  /suggest                            show suggested questions");
    println!("  /quit                               leave");
}

fn print_suggestions() {
    println!("How are you feeling?");
    for s in EMOTIONAL_SUGGESTIONS.iter() {
        println!("  - {}", s.text);
    }
    println!("Common questions:");
    for s in GENERAL_SUGGESTIONS.iter() {
        println!("  - {}", s.text);
    }
    println!("Wellness resources:");
    for (resource, priority) in WELLNESS_RESOURCES.iter() {
        println!("  - {} [{}]", resource, priority.label());
    }
}

fn print_message(message: &Message) {
    match message.sender {
        Sender::User if message.is_anonymous => println!("You (anonymous): {}", message.text),
        Sender::User => println!("You: {}", message.text),
        Sender::Bot => {
            println!("{}: {}", BOT_NAME, message.text);
            if let Some(c) = &message.classification {
                if !c.emotions.is_empty() {
                    let emotions: Vec<&str> = c.emotions.iter().map(|e| e.label()).collect();
                    println!("  [{} priority | {} | {}]", c.priority.label(), c.category, emotions.join(", "));
                }
            }
        }
    }
}

fn render_event(event: &SessionEvent) {
    match event {
        SessionEvent::Typing(true) => println!("{} is typing...", BOT_NAME),
        SessionEvent::BotReply(message) => print_message(message),
        SessionEvent::MoodSelected(mood) => println!("(mood recorded: {})", mood),
        SessionEvent::AnonymityChanged(true) => println!("(anonymous mode on)"),
        SessionEvent::AnonymityChanged(false) => println!("(anonymous mode off)"),
        SessionEvent::VoiceChanged(true) => println!("(voice on)"),
        SessionEvent::VoiceChanged(false) => println!("(voice off)"),
        // the user's own line is already on screen
        SessionEvent::UserMessage(_) | SessionEvent::Typing(false) => {}
    }
}

/// Prints validation and capability errors; anything else is a real failure.
fn report(result: Result<(), AppError>) -> anyhow::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(AppError::Validation(msg)) => {
            println!("! {}", msg);
            Ok(())
        }
        Err(AppError::UnsupportedCapability(msg)) => {
            println!("! {}", msg);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn build_transport(config: &AppConfig) -> anyhow::Result<Option<TransportAdapter>> {
    let Some(url) = config.backend_url()? else {
        info!("No backend configured, answering with the local engine");
        return Ok(None);
    };

    let backend = HttpChatBackend::new(url, config.request_timeout());
    if backend.check_health().await {
        info!("Remote backend is reachable at {}", backend.base_url());
    } else {
        warn!(
            "Remote backend at {} is not reachable; replies will fall back to the local engine",
            backend.base_url()
        );
    }
    Ok(Some(TransportAdapter::new(Arc::new(backend), config.delays())))
}

fn detect_speech() -> Arc<dyn SpeechCapability> {
    match CommandSpeech::detect() {
        Some(speech) => Arc::new(speech),
        None => {
            warn!("No text-to-speech program found, voice is unavailable");
            Arc::new(NoSpeech)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    telemetry::init_tracing(config.log_format)?;
    info!("Starting ILP Companion v{}", env!("CARGO_PKG_VERSION"));

    let speech = detect_speech();
    let voice_enabled = config.voice_enabled && speech.supports_synthesis();
    let transport = build_transport(&config).await?;

    let (session, mut events) = SessionHandle::spawn(SessionOptions {
        anonymous: config.start_anonymous,
        voice_enabled,
        delays: config.delays(),
        transport,
        speech,
        timer: Arc::new(TokioReplyTimer),
    });

    for message in session.snapshot().await?.messages.iter() {
        print_message(message);
    }
    println!("(type /help for commands)");

    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            render_event(&event);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Empty => {}
            Command::Say(text) => report(session.submit_message(&text).await.map(|_| ()))?,
            Command::Mood(arg) => match arg.parse::<Mood>() {
                // the canned mood text stands in for typed input, so echo it
                Ok(mood) => report(
                    session
                        .select_mood(mood)
                        .await
                        .map(|message| print_message(&message)),
                )?,
                Err(e) => println!("! {}", e),
            },
            Command::Anonymous => {
                session.toggle_anonymous().await?;
            }
            Command::Voice => report(session.toggle_voice().await.map(|_| ()))?,
            Command::Listen => match session.listen().await {
                Ok(Some(message)) => print_message(&message),
                Ok(None) => println!("(didn't catch that)"),
                Err(e) => report(Err(e))?,
            },
            Command::CheckIn(arg) => match arg.parse::<u8>() {
                Ok(level) => {
                    let check = session.wellness_check(level).await?;
                    println!("{}: {}", BOT_NAME, check.message);
                    for recommendation in check.recommendations.iter() {
                        println!("  - {}", recommendation);
                    }
                }
                Err(_) => println!("! Usage: /checkin <1-10>"),
            },
            Command::Suggest => print_suggestions(),
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(name) => println!("! Unknown command /{} (try /help)", name),
        }
    }

    session.shutdown().await?;
    printer.await?;
    info!("Goodbye");
    Ok(())
}
