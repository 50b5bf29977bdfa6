//! The speech-bubble state machine.

use pet_core::Tick;

/// The message currently shown in a pet's speech bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveMessage {
    pub text: String,

    /// Tick at which [`MessageEmitter::tick`] clears this message.
    pub expires_at: Tick,

    /// Monotonically increasing per-emitter counter.  Lets consumers detect
    /// that one message replaced another even when the text is identical.
    pub token: u64,
}

/// Displays one phrase at a time for a fixed duration.
///
/// Each `emit` replaces whatever is showing and carries its own expiry tick,
/// so re-emitting before the old expiry extends visibility — a leftover
/// deadline from a replaced message cannot clear the new one early.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageEmitter {
    /// How long a message stays visible, in ticks.
    duration_ticks: u64,
    current: Option<ActiveMessage>,
    next_token: u64,
}

impl MessageEmitter {
    pub fn new(duration_ticks: u64) -> Self {
        Self {
            duration_ticks: duration_ticks.max(1),
            current: None,
            next_token: 0,
        }
    }

    /// Show `text`, replacing any current message.  Returns the new message's
    /// token.
    pub fn emit(&mut self, text: impl Into<String>, now: Tick) -> u64 {
        let token = self.next_token;
        self.next_token += 1;
        self.current = Some(ActiveMessage {
            text:       text.into(),
            expires_at: now + self.duration_ticks,
            token,
        });
        token
    }

    /// Clear the message once its lifetime has elapsed.  Returns `true` if a
    /// message expired this call.
    pub fn tick(&mut self, now: Tick) -> bool {
        match &self.current {
            Some(msg) if now >= msg.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// The message currently showing, if any.
    pub fn current(&self) -> Option<&ActiveMessage> {
        self.current.as_ref()
    }

    /// How long each message stays visible, in ticks.
    pub fn duration_ticks(&self) -> u64 {
        self.duration_ticks
    }
}
