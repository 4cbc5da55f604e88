//! App state: conversation, transcript viewport, draft, history.

/// Shown in place of a reply whenever the fetch fails for any reason.
pub const FETCH_ERROR_TEXT: &str = "Error: failed to fetch reply.";

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub confidence: Option<f64>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into(), confidence: None }
    }
    pub fn bot(text: impl Into<String>, confidence: Option<f64>) -> Self {
        Self { sender: Sender::Bot, text: text.into(), confidence }
    }
    pub fn fetch_failed() -> Self {
        Self::bot(FETCH_ERROR_TEXT, None)
    }

    /// `Confidence score: 87.65%` for a bot message that carries a score.
    pub fn confidence_line(&self) -> Option<String> {
        match (self.sender, self.confidence) {
            (Sender::Bot, Some(score)) => Some(format!("Confidence score: {}%", percent_2dp(score * 100.0))),
            _ => None,
        }
    }
}

/// Two decimals, rounding the exact binary value half up (so 50.625 gives
/// "50.63"). `{:.2}` alone would round that tie to even.
fn percent_2dp(value: f64) -> String {
    // 100 fractional digits is past the exact expansion of any percentage-sized f64.
    let exact = format!("{:.100}", value.abs());
    let Some((whole, frac)) = exact.split_once('.') else {
        return format!("{value:.2}");
    };
    let Ok(whole) = whole.parse::<u64>() else {
        return format!("{value:.2}");
    };
    let digits = frac.as_bytes();
    let mut cents = whole * 100 + u64::from(digits[0] - b'0') * 10 + u64::from(digits[1] - b'0');
    if digits[2] >= b'5' {
        cents += 1;
    }
    let sign = if value.is_sign_negative() && cents > 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// Append-only transcript. Messages are never edited or removed.
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
    pub fn len(&self) -> usize {
        self.messages.len()
    }
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Transcript plus its scroll position.
///
/// Scrolling is measured in rendered (wrapped) lines. The renderer reports the
/// transcript size through [`ChatState::sync_viewport`] every frame; a change
/// in conversation length retargets the bottom, and [`ChatState::step_scroll`]
/// closes half the remaining distance per tick.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub conversation: Conversation,
    pub scroll: usize,
    scroll_target: Option<usize>,
    max_scroll: usize,
    seen_len: usize,
}

impl ChatState {
    pub fn sync_viewport(&mut self, total_lines: usize, height: usize) {
        self.max_scroll = total_lines.saturating_sub(height);
        if self.conversation.len() != self.seen_len {
            self.seen_len = self.conversation.len();
            self.scroll_target = Some(usize::MAX);
        }
        self.scroll = self.scroll.min(self.max_scroll);
    }

    pub fn step_scroll(&mut self) {
        let Some(target) = self.scroll_target else {
            return;
        };
        let target = target.min(self.max_scroll);
        if self.scroll < target {
            self.scroll += (target - self.scroll).div_ceil(2);
        } else {
            self.scroll = target;
        }
        if self.scroll == target {
            self.scroll_target = None;
        }
    }

    /// Manual scrolling cancels any pending scroll-to-latest.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_target = None;
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_target = None;
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_target = None;
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_target = Some(usize::MAX);
    }

    #[cfg(test)]
    pub fn max_scroll(&self) -> usize {
        self.max_scroll
    }
}

/// Global app state (single chat panel).
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub chat: ChatState,
    pub draft: String,
    /// Byte offset into `draft`, always on a char boundary.
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: usize,
    /// Requests sent whose reply has not arrived yet.
    pub pending: usize,
    pub render_markdown: bool,
}
