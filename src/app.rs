//! Chat panel behavior: draft editing, submission, reply collection.

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::actions::Action;
use crate::backend::{ChatClient, ChatReply};
use crate::error::FetchError;
use crate::state::{AppState, Message};

const PAGE_LINES: usize = 10;

type ReplyOutcome = Result<ChatReply, FetchError>;

pub struct App {
    pub state: AppState,
    client: ChatClient,
    runtime: Handle,
    replies_tx: UnboundedSender<ReplyOutcome>,
    replies_rx: UnboundedReceiver<ReplyOutcome>,
    pub should_quit: bool,
    /// For spinner animation (incremented each tick).
    pub tick: usize,
}

impl App {
    pub fn new(client: ChatClient, runtime: Handle) -> Self {
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            client,
            runtime,
            replies_tx,
            replies_rx,
            should_quit: false,
            tick: 0,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                let pos = self.state.cursor;
                self.state.draft.insert(pos, c);
                self.state.cursor = pos + c.len_utf8();
            }
            Action::Backspace => {
                if let Some(prev) = self.prev_boundary() {
                    self.state.draft.remove(prev);
                    self.state.cursor = prev;
                }
            }
            Action::Delete => {
                if self.state.cursor < self.state.draft.len() {
                    self.state.draft.remove(self.state.cursor);
                }
            }
            Action::CursorLeft => {
                if let Some(prev) = self.prev_boundary() {
                    self.state.cursor = prev;
                }
            }
            Action::CursorRight => {
                if let Some(c) = self.state.draft[self.state.cursor..].chars().next() {
                    self.state.cursor += c.len_utf8();
                }
            }
            Action::CursorHome => self.state.cursor = 0,
            Action::CursorEnd => self.state.cursor = self.state.draft.len(),
            Action::ClearInput => self.update_draft(String::new()),
            Action::Submit => self.submit(),

            Action::ChatScrollUp => self.state.chat.scroll_up(1),
            Action::ChatScrollDown => self.state.chat.scroll_down(1),
            Action::ChatScrollPageUp => self.state.chat.scroll_up(PAGE_LINES),
            Action::ChatScrollPageDown => self.state.chat.scroll_down(PAGE_LINES),
            Action::ChatScrollTop => self.state.chat.scroll_to_top(),
            Action::ChatScrollBottom => self.state.chat.scroll_to_bottom(),

            Action::HistoryUp => self.history_up(),
            Action::HistoryDown => self.history_down(),
        }
    }

    /// Replace the draft wholesale; the cursor goes to the end.
    pub fn update_draft(&mut self, text: String) {
        self.state.cursor = text.len();
        self.state.draft = text;
    }

    /// Send the trimmed draft. Blank drafts are ignored. The reply (or the
    /// failure notice) is appended later by [`App::poll_results`].
    pub fn submit(&mut self) {
        let text = self.state.draft.trim().to_string();
        if text.is_empty() {
            return;
        }

        if self.state.history.last() != Some(&text) {
            self.state.history.push(text.clone());
        }
        self.state.history_index = self.state.history.len();

        self.state.chat.conversation.push(Message::user(text.clone()));
        self.update_draft(String::new());
        self.state.pending += 1;

        debug!(chars = text.chars().count(), pending = self.state.pending, "sending message");
        let client = self.client.clone();
        let tx = self.replies_tx.clone();
        self.runtime.spawn(async move {
            let outcome = client.send(&text).await;
            // Receiver is gone once the panel has shut down; the reply is dropped.
            let _ = tx.send(outcome);
        });
    }

    /// Append every reply that has arrived since the last tick, in arrival order.
    pub fn poll_results(&mut self) {
        while let Ok(outcome) = self.replies_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: ReplyOutcome) {
        self.state.pending = self.state.pending.saturating_sub(1);
        let message = match outcome {
            Ok(reply) => {
                info!(confidence = ?reply.confidence, "reply received");
                Message::bot(reply.text, reply.confidence)
            }
            Err(e) => {
                error!(error = %e, "reply fetch failed");
                Message::fetch_failed()
            }
        };
        self.state.chat.conversation.push(message);
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.state.draft[..self.state.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn history_up(&mut self) {
        if !self.state.history.is_empty() && self.state.history_index > 0 {
            self.state.history_index -= 1;
            let text = self.state.history[self.state.history_index].clone();
            self.update_draft(text);
        }
    }

    fn history_down(&mut self) {
        if self.state.history_index < self.state.history.len() {
            self.state.history_index += 1;
            let text = self
                .state
                .history
                .get(self.state.history_index)
                .cloned()
                .unwrap_or_default();
            self.update_draft(text);
        }
    }

    #[cfg(test)]
    async fn next_result(&mut self) {
        if let Some(outcome) = self.replies_rx.recv().await {
            self.apply_outcome(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::{Sender, FETCH_ERROR_TEXT};
    use serde_json::json;
    use std::path::PathBuf;
    use std::time::Duration;
    use wiremock::{
        matchers::{body_partial_json, method},
        Mock, MockServer, ResponseTemplate,
    };

    fn app_for(endpoint: String) -> App {
        let config = Config {
            endpoint,
            timeout_secs: 5,
            log_file: PathBuf::from("test.log"),
            markdown: false,
        };
        App::new(ChatClient::new(&config).unwrap(), Handle::current())
    }

    async fn app_with_reply(reply: serde_json::Value) -> (MockServer, App) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply))
            .mount(&server)
            .await;
        let app = app_for(format!("{}/api/chat/", server.uri()));
        (server, app)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Char(c));
        }
    }

    #[tokio::test]
    async fn blank_draft_is_a_no_op() {
        let (_server, mut app) = app_with_reply(json!({ "reply": "x" })).await;
        for draft in ["", "   ", "\t\n "] {
            app.update_draft(draft.to_string());
            app.submit();
            assert!(app.state.chat.conversation.is_empty());
            assert_eq!(app.state.draft, draft);
            assert_eq!(app.state.pending, 0);
        }
    }

    #[tokio::test]
    async fn submit_appends_trimmed_user_message_and_clears_draft() {
        let (_server, mut app) = app_with_reply(json!({ "reply": "ok" })).await;
        app.update_draft("  show me users \n".to_string());
        app.submit();

        assert_eq!(app.state.chat.conversation.messages(), &[Message::user("show me users")]);
        assert_eq!(app.state.draft, "");
        assert_eq!(app.state.cursor, 0);
        assert_eq!(app.state.pending, 1);
    }

    #[tokio::test]
    async fn hello_scenario() {
        let (_server, mut app) =
            app_with_reply(json!({ "reply": "hi there", "accuracy": 0.5 })).await;
        type_text(&mut app, "hello");
        app.dispatch(Action::Submit);
        assert_eq!(app.state.chat.conversation.messages(), &[Message::user("hello")]);
        assert_eq!(app.state.draft, "");

        app.next_result().await;
        let messages = app.state.chat.conversation.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], Message::bot("hi there", Some(0.5)));
        assert_eq!(messages[1].confidence_line().as_deref(), Some("Confidence score: 50.00%"));
        assert_eq!(app.state.pending, 0);
    }

    #[tokio::test]
    async fn fenced_reply_is_cleaned() {
        let (_server, mut app) =
            app_with_reply(json!({ "reply": "```SELECT 1```", "accuracy": 0.8765 })).await;
        app.update_draft("count".to_string());
        app.submit();
        app.next_result().await;

        let bot = &app.state.chat.conversation.messages()[1];
        assert_eq!(bot.text, "SELECT 1");
        assert_eq!(bot.confidence_line().as_deref(), Some("Confidence score: 87.65%"));
    }

    #[tokio::test]
    async fn echoed_reply_round_trips() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "message": "list all tables" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "list all tables" })))
            .mount(&server)
            .await;
        let mut app = app_for(format!("{}/api/chat/", server.uri()));
        app.update_draft("list all tables".to_string());
        app.submit();
        app.next_result().await;

        let messages = app.state.chat.conversation.messages();
        assert_eq!(messages[1].text, messages[0].text);
        assert_eq!(messages[1].confidence_line(), None);
    }

    #[tokio::test]
    async fn network_failure_appends_error_message() {
        let mut app = app_for("http://127.0.0.1:1/api/chat/".to_string());
        app.update_draft("hello".to_string());
        app.submit();
        app.next_result().await;

        let bot = &app.state.chat.conversation.messages()[1];
        assert_eq!(bot.sender, Sender::Bot);
        assert_eq!(bot.text, FETCH_ERROR_TEXT);
        assert_eq!(bot.confidence_line(), None);
        assert_eq!(app.state.pending, 0);
    }

    #[tokio::test]
    async fn server_error_appends_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let mut app = app_for(format!("{}/api/chat/", server.uri()));
        app.update_draft("hello".to_string());
        app.submit();
        app.next_result().await;
        assert_eq!(app.state.chat.conversation.messages()[1], Message::fetch_failed());
    }

    #[tokio::test]
    async fn replies_land_in_arrival_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "message": "slow" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "reply": "slow reply" }))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "message": "fast" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "fast reply" })))
            .mount(&server)
            .await;

        let mut app = app_for(format!("{}/api/chat/", server.uri()));
        app.update_draft("slow".to_string());
        app.submit();
        app.update_draft("fast".to_string());
        app.submit();
        assert_eq!(app.state.pending, 2);

        app.next_result().await;
        app.next_result().await;
        let texts: Vec<&str> = app
            .state
            .chat
            .conversation
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, ["slow", "fast", "fast reply", "slow reply"]);
        assert_eq!(app.state.pending, 0);
    }

    #[tokio::test]
    async fn poll_results_drains_without_blocking() {
        let (_server, mut app) = app_with_reply(json!({ "reply": "ok" })).await;
        app.poll_results();
        assert!(app.state.chat.conversation.is_empty());

        app.update_draft("hi".to_string());
        app.submit();
        app.poll_results();
        assert_eq!(app.state.chat.conversation.len(), 1);
    }

    #[tokio::test]
    async fn cursor_editing_respects_multibyte_chars() {
        let (_server, mut app) = app_with_reply(json!({ "reply": "ok" })).await;
        type_text(&mut app, "héllo");
        app.dispatch(Action::CursorLeft);
        app.dispatch(Action::CursorLeft);
        app.dispatch(Action::CursorLeft);
        app.dispatch(Action::Backspace);
        assert_eq!(app.state.draft, "hllo");
        app.dispatch(Action::CursorHome);
        app.dispatch(Action::Delete);
        assert_eq!(app.state.draft, "llo");
        app.dispatch(Action::CursorEnd);
        app.dispatch(Action::Char('!'));
        assert_eq!(app.state.draft, "llo!");
        app.dispatch(Action::ClearInput);
        assert_eq!(app.state.draft, "");
    }

    #[tokio::test]
    async fn history_recalls_sent_drafts() {
        let (_server, mut app) = app_with_reply(json!({ "reply": "ok" })).await;
        for text in ["first", "second", "second"] {
            app.update_draft(text.to_string());
            app.submit();
        }
        assert_eq!(app.state.history, ["first", "second"]);

        app.dispatch(Action::HistoryUp);
        assert_eq!(app.state.draft, "second");
        app.dispatch(Action::HistoryUp);
        assert_eq!(app.state.draft, "first");
        app.dispatch(Action::HistoryUp);
        assert_eq!(app.state.draft, "first");
        app.dispatch(Action::HistoryDown);
        assert_eq!(app.state.draft, "second");
        app.dispatch(Action::HistoryDown);
        assert_eq!(app.state.draft, "");
    }
}
