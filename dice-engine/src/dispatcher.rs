//! Command dispatcher: classify → parse/evaluate/record or render → reply.
//!
//! The dispatcher owns the statistics and the random source. It performs no I/O; the caller
//! delivers the returned [`Reply`] and serializes access when handling updates concurrently.

use rand::Rng;
use tracing::debug;

use crate::command::{classify, Command};
use crate::notation::parse;
use crate::roll::{evaluate, format_roll};
use crate::stats::{render_leaderboard, StatsAggregator};

pub const HELP_TEXT: &str = "🎲 D&D Dice Bot

Commands:
/roll d20 - roll d20
/roll 2d6+3 - 2d6 +3
/roll 4d8-2 - 4d8 -2
/roll d6 - single d6

/stats - luck statistics for all players in this chat

Supported dice: d4, d6, d8, d10, d12, d20
";

/// How the transport should send a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    /// `**total**` highlighting for roll results and leaderboards.
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Markdown,
        }
    }
}

pub struct Dispatcher<R> {
    stats: StatsAggregator,
    rng: R,
    bot_username: Option<String>,
}

impl<R: Rng> Dispatcher<R> {
    pub fn new(rng: R) -> Self {
        Self::with_stats(StatsAggregator::new(), rng)
    }

    pub fn with_stats(stats: StatsAggregator, rng: R) -> Self {
        Self {
            stats,
            rng,
            bot_username: None,
        }
    }

    /// Sets the username `/command@BotName` mentions are matched against.
    pub fn set_bot_username(&mut self, username: impl Into<String>) {
        self.bot_username = Some(username.into());
    }

    pub fn stats(&self) -> &StatsAggregator {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut StatsAggregator {
        &mut self.stats
    }

    /// Handles one message. `None` means the text is not a bot command and nothing is sent.
    pub fn handle_command(&mut self, chat_id: i64, user_id: i64, text: &str) -> Option<Reply> {
        match classify(text, self.bot_username.as_deref()) {
            Command::Roll { args } => Some(self.roll(chat_id, user_id, &args)),
            Command::Help => Some(Reply::plain(HELP_TEXT)),
            Command::Stats => Some(Reply::markdown(render_leaderboard(
                &self.stats.leaderboard(chat_id),
            ))),
            Command::Unknown => None,
        }
    }

    fn roll(&mut self, chat_id: i64, user_id: i64, args: &str) -> Reply {
        if args.is_empty() {
            return Reply::plain(HELP_TEXT);
        }

        let request = match parse(args) {
            Ok(request) => request,
            Err(e) => {
                debug!(chat_id, user_id, args, error = %e, "Rejected roll");
                return Reply::plain(e.user_message());
            }
        };

        let outcome = evaluate(&request, &mut self.rng);
        for &face in outcome.results() {
            self.stats.record(chat_id, user_id, face);
        }
        debug!(
            chat_id,
            user_id,
            request = %request,
            total = outcome.total(),
            "Rolled dice"
        );
        Reply::markdown(format_roll(args, &outcome))
    }
}
