//! Chat command classification.
//!
//! `/roll` is matched as a prefix (`/roll2d6` rolls `2d6`); `/start`, `/help` and `/stats` must
//! be the whole message. Telegram's group form `/command@BotName` is accepted only when
//! `BotName` is this bot's own username (case-insensitive); a command addressed to another bot
//! is [`Command::Unknown`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/roll <args>`; `args` is trimmed and may be empty.
    Roll { args: String },
    Help,
    Stats,
    /// Anything else; the bot stays silent.
    Unknown,
}

const ROLL: &str = "/roll";

/// Classifies `text`. `bot_username` is this bot's username without the leading `@`; while it
/// is unknown every `@mention` form is treated as addressed to someone else.
pub fn classify(text: &str, bot_username: Option<&str>) -> Command {
    let text = text.trim();

    if let Some(rest) = text.strip_prefix(ROLL) {
        return match strip_mention(rest, bot_username) {
            Some(args) => Command::Roll {
                args: args.trim().to_string(),
            },
            None => Command::Unknown,
        };
    }

    if text.contains(char::is_whitespace) {
        return Command::Unknown;
    }
    let name = match text.split_once('@') {
        Some((name, mention)) if is_own_name(mention, bot_username) => name,
        Some(_) => return Command::Unknown,
        None => text,
    };
    match name {
        "/start" | "/help" => Command::Help,
        "/stats" => Command::Stats,
        _ => Command::Unknown,
    }
}

/// Drops a leading `@BotName` token. `None` when the mention names another bot.
fn strip_mention<'a>(rest: &'a str, bot_username: Option<&str>) -> Option<&'a str> {
    match rest.strip_prefix('@') {
        Some(mention) => {
            let (name, args) = mention
                .find(char::is_whitespace)
                .map_or((mention, ""), |end| mention.split_at(end));
            is_own_name(name, bot_username).then_some(args)
        }
        None => Some(rest),
    }
}

fn is_own_name(mention: &str, bot_username: Option<&str>) -> bool {
    bot_username.is_some_and(|own| {
        let own = own.trim_start_matches('@');
        !own.is_empty() && own.eq_ignore_ascii_case(mention)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: Option<&str> = Some("DiceBot");

    fn roll(args: &str) -> Command {
        Command::Roll {
            args: args.to_string(),
        }
    }

    #[test]
    fn test_roll_with_args() {
        assert_eq!(classify("/roll 2d6+3", BOT), roll("2d6+3"));
        assert_eq!(classify("  /roll   d20  ", BOT), roll("d20"));
    }

    #[test]
    fn test_roll_without_args() {
        assert_eq!(classify("/roll", BOT), roll(""));
        assert_eq!(classify("/roll   ", BOT), roll(""));
    }

    #[test]
    fn test_roll_is_a_prefix_match() {
        assert_eq!(classify("/roll2d6", BOT), roll("2d6"));
        assert_eq!(classify("/rolling", BOT), roll("ing"));
    }

    #[test]
    fn test_roll_with_own_mention() {
        assert_eq!(classify("/roll@DiceBot 4d8-2", BOT), roll("4d8-2"));
        assert_eq!(classify("/roll@DiceBot", BOT), roll(""));
        assert_eq!(classify("/roll@dicebot d20", BOT), roll("d20"));
        assert_eq!(classify("/roll@DiceBot d6", Some("@DiceBot")), roll("d6"));
    }

    #[test]
    fn test_roll_for_other_bot_is_unknown() {
        assert_eq!(classify("/roll@SomeOtherBot d20", BOT), Command::Unknown);
        assert_eq!(classify("/roll@SomeOtherBot", BOT), Command::Unknown);
        assert_eq!(classify("/roll@DiceBot2 d20", BOT), Command::Unknown);
    }

    #[test]
    fn test_mention_without_known_username_is_unknown() {
        assert_eq!(classify("/roll@DiceBot d20", None), Command::Unknown);
        assert_eq!(classify("/stats@DiceBot", None), Command::Unknown);
        assert_eq!(classify("/roll d20", None), roll("d20"));
        assert_eq!(classify("/help", None), Command::Help);
    }

    #[test]
    fn test_help_and_start() {
        assert_eq!(classify("/help", BOT), Command::Help);
        assert_eq!(classify("/start", BOT), Command::Help);
        assert_eq!(classify("/start@DiceBot", BOT), Command::Help);
        assert_eq!(classify("/help@OtherBot", BOT), Command::Unknown);
    }

    #[test]
    fn test_stats() {
        assert_eq!(classify("/stats", BOT), Command::Stats);
        assert_eq!(classify(" /stats@DiceBot ", BOT), Command::Stats);
        assert_eq!(classify("/stats@DICEBOT", BOT), Command::Stats);
        assert_eq!(classify("/stats@SomeOtherBot", BOT), Command::Unknown);
    }

    #[test]
    fn test_exact_commands_reject_trailing_text() {
        assert_eq!(classify("/help me", BOT), Command::Unknown);
        assert_eq!(classify("/stats please", BOT), Command::Unknown);
        assert_eq!(classify("/statsx", BOT), Command::Unknown);
    }

    #[test]
    fn test_unknown() {
        for text in ["", "hello", "roll d20", "/ROLL d20", "/echo hi", "d20"] {
            assert_eq!(classify(text, BOT), Command::Unknown, "{text:?}");
        }
    }
}
