//! Handler implementations: logging, chat allow-list, dice commands, statistics persistence.

mod allow_list;
mod dice_command;
mod logging;
mod persistence;

pub use allow_list::ChatAllowListHandler;
pub use dice_command::DiceCommandHandler;
pub use logging::LoggingHandler;
pub use persistence::StatsPersistenceHandler;
