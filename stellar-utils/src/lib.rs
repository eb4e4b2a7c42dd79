/// Structured embed cards and their conversion into serenity builders.
pub mod embed;
/// Shared text formatting helpers.
pub mod formatting;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Plain-text or embed replies.
pub mod reply;
