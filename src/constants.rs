/// Group chat commands
pub const COMMAND_SET_BIRTHDAY: &str = "/setbirthday";
pub const COMMAND_UNSET_BIRTHDAY: &str = "/unsetbirthday";
pub const COMMAND_GET_BIRTHDAY: &str = "/getbirthday";
pub const COMMAND_MY_BIRTHDAY: &str = "/mybirthday";
pub const COMMAND_NEXT_BIRTHDAY: &str = "/nextbirthday";

/// Private chat commands
pub const COMMAND_START: &str = "/start";
pub const COMMAND_HELP: &str = "/help";
pub const COMMAND_PRIVACY: &str = "/privacy";
pub const COMMAND_SOURCE: &str = "/source";
pub const COMMAND_CLEAR: &str = "/clear";

/// Exact message text required to wipe every record a user has
pub const COMMAND_CLEAR_FULL: &str = "/clear all data";

/// Reaction acknowledging a successful set/unset command
pub const REACTION_THUMBS_UP: &str = "👍";

/// All birthdays are stored in this year. It is a leap year, so
/// February 29th entries are representable.
pub const REFERENCE_YEAR: i32 = 2000;

/// Day-of-year of February 28th. Ordinals past it are shifted by one
/// in non-leap years to stay comparable with the reference year.
pub const FEBRUARY_28TH_ORDINAL: u32 = 59;

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "birthdaybot=info";
