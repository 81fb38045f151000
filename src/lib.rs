/// Balance and movement list of a single account, plus the deposit and
/// withdrawal rules. Validation yields a [`account::Movement`] that is then
/// applied to the account.
pub mod account;

/// Raw movement requests turned into validated commands for [`account`].
pub mod command;

/// Where "today" comes from.
pub mod clock;

/// Entry point tying commands, account rules and the clock together.
pub mod processor;

/// Loading and saving the movement history as CSV.
pub mod history;
