// Defaults for the solver configuration

/// Largest hand searched by default; the search grows factorially with it.
/// Seven cards with no exact answer take seconds, eight take minutes.
pub const DEFAULT_MAX_CARDS: usize = 7;
pub const DEFAULT_PARALLEL: bool = true;
