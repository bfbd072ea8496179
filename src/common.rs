/// Name of the captured log dump read when no other path is given.
pub const DEFAULT_INPUT_PATH: &'static str = "log";

/// Lines are kept only if they begin with this character.
pub const LINE_MARKER: char = '1';
