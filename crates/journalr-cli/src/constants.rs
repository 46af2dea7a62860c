//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// Handled outcomes (an entry not found, a delete that removed nothing)
/// exit 0 and report through their message. Argument errors exit 2 via clap.
pub mod exit_codes {
    /// Store, config or I/O failure.
    pub const FAILURE: i32 = 1;

    /// Invalid user input, such as a date phrase that cannot be interpreted.
    pub const INVALID_INPUT: i32 = 1;
}

/// Name of the per-user data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".journalr";

/// File name of the default store.
pub const STORE_FILE_NAME: &str = "journalr.db";

/// File name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
