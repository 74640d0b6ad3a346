use log::Level;

/// Delay between the sheet mounting and the progress bar filling.
pub const PROGRESS_DELAY_MS: u32 = 300;

/// How long the exit transition runs before the owner is told to unmount the sheet.
pub const EXIT_DELAY_MS: u32 = 300;

/// Percentage the progress bar jumps to once the delay has elapsed.
pub const PROGRESS_TARGET: u8 = 85;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose lifecycle logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
