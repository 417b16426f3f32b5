use colored::Colorize;
use parking_lot::Mutex;

// RGB tuple constants for use with the `colored` crate's `.truecolor()` method
pub mod rgb {
    pub const ELECTRIC_PURPLE: (u8, u8, u8) = (225, 53, 255);
    pub const NEON_CYAN: (u8, u8, u8) = (128, 255, 234);
    pub const DIM_WHITE: (u8, u8, u8) = (180, 180, 190);
}

/// Track quiet mode state
static QUIET_MODE: std::sync::LazyLock<Mutex<bool>> =
    std::sync::LazyLock::new(|| Mutex::new(false));

/// Enable or disable quiet mode
pub fn set_quiet_mode(enabled: bool) {
    let mut quiet_mode = QUIET_MODE.lock();
    *quiet_mode = enabled;
}

/// Check if quiet mode is enabled
pub fn is_quiet_mode() -> bool {
    *QUIET_MODE.lock()
}

pub fn print_warning(message: &str) {
    if !is_quiet_mode() {
        println!("{}", message.yellow().bold());
    }
}

pub fn print_error(message: &str) {
    // Always print errors, even in quiet mode
    eprintln!("{}", message.red().bold());
}

pub fn print_success(message: &str) {
    if !is_quiet_mode() {
        println!("{}", message.green().bold());
    }
}

/// Print a `from -> to` conversion line
pub fn print_conversion(from: &str, to: &str) {
    if !is_quiet_mode() {
        let (pr, pg, pb) = rgb::ELECTRIC_PURPLE;
        let (cr, cg, cb) = rgb::NEON_CYAN;
        let (dr, dg, db) = rgb::DIM_WHITE;
        println!(
            "{} {} {}",
            from.truecolor(pr, pg, pb),
            "→".truecolor(dr, dg, db),
            to.truecolor(cr, cg, cb).bold()
        );
    }
}
