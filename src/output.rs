use owo_colors::OwoColorize;

/// Prefix for all program output
const MARK: &str = "📈";

/// Print a status message (cyan)
pub fn status(message: &str) {
    println!("{} {}", MARK, message.cyan());
}

/// Print an info message (white/default)
pub fn info(message: &str) {
    println!("{} {}", MARK, message);
}

/// Print a success message (green)
pub fn success(message: &str) {
    println!("{} {}", MARK, message.green());
}

/// Print a warning message (yellow)
pub fn warn(message: &str) {
    eprintln!("{} {}", MARK, message.yellow());
}

/// Print an error message (red)
pub fn error(message: &str) {
    eprintln!("{} {}", MARK, message.red());
}

/// Print a notification the user has to read before going on
pub fn alert(message: &str) {
    println!();
    println!("{} {} {}", MARK, "!!".red().bold(), message.red().bold());
}

/// Print a startup banner
pub fn startup_banner(title: &str, subtitle: &str) {
    println!();
    println!("{}", "═".repeat(50).bright_cyan());
    println!(
        "{}  {} {}",
        MARK,
        title.bright_cyan().bold(),
        format!("- {}", subtitle).bright_white()
    );
    println!("{}", "═".repeat(50).bright_cyan());
    println!();
}

/// Print configuration info
pub fn config_item(key: &str, value: &str) {
    println!(
        "{} {} {}",
        MARK,
        format!("{}:", key).bright_white(),
        value.bright_cyan()
    );
}

/// Print the input prompt
pub fn prompt() {
    println!();
    println!("{} {}", MARK, "Enter an IPO name (or \"quit\"):".bright_white().bold());
}
