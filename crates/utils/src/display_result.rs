use colored::Colorize;
use gradle_jvmargs_core::ApplyResult;

/// One-line colored summary of an apply result.
#[must_use]
pub fn display_result(result: &ApplyResult) -> String {
    let status = if result.skipped() {
        "[skipped]".bright_black().bold()
    } else if result.is_changed() {
        "[update]".bright_yellow().bold()
    } else {
        "[ok]".bright_green().bold()
    };
    format!(
        "{} {} {} {}",
        status,
        result.relative_path().display().to_string().bright_white().bold(),
        "→".bright_cyan(),
        display_change(result.previous(), result.value())
    )
}

fn display_change(previous: Option<&str>, value: &str) -> String {
    match previous {
        Some(previous) if previous == value => value.bright_green().to_string(),
        Some(previous) => format!(
            "{} {} {}",
            previous.red().strikethrough(),
            "⇒".bright_cyan(),
            value.bright_green()
        ),
        None => format!("{} {}", "(absent) ⇒".bright_black(), value.bright_green()),
    }
}
