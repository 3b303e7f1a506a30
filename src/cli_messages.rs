//! CLI command messaging system
//!
//! Consistent console messages for headless actions and config commands.

const COLOR_INFO: &str = "\x1b[1;33m";
const COLOR_WARN: &str = "\x1b[1;91m";
const COLOR_ERROR: &str = "\x1b[1;31m";
const COLOR_SUCCESS: &str = "\x1b[1;32m";
const COLOR_RESET: &str = "\x1b[0m";

fn format_message(color: &str, tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{}[{}]{} {}", color, tag, COLOR_RESET, title)
    } else {
        format!("{}[{}]{} {}\t {}", color, tag, COLOR_RESET, title, details)
    }
}

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    println!("{}", format_message(COLOR_INFO, "INFO", title, details));
}

/// Print CLI command warn message
pub fn print_warn(title: &str, details: &str) {
    println!("{}", format_message(COLOR_WARN, "WARN", title, details));
}

/// Print CLI command error to stderr, with the details on their own line.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}[ERROR]{} {}", COLOR_ERROR, COLOR_RESET, title);
    if let Some(details) = details {
        eprintln!("{}[ERROR]{} Details: {}", COLOR_ERROR, COLOR_RESET, details);
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    println!("{}", format_message(COLOR_SUCCESS, "SUCCESS", title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_without_details() {
        assert_eq!(
            format_message(COLOR_INFO, "INFO", "Saved", ""),
            "\x1b[1;33m[INFO]\x1b[0m Saved"
        );
    }

    #[test]
    fn test_message_with_details() {
        let msg = format_message(COLOR_SUCCESS, "SUCCESS", "API URL saved", "http://localhost:8000");
        assert!(msg.ends_with("API URL saved\t http://localhost:8000"));
    }
}
