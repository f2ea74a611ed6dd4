use console::style;

/// Prints to the standard output, with a newline.
///
/// Equivalent to the [`println!`] macro except that a note prefix naming
/// this program is printed before the message.
#[macro_export]
macro_rules! noteln {
    ($($t:tt)*) => {{
        print!(
            "{} ",
            $crate::style::Style::NotePrefix.paint(format!("--- {}: note:", $crate::PKG_NAME))
        );
        println!($($t)*);
    }};
}

/// Prints to the standard error, with a newline.
///
/// Equivalent to the [`eprintln!`] macro except that a warning prefix is
/// printed before the message.
#[macro_export]
macro_rules! warnln {
    ($($t:tt)*) => {{
        eprint!("{} ", $crate::style::Style::WarningPrefix.paint("-- Warning:"));
        eprintln!($($t)*);
    }};
}

/// Prints to the standard error, with a newline.
///
/// Equivalent to the [`eprintln!`] macro except that an error prefix is
/// printed before the message.
#[macro_export]
macro_rules! errln {
    ($($t:tt)*) => {{
        eprint!("{} ", $crate::style::Style::ErrorPrefix.paint("-- Error:"));
        eprintln!($($t)*);
    }};
}

/// Prints to the standard error, with a newline.
///
/// Equivalent to the [`eprintln!`] macro except that a checkmark prefix is
/// printed before the message.
#[macro_export]
macro_rules! successln {
    ($($t:tt)*) => {{
        eprint!("{} ", $crate::style::Style::SuccessPrefix.paint("✓"));
        eprintln!($($t)*);
    }};
}

pub enum Style {
    Command, // echoed command lines and tool names
    Path,    // file paths
    NotePrefix,
    WarningPrefix,
    ErrorPrefix,
    SuccessPrefix,
}

impl Style {
    pub fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message_ref = message.as_ref();

        if is_no_color_set() {
            return message_ref.to_string();
        }

        match &self {
            Style::Command => style(message_ref).yellow(),
            Style::Path => style(message_ref).bold(),
            Style::NotePrefix => style(message_ref).blue().bold(),
            Style::WarningPrefix => style(message_ref).yellow(),
            Style::ErrorPrefix => style(message_ref).red().bold(),
            Style::SuccessPrefix => style(message_ref).green(),
        }
        .to_string()
    }
}

pub fn is_no_color_set() -> bool {
    is_bool_env_var_set("NO_COLOR")
}

fn is_bool_env_var_set(key: &str) -> bool {
    !matches!(
        std::env::var(key).as_deref(),
        Err(..) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
    )
}
