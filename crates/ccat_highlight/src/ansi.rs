//! ANSI terminal colour codes.
//!
//! Format text with a colour and/or some attributes:
//!
//! | attribute | effect              |
//! |-----------|---------------------|
//! | `color`   | normal colour       |
//! | `*color*` | bold colour         |
//! | `_color_` | underlined colour   |
//! | `+color+` | blinking colour     |

use crate::attr;

/// Resets foreground, background and attributes.
pub const RESET: &str = "\x1b[39;49;00m";

/// Every name [`code`] accepts, sorted.
pub const NAMES: [&str; 26] = [
    "black",
    "blink",
    "blue",
    "bold",
    "brown",
    "darkblue",
    "darkgray",
    "darkgreen",
    "darkred",
    "darkteal",
    "darkyellow",
    "faint",
    "fuchsia",
    "fuscia",
    "green",
    "lightgray",
    "overline",
    "purple",
    "red",
    "reset",
    "standout",
    "teal",
    "turquoise",
    "underline",
    "white",
    "yellow",
];

/// Escape sequence for a colour or attribute name.
pub fn code(name: &str) -> Option<&'static str> {
    Some(match name {
        "reset" => RESET,
        "bold" | "white" => "\x1b[01m",
        "faint" => "\x1b[02m",
        "standout" => "\x1b[03m",
        "underline" => "\x1b[04m",
        "blink" => "\x1b[05m",
        "overline" => "\x1b[06m",

        "black" => "\x1b[30m",
        "darkred" => "\x1b[31m",
        "darkgreen" => "\x1b[32m",
        "brown" | "darkyellow" => "\x1b[33m",
        "darkblue" => "\x1b[34m",
        "purple" => "\x1b[35m",
        "teal" => "\x1b[36m",
        "lightgray" => "\x1b[37m",

        "darkgray" => "\x1b[30;01m",
        "red" => "\x1b[31;01m",
        "green" => "\x1b[32;01m",
        "yellow" => "\x1b[33;01m",
        "blue" => "\x1b[34;01m",
        "fuchsia" | "fuscia" => "\x1b[35;01m",
        "turquoise" | "darkteal" => "\x1b[36;01m",
        _ => return None,
    })
}

/// Escape sequences that open a style attribute. Unknown names contribute
/// nothing.
pub fn opening(attr: &str) -> String {
    attr::expand(attr).into_iter().filter_map(code).collect()
}

/// Wrap `text` in the codes for `attr`, followed by [`RESET`]. An empty
/// attribute returns the text unchanged.
pub fn colorize(attr: &str, text: &str) -> String {
    if attr.is_empty() {
        return text.to_owned();
    }
    format!("{}{text}{RESET}", opening(attr))
}

/// Every colour name rendered in its own colour, comma separated.
pub fn describe() -> String {
    NAMES.map(|name| colorize(name, name)).join(", ")
}
