//! Style attribute parsing shared by the ANSI and HTML code tables.
//!
//! A style attribute is a colour name optionally wrapped in `+..+`
//! (blink), `*..*` (bold) and `_.._` (underline). Wrappers are peeled in
//! that order, so `+*_red_*+` opens blink, bold, underline, then red.

const WRAPPERS: [(char, &str); 3] = [('+', "blink"), ('*', "bold"), ('_', "underline")];

/// Attribute names a style attribute expands to, outermost first. The last
/// element is always the innermost colour name, which may be empty or
/// unknown.
pub(crate) fn expand(attr: &str) -> Vec<&str> {
    let mut names = Vec::with_capacity(WRAPPERS.len() + 1);
    let mut rest = attr;
    for (delim, name) in WRAPPERS {
        if let Some(inner) = rest.strip_prefix(delim).and_then(|r| r.strip_suffix(delim)) {
            names.push(name);
            rest = inner;
        }
    }
    names.push(rest);
    names
}

#[cfg(test)]
mod tests {
    use super::expand;

    #[test]
    fn plain_colour() {
        assert_eq!(expand("red"), vec!["red"]);
    }

    #[test]
    fn wrappers_peel_outside_in() {
        assert_eq!(expand("_blue_"), vec!["underline", "blue"]);
        assert_eq!(expand("+*_red_*+"), vec!["blink", "bold", "underline", "red"]);
    }

    #[test]
    fn wrappers_only_peel_in_fixed_order() {
        assert_eq!(expand("_*red*_"), vec!["underline", "*red*"]);
    }

    #[test]
    fn unbalanced_wrapper_is_kept() {
        assert_eq!(expand("*red"), vec!["*red"]);
    }
}
