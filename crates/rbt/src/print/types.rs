/// Values that can render themselves as an indented multi-line dump.
pub trait Printable {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String;
}

/// Child printer callback used by [`print_binary`](super::print_binary).
/// Receives the indentation for the child's own nested lines.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;
