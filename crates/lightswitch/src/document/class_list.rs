use std::fmt;

use super::ClassTarget;

/// An ordered set of class names, as carried by an element's `class` attribute.
///
/// # Example
///
/// ```rust
/// use lightswitch::{ClassList, ClassTarget};
///
/// let mut body = ClassList::parse("page  wide");
/// assert!(body.toggle_class("light-theme"));
/// assert_eq!(body.to_string(), "page wide light-theme");
/// assert!(!body.toggle_class("light-theme"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whitespace separated `class` attribute value.
    pub fn parse(attr: &str) -> Self {
        let mut list = Self::new();
        for class in attr.split_whitespace() {
            list.add_class(class);
        }
        list
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassTarget for ClassList {
    fn contains_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        if !self.contains_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_duplicates_and_blanks() {
        let list = ClassList::parse("  a b  a c ");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut list = ClassList::new();
        list.add_class("light-theme");
        list.add_class("light-theme");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut list = ClassList::parse("a");
        list.remove_class("b");
        assert_eq!(list.to_string(), "a");
    }

    #[test]
    fn test_toggle_reports_presence() {
        let mut list = ClassList::new();
        assert!(list.toggle_class("x"));
        assert!(list.contains_class("x"));
        assert!(!list.toggle_class("x"));
        assert!(!list.contains_class("x"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle_keeps_other_classes_in_order() {
        let mut list = ClassList::parse("page wide");
        list.toggle_class("light-theme");
        list.toggle_class("light-theme");
        assert_eq!(list.to_string(), "page wide");
    }
}
