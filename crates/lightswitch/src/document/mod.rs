//! The document root element the theme marker lives on.

mod class_list;

pub use class_list::ClassList;

/// An element whose class set can be inspected and changed.
///
/// This is the only surface of the document the theme controller needs.
pub trait ClassTarget {
    fn contains_class(&self, class: &str) -> bool;

    /// Adds `class`. Adding a class that is already present does nothing.
    fn add_class(&mut self, class: &str);

    /// Removes `class` if present.
    fn remove_class(&mut self, class: &str);

    /// Flips the presence of `class` and reports whether it is now present.
    fn toggle_class(&mut self, class: &str) -> bool {
        if self.contains_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

impl<T: ClassTarget + ?Sized> ClassTarget for &mut T {
    fn contains_class(&self, class: &str) -> bool {
        (**self).contains_class(class)
    }

    fn add_class(&mut self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&mut self, class: &str) {
        (**self).remove_class(class)
    }

    fn toggle_class(&mut self, class: &str) -> bool {
        (**self).toggle_class(class)
    }
}
