//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use crate::theme::Theme;

/// Registers the `style` filter: `{{ text | style("name") }}`.
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
}
