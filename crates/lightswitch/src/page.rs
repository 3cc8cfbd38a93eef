//! A themed page: the document root, its controller, and the events that drive it.

use minijinja::Environment;
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::controller::{ThemeController, LIGHT_MARKER};
use crate::document::{ClassList, ClassTarget};
use crate::error::Error;
use crate::store::PreferenceStore;
use crate::theme::ThemeMode;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
</head>
<body{% if body_class %} class="{{ body_class }}"{% endif %}>
  <button type="button" class="theme-toggle" data-action="toggle-theme" aria-pressed="{{ light }}">{% if light %}Dark mode{% else %}Light mode{% endif %}</button>
</body>
</html>
"#;

static PAGE_ENV: OnceCell<Environment<'static>> = OnceCell::new();

fn page_env() -> Result<&'static Environment<'static>, Error> {
    PAGE_ENV.get_or_try_init(|| {
        let mut env = Environment::new();
        env.add_template("page.html", PAGE_TEMPLATE)
            .map_err(|source| Error::Render {
                what: "page template",
                source,
            })?;
        Ok(env)
    })
}

/// Events a page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The page finished loading.
    Load,
    /// The user clicked the theme toggle.
    Click,
}

#[derive(Serialize)]
struct PageView<'a> {
    title: &'a str,
    body_class: String,
    light: bool,
}

/// A page whose `<body>` carries the theme marker.
///
/// Events are handled one at a time through `&mut self`. The first
/// [`PageEvent::Load`] applies the stored preference; later loads are ignored.
///
/// # Example
///
/// ```rust
/// use lightswitch::{MemoryStore, Page, PageEvent, ThemeMode};
///
/// let mut page = Page::open(MemoryStore::new());
/// page.dispatch(PageEvent::Load).unwrap();
/// assert_eq!(page.dispatch(PageEvent::Click).unwrap(), ThemeMode::Light);
/// assert!(page.render_html().unwrap().contains(r#"class="light-theme""#));
/// ```
#[derive(Debug)]
pub struct Page<S> {
    title: String,
    controller: ThemeController<S, ClassList>,
    loaded: bool,
}

impl<S: PreferenceStore> Page<S> {
    /// Opens a page with an unmarked body, before any load event.
    pub fn open(store: S) -> Self {
        Self::with_body(store, ClassList::new())
    }

    /// Opens a page whose body already carries `body` classes.
    pub fn with_body(store: S, body: ClassList) -> Self {
        Self {
            title: "lightswitch".to_string(),
            controller: ThemeController::new(store, body),
            loaded: false,
        }
    }

    /// Sets the document title, returning the page for chaining.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Handles one event and returns the mode shown afterwards.
    ///
    /// # Errors
    ///
    /// Propagates store failures from the controller.
    pub fn dispatch(&mut self, event: PageEvent) -> Result<ThemeMode, Error> {
        match event {
            PageEvent::Load if self.loaded => {
                tracing::debug!("page already loaded");
                Ok(self.controller.current())
            }
            PageEvent::Load => {
                self.loaded = true;
                self.controller.initialize()
            }
            PageEvent::Click => self.controller.toggle(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn mode(&self) -> ThemeMode {
        self.controller.current()
    }

    pub fn body(&self) -> &ClassList {
        self.controller.root()
    }

    pub fn controller_mut(&mut self) -> &mut ThemeController<S, ClassList> {
        &mut self.controller
    }

    /// Renders the page as an HTML document.
    pub fn render_html(&self) -> Result<String, Error> {
        let env = page_env()?;
        let view = PageView {
            title: &self.title,
            body_class: self.body().to_string(),
            light: self.body().contains_class(LIGHT_MARKER),
        };
        env.get_template("page.html")
            .and_then(|tmpl| tmpl.render(&view))
            .map_err(|source| Error::Render {
                what: "page",
                source,
            })
    }

    /// Consumes the page, returning its store.
    pub fn into_store(self) -> S {
        self.controller.into_parts().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::THEME_KEY;
    use crate::store::MemoryStore;

    #[test]
    fn test_load_applies_stored_light() {
        let mut page = Page::open(MemoryStore::new().with_item(THEME_KEY, "light"));
        assert!(!page.is_loaded());
        assert_eq!(page.dispatch(PageEvent::Load).unwrap(), ThemeMode::Light);
        assert!(page.is_loaded());
    }

    #[test]
    fn test_second_load_is_ignored() {
        let mut page = Page::open(MemoryStore::new().with_item(THEME_KEY, "light"));
        page.dispatch(PageEvent::Load).unwrap();
        page.dispatch(PageEvent::Click).unwrap();
        assert_eq!(page.dispatch(PageEvent::Load).unwrap(), ThemeMode::Dark);
        assert_eq!(page.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_click_before_load_still_toggles() {
        let mut page = Page::open(MemoryStore::new());
        assert_eq!(page.dispatch(PageEvent::Click).unwrap(), ThemeMode::Light);
    }

    #[test]
    fn test_html_dark_has_no_body_class() {
        let mut page = Page::open(MemoryStore::new()).title("Tools");
        page.dispatch(PageEvent::Load).unwrap();
        let html = page.render_html().unwrap();
        assert!(html.contains("<title>Tools</title>"));
        assert!(html.contains("<body>"));
        assert!(html.contains(r#"aria-pressed="false""#));
        assert!(html.contains("Light mode</button>"));
    }

    #[test]
    fn test_html_keeps_existing_body_classes() {
        let mut page = Page::with_body(MemoryStore::new(), ClassList::parse("app"));
        page.dispatch(PageEvent::Click).unwrap();
        let html = page.render_html().unwrap();
        assert!(html.contains(r#"<body class="app light-theme">"#));
        assert!(html.contains(r#"aria-pressed="true""#));
    }

    #[test]
    fn test_html_escapes_title() {
        let page = Page::open(MemoryStore::new()).title("<b>&");
        let html = page.render_html().unwrap();
        assert!(html.contains("<title>&lt;b&gt;&amp;</title>"));
    }

    #[test]
    fn test_into_store_keeps_written_value() {
        let mut page = Page::open(MemoryStore::new());
        page.dispatch(PageEvent::Click).unwrap();
        let store = page.into_store();
        assert_eq!(store.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
    }
}
