//! HTML templates shared by the editor, preview and export pages.
//!
//! Templates live in `apps/web/templates/` and are compiled into the binary.
//! Names ending in `.html` are auto-escaped, so user text can be passed
//! through as-is.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::errors::AppError;
use crate::export::page::PageConfig;

pub const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");
pub const EDITOR_TEMPLATE: &str = include_str!("../templates/editor.html");
pub const PREVIEW_TEMPLATE: &str = include_str!("../templates/preview.html");
pub const EXPORT_TEMPLATE: &str = include_str!("../templates/export.html");
pub const PREVIEW_STYLES: &str = include_str!("../templates/preview.css");

pub struct Views {
    env: Environment<'static>,
    page: PageConfig,
}

impl Views {
    pub fn new(page: PageConfig) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("page.html", PAGE_TEMPLATE)?;
        env.add_template("editor.html", EDITOR_TEMPLATE)?;
        env.add_template("preview.html", PREVIEW_TEMPLATE)?;
        env.add_template("export.html", EXPORT_TEMPLATE)?;
        env.add_template("preview.css", PREVIEW_STYLES)?;
        Ok(Self { env, page })
    }

    /// Renders `name` with `ctx`. The page geometry is always available to
    /// templates as `page`.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, AppError> {
        let template = self.env.get_template(name)?;
        let html = template.render(context! {
            page => &self.page,
            ..minijinja::Value::from_serialize(&ctx)
        })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::page::{page_config, PaperSize};

    #[test]
    fn test_all_templates_compile() {
        assert!(Views::new(page_config(PaperSize::A4)).is_ok());
    }

    #[test]
    fn test_stylesheet_uses_page_geometry() {
        let views = Views::new(page_config(PaperSize::Letter)).unwrap();
        let css = views.render("preview.css", context! {}).unwrap();
        assert!(css.contains("size: letter"));
        assert!(css.contains("215.9mm"));
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let views = Views::new(page_config(PaperSize::A4)).unwrap();
        assert!(matches!(
            views.render("missing.html", context! {}),
            Err(AppError::Template(_))
        ));
    }
}
