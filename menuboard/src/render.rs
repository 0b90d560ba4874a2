//! HTML rendering of the menu page.
//!
//! The template is compiled into the binary and rendered with [`minijinja`]. Auto-escaping is
//! on for `.html` templates, so item labels are always emitted as text, never as markup.

use crate::db::models::menu_items::MenuItem;
use minijinja::{Environment, context};

const MENU_TEMPLATE_NAME: &str = "menu.html";
const MENU_TEMPLATE: &str = include_str!("../templates/menu.html");

/// Renders a sequence of menu items into the listing page.
///
/// Rendering is a pure function of the title and the items: the same input always produces
/// byte-identical output.
#[derive(Debug)]
pub struct MenuRenderer {
    env: Environment<'static>,
    title: String,
}

impl MenuRenderer {
    pub fn new(title: impl Into<String>) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        // One output line per item, without the blank lines the block tags would leave behind
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template(MENU_TEMPLATE_NAME, MENU_TEMPLATE)?;

        Ok(Self { env, title: title.into() })
    }

    /// Render the page. An empty slice renders the "No items to display" placeholder.
    pub fn render(&self, items: &[MenuItem]) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(MENU_TEMPLATE_NAME)?;
        template.render(context! {
            title => &self.title,
            menu => items,
        })
    }
}
