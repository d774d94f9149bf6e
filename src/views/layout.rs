//! Static page shell, written into the root element once at mount.

use crate::views::Region;

pub const TITLE: &str = "Pokemon Battle Simulator";

/// Title, one container per [`Region`], and the results heading.
pub fn render_shell() -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&format!(r#"<h1 id="title">{}</h1>"#, TITLE));
    html.push_str(&format!(
        r#"<div id="{}"></div>"#,
        Region::FetchControl.element_id()
    ));
    html.push_str(&format!(
        r#"<div id="{}" class="pokemonList"></div>"#,
        Region::CreatureList.element_id()
    ));
    html.push_str(&format!(
        r#"<div id="{}"></div>"#,
        Region::ActionButton.element_id()
    ));
    html.push_str("<h1>Battle Results</h1>");
    html.push_str(&format!(
        r#"<ul id="{}"></ul>"#,
        Region::ResultLog.element_id()
    ));
    html
}
