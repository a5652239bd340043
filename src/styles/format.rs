//! Link tag formatting from a comma-separated stylesheet list.

/// Site URL placeholder left in every tag.
///
/// The host's template layer substitutes the real site URL later; it is
/// never resolved here.
pub const SITE_URL_PLACEHOLDER: &str = "%s";

/// `<link>` template for a stylesheet under the site's `css/` folder.
///
/// `{0}` is the site URL, `{1}` the stylesheet identifier.
pub const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="{0}/css/{1}" type="text/css">"#;

/// Format every identifier in `list_spec` with `template`.
///
/// Spaces are removed before splitting on `,`, so `"a.css, b.css"` yields two
/// entries. An empty `list_spec` yields one entry for the empty identifier.
///
/// # Examples
/// ```
/// use tola_styles::styles::format_links;
///
/// let tags = format_links("a.css, b.css", "{0}/css/{1}");
/// assert_eq!(tags, ["%s/css/a.css", "%s/css/b.css"]);
/// ```
pub fn format_links(list_spec: &str, template: &str) -> Vec<String> {
    list_spec
        .replace(' ', "")
        .split(',')
        .map(|id| render(template, SITE_URL_PLACEHOLDER, id))
        .collect()
}

/// Substitute positional placeholders `{0}` and `{1}`.
fn render(template: &str, site_url: &str, id: &str) -> String {
    template.replace("{0}", site_url).replace("{1}", id)
}
