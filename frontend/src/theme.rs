//! CSS glue over the core theme: spacing, text styles, and the page-wide
//! stylesheet injected by the root component.

use neonfolio_core::theme::{Color, TextRole, Theme};

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const XL: &str = "32px";
    pub const XXL: &str = "40px";
    pub const CARD_PADDING: &str = "24px";
    pub const MOBILE_PADDING: &str = "20px 16px";
    pub const DESKTOP_PADDING: &str = "40px 32px";
}

/// Id of the element that owns the page scroll.
pub const SCROLL_CONTAINER_ID: &str = "neonfolio-scroll";

pub fn text(theme: &Theme, role: TextRole) -> String {
    theme.text(role).css()
}

/// Text style plus a colour in one declaration block.
pub fn text_in(theme: &Theme, role: TextRole, color: Color) -> String {
    format!("{} color: {};", theme.text(role).css(), color.css())
}

/// `px` suffix with trailing zeros trimmed.
pub fn px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0 + 0.0;
    format!("{rounded}px")
}

/// Page-wide rules: reset, scrollbars, font fallback, focus ring.
pub fn global_css(theme: &Theme) -> String {
    let p = theme.palette;
    format!(
        r#"
html, body {{ margin: 0; padding: 0; height: 100%; background: {bg}; }}
* {{ box-sizing: border-box; }}
body {{ font-family: {family}; color: {fg}; -webkit-font-smoothing: antialiased; }}
#{scroll} {{ scrollbar-color: {accent} {bg}; scrollbar-width: thin; }}
#{scroll}::-webkit-scrollbar {{ width: 8px; }}
#{scroll}::-webkit-scrollbar-thumb {{ background: {accent}; }}
button, input {{ font-family: inherit; }}
input::placeholder {{ color: var(--placeholder, inherit); }}
:focus-visible {{ outline: 2px dashed {outline}; outline-offset: 3px; }}
@media (prefers-reduced-motion: reduce) {{ * {{ transition: none !important; }} }}
"#,
        bg = p.black.css(),
        fg = p.on_background.css(),
        accent = p.yellow.css(),
        outline = p.outline.css(),
        family = theme.typography.body_medium.family,
        scroll = SCROLL_CONTAINER_ID,
    )
}
