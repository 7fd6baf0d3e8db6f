//! Inline styles built from the theme tokens.

use crate::theme::{colors, radius, shadow, IMAGE_PLACEHOLDER, TRANSITION};

/// Button variants used across the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Ghost,
    Danger,
}

/// Background declaration for an image panel, falling back to the gradient
/// placeholder when there is no image.
pub fn image_background(src: Option<&str>) -> String {
    match src {
        Some(url) => format!("center/cover url(\"{}\")", url.replace('"', "%22")),
        None => IMAGE_PLACEHOLDER.to_string(),
    }
}

// === Layout ===

pub fn app() -> String {
    format!(
        "min-height: 100vh; background: {}; color: {}; position: relative;",
        colors::BG,
        colors::TEXT
    )
}

pub fn app_gradient() -> &'static str {
    "position: absolute; inset: 0; pointer-events: none; \
     background: linear-gradient(135deg, rgba(37,99,235,0.08), rgba(243,244,246,0.2));"
}

pub fn main() -> &'static str {
    "position: relative; max-width: 1200px; margin: 20px auto; padding: 0 16px 40px;"
}

pub fn footer() -> String {
    format!("position: relative; padding: 16px; text-align: center; color: {};", colors::MUTED)
}

// === Navbar ===

pub fn navbar() -> String {
    format!(
        "position: sticky; top: 0; z-index: 10; display: flex; justify-content: space-between; \
         align-items: center; gap: 16px; padding: 16px 20px; background: {}; \
         border-bottom: 1px solid {}; box-shadow: {}; backdrop-filter: saturate(180%) blur(8px);",
        colors::SURFACE,
        colors::BORDER,
        shadow::SM
    )
}

pub fn navbar_side() -> &'static str {
    "display: flex; align-items: center; gap: 12px;"
}

pub fn brand_badge() -> String {
    format!(
        "width: 40px; height: 40px; border-radius: {}; display: grid; place-items: center; \
         background: linear-gradient(135deg, #2563EB22, #F59E0B22); border: 1px solid {}; box-shadow: {};",
        radius::LG,
        colors::BORDER,
        shadow::SM
    )
}

pub fn brand_title() -> &'static str {
    "font-size: 18px; font-weight: 700; letter-spacing: 0.3px;"
}

pub fn brand_subtitle() -> String {
    format!("font-size: 12px; color: {};", colors::MUTED)
}

pub fn search_wrapper() -> String {
    format!(
        "display: flex; align-items: center; gap: 8px; background: {}; border: 1px solid {}; \
         border-radius: {}; padding: 10px 12px; min-width: 220px; transition: {}; box-shadow: {};",
        colors::BG,
        colors::BORDER,
        radius::LG,
        TRANSITION,
        shadow::SM
    )
}

pub fn search_icon() -> &'static str {
    "font-size: 14px; opacity: 0.8;"
}

pub fn search_input() -> String {
    format!(
        "outline: none; border: none; background: transparent; width: 100%; font-size: 14px; color: {};",
        colors::TEXT
    )
}

// === Grid and cards ===

pub fn grid() -> &'static str {
    "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px;"
}

pub fn card() -> String {
    format!(
        "background: {}; border: 1px solid {}; border-radius: {}; overflow: hidden; \
         box-shadow: {}; cursor: pointer; transition: {};",
        colors::SURFACE,
        colors::BORDER,
        radius::LG,
        shadow::SM,
        TRANSITION
    )
}

pub fn card_image(src: Option<&str>) -> String {
    format!(
        "height: 140px; background: {}; border-bottom: 1px solid {};",
        image_background(src),
        colors::BORDER
    )
}

pub fn card_body() -> &'static str {
    "padding: 14px; display: grid; gap: 8px;"
}

pub fn card_header() -> &'static str {
    "display: flex; align-items: center; justify-content: space-between; gap: 8px;"
}

pub fn card_title() -> &'static str {
    "margin: 0; font-size: 16px; font-weight: 700;"
}

pub fn card_desc() -> String {
    format!("margin: 0; font-size: 13px; color: {}; line-height: 1.5;", colors::MUTED)
}

pub fn tag_row() -> &'static str {
    "display: flex; gap: 6px; flex-wrap: wrap;"
}

pub fn tag() -> String {
    format!(
        "font-size: 11px; padding: 4px 8px; border-radius: 999px; background: #2563EB15; \
         color: {}; border: 1px solid #2563EB30;",
        colors::PRIMARY
    )
}

// === Empty state ===

pub fn empty_wrapper() -> &'static str {
    "display: grid; place-items: center; padding: 60px 0;"
}

pub fn empty_card() -> String {
    format!(
        "width: 100%; max-width: 560px; padding: 24px; border-radius: {}; background: {}; \
         border: 1px solid {}; box-shadow: {}; text-align: center;",
        radius::XL,
        colors::SURFACE,
        colors::BORDER,
        shadow::MD
    )
}

pub fn empty_emoji() -> &'static str {
    "font-size: 40px; margin-bottom: 8px;"
}

pub fn empty_title() -> &'static str {
    "margin: 8px 0; font-size: 22px;"
}

pub fn empty_desc() -> String {
    format!("margin: 0 0 16px; color: {};", colors::MUTED)
}

// === Form ===

pub fn form() -> &'static str {
    "display: grid; gap: 14px;"
}

pub fn form_row() -> &'static str {
    "display: grid; gap: 14px; grid-template-columns: 1fr; align-items: start;"
}

pub fn form_footer() -> &'static str {
    "display: flex; justify-content: flex-end; gap: 8px; margin-top: 4px;"
}

pub fn form_error() -> String {
    format!(
        "padding: 10px 12px; border-radius: {}; border: 1px solid {}40; background: #EF444410; \
         color: {}; font-size: 13px;",
        radius::MD,
        colors::ERROR,
        colors::ERROR_TEXT
    )
}

pub fn field() -> &'static str {
    "display: grid; gap: 8px; width: 100%;"
}

pub fn field_label() -> String {
    format!("font-size: 13px; font-weight: 600; color: {};", colors::MUTED)
}

fn input_base() -> String {
    format!(
        "width: 100%; box-sizing: border-box; padding: 10px 12px; border-radius: {}; \
         border: 1px solid {}; outline: none; transition: {}; background: {}; color: {}; box-shadow: {};",
        radius::MD,
        colors::BORDER,
        TRANSITION,
        colors::SURFACE,
        colors::TEXT,
        shadow::SM
    )
}

pub fn text_input() -> String {
    input_base()
}

pub fn text_area() -> String {
    format!("{} resize: vertical; min-height: 140px;", input_base())
}

// === Modal ===

pub fn modal_overlay() -> &'static str {
    "position: fixed; inset: 0; background: rgba(17,24,39,0.35); display: grid; \
     place-items: center; padding: 16px; z-index: 50;"
}

pub fn modal_card() -> String {
    format!(
        "width: 100%; max-width: 720px; max-height: calc(100vh - 32px); overflow: auto; \
         background: {}; border: 1px solid {}; border-radius: {}; box-shadow: {};",
        colors::SURFACE,
        colors::BORDER,
        radius::XL,
        shadow::LG
    )
}

pub fn modal_header() -> String {
    format!(
        "display: flex; align-items: center; justify-content: space-between; padding: 14px 16px; \
         border-bottom: 1px solid {}; background: linear-gradient(180deg, #2563EB08, transparent);",
        colors::BORDER
    )
}

pub fn modal_title() -> &'static str {
    "margin: 0; font-size: 18px; font-weight: 700;"
}

pub fn modal_close() -> String {
    format!(
        "border: 1px solid {}; background: {}; border-radius: 10px; width: 36px; height: 36px; cursor: pointer;",
        colors::BORDER,
        colors::SURFACE
    )
}

pub fn modal_body() -> &'static str {
    "padding: 16px; display: grid; gap: 12px;"
}

pub fn modal_footer() -> String {
    format!(
        "display: flex; justify-content: flex-end; gap: 8px; padding: 12px; \
         border-top: 1px solid {}; background: linear-gradient(0deg, #F59E0B10, transparent);",
        colors::BORDER
    )
}

pub fn action_row() -> &'static str {
    "display: flex; gap: 8px; justify-content: flex-end; width: 100%;"
}

pub fn confirm_text() -> String {
    format!("color: {}; margin: 0;", colors::MUTED)
}

// === Detail ===

pub fn detail_layout() -> &'static str {
    "display: grid; grid-template-columns: 1fr; gap: 16px;"
}

pub fn detail_image(src: Option<&str>) -> String {
    format!(
        "height: 200px; border-radius: {}; background: {}; border: 1px solid {}; box-shadow: {};",
        radius::LG,
        image_background(src),
        colors::BORDER,
        shadow::SM
    )
}

pub fn detail_description() -> String {
    format!("margin: 4px 0 12px; color: {};", colors::MUTED)
}

pub fn detail_section() -> String {
    format!("margin: 8px 0; font-size: 14px; color: {};", colors::TEXT)
}

pub fn detail_list() -> String {
    format!("margin: 4px 0 0 20px; color: {}; line-height: 1.7;", colors::TEXT)
}

pub fn detail_item() -> &'static str {
    "margin-bottom: 6px;"
}

// === Buttons ===

pub fn button(kind: ButtonKind) -> String {
    let base = format!(
        "padding: 10px 14px; border-radius: {}; cursor: pointer; transition: {};",
        radius::MD,
        TRANSITION
    );
    let variant = match kind {
        ButtonKind::Primary => format!(
            "border: none; font-weight: 700; background: {}; color: white; box-shadow: {};",
            colors::PRIMARY,
            shadow::MD
        ),
        ButtonKind::Ghost => format!(
            "border: 1px solid {}; font-weight: 600; background: {}; color: {};",
            colors::BORDER,
            colors::SURFACE,
            colors::TEXT
        ),
        ButtonKind::Danger => format!(
            "border: 1px solid {}30; font-weight: 700; background: {}; color: white; box-shadow: {};",
            colors::ERROR,
            colors::ERROR,
            shadow::MD
        ),
    };
    format!("{} {}", base, variant)
}
