//! Pure helpers behind the themed widgets: colour pairings, glitch and dot
//! styles, separator shapes, progress labels and arcs.

use neonfolio_core::animation::{Easing, GlitchJitter, Transition};
use neonfolio_core::shapes::ShapeKind;
use neonfolio_core::theme::{neon, ColorPalette, Theme, TitleLevel, Tone};
use neonfolio_frontend::widgets::button::{button_motion_css, follows_clock, ButtonVariant};
use neonfolio_frontend::widgets::dialog::{can_submit, input_error, Validator};
use neonfolio_frontend::widgets::effects::{dotted_background_css, glitch_css};
use neonfolio_frontend::widgets::image_frame::FrameStyle;
use neonfolio_frontend::widgets::link::hover_scan_percent;
use neonfolio_frontend::widgets::paragraph::{default_label, paragraph_colors};
use neonfolio_frontend::widgets::progress::{arc_path, percent_label};
use neonfolio_frontend::widgets::section::{dot_color, SectionBorder};
use neonfolio_frontend::widgets::separator::separator_shape;
use neonfolio_frontend::widgets::steps::StepColors;
use neonfolio_frontend::widgets::title::separator_padding;
use pretty_assertions::assert_eq;

#[test]
fn button_variants_map_to_neon_accents() {
    let p = &ColorPalette::NORMAL;
    assert_eq!(ButtonVariant::default(), ButtonVariant::Red);
    assert_eq!(ButtonVariant::Red.fill(p), neon::RED);
    assert_eq!(ButtonVariant::Green.fill(p), neon::GREEN);
    assert_eq!(ButtonVariant::Blue.fill(p), neon::BLUE);
    assert_eq!(ButtonVariant::Purple.fill(p), neon::PURPLE);
    assert_eq!(ButtonVariant::Red.fill(&ColorPalette::DARK), neon::RED);
}

#[test]
fn paragraph_contrasts_with_its_section() {
    let light = Theme::light();
    assert_eq!(paragraph_colors(&light, Tone::Normal, Tone::Normal), (neon::YELLOW, neon::BLACK));
    assert_eq!(paragraph_colors(&light, Tone::Inverse, Tone::Normal), (neon::BLACK, neon::YELLOW));
    assert_eq!(paragraph_colors(&light, Tone::Normal, Tone::Inverse), (neon::BLACK, neon::YELLOW));
    assert_eq!(paragraph_colors(&light, Tone::Inverse, Tone::Inverse), (neon::YELLOW, neon::BLACK));

    let dark = Theme::dark();
    assert_eq!(paragraph_colors(&dark, Tone::Normal, Tone::Normal), (neon::BLACK, neon::YELLOW));
}

#[test]
fn paragraph_labels_follow_tone() {
    assert_eq!(default_label(Tone::Normal), "P-14");
    assert_eq!(default_label(Tone::Inverse), "T-71");
}

#[test]
fn step_markers_on_normal_sections_are_purple() {
    let colors = StepColors::for_section(&ColorPalette::NORMAL, Tone::Normal);
    assert_eq!(colors.circle, neon::PURPLE);
    assert_eq!(colors.line, neon::PURPLE);
    assert_eq!(colors.current_circle, neon::BLACK);
    assert_eq!(colors.number, neon::YELLOW);
}

#[test]
fn step_markers_on_inverse_sections_use_the_ink() {
    let colors = StepColors::for_section(&ColorPalette::NORMAL, Tone::Inverse);
    assert_eq!(colors.circle, neon::YELLOW);
    assert_eq!(colors.current_circle, neon::YELLOW);
    assert_eq!(colors.number, neon::BLACK);
    assert_eq!(colors.label, neon::YELLOW);
}

#[test]
fn glitch_css_is_empty_while_quiet() {
    let jitter = GlitchJitter::default();
    assert_eq!(glitch_css(jitter, 0.0), "");
    assert_eq!(glitch_css(jitter, 1000.0), "");
}

#[test]
fn glitch_css_during_bursts() {
    let jitter = GlitchJitter::default();
    assert_eq!(glitch_css(jitter, 2750.0), "transform: translateX(2.00px);");
    assert_eq!(
        glitch_css(jitter, 3750.0),
        "transform: translateX(0.00px); text-shadow: 2.00px 0 rgba(255, 0, 60, 0.75), -2.00px 0 rgba(0, 240, 255, 0.75);"
    );
    assert_eq!(glitch_css(GlitchJitter::new(0.0), 2750.0), "");
}

#[test]
fn button_press_scale_survives_a_glitch_burst() {
    assert_eq!(button_motion_css(0.95, None, 2750.0), "transform: scale(0.950);");
    assert_eq!(
        button_motion_css(0.95, Some(GlitchJitter::default()), 2750.0),
        "transform: translateX(2.00px) scale(0.950);"
    );
    assert_eq!(
        button_motion_css(1.0, Some(GlitchJitter::default()), 3750.0),
        "transform: scale(1.000); text-shadow: 2.00px 0 rgba(255, 0, 60, 0.75), -2.00px 0 rgba(0, 240, 255, 0.75);"
    );
    assert_eq!(
        button_motion_css(1.0, Some(GlitchJitter::default()), 1000.0),
        "transform: scale(1.000);"
    );
}

#[test]
fn idle_button_ignores_the_frame_clock() {
    let mut press = Transition::settled(1.0, Transition::PRESS_MS, Easing::Linear);
    assert!(!follows_clock(false, &press, 500.0));
    assert!(follows_clock(true, &press, 500.0));

    press.retarget(0.95, 500.0);
    assert!(follows_clock(false, &press, 550.0));
    assert!(!follows_clock(false, &press, 600.0));
}

#[test]
fn dotted_background_uses_a_radial_grid() {
    assert_eq!(
        dotted_background_css(neon::BLACK, 1.0, 5.0, (-13.0, -3.0)),
        "background-image: radial-gradient(circle, #000000 1px, transparent 1.5px); \
         background-size: 5px 5px; background-position: -13px -3px;"
    );
}

#[test]
fn plain_separator_never_moves() {
    assert_eq!(separator_shape(false, 480.0), (ShapeKind::SimpleSeparator, String::new()));
}

#[test]
fn glitched_separator_tears_during_a_burst() {
    assert_eq!(
        separator_shape(true, 0.0),
        (ShapeKind::SimpleSeparator, "transform: translateX(0.00px);".to_string())
    );
    assert_eq!(
        separator_shape(true, 480.0),
        (
            ShapeKind::GlitchedSeparator,
            "transform: translateX(-20.00px) skewX(20.00deg) scaleX(1.000);".to_string()
        )
    );
}

#[test]
fn title_separator_padding_shrinks_with_level() {
    let pads: Vec<f64> = TitleLevel::ALL.iter().map(|l| separator_padding(*l)).collect();
    assert_eq!(pads, vec![2.0, 1.0, 0.0, 0.0]);
}

#[test]
fn percent_label_truncates_and_clamps() {
    assert_eq!(percent_label(0.0), "0%");
    assert_eq!(percent_label(0.29), "29%");
    assert_eq!(percent_label(0.5), "50%");
    assert_eq!(percent_label(0.999), "99%");
    assert_eq!(percent_label(1.2), "100%");
    assert_eq!(percent_label(-0.4), "0%");
    assert_eq!(percent_label(f64::NAN), "0%");
}

#[test]
fn arc_path_quarter_and_large_sweeps() {
    assert_eq!(arc_path(10.0, 10.0, 5.0, 0.0, 90.0), "M 15.00 10.00 A 5.00 5.00 0 0 1 10.00 15.00");
    assert!(arc_path(10.0, 10.0, 5.0, 0.0, 270.0).contains(" 0 1 1 "));
}

#[test]
fn frame_styles_have_distinct_borders() {
    let widths: Vec<f64> = FrameStyle::ALL.iter().map(|f| f.border_width()).collect();
    assert_eq!(widths, vec![2.0, 4.0, 3.0, 1.0]);
    assert_eq!(FrameStyle::default(), FrameStyle::Standard);
}

#[test]
fn only_the_glowing_frame_has_a_halo() {
    assert!(FrameStyle::Glowing.glow_css(neon::BORDER_GREEN).contains("drop-shadow(0 0 6px"));
    assert_eq!(FrameStyle::Minimal.glow_css(neon::BORDER_GREEN), "");
    assert_eq!(FrameStyle::Thick.glow_css(neon::BORDER_GREEN), "");
}

#[test]
fn link_scan_climbs_from_the_bottom() {
    assert_eq!(hover_scan_percent(0.0), 100.0);
    assert_eq!(hover_scan_percent(450.0), 50.0);
    assert_eq!(hover_scan_percent(900.0), 100.0);
}

#[test]
fn section_borders_and_dots() {
    assert_eq!(SectionBorder::default().shape(), ShapeKind::SectionBottomBorder);
    assert_eq!(SectionBorder::Both.shape(), ShapeKind::Card);

    let light = Theme::light();
    assert_eq!(dot_color(&light, Tone::Normal), neon::BLACK.with_alpha(0.26));
    assert_eq!(dot_color(&light, Tone::Inverse), neon::YELLOW.with_alpha(0.13));
}

fn no_spaces(value: &str) -> Option<String> {
    value.contains(' ').then(|| "no spaces".to_string())
}

#[test]
fn input_dialog_submit_guard() {
    let validate: Option<Validator> = Some(no_spaces);
    assert_eq!(input_error(validate, "a b"), Some("no spaces".to_string()));
    assert_eq!(input_error(validate, "ab"), None);
    assert_eq!(input_error(None, "a b"), None);

    assert!(can_submit(None, "ab"));
    assert!(!can_submit(None, "   "));
    assert!(!can_submit(Some("no spaces"), "a b"));
}
