use fltk::{enums::Color, frame::Frame, prelude::*};

use crate::app::contact::Feedback;
use crate::app::settings::ThemePreference;
use super::main_window::MainWidgets;

/// The widget colors for one theme.
pub struct Palette {
    pub window_bg: Color,
    pub header_bg: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub field_bg: Color,
    pub field_text: Color,
    pub bar_track: Color,
}

pub fn palette(theme: ThemePreference) -> Palette {
    if theme.is_light() {
        Palette {
            window_bg: Color::from_rgb(245, 246, 248),
            header_bg: Color::from_rgb(255, 255, 255),
            text: Color::from_rgb(28, 30, 36),
            muted: Color::from_rgb(110, 115, 125),
            accent: Color::from_rgb(0, 150, 136),
            field_bg: Color::from_rgb(255, 255, 255),
            field_text: Color::from_rgb(28, 30, 36),
            bar_track: Color::from_rgb(225, 228, 233),
        }
    } else {
        Palette {
            window_bg: Color::from_rgb(18, 20, 26),
            header_bg: Color::from_rgb(24, 27, 35),
            text: Color::from_rgb(225, 228, 235),
            muted: Color::from_rgb(140, 146, 160),
            accent: Color::from_rgb(64, 200, 180),
            field_bg: Color::from_rgb(30, 34, 44),
            field_text: Color::from_rgb(225, 228, 235),
            bar_track: Color::from_rgb(40, 45, 58),
        }
    }
}

/// Recolor every widget for the given theme and sync the toggle glyph.
/// The glyph always reflects the applied theme: sun while light, moon while
/// dark.
pub fn apply_theme(ui: &mut MainWidgets, theme: ThemePreference) {
    let p = palette(theme);

    ui.wind.set_color(p.window_bg);
    ui.header.set_color(p.header_bg);
    ui.brand.set_label_color(p.text);
    ui.theme_button.set_color(p.header_bg);
    ui.theme_button.set_label_color(p.text);
    ui.theme_button.set_label(theme.glyph());
    ui.menu_button.set_color(p.header_bg);
    ui.menu_button.set_label_color(p.text);

    ui.nav.apply_theme(theme);

    ui.scroll.set_color(p.window_bg);

    // Hero
    ui.hero.section.set_color(p.window_bg);
    ui.hero.greeting.set_label_color(p.muted);
    ui.hero.name.set_label_color(p.text);
    ui.hero.tagline_lead.set_label_color(p.text);
    ui.hero.typewriter_slot.set_label_color(p.accent);
    for button in &mut ui.hero.social {
        button.set_color(p.header_bg);
        button.set_label_color(p.accent);
    }

    // About
    ui.about.section.set_color(p.window_bg);
    ui.about.title.set_label_color(p.text);
    ui.about.body.set_label_color(p.muted);

    // Skills
    ui.skills.section.set_color(p.window_bg);
    ui.skills.title.set_label_color(p.text);
    for row in &mut ui.skills.rows {
        row.label.set_label_color(p.text);
        row.percent.set_label_color(p.muted);
        row.bar.set_color(p.bar_track);
        row.bar.set_selection_color(p.accent);
    }

    // Contact
    ui.contact.section.set_color(p.window_bg);
    ui.contact.title.set_label_color(p.text);
    for input in [&mut ui.contact.name_input, &mut ui.contact.email_input] {
        input.set_color(p.field_bg);
        input.set_text_color(p.field_text);
        input.set_cursor_color(p.text);
        input.set_label_color(p.muted);
    }
    ui.contact.message_input.set_color(p.field_bg);
    ui.contact.message_input.set_text_color(p.field_text);
    ui.contact.message_input.set_cursor_color(p.text);
    ui.contact.message_input.set_label_color(p.muted);
    ui.contact.submit.set_color(p.accent);
    ui.contact.submit.set_label_color(p.header_bg);

    ui.back_to_top.set_color(p.accent);
    ui.back_to_top.set_label_color(p.header_bg);

    // Preloader overlay
    ui.preloader.overlay.set_color(p.window_bg);
    ui.preloader.title.set_label_color(p.text);
    ui.preloader.hint.set_label_color(p.muted);

    ui.wind.redraw();
}

/// Feedback colors are fixed across themes so the notice reads the same way
/// everywhere.
pub fn style_notice(notice: &mut Frame, feedback: Feedback) {
    notice.set_label(feedback.notice());
    notice.set_color(if feedback.is_success() {
        Color::from_rgb(46, 160, 90)
    } else {
        Color::from_rgb(205, 70, 70)
    });
    notice.set_label_color(Color::White);
}
