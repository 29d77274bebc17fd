use fltk::{app, app::Sender, prelude::*};

use super::contact::{self, Feedback, NoticeGuard};
use super::content;
use super::messages::Message;
use super::scroll::{self, ScrollAnimation, SectionId, SectionSpan};
use super::settings::AppSettings;
use super::typewriter::Typewriter;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme;

/// Delay between the window appearing and the preloader overlay going away.
pub const PRELOADER_SECS: f64 = 1.5;

/// Main application coordinator: owns every widget and every piece of
/// session state, and handles each dispatched [`Message`]. Timer callbacks
/// never touch widgets directly; they only send messages back here.
pub struct AppState {
    pub ui: MainWidgets,
    sender: Sender<Message>,
    settings: AppSettings,
    spans: Vec<SectionSpan>,
    max_scroll: i32,
    typewriter: Typewriter,
    menu_open: bool,
    skills_revealed: bool,
    last_offset: i32,
    animation: Option<ScrollAnimation>,
    notice_guard: NoticeGuard,
}

impl AppState {
    pub fn new(mut ui: MainWidgets, sender: Sender<Message>, settings: AppSettings) -> Self {
        let scroll_top = ui.scroll.y();
        let spans: Vec<SectionSpan> = [
            (SectionId::Home, &ui.hero.section),
            (SectionId::About, &ui.about.section),
            (SectionId::Skills, &ui.skills.section),
            (SectionId::Contact, &ui.contact.section),
        ]
        .into_iter()
        .map(|(id, group)| SectionSpan {
            id,
            top: group.y() - scroll_top,
            height: group.h(),
        })
        .collect();

        let content_bottom = spans.last().map_or(0, |s| s.top + s.height);
        let max_scroll = (content_bottom - ui.scroll.h()).max(0);

        ui.nav.set_active(Some(SectionId::Home));
        theme::apply_theme(&mut ui, settings.theme);

        Self {
            ui,
            sender,
            settings,
            spans,
            max_scroll,
            typewriter: Typewriter::new(content::ROLE_PHRASES),
            menu_open: false,
            skills_revealed: false,
            last_offset: 0,
            animation: None,
            notice_guard: NoticeGuard::new(),
        }
    }

    // --- Startup ---

    pub fn hide_preloader(&mut self) {
        self.ui.preloader.overlay.hide();
        self.ui.wind.redraw();
    }

    // --- Header ---

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.ui.nav.set_open(self.menu_open);
        self.ui
            .menu_button
            .set_label(if self.menu_open { "\u{2715}" } else { "\u{2630}" });
        self.ui.wind.redraw();
    }

    fn close_menu(&mut self) {
        if self.menu_open {
            self.toggle_menu();
        }
    }

    pub fn toggle_theme(&mut self) {
        if let Err(e) = self.settings.toggle_theme() {
            eprintln!("Failed to save settings: {}", e);
        }
        theme::apply_theme(&mut self.ui, self.settings.theme);
    }

    pub fn activate_nav(&mut self, id: SectionId) {
        self.ui.nav.set_active(Some(id));
        self.close_menu();
        if let Some(span) = self.spans.iter().find(|s| s.id == id) {
            self.start_scroll(span.top - scroll::HEADER_OFFSET);
        }
    }

    // --- Hero ---

    pub fn typewriter_tick(&mut self) {
        let delay = self.typewriter.tick();
        self.ui.hero.typewriter_slot.set_label(&self.typewriter.text());
        self.ui.hero.typewriter_slot.redraw();
        let s = self.sender;
        app::add_timeout3(delay, move |_| s.send(Message::TypewriterTick));
    }

    pub fn open_link(&self, url: &str) {
        if let Err(e) = open::that(url) {
            eprintln!("Failed to open {}: {}", url, e);
        }
    }

    // --- Scrolling ---

    /// Runs on every poll tick; does nothing unless the offset moved since
    /// last time.
    pub fn poll_scroll(&mut self) {
        let offset = self.ui.scroll.yposition();
        if offset == self.last_offset {
            return;
        }
        self.last_offset = offset;

        if scroll::back_to_top_visible(offset) {
            self.ui.back_to_top.show();
        } else {
            self.ui.back_to_top.hide();
        }

        self.ui.nav.set_active(scroll::active_section(&self.spans, offset));

        if !self.skills_revealed {
            let viewport_h = self.ui.scroll.h();
            if let Some(span) = self.spans.iter().find(|s| s.id == SectionId::Skills) {
                if scroll::visible_fraction(span, offset, viewport_h) >= scroll::SKILL_REVEAL_FRACTION
                {
                    self.reveal_skills();
                }
            }
        }

        self.ui.wind.redraw();
    }

    fn reveal_skills(&mut self) {
        for row in &mut self.ui.skills.rows {
            row.bar.set_value(row.target as f64);
        }
        self.skills_revealed = true;
    }

    pub fn back_to_top(&mut self) {
        self.start_scroll(0);
    }

    /// Begin (or retarget) the smooth scroll toward `target`.
    fn start_scroll(&mut self, target: i32) {
        let target = scroll::clamp_target(target, self.max_scroll);
        let from = self.ui.scroll.yposition();
        if from == target {
            self.animation = None;
            return;
        }
        let was_idle = self.animation.is_none();
        self.animation = Some(ScrollAnimation::new(from, target));
        if was_idle {
            self.sender.send(Message::ScrollStep);
        }
    }

    pub fn scroll_step(&mut self) {
        let Some(anim) = self.animation.as_mut() else {
            return;
        };
        let pos = anim.advance();
        self.ui.scroll.scroll_to(0, pos);
        if anim.done() {
            self.animation = None;
        } else {
            let s = self.sender;
            app::add_timeout3(scroll::FRAME_SECS, move |_| s.send(Message::ScrollStep));
        }
        self.ui.scroll.redraw();
    }

    // --- Contact form ---

    pub fn submit_contact(&mut self) {
        let name = self.ui.contact.name_input.value();
        let email = self.ui.contact.email_input.value();
        let message = self.ui.contact.message_input.value();

        let feedback = contact::review(&name, &email, &message);
        if feedback.is_success() {
            self.ui.contact.name_input.set_value("");
            self.ui.contact.email_input.set_value("");
            self.ui.contact.message_input.set_value("");
        }
        self.show_notice(feedback);
    }

    fn show_notice(&mut self, feedback: Feedback) {
        let generation = self.notice_guard.bump();

        theme::style_notice(&mut self.ui.contact.notice, feedback);
        self.ui.contact.notice.show();
        self.ui.wind.redraw();

        let s = self.sender;
        app::add_timeout3(feedback.hide_after_secs(), move |_| {
            s.send(Message::NoticeExpired(generation));
        });
    }

    pub fn expire_notice(&mut self, generation: u64) {
        if self.notice_guard.is_current(generation) {
            self.ui.contact.notice.hide();
            self.ui.wind.redraw();
        }
    }
}
