use fltk::{
    app::Sender,
    button::Button,
    enums::{Font, FrameType},
    group::Group,
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::scroll::SectionId;
use crate::app::settings::ThemePreference;
use super::theme::palette;

pub const NAV_BAR_HEIGHT: i32 = 40;

/// The collapsible navigation row under the header.
///
/// All "active link" writes go through [`NavBar::set_active`], so at most one
/// link ever carries the marker no matter whether a click or the scroll spy
/// asked for it.
pub struct NavBar {
    pub row: Group,
    links: Vec<(SectionId, Button)>,
    active: Option<SectionId>,
    theme: ThemePreference,
}

impl NavBar {
    pub fn new(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> Self {
        let mut row = Group::new(x, y, w, NAV_BAR_HEIGHT, None);
        row.set_frame(FrameType::FlatBox);

        let link_w = (w - 16) / SectionId::ALL.len() as i32;
        let mut links = Vec::with_capacity(SectionId::ALL.len());
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            let mut button = Button::new(x + 8 + i as i32 * link_w, y + 5, link_w - 8, 30, None);
            button.set_label(id.title());
            button.set_frame(FrameType::FlatBox);
            let s = *sender;
            button.set_callback(move |_| s.send(Message::NavActivate(id)));
            links.push((id, button));
        }
        row.end();
        // Collapsed until the menu button opens it
        row.hide();

        Self {
            row,
            links,
            active: None,
            theme: ThemePreference::Dark,
        }
    }

    /// Mark exactly this link active (or none), clearing all others.
    pub fn set_active(&mut self, id: Option<SectionId>) {
        if self.active == id {
            return;
        }
        self.active = id;
        self.restyle();
    }

    pub fn set_open(&mut self, open: bool) {
        if open {
            self.row.show();
        } else {
            self.row.hide();
        }
    }

    pub fn apply_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
        self.restyle();
    }

    fn restyle(&mut self) {
        let p = palette(self.theme);
        self.row.set_color(p.header_bg);
        for (id, button) in &mut self.links {
            if Some(*id) == self.active {
                button.set_label_color(p.accent);
                button.set_label_font(Font::HelveticaBold);
            } else {
                button.set_label_color(p.text);
                button.set_label_font(Font::Helvetica);
            }
            button.set_color(p.header_bg);
        }
        self.row.redraw();
    }
}
