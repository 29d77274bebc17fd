//! Builders for the four page sections stacked inside the scroll area.
//! Coordinates are window-absolute at build time; the scroll group shifts
//! them as the page moves.

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    input::{Input, MultilineInput},
    misc::Progress,
    prelude::*,
};

use crate::app::content;
use crate::app::messages::Message;

pub const HERO_HEIGHT: i32 = 560;
pub const ABOUT_HEIGHT: i32 = 420;
pub const SKILLS_HEIGHT: i32 = 440;
pub const CONTACT_HEIGHT: i32 = 520;

const MARGIN: i32 = 40;

pub struct HeroWidgets {
    pub section: Group,
    pub greeting: Frame,
    pub name: Frame,
    pub tagline_lead: Frame,
    pub typewriter_slot: Frame,
    pub social: Vec<Button>,
}

pub struct AboutWidgets {
    pub section: Group,
    pub title: Frame,
    pub body: Frame,
}

pub struct SkillRow {
    pub label: Frame,
    pub percent: Frame,
    pub bar: Progress,
    pub target: u8,
}

pub struct SkillsWidgets {
    pub section: Group,
    pub title: Frame,
    pub rows: Vec<SkillRow>,
}

pub struct ContactWidgets {
    pub section: Group,
    pub title: Frame,
    pub name_input: Input,
    pub email_input: Input,
    pub message_input: MultilineInput,
    pub submit: Button,
    pub notice: Frame,
}

fn section_group(y: i32, w: i32, h: i32) -> Group {
    let mut section = Group::new(0, y, w, h, None);
    section.set_frame(FrameType::FlatBox);
    section
}

fn section_title(y: i32, w: i32, label: &'static str) -> Frame {
    let mut title = Frame::new(MARGIN, y, w - 2 * MARGIN, 36, None);
    title.set_label(label);
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    title.set_align(Align::Left | Align::Inside);
    title
}

pub fn build_hero(y: i32, w: i32, sender: &Sender<Message>) -> HeroWidgets {
    let section = section_group(y, w, HERO_HEIGHT);
    let inner_w = w - 2 * MARGIN;

    let mut greeting = Frame::new(MARGIN, y + 150, inner_w, 24, None);
    greeting.set_label(content::GREETING);
    greeting.set_label_size(16);
    greeting.set_align(Align::Left | Align::Inside);

    let mut name = Frame::new(MARGIN, y + 184, inner_w, 48, None);
    name.set_label(content::OWNER_NAME);
    name.set_label_size(36);
    name.set_label_font(Font::HelveticaBold);
    name.set_align(Align::Left | Align::Inside);

    let mut tagline_lead = Frame::new(MARGIN, y + 246, 70, 28, None);
    tagline_lead.set_label(content::TAGLINE_LEAD);
    tagline_lead.set_label_size(18);
    tagline_lead.set_align(Align::Left | Align::Inside);

    // The typewriter writes into this frame; it starts empty.
    let mut typewriter_slot = Frame::new(MARGIN + 70, y + 246, inner_w - 70, 28, None);
    typewriter_slot.set_label_size(18);
    typewriter_slot.set_label_font(Font::HelveticaBold);
    typewriter_slot.set_align(Align::Left | Align::Inside);

    let mut social = Vec::with_capacity(content::SOCIAL_LINKS.len());
    for (i, link) in content::SOCIAL_LINKS.iter().enumerate() {
        let mut button = Button::new(MARGIN + i as i32 * 122, y + 330, 110, 32, None);
        button.set_label(link.label);
        button.set_frame(FrameType::RoundedBox);
        let s = *sender;
        let url = link.url;
        button.set_callback(move |_| s.send(Message::OpenLink(url)));
        social.push(button);
    }

    section.end();

    HeroWidgets {
        section,
        greeting,
        name,
        tagline_lead,
        typewriter_slot,
        social,
    }
}

pub fn build_about(y: i32, w: i32) -> AboutWidgets {
    let section = section_group(y, w, ABOUT_HEIGHT);

    let title = section_title(y + 40, w, "About Me");

    let mut body = Frame::new(MARGIN, y + 96, w - 2 * MARGIN, 240, None);
    body.set_label(content::ABOUT_BODY);
    body.set_label_size(14);
    body.set_align(Align::Left | Align::Top | Align::Inside | Align::Wrap);

    section.end();

    AboutWidgets { section, title, body }
}

pub fn build_skills(y: i32, w: i32) -> SkillsWidgets {
    let section = section_group(y, w, SKILLS_HEIGHT);
    let inner_w = w - 2 * MARGIN;

    let title = section_title(y + 40, w, "My Skills");

    let mut rows = Vec::with_capacity(content::SKILLS.len());
    for (i, skill) in content::SKILLS.iter().enumerate() {
        let row_y = y + 100 + i as i32 * 56;

        let mut label = Frame::new(MARGIN, row_y, inner_w - 80, 20, None);
        label.set_label(skill.label);
        label.set_label_size(13);
        label.set_align(Align::Left | Align::Inside);

        let mut percent = Frame::new(MARGIN + inner_w - 80, row_y, 80, 20, None);
        percent.set_label(&format!("{}%", skill.level));
        percent.set_label_size(13);
        percent.set_align(Align::Right | Align::Inside);

        // Bars start empty and fill when the section scrolls into view.
        let mut bar = Progress::new(MARGIN, row_y + 24, inner_w, 12, None);
        bar.set_minimum(0.0);
        bar.set_maximum(100.0);
        bar.set_value(0.0);
        bar.set_frame(FrameType::FlatBox);

        rows.push(SkillRow {
            label,
            percent,
            bar,
            target: skill.level,
        });
    }

    section.end();

    SkillsWidgets { section, title, rows }
}

pub fn build_contact(y: i32, w: i32, sender: &Sender<Message>) -> ContactWidgets {
    let section = section_group(y, w, CONTACT_HEIGHT);
    let inner_w = w - 2 * MARGIN;

    let title = section_title(y + 40, w, "Get In Touch");

    let mut name_input = Input::new(MARGIN, y + 100, inner_w, 36, None);
    name_input.set_label("Name");
    name_input.set_align(Align::TopLeft);

    let mut email_input = Input::new(MARGIN, y + 160, inner_w, 36, None);
    email_input.set_label("Email");
    email_input.set_align(Align::TopLeft);

    let mut message_input = MultilineInput::new(MARGIN, y + 220, inner_w, 120, None);
    message_input.set_label("Message");
    message_input.set_align(Align::TopLeft);
    message_input.set_wrap(true);

    let mut submit = Button::new(MARGIN, y + 360, 180, 40, None);
    submit.set_label("Send Message");
    submit.set_frame(FrameType::RoundedBox);
    submit.set_label_font(Font::HelveticaBold);
    let s = *sender;
    submit.set_callback(move |_| s.send(Message::ContactSubmit));

    let mut notice = Frame::new(MARGIN + 200, y + 360, inner_w - 200, 40, None);
    notice.set_frame(FrameType::RoundedBox);
    notice.set_label_size(12);
    notice.set_align(Align::Center | Align::Inside | Align::Wrap);
    notice.hide();

    section.end();

    ContactWidgets {
        section,
        title,
        name_input,
        email_input,
        message_input,
        submit,
        notice,
    }
}
