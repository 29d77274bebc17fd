use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::{Group, Scroll, ScrollType},
    prelude::*,
    window::Window,
};

use crate::app::content;
use crate::app::messages::Message;
use super::nav::NavBar;
use super::sections::{
    self, AboutWidgets, ContactWidgets, HeroWidgets, SkillsWidgets,
    ABOUT_HEIGHT, HERO_HEIGHT, SKILLS_HEIGHT,
};

pub const WINDOW_W: i32 = 640;
pub const WINDOW_H: i32 = 760;
pub const HEADER_H: i32 = 50;

pub struct PreloaderWidgets {
    pub overlay: Group,
    pub title: Frame,
    pub hint: Frame,
}

pub struct MainWidgets {
    pub wind: Window,
    pub header: Frame,
    pub brand: Frame,
    pub theme_button: Button,
    pub menu_button: Button,
    pub nav: NavBar,
    pub scroll: Scroll,
    pub hero: HeroWidgets,
    pub about: AboutWidgets,
    pub skills: SkillsWidgets,
    pub contact: ContactWidgets,
    pub back_to_top: Button,
    pub preloader: PreloaderWidgets,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(200, 120, WINDOW_W, WINDOW_H, "FolioDesk");
    wind.set_xclass("FolioDesk");

    // Fixed header band
    let mut header = Frame::new(0, 0, WINDOW_W, HEADER_H, None);
    header.set_frame(FrameType::FlatBox);

    let mut brand = Frame::new(20, 10, 300, 30, None);
    brand.set_label(content::OWNER_NAME);
    brand.set_label_size(18);
    brand.set_label_font(Font::HelveticaBold);
    brand.set_align(Align::Left | Align::Inside);

    let mut theme_button = Button::new(WINDOW_W - 100, 10, 40, 30, None);
    theme_button.set_frame(FrameType::FlatBox);
    theme_button.set_label_size(16);
    let s = *sender;
    theme_button.set_callback(move |_| s.send(Message::ThemeToggle));

    let mut menu_button = Button::new(WINDOW_W - 54, 10, 40, 30, None);
    menu_button.set_frame(FrameType::FlatBox);
    menu_button.set_label("\u{2630}");
    menu_button.set_label_size(16);
    let s = *sender;
    menu_button.set_callback(move |_| s.send(Message::MenuToggle));

    // Scrollable page body
    let mut scroll = Scroll::new(0, HEADER_H, WINDOW_W, WINDOW_H - HEADER_H, None);
    scroll.set_type(ScrollType::VerticalAlways);
    scroll.set_frame(FrameType::FlatBox);

    let hero = sections::build_hero(HEADER_H, WINDOW_W, sender);
    let about = sections::build_about(HEADER_H + HERO_HEIGHT, WINDOW_W);
    let skills = sections::build_skills(HEADER_H + HERO_HEIGHT + ABOUT_HEIGHT, WINDOW_W);
    let contact = sections::build_contact(
        HEADER_H + HERO_HEIGHT + ABOUT_HEIGHT + SKILLS_HEIGHT,
        WINDOW_W,
        sender,
    );
    scroll.end();

    // Widgets added after the scroll draw above it
    let nav = NavBar::new(0, HEADER_H, WINDOW_W, sender);

    let mut back_to_top = Button::new(WINDOW_W - 72, WINDOW_H - 64, 44, 44, None);
    back_to_top.set_label("\u{2191}");
    back_to_top.set_label_size(18);
    back_to_top.set_frame(FrameType::RoundedBox);
    back_to_top.hide();
    let s = *sender;
    back_to_top.set_callback(move |_| s.send(Message::BackToTop));

    // Full-window overlay shown until startup settles
    let mut overlay = Group::new(0, 0, WINDOW_W, WINDOW_H, None);
    overlay.set_frame(FrameType::FlatBox);
    let mut title = Frame::new(0, WINDOW_H / 2 - 50, WINDOW_W, 40, None);
    title.set_label(content::OWNER_NAME);
    title.set_label_size(28);
    title.set_label_font(Font::HelveticaBold);
    let mut hint = Frame::new(0, WINDOW_H / 2, WINDOW_W, 24, None);
    hint.set_label("Loading\u{2026}");
    hint.set_label_size(13);
    overlay.end();
    let preloader = PreloaderWidgets { overlay, title, hint };

    wind.end();

    MainWidgets {
        wind,
        header,
        brand,
        theme_button,
        menu_button,
        nav,
        scroll,
        hero,
        about,
        skills,
        contact,
        back_to_top,
        preloader,
    }
}
