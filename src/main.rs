mod app;
mod ui;

use app::{scroll, state, typewriter};
use fltk::prelude::WidgetExt;
use app::{AppSettings, AppState, Message};
use ui::main_window::build_main_window;

fn main() {
    let fltk_app = fltk::app::App::default();
    let (sender, receiver) = fltk::app::channel::<Message>();

    let settings = AppSettings::load();
    let widgets = build_main_window(&sender);
    let mut state = AppState::new(widgets, sender, settings);

    state.ui.wind.show();

    // One-shot startup timers: preloader dismissal and the typewriter kickoff.
    let s = sender;
    fltk::app::add_timeout3(state::PRELOADER_SECS, move |_| {
        s.send(Message::PreloaderDone);
    });
    let s = sender;
    fltk::app::add_timeout3(typewriter::START_DELAY, move |_| {
        s.send(Message::TypewriterTick);
    });

    // Recurring scroll sampler; stands in for the browser's scroll event.
    let s = sender;
    fltk::app::add_timeout3(scroll::POLL_SECS, move |handle| {
        s.send(Message::ScrollPoll);
        fltk::app::repeat_timeout3(scroll::POLL_SECS, handle);
    });

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::PreloaderDone => state.hide_preloader(),
                Message::MenuToggle => state.toggle_menu(),
                Message::ThemeToggle => state.toggle_theme(),
                Message::NavActivate(id) => state.activate_nav(id),
                Message::TypewriterTick => state.typewriter_tick(),
                Message::OpenLink(url) => state.open_link(url),
                Message::ScrollPoll => state.poll_scroll(),
                Message::ScrollStep => state.scroll_step(),
                Message::BackToTop => state.back_to_top(),
                Message::ContactSubmit => state.submit_contact(),
                Message::NoticeExpired(generation) => state.expire_notice(generation),
            }
        }
    }
}
