use super::scroll::SectionId;

/// All messages that can be sent through the FLTK channel.
/// Widget and timer callbacks send one of these; the dispatch loop in main
/// routes them to `AppState`.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    // Startup
    PreloaderDone,

    // Header
    MenuToggle,
    ThemeToggle,
    NavActivate(SectionId),

    // Hero
    TypewriterTick,
    OpenLink(&'static str),

    // Scrolling
    ScrollPoll,
    ScrollStep,
    BackToTop,

    // Contact form
    ContactSubmit,
    NoticeExpired(u64),
}
