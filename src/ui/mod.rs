pub mod main_window;
pub mod nav;
pub mod sections;
pub mod theme;
