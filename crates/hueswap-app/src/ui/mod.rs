pub mod game_screen;
pub mod grid;
pub mod grid_theme;
pub mod input;
pub mod layout;
pub mod status_line;
pub mod toolbar;
pub mod won_overlay;
