use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Blue;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const TODAY_TITLE: Color = Color::Yellow;

pub const SELECTED_TEXT: Color = Color::Magenta;
pub const DONE_TEXT: Color = Color::DarkGray;
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const POPUP_BG: Color = Color::Black;
pub const ERROR_COLOR: Color = Color::Red;
