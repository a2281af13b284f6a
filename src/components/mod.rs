mod menu_button;

pub use menu_button::MenuButton;
