pub mod app;
pub mod bridge;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod nav;
pub mod render;
pub mod runtime;
pub mod table;
pub mod terminal_guard;
pub mod theme;
pub mod vendors;
