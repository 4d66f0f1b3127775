#![forbid(unsafe_code)]

//! Core: decoded input events and key bindings for colpick widgets.
//!
//! # Role in colpick
//! `colpick-core` is the input layer. Hosts decode terminal input into
//! [`event::Event`] values and the widgets resolve keys into
//! [`keymap::NavCommand`]s through a [`keymap::Keymap`].

pub mod event;
pub mod keymap;
