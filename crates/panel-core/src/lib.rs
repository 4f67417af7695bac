#![cfg_attr(not(test), no_std)]

//! State-conditioned menu engine for a rotary-encoder control panel.
//!
//! Each tick the active screen is rebuilt from a [`state::StateSnapshot`] and
//! the startup-resolved [`capabilities::CapabilitySet`]; the encoder moves a
//! clamped cursor over the result and a press is resolved by
//! [`dispatch::ActionDispatcher`].

pub mod app;
pub mod capabilities;
pub mod confirm;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod item;
pub mod labels;
pub mod machine;
pub mod menus;
pub mod navigation;
pub mod render;
pub mod screen;
pub mod state;
