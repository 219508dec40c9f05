//! Lazily built terminal styles shared by the printing code.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static DATE: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static TAG: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static SELECTED: Lazy<Style> = Lazy::new(|| Style::new().bold().reverse());
