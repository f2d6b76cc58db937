//! Key scripts: a compact way to describe a sequence of user actions.
//!
//! Tokens:
//!
//! - `<key-id>`: tap a key (e.g. `a`, `é`, `shift`, `backspace`, `enter`, `space`)
//! - `hold:<key-id>:<ms>`: press a key for `ms` milliseconds, then release
//! - `pick:<glyph>`: click an option of the open accent menu
//! - `dismiss`: click outside the accent menu but inside the keyboard
//! - `outside`: click somewhere on the page outside the keyboard
//! - `focus`: focus the field again
//! - `close`: click the keyboard's close button

use crate::engine::PageEvent;
use crate::models::{ElementId, LayoutTable};
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// How long a plain tap holds the key down.
const TAP_MS: u64 = 40;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Tap a key
    Tap(String),
    /// Hold a key for a duration, then release
    Hold {
        /// Logical key id
        key: String,
        /// Hold duration
        duration: Duration,
    },
    /// Choose an accent variant
    Pick(char),
    /// Click keyboard chrome, closing any accent menu
    Dismiss,
    /// Click the page outside the keyboard
    Outside,
    /// Focus the field
    Focus,
    /// Click the close button
    Close,
}

/// Parses script tokens, checking key ids against `layout`.
pub fn parse_script(tokens: &[String], layout: &LayoutTable) -> Result<Vec<Step>> {
    tokens
        .iter()
        .map(|token| parse_token(token, layout))
        .collect()
}

fn known_key(key: &str, layout: &LayoutTable) -> Result<String> {
    if layout.key(key).is_none() {
        anyhow::bail!("Unknown key '{key}' for layout '{}'", layout.id);
    }
    Ok(key.to_string())
}

fn parse_token(token: &str, layout: &LayoutTable) -> Result<Step> {
    match token {
        "dismiss" => return Ok(Step::Dismiss),
        "outside" => return Ok(Step::Outside),
        "focus" => return Ok(Step::Focus),
        "close" => return Ok(Step::Close),
        _ => {}
    }

    if let Some(rest) = token.strip_prefix("hold:") {
        let (key, millis) = rest
            .rsplit_once(':')
            .with_context(|| format!("Expected hold:<key>:<ms>, got '{token}'"))?;
        let millis: u64 = millis
            .parse()
            .with_context(|| format!("Invalid hold duration in '{token}'"))?;
        return Ok(Step::Hold {
            key: known_key(key, layout)?,
            duration: Duration::from_millis(millis),
        });
    }

    if let Some(rest) = token.strip_prefix("pick:") {
        let mut chars = rest.chars();
        return match (chars.next(), chars.next()) {
            (Some(glyph), None) => Ok(Step::Pick(glyph)),
            _ => anyhow::bail!("Expected a single glyph after pick:, got '{rest}'"),
        };
    }

    Ok(Step::Tap(known_key(token, layout)?))
}

/// Turns steps into timed page events, advancing a virtual clock.
#[derive(Debug)]
pub struct Player {
    field: ElementId,
    now: Instant,
}

impl Player {
    /// Starts a clock at `start` for a page whose only field is `field`.
    pub fn new(field: ElementId, start: Instant) -> Self {
        Self { field, now: start }
    }

    /// Events produced by one step.
    pub fn events(&mut self, step: &Step) -> Vec<PageEvent> {
        match step {
            Step::Tap(key) => self.press(key, Duration::from_millis(TAP_MS)),
            Step::Hold { key, duration } => self.press(key, *duration),
            Step::Pick(glyph) => vec![PageEvent::AccentClick { glyph: *glyph }],
            Step::Dismiss => vec![PageEvent::Click {
                target: None,
                inside_keyboard: true,
            }],
            Step::Outside => vec![PageEvent::Click {
                target: None,
                inside_keyboard: false,
            }],
            Step::Focus => vec![PageEvent::Focus { target: self.field }],
            Step::Close => vec![PageEvent::CloseClick],
        }
    }

    fn press(&mut self, key: &str, held: Duration) -> Vec<PageEvent> {
        let down = self.now;
        self.now += held;
        vec![
            PageEvent::KeyDown {
                key: key.to_string(),
                at: down,
            },
            PageEvent::KeyUp { at: self.now },
            PageEvent::KeyClick {
                key: key.to_string(),
            },
        ]
    }
}
