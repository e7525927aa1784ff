//! Foreground/background styling of segment output.
//!
//! Color specifiers accepted:
//! - ANSI names (`red`, `lightBlue`, `bright cyan`, …)
//! - `#rrggbb` / `#rgb` hex values
//! - `p:<name>`, looked up in the configured palette
//! - `transparent`, meaning no color
//!
//! Anything else is dropped so a typo never breaks the prompt.

use colored::Color;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::debug;

pub const RESET: &str = "\x1b[0m";
const PALETTE_PREFIX: &str = "p:";

#[derive(Debug, Clone)]
pub struct Styler {
    palette: HashMap<String, String>,
    plain: bool,
    /// Downsample hex colors to the 256-color cube when false.
    truecolor: bool,
}

impl Styler {
    pub fn new(palette: HashMap<String, String>) -> Self {
        Self {
            palette,
            plain: false,
            truecolor: true,
        }
    }

    pub fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    pub fn truecolor(mut self, truecolor: bool) -> Self {
        self.truecolor = truecolor;
        self
    }

    /// Wrap `text` as `<bg><fg>text<reset>`. Returns `text` untouched when no
    /// color resolves.
    pub fn style(&self, text: &str, foreground: Option<&str>, background: Option<&str>) -> String {
        if self.plain {
            return text.to_string();
        }

        let background = background.and_then(|spec| self.resolve(spec));
        let foreground = foreground.and_then(|spec| self.resolve(spec));
        if background.is_none() && foreground.is_none() {
            return text.to_string();
        }

        let mut styled = String::with_capacity(text.len() + 32);
        if let Some(color) = background {
            styled.push_str(&self.escape(color, Layer::Background));
        }
        if let Some(color) = foreground {
            styled.push_str(&self.escape(color, Layer::Foreground));
        }
        styled.push_str(text);
        styled.push_str(RESET);
        styled
    }

    /// Resolve a specifier, following one level of palette indirection.
    pub fn resolve(&self, spec: &str) -> Option<Color> {
        let spec = spec.trim();
        let value = match spec.strip_prefix(PALETTE_PREFIX) {
            Some(name) => match self.palette.get(name) {
                Some(value) => value.trim(),
                None => {
                    debug!(target: "style", name, "unknown palette color");
                    return None;
                }
            },
            None => spec,
        };

        let color = parse_color(value);
        if color.is_none() && !is_transparent(value) {
            debug!(target: "style", spec, "malformed color, rendering unstyled");
        }
        color
    }

    /// Hex colors are emitted directly so the output only depends on the
    /// `truecolor` flag, never on the terminal environment.
    fn escape(&self, color: Color, layer: Layer) -> String {
        let code: Cow<'static, str> = match (color, self.truecolor) {
            (Color::TrueColor { r, g, b }, true) => match layer {
                Layer::Foreground => format!("38;2;{r};{g};{b}").into(),
                Layer::Background => format!("48;2;{r};{g};{b}").into(),
            },
            (Color::TrueColor { r, g, b }, false) => {
                let index = rgb_to_8bit((r, g, b));
                match layer {
                    Layer::Foreground => format!("38;5;{index}").into(),
                    Layer::Background => format!("48;5;{index}").into(),
                }
            }
            _ => match layer {
                Layer::Foreground => color.to_fg_str(),
                Layer::Background => color.to_bg_str(),
            },
        };
        format!("\x1b[{code}m")
    }
}

#[derive(Clone, Copy)]
enum Layer {
    Foreground,
    Background,
}

fn is_transparent(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("transparent")
}

/// Parse a named or hex color. `None` for transparent or malformed values.
pub fn parse_color(value: &str) -> Option<Color> {
    if is_transparent(value) {
        return None;
    }
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = value.to_ascii_lowercase();
    let name = match lower.strip_prefix("light") {
        Some(base) => format!("bright {}", base.trim_start_matches(['-', '_', ' '])),
        None => lower,
    };
    name.parse::<Color>().ok()
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some(Color::TrueColor {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        3 => {
            let expand = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some(Color::TrueColor {
                r: expand(0)?,
                g: expand(1)?,
                b: expand(2)?,
            })
        }
        _ => None,
    }
}

/// Closest xterm 256-color index (6x6x6 cube or grayscale ramp).
fn rgb_to_8bit((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            ((r - 8) / 10) + 232
        }
    } else {
        let scale = |c: u8| (u16::from(c) * 5 / 255) as u8;
        16 + 36 * scale(r) + 6 * scale(g) + scale(b)
    }
}
