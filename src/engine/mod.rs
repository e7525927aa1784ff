//! Prompt composition.
//!
//! Blocks are rendered in order, segments within a block in order. A segment
//! only renders when it is enabled and every name in its `needs` has already
//! rendered earlier in the same prompt, as recorded in the
//! [`ExecutionLedger`]. Failures inside a segment only ever remove that
//! segment from the output.

pub mod ledger;
pub mod style;
pub mod width;

pub use ledger::*;
pub use style::*;
pub use width::*;

use crate::config::{Alignment, Block, Config, SegmentConfig};
use crate::runtime::Environment;
use crate::template::TemplateRenderer;
use std::sync::Arc;
use tracing::debug;

pub struct Engine {
    config: Config,
    env: Arc<dyn Environment>,
    styler: Styler,
    templates: TemplateRenderer,
}

impl Engine {
    pub fn new(config: Config, env: Arc<dyn Environment>) -> Self {
        let styler = Styler::new(config.palette.clone()).plain(env.flags().plain);
        let templates = TemplateRenderer::new(env.as_ref());
        Self {
            config,
            env,
            styler,
            templates,
        }
    }

    /// Use 256-color escapes instead of 24-bit ones for hex colors.
    pub fn with_truecolor(mut self, truecolor: bool) -> Self {
        self.styler = self.styler.truecolor(truecolor);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render every block of the configuration into the final prompt string.
    pub fn render_prompt(&self) -> String {
        let mut ledger = ExecutionLedger::new();
        let mut prompt = String::new();
        let mut line_length = 0;
        let mut ends_right_aligned = false;

        for block in &self.config.blocks {
            let (text, length) = self.render_block(block, &mut ledger);
            if text.is_empty() {
                continue;
            }

            if block.newline && !prompt.is_empty() {
                prompt.push('\n');
                line_length = 0;
            }

            if block.alignment == Alignment::Right {
                let padding = self.right_padding(line_length, length);
                prompt.push_str(&" ".repeat(padding));
                line_length += padding;
            }

            prompt.push_str(&text);
            line_length += length;
            ends_right_aligned = block.alignment == Alignment::Right;
        }

        // A right-aligned block already ends at the terminal edge.
        if self.config.final_space && !prompt.is_empty() && !ends_right_aligned {
            prompt.push(' ');
        }

        debug!(target: "engine", segments = ledger.len(), "prompt rendered");
        prompt
    }

    /// Spaces needed so a block of `block_length` cells ends at the terminal
    /// edge. Falls back to a single separating space when the width is
    /// unknown or the block does not fit.
    fn right_padding(&self, line_length: usize, block_length: usize) -> usize {
        match self.env.flags().terminal_width {
            Some(width) if line_length + block_length <= width => width - line_length - block_length,
            _ if line_length == 0 => 0,
            _ => 1,
        }
    }

    /// Render one block, recording every segment that produced output in
    /// `ledger`. Returns the styled text and its visual length.
    pub fn render_block(&self, block: &Block, ledger: &mut ExecutionLedger) -> (String, usize) {
        let mut text = String::new();

        for segment in &block.segments {
            if let Some(fragment) = self.render_segment(segment, ledger) {
                text.push_str(&fragment);
                ledger.mark_executed(segment.name());
            }
        }

        let length = visual_length(&text);
        (text, length)
    }

    fn render_segment(&self, config: &SegmentConfig, ledger: &ExecutionLedger) -> Option<String> {
        let name = config.name();
        let mut segment = config
            .segment_type
            .build(&config.properties, Arc::clone(&self.env));

        if !segment.enabled() {
            debug!(target: "engine", segment = name, "disabled");
            return None;
        }

        if !can_render(config, ledger) {
            debug!(target: "engine", segment = name, needs = ?config.needs, "dependencies not met");
            return None;
        }

        let template = config
            .template
            .as_deref()
            .unwrap_or_else(|| segment.template());

        let text = match self.templates.render(template, segment.context()) {
            Ok(text) => text,
            Err(err) => {
                debug!(target: "engine", segment = name, %err, "template failed");
                return None;
            }
        };

        if text.is_empty() {
            return None;
        }

        Some(self.styler.style(
            &text,
            config.foreground.as_deref(),
            config.background.as_deref(),
        ))
    }
}
