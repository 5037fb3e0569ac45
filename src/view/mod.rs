//! View module - software rendering of the annotation window
//!
//! The `Renderer` owns the font, glyph cache and softbuffer surface.
//! `ViewState` is the runtime's `ViewPort`: it records what the core asked
//! for (repaint, focus, reveal) and what the last frame laid out, so mouse
//! hit-testing works against the chips that were actually drawn.

pub mod frame;

pub use frame::{Frame, TextPainter};

use std::borrow::Cow;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, Context as _, Result};
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use winit::window::Window;

use labelfast::config::{AppConfig, TextDirection};
use labelfast::effects::ViewPort;
use labelfast::geometry::{self, Button, ChipMetrics, Direction, Rect, WindowLayout};
use labelfast::keymap::{Command, Keymap};
use labelfast::model::{AppModel, EditSession, FocusTarget};
use labelfast::tokenize::tokenize;

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Fonts tried in order when no font path is configured
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const EMPTY_SENTENCE: &str = "Sentence is empty. Use controls if needed.";

/// Shortcut rows in the help overlay, in display order
const HELP_COMMANDS: &[Command] = &[
    Command::SelectNext,
    Command::SelectPrevious,
    Command::BeginEdit,
    Command::CommitEdit,
    Command::CancelEdit,
    Command::DeleteSelected,
    Command::ResetSentence,
    Command::SubmitSentence,
    Command::ToggleHelp,
    Command::Quit,
];

/// What the core has asked of the view, plus the last frame's layout
#[derive(Debug)]
pub struct ViewState {
    needs_redraw: bool,
    pub focus: FocusTarget,
    /// Token to bring into view on the next frame
    reveal: Option<usize>,
    /// Vertical scroll of the correction area in pixels
    pub scroll: f32,
    pub layout: WindowLayout,
    /// Chip rectangles from the last frame, unscrolled
    pub chips: Vec<Rect>,
}

impl ViewState {
    pub fn new(layout: WindowLayout) -> Self {
        Self {
            needs_redraw: true,
            focus: FocusTarget::default(),
            reveal: None,
            scroll: 0.0,
            layout,
            chips: Vec::new(),
        }
    }

    /// Whether a repaint was requested since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Scroll the correction area; clamped on the next frame
    pub fn scroll_by(&mut self, dy: f32) {
        self.scroll = (self.scroll + dy).max(0.0);
        self.needs_redraw = true;
    }

    /// Token chip under a window point
    pub fn chip_at(&self, x: f32, y: f32) -> Option<usize> {
        if !self.layout.correction_area.contains(x, y) {
            return None;
        }
        geometry::hit_test(&self.chips, x, y + self.scroll)
    }
}

impl ViewPort for ViewState {
    fn request_render(&mut self) {
        self.needs_redraw = true;
    }

    fn focus(&mut self, target: FocusTarget) {
        self.focus = target;
        self.needs_redraw = true;
    }

    fn scroll_into_view(&mut self, index: usize) {
        self.reveal = Some(index);
        self.needs_redraw = true;
    }
}

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents between frames, so
    /// drawing goes here and is copied to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    char_width: f32,
}

impl Renderer {
    /// Create a renderer for `window` using the configured font
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        config: &AppConfig,
    ) -> Result<Self> {
        let scale_factor = window.scale_factor();
        let (width, height) = {
            let size = window.inner_size();
            (size.width, size.height)
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let font = load_font(config.font_path.as_deref())?;
        let font_size = config.font_size * scale_factor as f32;
        let line_metrics = font
            .horizontal_line_metrics(font_size)
            .ok_or_else(|| anyhow!("Font missing horizontal line metrics"))?;

        let (metrics, _) = font.rasterize('M', font_size);
        let char_width = metrics.advance_width;

        Ok(Self {
            font,
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            char_width,
        })
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil() as usize
    }

    /// Draw one frame and present it
    pub fn render(&mut self, model: &AppModel, keymap: &Keymap, state: &mut ViewState) -> Result<()> {
        let (width, height) = model.window_size;
        if width == 0 || height == 0 {
            return Ok(());
        }

        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.back_buffer
                .resize((width as usize) * (height as usize), 0);
            self.surface
                .resize(non_zero(width), non_zero(height))
                .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        }

        let line_height = self.line_height();
        state.layout = WindowLayout::compute(width as f32, height as f32, line_height as f32);

        {
            let mut frame = Frame::new(&mut self.back_buffer, width as usize, height as usize);
            let mut painter = TextPainter::new(
                &self.font,
                &mut self.glyph_cache,
                self.font_size,
                self.line_metrics.ascent,
                line_height,
            );

            frame.clear(model.theme.window.background.to_argb_u32());

            if model.session.is_completed() {
                state.chips.clear();
                Self::render_completed(&mut frame, &mut painter, model);
            } else {
                Self::render_source(&mut frame, &mut painter, model, &state.layout);
                Self::render_target(&mut frame, &mut painter, model, state);
                Self::render_buttons(&mut frame, &mut painter, model, &state.layout);
                Self::render_status(&mut frame, &mut painter, model, keymap, &state.layout);
                if model.ui.help_open {
                    Self::render_help(&mut frame, &mut painter, model, keymap);
                }
            }
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }

    fn render_completed(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel) {
        let theme = &model.theme;
        let line_height = painter.line_height() as f32;
        let width = frame.width() as f32;
        let middle = frame.height() as f32 / 2.0;

        let heading = Rect::new(0.0, middle - line_height * 1.5, width, line_height);
        painter.draw_centered(frame, heading, "Completed!", theme.success.to_argb_u32());

        let detail = Rect::new(0.0, middle, width, line_height);
        painter.draw_centered(
            frame,
            detail,
            "All sentences have been processed.",
            theme.window.muted.to_argb_u32(),
        );
    }

    fn render_source(
        frame: &mut Frame,
        painter: &mut TextPainter,
        model: &AppModel,
        layout: &WindowLayout,
    ) {
        let theme = &model.theme;
        let line_height = painter.line_height() as f32;
        let pad = (line_height * 0.5).round();
        let panel = layout.source_panel;

        frame.draw_bordered_rect(
            panel,
            theme.panel.background.to_argb_u32(),
            theme.panel.border.to_argb_u32(),
        );
        painter.draw(
            frame,
            panel.x + pad,
            panel.y + pad * 0.5,
            "Source",
            theme.panel.label.to_argb_u32(),
        );

        let Some(pair) = model.session.current_pair() else {
            return;
        };
        let direction = match model.config.direction {
            TextDirection::Auto => Direction::detect(&pair.source),
            _ => model.text_direction(),
        };

        let top = panel.y + pad * 0.5 + line_height;
        let body = Rect::new(
            panel.x + pad,
            top,
            (panel.width - 2.0 * pad).max(0.0),
            (panel.bottom() - top - pad * 0.5).max(0.0),
        );

        let words = tokenize(&pair.source);
        let widths: Vec<f32> = words.iter().map(|w| painter.measure_width(w)).collect();
        let metrics = ChipMetrics {
            padding_x: 0.0,
            height: line_height,
            gap_x: painter.measure_width(" "),
            gap_y: 0.0,
        };
        let rects = geometry::layout_tokens(&widths, body, &metrics, direction);

        frame.set_clip(body);
        let color = theme.window.foreground.to_argb_u32();
        for (rect, word) in rects.iter().zip(&words) {
            painter.draw(frame, rect.x, rect.y, &visual_order(word, direction), color);
        }
        frame.clear_clip();
    }

    fn render_target(
        frame: &mut Frame,
        painter: &mut TextPainter,
        model: &AppModel,
        state: &mut ViewState,
    ) {
        let theme = &model.theme;
        let line_height = painter.line_height() as f32;
        let pad = (line_height * 0.5).round();
        let panel = state.layout.target_panel;
        let area = state.layout.correction_area;

        let focused = state.focus == FocusTarget::CorrectionArea && !model.ui.help_open;
        let border = if focused {
            theme.chip.selected_background
        } else {
            theme.panel.border
        };
        frame.draw_bordered_rect(
            panel,
            theme.panel.background.to_argb_u32(),
            border.to_argb_u32(),
        );
        painter.draw(
            frame,
            panel.x + pad,
            panel.y + pad * 0.5,
            "Target",
            theme.panel.label.to_argb_u32(),
        );

        let Some(sentence) = model.sentence() else {
            return;
        };
        let tokens = sentence.corrections.tokens();

        if tokens.is_empty() {
            state.chips.clear();
            state.scroll = 0.0;
            painter.draw(
                frame,
                area.x,
                area.y,
                EMPTY_SENTENCE,
                theme.window.muted.to_argb_u32(),
            );
            return;
        }

        let direction = model.text_direction();
        let metrics = ChipMetrics::for_line_height(line_height);
        let edit = sentence.edit.session();
        let min_editor_width = painter.measure_width("mmmm");

        let widths: Vec<f32> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| match edit {
                Some(session) if session.target_index == i => {
                    painter.measure_width(session.text()).max(min_editor_width)
                }
                _ => painter.measure_width(token),
            })
            .collect();
        state.chips = geometry::layout_tokens(&widths, area, &metrics, direction);

        if let Some(index) = state.reveal.take() {
            if let Some(rect) = state.chips.get(index) {
                state.scroll = geometry::scroll_to_reveal(state.scroll, *rect, area);
            }
        }
        let max_scroll = (geometry::content_height(&state.chips, area.y) - area.height).max(0.0);
        state.scroll = state.scroll.clamp(0.0, max_scroll);

        let editor_focused = state.focus == FocusTarget::InlineEditor;
        for (i, (chip, token)) in state.chips.iter().zip(tokens).enumerate() {
            let rect = chip.scrolled(state.scroll);
            if rect.bottom() < area.y || rect.y > area.bottom() {
                continue;
            }
            frame.set_clip(rect.intersection(&area));

            match edit {
                Some(session) if session.target_index == i => Self::render_editor(
                    frame,
                    painter,
                    model,
                    session,
                    rect,
                    &metrics,
                    direction,
                    editor_focused,
                ),
                _ => {
                    let chip_theme = &theme.chip;
                    let (background, foreground) = if sentence.selection == Some(i) {
                        (chip_theme.selected_background, chip_theme.selected_foreground)
                    } else {
                        (chip_theme.background, chip_theme.foreground)
                    };
                    frame.draw_bordered_rect(
                        rect,
                        background.to_argb_u32(),
                        chip_theme.border.to_argb_u32(),
                    );
                    let text_y = rect.y + ((rect.height - line_height) / 2.0).round();
                    painter.draw(
                        frame,
                        rect.x + metrics.padding_x,
                        text_y,
                        &visual_order(token, direction),
                        foreground.to_argb_u32(),
                    );
                }
            }
        }
        frame.clear_clip();
    }

    #[allow(clippy::too_many_arguments)]
    fn render_editor(
        frame: &mut Frame,
        painter: &mut TextPainter,
        model: &AppModel,
        session: &EditSession,
        rect: Rect,
        metrics: &ChipMetrics,
        direction: Direction,
        focused: bool,
    ) {
        let theme = &model.theme.editor;
        let line_height = painter.line_height() as f32;

        frame.draw_bordered_rect(
            rect,
            theme.background.to_argb_u32(),
            theme.border.to_argb_u32(),
        );

        let text_x = rect.x + metrics.padding_x;
        let text_y = rect.y + ((rect.height - line_height) / 2.0).round();
        let shown = visual_order(session.text(), direction);

        if session.is_all_selected() {
            let text_width = painter.measure_width(&shown);
            frame.fill_rect(
                Rect::new(text_x, text_y, text_width, line_height),
                theme.selection_background.to_argb_u32(),
            );
        }
        painter.draw(frame, text_x, text_y, &shown, theme.foreground.to_argb_u32());

        if focused {
            let (before, after) = session.split_at_caret();
            let offset = match direction {
                Direction::Ltr => painter.measure_width(before),
                Direction::Rtl => painter.measure_width(after),
            };
            frame.fill_rect(
                Rect::new((text_x + offset).round(), text_y, 2.0, line_height),
                theme.caret.to_argb_u32(),
            );
        }
    }

    fn render_buttons(
        frame: &mut Frame,
        painter: &mut TextPainter,
        model: &AppModel,
        layout: &WindowLayout,
    ) {
        let theme = &model.theme;
        for button in Button::ALL {
            let (background, foreground) = match button {
                Button::Submit => (
                    theme.button.primary_background,
                    theme.button.primary_foreground,
                ),
                _ => (theme.button.background, theme.button.foreground),
            };
            let rect = layout.button_rect(button);
            frame.draw_bordered_rect(
                rect,
                background.to_argb_u32(),
                theme.panel.border.to_argb_u32(),
            );
            painter.draw_centered(frame, rect, button.label(), foreground.to_argb_u32());
        }
    }

    fn render_status(
        frame: &mut Frame,
        painter: &mut TextPainter,
        model: &AppModel,
        keymap: &Keymap,
        layout: &WindowLayout,
    ) {
        let color = model.theme.window.muted.to_argb_u32();
        let line_height = painter.line_height() as f32;
        let status = layout.status;
        let y = status.y + ((status.height - line_height) / 2.0).round();

        painter.draw(frame, status.x, y, &model.session.status_text(), color);

        let hint: Vec<String> = [Command::SubmitSentence, Command::ToggleHelp]
            .into_iter()
            .filter_map(|command| {
                let keys = keymap.display_for(command)?;
                Some(format!("{}: {}", keys, command.display_name()))
            })
            .collect();
        let hint = hint.join("   ");
        let hint_width = painter.measure_width(&hint);
        painter.draw(frame, (status.right() - hint_width).max(status.x), y, &hint, color);
    }

    fn render_help(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel, keymap: &Keymap) {
        let theme = &model.theme.overlay;
        let line_height = painter.line_height() as f32;
        let width = frame.width() as f32;
        let height = frame.height() as f32;

        frame.fill_rect_blended(
            Rect::new(0.0, 0.0, width, height),
            theme.backdrop.to_argb_u32(),
        );

        let rows: Vec<(String, &str)> = HELP_COMMANDS
            .iter()
            .filter_map(|&command| Some((keymap.display_for(command)?, command.display_name())))
            .collect();

        let pad = line_height;
        let key_column = rows
            .iter()
            .map(|(keys, _)| painter.measure_width(keys))
            .fold(0.0, f32::max);
        let name_column = rows
            .iter()
            .map(|(_, name)| painter.measure_width(name))
            .fold(0.0, f32::max);

        let box_width = (key_column + name_column + pad * 3.0).min(width - 2.0 * pad);
        let box_height = (line_height * (rows.len() as f32 + 3.0) + pad * 2.0).min(height - 2.0 * pad);
        let overlay = Rect::new(
            ((width - box_width) / 2.0).round(),
            ((height - box_height) / 2.0).round(),
            box_width.max(0.0),
            box_height.max(0.0),
        );

        frame.draw_bordered_rect(
            overlay,
            theme.background.to_argb_u32(),
            theme.border.to_argb_u32(),
        );
        frame.set_clip(overlay);

        let mut y = overlay.y + pad;
        painter.draw(
            frame,
            overlay.x + pad,
            y,
            "Keyboard shortcuts",
            theme.foreground.to_argb_u32(),
        );
        y += line_height * 1.5;

        for (keys, name) in &rows {
            painter.draw(frame, overlay.x + pad, y, keys, theme.key.to_argb_u32());
            painter.draw(
                frame,
                overlay.x + pad * 2.0 + key_column,
                y,
                name,
                theme.foreground.to_argb_u32(),
            );
            y += line_height;
        }

        y += line_height * 0.5;
        painter.draw(
            frame,
            overlay.x + pad,
            y,
            "Click anywhere to close",
            model.theme.window.muted.to_argb_u32(),
        );
        frame.clear_clip();
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

/// Read the configured font, or the first system font that exists
fn load_font(configured: Option<&Path>) -> Result<Font> {
    let path = match configured {
        Some(path) => path.to_path_buf(),
        None => FONT_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file())
            .ok_or_else(|| {
                anyhow!("No usable font found; pass --font PATH or set font_path in config.yaml")
            })?,
    };

    let bytes =
        std::fs::read(&path).with_context(|| format!("Failed to read font {}", path.display()))?;
    let font = Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow!("Failed to load font {}: {}", path.display(), e))?;
    tracing::info!("Loaded font {}", path.display());
    Ok(font)
}

/// Characters in drawing order
///
/// Glyphs are not shaped, so a right-to-left word is drawn reversed.
fn visual_order(text: &str, direction: Direction) -> Cow<'_, str> {
    match direction {
        Direction::Ltr => Cow::Borrowed(text),
        Direction::Rtl => Cow::Owned(text.chars().rev().collect()),
    }
}
