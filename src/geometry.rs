//! Layout math shared by rendering and mouse hit-testing
//!
//! Everything here is pure: pixel rectangles in, pixel rectangles out.

/// Axis-aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }

    /// Same rectangle moved up by `dy`
    pub fn scrolled(&self, dy: f32) -> Rect {
        Rect::new(self.x, self.y - dy, self.width, self.height)
    }

    /// Overlap of two rectangles; zero-sized when they are disjoint
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, (right - x).max(0.0), (bottom - y).max(0.0))
    }
}

/// Reading direction of a row of chips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Direction of the first strongly directional character
    ///
    /// Arabic and Hebrew letters are right-to-left; other letters are
    /// left-to-right. Text without letters is left-to-right.
    pub fn detect(text: &str) -> Direction {
        text.chars()
            .find_map(|c| {
                if is_rtl_char(c) {
                    Some(Direction::Rtl)
                } else if c.is_alphabetic() {
                    Some(Direction::Ltr)
                } else {
                    None
                }
            })
            .unwrap_or_default()
    }
}

fn is_rtl_char(c: char) -> bool {
    matches!(c as u32,
        0x0590..=0x05FF   // Hebrew
        | 0x0600..=0x06FF // Arabic
        | 0x0750..=0x077F // Arabic Supplement
        | 0x08A0..=0x08FF // Arabic Extended-A
        | 0xFB1D..=0xFDFF // Hebrew and Arabic presentation forms
        | 0xFE70..=0xFEFF)
        && c.is_alphabetic()
}

/// Chip sizing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipMetrics {
    /// Horizontal padding on each side of the word
    pub padding_x: f32,
    pub height: f32,
    /// Space between chips in a row
    pub gap_x: f32,
    /// Space between rows
    pub gap_y: f32,
}

impl ChipMetrics {
    /// Metrics proportional to a line height
    pub fn for_line_height(line_height: f32) -> Self {
        Self {
            padding_x: (line_height * 0.5).round(),
            height: (line_height * 1.6).round(),
            gap_x: (line_height * 0.4).round(),
            gap_y: (line_height * 0.4).round(),
        }
    }
}

/// Position one chip per token, wrapping into rows inside `area`
///
/// `widths` are the measured text widths. Rows fill from the left for LTR
/// and from the right for RTL; a chip wider than the area is clipped to it.
/// The returned rectangles may extend below `area` when the sentence does
/// not fit; the caller scrolls.
pub fn layout_tokens(
    widths: &[f32],
    area: Rect,
    metrics: &ChipMetrics,
    direction: Direction,
) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(widths.len());
    let mut cursor = 0.0_f32;
    let mut y = area.y;

    for &text_width in widths {
        let width = (text_width + 2.0 * metrics.padding_x).min(area.width);

        if cursor > 0.0 && cursor + width > area.width {
            cursor = 0.0;
            y += metrics.height + metrics.gap_y;
        }

        let x = match direction {
            Direction::Ltr => area.x + cursor,
            Direction::Rtl => area.right() - cursor - width,
        };
        rects.push(Rect::new(x, y, width, metrics.height));
        cursor += width + metrics.gap_x;
    }

    rects
}

/// Index of the chip under a point
pub fn hit_test(rects: &[Rect], x: f32, y: f32) -> Option<usize> {
    rects.iter().position(|r| r.contains(x, y))
}

/// Total height the laid-out chips occupy below `top`
pub fn content_height(rects: &[Rect], top: f32) -> f32 {
    rects
        .iter()
        .map(|r| r.bottom() - top)
        .fold(0.0, f32::max)
}

/// Scroll offset that brings `target` fully into `viewport`
///
/// `target` is in content coordinates (unscrolled); the offset only moves
/// as far as needed.
pub fn scroll_to_reveal(scroll: f32, target: Rect, viewport: Rect) -> f32 {
    let top = target.y - viewport.y;
    let bottom = target.bottom() - viewport.y;
    if top < scroll {
        top.max(0.0)
    } else if bottom > scroll + viewport.height {
        bottom - viewport.height
    } else {
        scroll
    }
}

/// The clickable buttons under the correction area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Submit,
    Reset,
    Help,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Submit, Button::Reset, Button::Help];

    pub fn label(self) -> &'static str {
        match self {
            Button::Submit => "Submit",
            Button::Reset => "Reset",
            Button::Help => "Help",
        }
    }
}

/// Window regions, top to bottom
#[derive(Debug, Clone, PartialEq)]
pub struct WindowLayout {
    pub source_panel: Rect,
    pub target_panel: Rect,
    /// Chip area inside the target panel
    pub correction_area: Rect,
    /// Parallel to `Button::ALL`
    pub buttons: [Rect; 3],
    pub status: Rect,
}

impl WindowLayout {
    pub fn compute(width: f32, height: f32, line_height: f32) -> Self {
        let margin = (line_height * 0.8).round();
        let label = line_height + margin * 0.5;
        let inner_width = (width - 2.0 * margin).max(0.0);

        let source_height = label + 2.0 * line_height + margin;
        let source_panel = Rect::new(margin, margin, inner_width, source_height);

        let button_height = (line_height * 1.8).round();
        let status_height = line_height + margin;
        let status = Rect::new(margin, height - status_height, inner_width, status_height);
        let buttons_y = status.y - margin - button_height;

        let target_y = source_panel.bottom() + margin;
        let target_height = (buttons_y - margin - target_y).max(label + line_height);
        let target_panel = Rect::new(margin, target_y, inner_width, target_height);
        let correction_area = Rect::new(
            target_panel.x + margin,
            target_panel.y + label,
            (target_panel.width - 2.0 * margin).max(0.0),
            (target_panel.height - label - margin * 0.5).max(0.0),
        );

        let button_width = (line_height * 6.0).round();
        let mut buttons = [Rect::default(); 3];
        for (i, rect) in buttons.iter_mut().enumerate() {
            let x = margin + i as f32 * (button_width + margin * 0.5);
            *rect = Rect::new(x, buttons_y, button_width, button_height);
        }

        Self {
            source_panel,
            target_panel,
            correction_area,
            buttons,
            status,
        }
    }

    /// Which button, if any, is under a point
    pub fn button_at(&self, x: f32, y: f32) -> Option<Button> {
        Button::ALL
            .iter()
            .zip(&self.buttons)
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(button, _)| *button)
    }

    pub fn button_rect(&self, button: Button) -> Rect {
        let idx = Button::ALL.iter().position(|b| *b == button).unwrap_or(0);
        self.buttons[idx]
    }
}
