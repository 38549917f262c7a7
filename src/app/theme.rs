//! UI 主题：把颜色集中管理，避免散落在渲染代码里。
//!
//! 高亮背景是任意 RGB，终端不支持真彩色时降级到 256 / 16 色。

use crate::models::HexColor;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub color_support: TerminalColorSupport,
    pub title_fg: Color,
    pub menu_bar_bg: Color,
    pub menu_bar_fg: Color,
    pub menu_active_bg: Color,
    pub menu_active_fg: Color,
    pub menu_border: Color,
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_selected_bg: Color,
    pub menu_selected_fg: Color,
    pub menu_muted_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub error_fg: Color,
    pub warning_fg: Color,
    pub dialog_border: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("TEXTEDITOR_COLOR_SUPPORT") {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor")
        || colorterm.contains("24bit")
        || term.contains("truecolor")
        || term.contains("24bit")
        || term.contains("direct")
    {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            color_support: TerminalColorSupport::TrueColor,
            title_fg: Color::Indexed(6),       // Cyan
            menu_bar_bg: Color::Indexed(8),    // DarkGray
            menu_bar_fg: Color::Indexed(15),   // White
            menu_active_bg: Color::Indexed(6), // Cyan
            menu_active_fg: Color::Indexed(0), // Black
            menu_border: Color::Indexed(6),
            menu_bg: Color::Reset,
            menu_fg: Color::Indexed(15),
            menu_selected_bg: Color::Indexed(8),
            menu_selected_fg: Color::Indexed(15),
            menu_muted_fg: Color::Indexed(8),
            status_bg: Color::Indexed(8),
            status_fg: Color::Indexed(15),
            error_fg: Color::Indexed(9),    // LightRed
            warning_fg: Color::Indexed(11), // LightYellow
            dialog_border: Color::Indexed(6),
        }
    }
}

impl UiTheme {
    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.color_support = detect_terminal_color_support();
    }

    pub fn with_color_support(mut self, support: TerminalColorSupport) -> Self {
        self.color_support = support;
        self
    }

    /// 高亮背景在当前终端下的颜色
    pub fn highlight_color(&self, color: HexColor) -> Color {
        map_color_for_support(Color::Rgb(color.r, color.g, color.b), self.color_support)
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (_, value) => value,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;

    for index in 0u16..=255u16 {
        let index_u8 = index as u8;
        let (pr, pg, pb) = ansi256_index_to_rgb(index_u8);
        let distance = color_distance_sq((r, g, b), (pr, pg, pb));
        if distance < best_distance {
            best_distance = distance;
            best_index = index_u8;
        }
    }

    best_index
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;

    for (index, rgb) in ANSI16_RGB.iter().copied().enumerate() {
        let distance = color_distance_sq((r, g, b), rgb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index as u8;
        }
    }

    best_index
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
