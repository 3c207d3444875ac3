use super::aggregate::{level, Grid, COLUMNS, ROWS};
use crate::util::month_label;
use chrono::Days;
use clap::ValueEnum;
use console::{measure_text_width, Color, Style};

const CELL: &str = "  ";
const GAP: &str = " ";
const BLANK_LABEL: &str = "   ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Style only when the terminal supports it
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn style(self) -> Style {
        match self {
            ColorMode::Auto => Style::new(),
            ColorMode::Always => Style::new().force_styling(true),
            ColorMode::Never => Style::new().force_styling(false),
        }
    }
}

/// Background colors by contribution level, lowest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    tiers: Vec<Color>,
}

impl Palette {
    /// `None` if `tiers` is empty.
    pub fn new(tiers: Vec<Color>) -> Option<Self> {
        if tiers.is_empty() {
            None
        } else {
            Some(Self { tiers })
        }
    }

    /// Dark grey for idle days, then four greens of increasing brightness.
    pub fn greens() -> Self {
        Self {
            tiers: vec![
                Color::Color256(236),
                Color::Color256(22),
                Color::Color256(28),
                Color::Color256(34),
                Color::Color256(46),
            ],
        }
    }

    pub fn max_level(&self) -> usize {
        self.tiers.len()
    }

    pub fn level(&self, count: u32) -> usize {
        level(count, self.max_level())
    }

    pub fn tier(&self, count: u32) -> Color {
        self.tiers[self.level(count)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::greens()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Normal,
    Rounded,
}

impl Border {
    // top-left, top-right, bottom-left, bottom-right, horizontal, vertical
    fn glyphs(self) -> [char; 6] {
        match self {
            Border::Normal => ['┌', '┐', '└', '┘', '─', '│'],
            Border::Rounded => ['╭', '╮', '╰', '╯', '─', '│'],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub border: Border,
    pub border_color: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub padding: Padding,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            border: Border::Normal,
            border_color: Some(Color::White),
            background: Some(Color::Color256(237)),
            bold: true,
            padding: Padding {
                top: 1,
                right: 2,
                bottom: 0,
                left: 1,
            },
        }
    }
}

impl Frame {
    fn fill_style(&self, mode: ColorMode) -> Style {
        let mut style = mode.style();
        if let Some(bg) = self.background {
            style = style.bg(bg);
        }
        if self.bold {
            style = style.bold();
        }
        style
    }

    fn border_style(&self, mode: ColorMode) -> Style {
        let mut style = self.fill_style(mode);
        if let Some(fg) = self.border_color {
            style = style.fg(fg);
        }
        style
    }

    /// Surround `body` with padding and a border. Lines are padded to the widest visible line.
    pub fn wrap(&self, body: &str, mode: ColorMode) -> String {
        let [tl, tr, bl, br, h, v] = self.border.glyphs();
        let border = self.border_style(mode);
        let fill = self.fill_style(mode);
        let pad = self.padding;

        let lines: Vec<&str> = body.lines().collect();
        let width = lines.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);
        let inner = pad.left + width + pad.right;
        let edge = border.apply_to(v).to_string();
        let blank = format!("{edge}{}{edge}\n", fill.apply_to(" ".repeat(inner)));

        let mut out = String::new();
        out.push_str(&format!(
            "{}\n",
            border.apply_to(format!("{tl}{}{tr}", h.to_string().repeat(inner)))
        ));
        for _ in 0..pad.top {
            out.push_str(&blank);
        }
        for line in &lines {
            let trailing = width - measure_text_width(line) + pad.right;
            out.push_str(&format!(
                "{edge}{}{line}{}{edge}\n",
                fill.apply_to(" ".repeat(pad.left)),
                fill.apply_to(" ".repeat(trailing)),
            ));
        }
        for _ in 0..pad.bottom {
            out.push_str(&blank);
        }
        out.push_str(&format!(
            "{}\n",
            border.apply_to(format!("{bl}{}{br}", h.to_string().repeat(inner)))
        ));
        out
    }
}

/// Everything that decides how a calendar looks.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub palette: Palette,
    pub frame: Frame,
    pub color: ColorMode,
}

impl Theme {
    pub fn style(&self) -> Style {
        self.color.style()
    }
}

pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Month labels for every fourth week, three columns per week.
    pub fn header(&self, grid: &Grid) -> String {
        let mut line = String::from(" ");
        for week in 0..COLUMNS {
            if week % 4 == 0 {
                let date = grid.start_date() + Days::new((week * 7) as u64);
                line.push_str(month_label(&date));
            } else {
                line.push_str(BLANK_LABEL);
            }
        }
        line
    }

    pub fn body(&self, grid: &Grid) -> String {
        let fill = self.theme.frame.fill_style(self.theme.color);
        let gap = fill.apply_to(GAP).to_string();

        let mut out = String::new();
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let tier = self.theme.palette.tier(grid.count(row, col));
                out.push_str(&gap);
                out.push_str(&self.theme.style().bg(tier).apply_to(CELL).to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Month header line followed by the framed grid.
    pub fn render(&self, grid: &Grid) -> String {
        format!(
            "{}\n{}",
            self.theme.style().apply_to(self.header(grid)),
            self.theme.frame.wrap(&self.body(grid), self.theme.color)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::aggregate::aggregate;
    use crate::model::{Commit, CommitHistory};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plain() -> Theme {
        Theme {
            color: ColorMode::Never,
            ..Theme::default()
        }
    }

    fn grid_with(days: &[(NaiveDate, usize)], as_of: NaiveDate) -> Grid {
        let mut history = CommitHistory::new("alice");
        for (date, n) in days {
            for i in 0..*n {
                history.commits.push(Commit {
                    hash: format!("{i:07}"),
                    author: "alice".to_string(),
                    timestamp: *date,
                });
            }
        }
        aggregate(&history, as_of)
    }

    fn cell(color: Color) -> String {
        Style::new().force_styling(true).bg(color).apply_to(CELL).to_string()
    }

    #[test]
    fn header_labels_every_fourth_week() {
        let grid = grid_with(&[], ymd(2024, 12, 30));
        // start date is 2024-01-02
        let header = Renderer::new(plain()).header(&grid);

        assert_eq!(header.len(), 1 + COLUMNS * 3);
        assert!(header.starts_with(" Jan         Jan         Feb"));
        assert_eq!(&header[1 + 48 * 3..1 + 49 * 3], "Dec");
        assert_eq!(&header[1 + 49 * 3..], " ".repeat(9));
    }

    #[test]
    fn plain_render_geometry() {
        let grid = grid_with(&[], ymd(2024, 6, 30));
        let out = Renderer::new(plain()).render(&grid);
        let lines: Vec<&str> = out.lines().collect();

        // header, border, top padding, seven rows, border
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], Renderer::new(plain()).header(&grid));

        let framed = &lines[1..];
        let width = measure_text_width(framed[0]);
        assert!(framed.iter().all(|l| measure_text_width(l) == width));
        assert_eq!(width, 1 + 1 + COLUMNS * 3 + 2 + 1);
        assert!(framed[0].starts_with('┌') && framed[0].ends_with('┐'));
        assert!(framed[9].starts_with('└') && framed[9].ends_with('┘'));
        assert_eq!(framed[2], format!("│ {}  │", " ".repeat(COLUMNS * 3)));
        assert!(framed.iter().all(|l| !l.contains("Jul")));
    }

    #[test]
    fn rounded_border_and_no_padding() {
        let theme = Theme {
            frame: Frame {
                border: Border::Rounded,
                padding: Padding::default(),
                ..Frame::default()
            },
            ..plain()
        };
        let out = Frame::wrap(&theme.frame, "ab\nc\n", theme.color);
        assert_eq!(out, "╭──╮\n│ab│\n│c │\n╰──╯\n");
    }

    #[test]
    fn cells_use_injected_palette() {
        let palette = Palette::new(vec![
            Color::Color256(1),
            Color::Color256(2),
            Color::Color256(3),
        ])
        .unwrap();
        let theme = Theme {
            palette,
            frame: Frame {
                background: None,
                bold: false,
                ..Frame::default()
            },
            color: ColorMode::Always,
        };
        let as_of = ymd(2024, 7, 1);
        let grid = grid_with(&[(ymd(2024, 6, 1), 1), (ymd(2024, 6, 2), 7)], as_of);
        let body = Renderer::new(theme).body(&grid);

        assert_eq!(body.matches(&cell(Color::Color256(2))).count(), 1);
        assert_eq!(body.matches(&cell(Color::Color256(3))).count(), 1);
        assert_eq!(body.matches(&cell(Color::Color256(1))).count(), 362);
    }

    #[test]
    fn palette_caps_levels() {
        let palette = Palette::greens();
        assert_eq!(palette.max_level(), 5);
        assert_eq!(palette.tier(0), Color::Color256(236));
        assert_eq!(palette.tier(4), palette.tier(5));
        assert_eq!(palette.tier(100), palette.tier(4));
        assert_ne!(palette.tier(3), palette.tier(4));
        assert!(Palette::new(Vec::new()).is_none());
    }
}
