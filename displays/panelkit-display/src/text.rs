//! Text layout and menus
//!
//! Layout is computed from glyph widths; rendering goes through any
//! [`GraphicsBackend`].

use heapless::Vec;

use crate::backend::{DisplayError, GraphicsBackend};
use crate::color::Rgb24;
use crate::font::Font;
use crate::geometry::{Line, Point, Rect};

/// Maximum number of menu entries
pub const MAX_MENU_ITEMS: usize = 8;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Pixel width of `text`; characters without a glyph count as zero
pub fn line_width(font: &Font, text: &str) -> u32 {
    font.line_width(text)
}

/// Starting x coordinate of `text` on a surface `surface_width` wide
///
/// `pad` is the left margin for [`Alignment::Left`], the offset of the
/// centring area for [`Alignment::Center`] and the right margin for
/// [`Alignment::Right`].
pub fn layout_line(
    font: &Font,
    text: &str,
    alignment: Alignment,
    surface_width: u16,
    pad: u16,
) -> u16 {
    let width = line_width(font, text).min(u16::MAX as u32) as u16;
    let free = surface_width.saturating_sub(pad).saturating_sub(width);
    match alignment {
        Alignment::Left => pad,
        Alignment::Center => pad.saturating_add(free / 2),
        Alignment::Right => free,
    }
}

/// Print one aligned line; `at.x` is the padding passed to [`layout_line`]
///
/// Returns the number of characters printed.
pub fn print_line<B: GraphicsBackend>(
    lcd: &mut B,
    text: &str,
    alignment: Alignment,
    at: Point,
) -> Result<usize, DisplayError> {
    let font = lcd.font().ok_or(DisplayError::NoFont)?;
    let (width, _) = lcd.size();
    let x = layout_line(font, text, alignment, width, at.x);
    lcd.put_string(Point::new(x, at.y), text)
}

/// Titled list of entries
#[derive(Debug, Clone)]
pub struct Menu<'a> {
    pub title: &'a str,
    pub items: Vec<&'a str, MAX_MENU_ITEMS>,
    /// Title bar and item text colour
    pub color: Rgb24,
    pub background: Rgb24,
    /// Selection border colour
    pub selected_color: Rgb24,
}

impl<'a> Menu<'a> {
    pub fn new(title: &'a str, color: Rgb24, background: Rgb24, selected_color: Rgb24) -> Self {
        Self {
            title,
            items: Vec::new(),
            color,
            background,
            selected_color,
        }
    }

    /// Append an entry; returns it back when the menu is full
    pub fn push(&mut self, item: &'a str) -> Result<(), &'a str> {
        self.items.push(item)
    }

    /// Builder form of [`Menu::push`], ignoring entries past the limit
    pub fn with_items(mut self, items: &[&'a str]) -> Self {
        for item in items {
            if self.items.push(*item).is_err() {
                break;
            }
        }
        self
    }
}

/// Draw `menu` with a border around entry `selected`
///
/// The title bar is filled with the menu colour and the title printed
/// centred in inverted colours. Entries follow one line each, a line being
/// the font height plus two pixels for the border. A menu taller than the
/// surface fails with [`DisplayError::OutOfBounds`] before anything is drawn.
pub fn show_menu<B: GraphicsBackend>(
    lcd: &mut B,
    menu: &Menu<'_>,
    selected: usize,
) -> Result<(), DisplayError> {
    let font = lcd.font().ok_or(DisplayError::NoFont)?;
    if selected >= menu.items.len() {
        return Err(DisplayError::OutOfBounds);
    }
    let (width, height) = lcd.size();
    let line_height = font.height as u16 + 2;
    // Title bar plus one line per entry
    if (menu.items.len() as u32 + 1) * line_height as u32 > height as u32 {
        return Err(DisplayError::OutOfBounds);
    }

    lcd.fill_rect(Rect::new(Point::new(0, 0), width, line_height), menu.color)?;
    lcd.set_font_colors(menu.color, menu.background);
    print_line(lcd, menu.title, Alignment::Center, Point::new(0, 1))?;

    lcd.set_font_colors(menu.background, menu.color);
    for (i, item) in menu.items.iter().enumerate() {
        let y = (i as u16 + 1) * line_height + 1;
        print_line(lcd, item, Alignment::Left, Point::new(1, y))?;
    }

    // Row 0 is the title bar
    let row = selected as u16 + 1;
    let top = line_height * row;
    let bottom = line_height * (row + 1) - 1;
    lcd.draw_h_line(Line::new(Point::new(0, top), width), menu.selected_color)?;
    lcd.draw_h_line(Line::new(Point::new(0, bottom), width), menu.selected_color)?;
    lcd.draw_v_line(Line::new(Point::new(0, top), line_height - 1), menu.selected_color)?;
    lcd.draw_v_line(
        Line::new(Point::new(width.saturating_sub(1), top), line_height - 1),
        menu.selected_color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Glyph;

    static GLYPHS: [Glyph; 3] = [
        Glyph { width: 5, offset: 0 },
        Glyph { width: 6, offset: 0 },
        Glyph { width: 7, offset: 0 },
    ];
    static BITMAP: [u8; 8] = [0; 8];
    static FONT: Font = Font {
        height: 8,
        first: b'a',
        last: b'c',
        glyphs: &GLYPHS,
        bitmap: &BITMAP,
    };

    #[test]
    fn test_layout_left() {
        assert_eq!(layout_line(&FONT, "abc", Alignment::Left, 160, 4), 4);
    }

    #[test]
    fn test_layout_right_touches_margin() {
        let x = layout_line(&FONT, "abc", Alignment::Right, 160, 4);
        assert_eq!(x as u32 + line_width(&FONT, "abc"), 160 - 4);
    }

    #[test]
    fn test_layout_center() {
        // 18 px of text in 160 px
        assert_eq!(layout_line(&FONT, "abc", Alignment::Center, 160, 0), 71);
        assert_eq!(layout_line(&FONT, "abc", Alignment::Center, 160, 10), 76);
    }

    #[test]
    fn test_layout_saturates() {
        assert_eq!(layout_line(&FONT, "abcabc", Alignment::Right, 20, 4), 0);
        assert_eq!(layout_line(&FONT, "abcabc", Alignment::Center, 20, 4), 4);
    }

    #[test]
    fn test_menu_capacity() {
        let mut menu = Menu::new("m", Rgb24::BLACK, Rgb24::WHITE, Rgb24::RED);
        for _ in 0..MAX_MENU_ITEMS {
            menu.push("x").unwrap();
        }
        assert_eq!(menu.push("y"), Err("y"));

        let menu = Menu::new("m", Rgb24::BLACK, Rgb24::WHITE, Rgb24::RED)
            .with_items(&["a"; MAX_MENU_ITEMS + 2]);
        assert_eq!(menu.items.len(), MAX_MENU_ITEMS);
    }
}
