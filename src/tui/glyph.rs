//! Mark glyphs scaled to a tile.

use tictac_core::Mark;

/// Draws `mark` into a `width` x `height` tile.
///
/// The mark is inset by a sixth of the tile on each side. Tiles whose inner
/// area is under 3x3 get the mark's single symbol in the middle. Always
/// returns `height` lines of exactly `width` characters.
pub fn glyph_lines(mark: Mark, width: u16, height: u16) -> Vec<String> {
    let (w, h) = (width as usize, height as usize);
    let mut canvas = vec![vec![' '; w]; h];

    let (inset_x, inset_y) = (w / 6, h / 6);
    let (inner_w, inner_h) = (w - 2 * inset_x, h - 2 * inset_y);

    match mark {
        Mark::Empty => {}
        _ if inner_w < 3 || inner_h < 3 => {
            if w > 0 && h > 0 {
                canvas[h / 2][w / 2] = mark.symbol();
            }
        }
        Mark::First => {
            for r in 0..inner_h {
                let left = r * (inner_w - 1) / (inner_h - 1);
                let right = inner_w - 1 - left;
                let row = &mut canvas[inset_y + r];
                if left == right {
                    row[inset_x + left] = 'X';
                } else {
                    row[inset_x + left] = '\\';
                    row[inset_x + right] = '/';
                }
            }
        }
        Mark::Second => {
            let last_r = inner_h - 1;
            let last_c = inner_w - 1;
            for r in 0..inner_h {
                for c in 0..inner_w {
                    let ch = match (r, c) {
                        (0, 0) => '╭',
                        (0, c) if c == last_c => '╮',
                        (r, 0) if r == last_r => '╰',
                        (r, c) if r == last_r && c == last_c => '╯',
                        (0, _) => '─',
                        (r, _) if r == last_r => '─',
                        (_, 0) => '│',
                        (_, c) if c == last_c => '│',
                        _ => ' ',
                    };
                    canvas[inset_y + r][inset_x + c] = ch;
                }
            }
        }
    }

    canvas.into_iter().map(|row| row.into_iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::geometry::TileScale;
    use strum::IntoEnumIterator;

    #[test]
    fn test_glyph_fills_tile_exactly() {
        for scale in TileScale::iter() {
            let (w, h) = scale.tile_size();
            for mark in [Mark::Empty, Mark::First, Mark::Second] {
                let lines = glyph_lines(mark, w, h);
                assert_eq!(lines.len(), h as usize);
                assert!(lines.iter().all(|l| l.chars().count() == w as usize));
            }
        }
    }

    #[test]
    fn test_empty_glyph_is_blank() {
        let lines = glyph_lines(Mark::Empty, 12, 6);
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_medium_x_has_crossing_strokes() {
        let lines = glyph_lines(Mark::First, 12, 6);
        assert_eq!(lines[0].trim(), "");
        assert_eq!(lines[1], "  \\      /  ");
        assert_eq!(lines[4], "  /      \\  ");
    }

    #[test]
    fn test_medium_o_is_a_box() {
        let lines = glyph_lines(Mark::Second, 12, 6);
        assert_eq!(lines[1], "  ╭──────╮  ");
        assert_eq!(lines[2], "  │      │  ");
        assert_eq!(lines[4], "  ╰──────╯  ");
    }

    #[test]
    fn test_tiny_tile_uses_symbol() {
        let lines = glyph_lines(Mark::Second, 3, 1);
        assert_eq!(lines, vec![" O ".to_string()]);
    }
}
