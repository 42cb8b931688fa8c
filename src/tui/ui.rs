//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tictac_core::{BOARD_SIZE, Cell, GridView, Mark};

use super::app::App;
use super::geometry::{BoardGeometry, screen_layout};
use super::glyph::glyph_lines;

/// Renders the title, board and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = screen_layout(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_board(frame, area, app, &app.geometry(area));

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, geometry: &BoardGeometry) {
    let grid = geometry.grid_rect();
    let line_style = Style::default().fg(Color::DarkGray);

    for y in geometry.horizontal_lines() {
        let columns = geometry.vertical_lines();
        let line: String = (grid.x..grid.right())
            .map(|x| if columns.contains(&x) { '┼' } else { '─' })
            .collect();
        let paragraph = Paragraph::new(line).style(line_style);
        render_clipped(frame, area, paragraph, Rect::new(grid.x, y, grid.width, 1));
    }

    // Vertical lines run between the horizontal ones, which own the crossings.
    for x in geometry.vertical_lines() {
        for row in 0..BOARD_SIZE {
            let Ok(cell) = Cell::new(row, 0) else {
                continue;
            };
            let tile = geometry.tile_rect(cell);
            let segment: Vec<Line> = (0..tile.height).map(|_| Line::from("│")).collect();
            let paragraph = Paragraph::new(Text::from(segment)).style(line_style);
            render_clipped(frame, area, paragraph, Rect::new(x, tile.y, 1, tile.height));
        }
    }

    for cell in Cell::ALL {
        draw_cell(frame, area, app, geometry, cell);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, geometry: &BoardGeometry, cell: Cell) {
    let tile = geometry.tile_rect(cell);
    let mark = app.controller().board().mark_at(cell);

    let base_style = match mark {
        Mark::Empty => Style::default().fg(Color::DarkGray),
        Mark::First => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Mark::Second => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if app.controller().selection().contains(&cell) {
        base_style.bg(Color::Yellow)
    } else if cell == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines: Vec<Line> = glyph_lines(mark, tile.width, tile.height)
        .into_iter()
        .map(Line::from)
        .collect();
    render_clipped(frame, area, Paragraph::new(lines).style(style), tile);
}

/// Renders `widget` into the part of `target` that lies inside `area`.
fn render_clipped<W: Widget>(frame: &mut Frame, area: Rect, widget: W, target: Rect) {
    let clipped = target.intersection(area);
    if clipped.is_empty() {
        return;
    }
    frame.render_widget(widget, clipped);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::geometry::TileScale;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draws_grid_and_marks() {
        let mut app = App::new(TileScale::Medium, true);
        app.click(Some(Cell::CENTER));
        app.click(Cell::from_index(0));

        let screen = rendered(&app);
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains('┼'));
        assert!(screen.contains("╭──────╮"));
        assert!(screen.contains('\\'));
        assert!(screen.contains("O to move") || screen.contains("X to move"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = App::new(TileScale::Large, true);
        let mut terminal = Terminal::new(TestBackend::new(8, 6)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
    }
}
