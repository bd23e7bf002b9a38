/// Truecolor half-block blitter: presents a framebuffer in the terminal
use crossterm::{
    cursor,
    style::{Color as TermColor, Colors, Print, ResetColor, SetColors},
    QueueableCommand,
};
use softrast_core::{Color, Framebuffer};
use std::io::Write;

/// Upper half block: foreground paints the top pixel, background the bottom one
const HALF_BLOCK: char = '▀';

/// Destination rectangle. Position is in terminal cells, size is in pixels,
/// so a cell row covers two pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub column: u16,
    pub row: u16,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Full-screen viewport for a terminal of `columns` x `rows` cells
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self {
            column: 0,
            row: 0,
            width: columns as u32,
            height: rows as u32 * 2,
        }
    }

    pub fn cell_rows(&self) -> u32 {
        (self.height + 1) / 2
    }
}

/// Presents pixel buffers as rows of `▀` cells
#[derive(Debug, Default)]
pub struct BlockPresenter;

impl BlockPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Blit `frame` into `viewport` with nearest-neighbour sampling. When the
    /// sizes match every pixel maps to itself.
    pub fn present<W: Write>(&self, writer: &mut W, frame: &Framebuffer, viewport: Viewport) -> std::io::Result<()> {
        let cells = cell_colors(frame, viewport);
        if cells.is_empty() {
            return Ok(());
        }

        for (row, line) in cells.chunks(viewport.width as usize).enumerate() {
            writer.queue(cursor::MoveTo(viewport.column, viewport.row + row as u16))?;

            let mut current = None;
            for &(top, bottom) in line {
                if current != Some((top, bottom)) {
                    writer.queue(SetColors(Colors::new(term_color(top), bottom.map_or(TermColor::Reset, term_color))))?;
                    current = Some((top, bottom));
                }
                writer.queue(Print(HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Top and bottom pixel of every cell, row by row. The bottom pixel is `None`
/// on the last row of a viewport with odd pixel height.
pub fn cell_colors(frame: &Framebuffer, viewport: Viewport) -> Vec<(Color, Option<Color>)> {
    if frame.is_empty() || viewport.width == 0 || viewport.height == 0 {
        return Vec::new();
    }

    let mut cells = Vec::with_capacity(viewport.width as usize * viewport.cell_rows() as usize);
    for row in 0..viewport.cell_rows() {
        let top_y = row * 2;
        let bottom_y = top_y + 1;
        for x in 0..viewport.width {
            let top = sample(frame, viewport, x, top_y);
            let bottom = (bottom_y < viewport.height).then(|| sample(frame, viewport, x, bottom_y));
            cells.push((top, bottom));
        }
    }
    cells
}

fn sample(frame: &Framebuffer, viewport: Viewport, x: u32, y: u32) -> Color {
    let sx = nearest(x, viewport.width, frame.width());
    let sy = nearest(y, viewport.height, frame.height());
    frame.get_pixel(sx, sy).unwrap_or(Color::BLACK)
}

/// Source coordinate for destination coordinate `dst` when stretching
/// `dst_len` pixels over `src_len`
fn nearest(dst: u32, dst_len: u32, src_len: u32) -> u32 {
    (dst as u64 * src_len as u64 / dst_len as u64) as u32
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
