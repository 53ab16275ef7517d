//! Software double-buffered RGB565 framebuffer and a board renderer for it.
//!
//! Drawing always goes to the back buffer; [`FrameBuffer::swap`] presents it,
//! the way a display controller swaps buffers on vertical sync.

use log::trace;

use crate::board::Board;
use crate::color::Side;
use crate::io::{Renderer, ResultDisplay};
use crate::outcome::GameOutcome;
use crate::pieces::{Piece, PieceKind};
use crate::position::{BOARD_SIZE, Position};

pub const WHITE: u16 = 0xFFFF;
pub const YELLOW: u16 = 0xFFE0;
pub const RED: u16 = 0xF800;
pub const GREEN: u16 = 0x07E0;
pub const GREY: u16 = 0xC618;
pub const ORANGE: u16 = 0xFC00;
pub const BLACK: u16 = 0x0000;

pub const RESOLUTION_X: usize = 320;
pub const RESOLUTION_Y: usize = 240;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub light_square: u16,
    pub dark_square: u16,
    pub white_piece: u16,
    pub black_piece: u16,
    pub highlight: u16,
    pub outline: u16,
    pub panel: u16,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            light_square: WHITE,
            dark_square: BLACK,
            white_piece: YELLOW,
            black_piece: ORANGE,
            highlight: GREEN,
            outline: RED,
            panel: GREY,
        }
    }
}

/// Screen geometry and colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub resolution_x: usize,
    pub resolution_y: usize,
    pub square_size: usize,
    pub board_origin_x: usize,
    pub board_origin_y: usize,
    pub palette: Palette,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            resolution_x: RESOLUTION_X,
            resolution_y: RESOLUTION_Y,
            square_size: 30,
            board_origin_x: 40,
            board_origin_y: 0,
            palette: Palette::default(),
        }
    }
}

impl DisplayConfig {
    pub fn board_extent(&self) -> usize {
        self.square_size * BOARD_SIZE as usize
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.square_size < GLYPH_SIZE {
            return Err(format!(
                "Square size {} is smaller than a piece glyph ({})",
                self.square_size, GLYPH_SIZE
            ));
        }
        if self.board_origin_x + self.board_extent() > self.resolution_x
            || self.board_origin_y + self.board_extent() > self.resolution_y
        {
            return Err(format!(
                "Board of {}px at ({}, {}) does not fit a {}x{} screen",
                self.board_extent(),
                self.board_origin_x,
                self.board_origin_y,
                self.resolution_x,
                self.resolution_y
            ));
        }
        Ok(())
    }

    /// Top-left pixel of a square. Rank 7 is drawn at the top.
    pub fn square_origin(&self, pos: &Position) -> (usize, usize) {
        let x = self.board_origin_x + pos.file as usize * self.square_size;
        let y = self.board_origin_y + (BOARD_SIZE - 1 - pos.rank) as usize * self.square_size;
        (x, y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    buffers: [Vec<u16>; 2],
    back: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            buffers: [vec![BLACK; width * height], vec![BLACK; width * height]],
            back: 1,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Writes one pixel of the back buffer. Pixels off the screen are dropped.
    pub fn plot_pixel(&mut self, x: usize, y: usize, color: u16) {
        if x < self.width && y < self.height {
            self.buffers[self.back][y * self.width + x] = color;
        }
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u16) {
        for row in y..(y + h).min(self.height) {
            for col in x..(x + w).min(self.width) {
                self.buffers[self.back][row * self.width + col] = color;
            }
        }
    }

    pub fn clear(&mut self, color: u16) {
        self.buffers[self.back].fill(color);
    }

    /// Starts the next frame from what is currently on screen.
    pub fn copy_front_to_back(&mut self) {
        let (first, second) = self.buffers.split_at_mut(1);
        if self.back == 0 {
            first[0].copy_from_slice(&second[0]);
        } else {
            second[0].copy_from_slice(&first[0]);
        }
    }

    /// Presents the back buffer. The previous front buffer becomes the new
    /// back buffer and keeps its stale contents.
    pub fn swap(&mut self) {
        self.back ^= 1;
        trace!("framebuffer swapped, back buffer is now {}", self.back);
    }

    pub fn front(&self) -> &[u16] {
        &self.buffers[self.back ^ 1]
    }

    pub fn back(&self) -> &[u16] {
        &self.buffers[self.back]
    }

    pub fn front_pixel(&self, x: usize, y: usize) -> Option<u16> {
        if x < self.width && y < self.height {
            Some(self.front()[y * self.width + x])
        } else {
            None
        }
    }
}

const GLYPH_SIZE: usize = 16;
const GLYPH_SCALE: usize = 2;

fn glyph(kind: PieceKind) -> [u8; 8] {
    match kind {
        PieceKind::Pawn => [0x00, 0x18, 0x3C, 0x18, 0x18, 0x3C, 0x7E, 0x00],
        PieceKind::Knight => [0x00, 0x1C, 0x3E, 0x76, 0x0E, 0x1E, 0x3E, 0x7E],
        PieceKind::Bishop => [0x18, 0x24, 0x3C, 0x18, 0x18, 0x3C, 0x7E, 0x00],
        PieceKind::Rook => [0x5A, 0x7E, 0x3C, 0x3C, 0x3C, 0x3C, 0x7E, 0x00],
        PieceKind::Queen => [0x5A, 0x5A, 0x7E, 0x3C, 0x3C, 0x3C, 0x7E, 0x00],
        PieceKind::King => [0x18, 0x3C, 0x18, 0x7E, 0x3C, 0x3C, 0x7E, 0x00],
    }
}

/// Draws boards into a [`FrameBuffer`] laid out by a [`DisplayConfig`].
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    config: DisplayConfig,
    frame: FrameBuffer,
}

impl FrameRenderer {
    pub fn new(config: DisplayConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(FrameRenderer {
            frame: FrameBuffer::new(config.resolution_x, config.resolution_y),
            config,
        })
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    fn draw_panels(&mut self, color: u16) {
        let board_end = self.config.board_origin_x + self.config.board_extent();
        let height = self.config.resolution_y;
        self.frame.fill_rect(0, 0, self.config.board_origin_x, height, color);
        self.frame
            .fill_rect(board_end, 0, self.config.resolution_x - board_end, height, color);
    }

    fn draw_piece(&mut self, piece: &Piece, x: usize, y: usize) {
        let palette = self.config.palette;
        let color = match piece.side {
            Side::White => palette.white_piece,
            Side::Black => palette.black_piece,
        };
        let inset = (self.config.square_size - GLYPH_SIZE) / 2;

        for (row, bits) in glyph(piece.kind).iter().enumerate() {
            for col in 0..8 {
                if bits & (0x80 >> col) != 0 {
                    self.frame.fill_rect(
                        x + inset + col * GLYPH_SCALE,
                        y + inset + row * GLYPH_SCALE,
                        GLYPH_SCALE,
                        GLYPH_SCALE,
                        color,
                    );
                }
            }
        }
    }

    fn draw_outline(&mut self, x: usize, y: usize) {
        let size = self.config.square_size;
        let color = self.config.palette.outline;
        self.frame.fill_rect(x, y, size, 2, color);
        self.frame.fill_rect(x, y + size - 2, size, 2, color);
        self.frame.fill_rect(x, y, 2, size, color);
        self.frame.fill_rect(x + size - 2, y, 2, size, color);
    }

    fn draw_board(&mut self, board: &Board) {
        let palette = self.config.palette;
        let size = self.config.square_size;

        for pos in Position::all() {
            let Some(square) = board.square(&pos) else {
                continue;
            };
            let (x, y) = self.config.square_origin(&pos);
            let base = if (pos.file + pos.rank) % 2 == 1 {
                palette.light_square
            } else {
                palette.dark_square
            };
            let fill = if square.highlighted { palette.highlight } else { base };

            self.frame.fill_rect(x, y, size, size, fill);
            if square.outlined {
                self.draw_outline(x, y);
            }
            if let Some(piece) = square.piece {
                self.draw_piece(&piece, x, y);
            }
        }
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        let config = DisplayConfig::default();
        FrameRenderer {
            frame: FrameBuffer::new(config.resolution_x, config.resolution_y),
            config,
        }
    }
}

impl Renderer for FrameRenderer {
    fn render(&mut self, board: &Board) {
        self.frame.clear(BLACK);
        self.draw_panels(self.config.palette.panel);
        self.draw_board(board);
        self.frame.swap();
    }
}

impl ResultDisplay for FrameRenderer {
    /// Repaints the side panels in the winner's colour, or the panel colour
    /// on a draw, keeping the final board in place.
    fn show_result(&mut self, outcome: GameOutcome) {
        let palette = self.config.palette;
        let color = match outcome.winner() {
            Some(Side::White) => palette.white_piece,
            Some(Side::Black) => palette.black_piece,
            None => palette.panel,
        };

        self.frame.copy_front_to_back();
        self.draw_panels(color);
        self.frame.swap();
    }
}
