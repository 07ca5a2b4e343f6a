//! Canvas renderer. Every call repaints the whole board from the current
//! state; the grid is small enough that incremental patching buys nothing.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::{BOARD_SIZE, CANVAS_SIZE_PX, CELL_SIZE_PX, STAR_POINTS, STONE_RADIUS_PX};
use crate::model::{Board, Player, Pos};
use crate::theme::{LAST_MOVE_MARKER, STONE_SHADOW, Theme};

/// Pixel coordinate of the centre of row/column `index`.
pub fn cell_center(index: usize) -> f64 {
    index as f64 * CELL_SIZE_PX + CELL_SIZE_PX / 2.0
}

/// Maps a point in CSS pixels (relative to the canvas' top-left corner) to a
/// board cell. `scale_x`/`scale_y` convert CSS pixels to canvas pixels when
/// the element is displayed at a different size than its backing store.
pub fn cell_at(x: f64, y: f64, scale_x: f64, scale_y: f64) -> Option<Pos> {
    let col = ((x * scale_x) / CELL_SIZE_PX).floor();
    let row = ((y * scale_y) / CELL_SIZE_PX).floor();
    if !col.is_finite() || !row.is_finite() {
        return None;
    }
    Pos::checked(row as i64, col as i64)
}

pub fn draw_board(
    ctx: &CanvasRenderingContext2d,
    board: &Board,
    last_move: Option<Pos>,
    theme: &Theme,
) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.set_fill_style_str(theme.board);
    ctx.fill_rect(0.0, 0.0, CANVAS_SIZE_PX, CANVAS_SIZE_PX);

    let first = cell_center(0);
    let last = cell_center(BOARD_SIZE - 1);
    ctx.begin_path();
    ctx.set_stroke_style_str(theme.line);
    ctx.set_line_width(1.0);
    for i in 0..BOARD_SIZE {
        let p = cell_center(i);
        ctx.move_to(p, first);
        ctx.line_to(p, last);
        ctx.move_to(first, p);
        ctx.line_to(last, p);
    }
    ctx.stroke();

    ctx.set_fill_style_str(theme.line);
    for r in STAR_POINTS {
        for c in STAR_POINTS {
            ctx.begin_path();
            ctx.arc(cell_center(c), cell_center(r), 3.0, 0.0, PI * 2.0)?;
            ctx.fill();
        }
    }

    for (pos, player) in board.stones() {
        draw_stone(ctx, pos, player, theme)?;
    }
    if let Some(pos) = last_move {
        draw_last_move_marker(ctx, pos);
    }
    Ok(())
}

fn draw_stone(
    ctx: &CanvasRenderingContext2d,
    pos: Pos,
    player: Player,
    theme: &Theme,
) -> Result<(), JsValue> {
    let x = cell_center(pos.col);
    let y = cell_center(pos.row);
    let style = theme.stone(player);

    ctx.begin_path();
    if theme.shaded {
        let grad = ctx.create_radial_gradient(x - 5.0, y - 5.0, 2.0, x, y, STONE_RADIUS_PX)?;
        grad.add_color_stop(0.0, style.gradient.0)?;
        grad.add_color_stop(1.0, style.gradient.1)?;
        ctx.set_fill_style_canvas_gradient(&grad);
        ctx.set_shadow_color(STONE_SHADOW);
        ctx.set_shadow_blur(4.0);
        ctx.set_shadow_offset_x(2.0);
        ctx.set_shadow_offset_y(2.0);
    } else {
        ctx.set_fill_style_str(style.fill);
        ctx.set_shadow_color("transparent");
    }
    ctx.arc(x, y, STONE_RADIUS_PX, 0.0, PI * 2.0)?;
    ctx.fill();

    if let Some(stroke) = style.stroke {
        ctx.set_line_width(2.0);
        ctx.set_stroke_style_str(stroke);
        ctx.stroke();
    }

    ctx.set_shadow_color("transparent");
    ctx.set_shadow_blur(0.0);
    ctx.set_shadow_offset_x(0.0);
    ctx.set_shadow_offset_y(0.0);
    Ok(())
}

// Small "+" in the middle of the most recent stone.
fn draw_last_move_marker(ctx: &CanvasRenderingContext2d, pos: Pos) {
    let x = cell_center(pos.col);
    let y = cell_center(pos.row);
    let size = 4.0;
    ctx.begin_path();
    ctx.set_stroke_style_str(LAST_MOVE_MARKER);
    ctx.set_line_width(2.0);
    ctx.move_to(x - size, y);
    ctx.line_to(x + size, y);
    ctx.move_to(x, y - size);
    ctx.line_to(x, y + size);
    ctx.stroke();
}
