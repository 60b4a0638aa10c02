//! Replaying a recorded frame with piet.

use druid::piet::StrokeStyle;
use druid::{Color, PaintCtx, RenderContext};

use polybez::{DrawOp, Rgba, Scene};

const BACKGROUND_COLOR: Color = Color::WHITE;

pub fn paint_scene(ctx: &mut PaintCtx, scene: &Scene) {
    let bounds = ctx.size().to_rect();
    ctx.clip(bounds);
    for op in scene.ops() {
        match op {
            DrawOp::Clear => ctx.fill(bounds, &BACKGROUND_COLOR),
            DrawOp::Stroke(path, style) => {
                let color = to_color(style.color);
                match style.dash.as_ref().filter(|d| !d.is_empty()) {
                    Some(dash) => {
                        let stroke = StrokeStyle::new().dash(dash.clone(), 0.0);
                        ctx.stroke_styled(path, &color, style.width, &stroke);
                    }
                    None => ctx.stroke(path, &color, style.width),
                }
            }
            DrawOp::FillCircle(circle, style) => {
                ctx.fill(*circle, &to_color(style.color));
                ctx.stroke(*circle, &to_color(style.outline), style.outline_width);
            }
        }
    }
}

fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba32_u32(rgba.to_rgba32_u32())
}
