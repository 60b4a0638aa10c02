//! A simple test program that creates a random Bézier curve.
//!
//! This adds a handful of random control points to an editor, paints one
//! frame into a [`Scene`], and outputs the frame as SVG.

use kurbo::Size;

use polybez::{Command, DrawOp, Editor, RenderLoop, Rgba, Scene};

fn css(color: Rgba) -> String {
    format!("#{:08x}", color.to_rgba32_u32())
}

fn main() {
    const N: usize = 6;
    let mut editor = Editor::new(Scene::new(Size::new(500.0, 500.0)), String::new());
    for _ in 0..N {
        editor.command(Command::AddRandomPoint);
    }
    eprintln!("{}", editor.readout());

    let mut frames = RenderLoop::new();
    frames.start();
    frames.tick(&mut editor);

    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">"##
    );
    for op in editor.surface().ops() {
        match op {
            DrawOp::Clear => (),
            DrawOp::Stroke(path, style) => {
                let dash = style
                    .dash
                    .as_ref()
                    .map(|d| {
                        let d: Vec<_> = d.iter().map(f64::to_string).collect();
                        format!(r#" stroke-dasharray="{}""#, d.join(" "))
                    })
                    .unwrap_or_default();
                println!(
                    r#"      <path d="{}" fill="none" stroke="{}" stroke-width="{}"{} />"#,
                    path.to_svg(),
                    css(style.color),
                    style.width,
                    dash
                );
            }
            DrawOp::FillCircle(circle, style) => println!(
                r#"      <circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" />"#,
                circle.center.x,
                circle.center.y,
                circle.radius,
                css(style.color),
                css(style.outline)
            ),
        }
    }
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
}
