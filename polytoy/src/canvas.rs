use druid::widget::prelude::*;
use druid::{MouseButton, MouseEvent};

use polybez::{Button, Editor, EditorOptions, RenderLoop, Scene};

use crate::paint;
use crate::toolbar::EDITOR_COMMAND;

/// The drawing area. Owns the editor and keeps it painted.
pub struct CurveCanvas {
    editor: Editor<Scene, String>,
    frames: RenderLoop,
}

impl CurveCanvas {
    pub fn new(options: EditorOptions) -> CurveCanvas {
        CurveCanvas {
            editor: Editor::with_options(Scene::default(), String::new(), options),
            frames: RenderLoop::new(),
        }
    }

    fn mouse_down(&mut self, ctx: &mut EventCtx, m: &MouseEvent) {
        // keep receiving moves if the pointer leaves the canvas mid-drag
        ctx.set_active(true);
        match m.button {
            MouseButton::Left => self.editor.pointer_down(m.pos, Button::Primary),
            MouseButton::Right => {
                self.editor.pointer_down(m.pos, Button::Secondary);
                // there is no native context menu to suppress
                let _ = self.editor.context_action(m.pos);
            }
            _ => self.editor.pointer_down(m.pos, Button::Auxiliary),
        }
    }

    fn sync_readout(&self, data: &mut String) {
        if *data != *self.editor.readout() {
            *data = self.editor.readout().clone();
        }
    }
}

impl Widget<String> for CurveCanvas {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut String, _env: &Env) {
        match event {
            Event::WindowConnected => {
                if self.frames.start() {
                    ctx.request_anim_frame();
                }
            }
            Event::AnimFrame(_) => {
                ctx.request_paint();
                if self.frames.is_running() {
                    ctx.request_anim_frame();
                }
            }
            Event::MouseDown(m) => self.mouse_down(ctx, m),
            Event::MouseMove(m) => self.editor.pointer_move(m.pos),
            Event::MouseUp(m) => {
                if m.buttons.is_empty() {
                    ctx.set_active(false);
                }
                self.editor.pointer_up();
            }
            Event::Command(cmd) if cmd.is(EDITOR_COMMAND) => {
                let command = *cmd.get_unchecked(EDITOR_COMMAND);
                self.editor.command(command);
            }
            _ => (),
        }
        self.sync_readout(data);
    }

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, event: &LifeCycle, _: &String, _: &Env) {
        if let LifeCycle::Size(size) = event {
            self.editor.resize(*size);
        }
    }

    fn update(&mut self, _: &mut UpdateCtx, _: &String, _: &String, _: &Env) {}

    fn layout(&mut self, _: &mut LayoutCtx, bc: &BoxConstraints, _: &String, _: &Env) -> Size {
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _: &String, _: &Env) {
        self.frames.tick(&mut self.editor);
        paint::paint_scene(ctx, self.editor.surface());
    }
}
