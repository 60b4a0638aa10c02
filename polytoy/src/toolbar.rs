//! The row of command buttons.

use druid::widget::{Button, Flex};
use druid::{Selector, Widget};

use polybez::Command;

/// Sent by the toolbar; handled by the canvas.
pub const EDITOR_COMMAND: Selector<Command> = Selector::new("polytoy.editor-command");

const BUTTON_SPACING: f64 = 8.0;

pub fn build() -> impl Widget<String> {
    Flex::row()
        .with_child(command_button("Reset", Command::Reset))
        .with_spacer(BUTTON_SPACING)
        .with_child(command_button("Add random point", Command::AddRandomPoint))
        .with_spacer(BUTTON_SPACING)
        .with_child(command_button("Remove last point", Command::RemoveLastPoint))
}

fn command_button(label: &str, command: Command) -> Button<String> {
    Button::new(label).on_click(move |ctx, _data, _env| {
        ctx.submit_command(EDITOR_COMMAND.with(command));
    })
}
