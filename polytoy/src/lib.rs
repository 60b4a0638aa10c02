mod canvas;
mod paint;
mod toolbar;

use druid::widget::{Flex, Label};
use druid::{AppLauncher, Color, Env, Widget, WidgetExt, WindowDesc};

use polybez::EditorOptions;

use canvas::CurveCanvas;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn wasm_main() {
    // This hook is necessary to get panic messages in the console
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    main(EditorOptions::default())
}

type BoxErr = Box<dyn std::error::Error>;

/// Load editor options from a JSON file.
///
/// Missing fields take their default values.
pub fn load_options(path: impl AsRef<std::path::Path>) -> Result<EditorOptions, BoxErr> {
    let data = std::fs::read(path)?;
    let options: EditorOptions = serde_json::from_slice(&data)?;
    Ok(options)
}

pub fn main(options: EditorOptions) {
    // describe the main window
    let main_window = WindowDesc::new(move || build_ui(options.clone()))
        .title("Bézier Toy")
        .with_min_size((200., 200.))
        .window_size((800.0, 600.0));

    // the app state is the coordinate readout
    AppLauncher::with_window(main_window)
        .launch(String::new())
        .expect("Failed to launch application");
}

fn build_ui(options: EditorOptions) -> impl Widget<String> {
    let readout = Label::new(|data: &String, _env: &Env| data.clone())
        .with_text_size(12.0)
        .with_text_color(Color::grey(0.3))
        .padding(10.0);

    Flex::column()
        .with_child(toolbar::build().padding(10.0))
        .with_flex_child(CurveCanvas::new(options), 1.0)
        .with_child(readout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_file() {
        let path = std::env::temp_dir().join("polytoy-options-test.json");
        std::fs::write(&path, r#"{"hit_radius": 9.0, "curve_segments": 50}"#).unwrap();
        let options = load_options(&path).unwrap();
        assert_eq!(options.hit_radius, 9.0);
        assert_eq!(options.curve_segments, 50);
        assert_eq!(options.marker_radius, polybez::MARKER_RADIUS);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_options_file() {
        assert!(load_options("/definitely/not/here.json").is_err());
    }
}
