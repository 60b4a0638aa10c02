//! Print the default editor options as JSON, or validate an options file.

use polybez::EditorOptions;

fn main() {
    match std::env::args().nth(1) {
        Some(path) => {
            let data = std::fs::read_to_string(path).unwrap();
            let options: EditorOptions = serde_json::from_str(&data).unwrap();
            println!("{:#?}", options.sanitized());
        }
        None => {
            let json = serde_json::to_string_pretty(&EditorOptions::default()).unwrap();
            println!("{}", json);
        }
    }
}
