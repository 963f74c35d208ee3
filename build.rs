use std::fs;
use std::path::Path;

fn ensure_tessdata_resources_placeholder() {
    let tessdata_dir = Path::new("resources/tessdata");
    let placeholder = tessdata_dir.join(".keep");

    if let Err(error) = fs::create_dir_all(tessdata_dir) {
        panic!("failed to create tessdata resources directory: {error}");
    }

    if !placeholder.exists() {
        if let Err(error) = fs::write(&placeholder, b"tessdata resources placeholder\n") {
            panic!("failed to create tessdata resources placeholder file: {error}");
        }
    }
}

fn main() {
    ensure_tessdata_resources_placeholder();
    tauri_build::build();
}
