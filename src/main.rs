use driftfield::Viewer;

fn main() {
    if let Err(e) = Viewer::new().run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
