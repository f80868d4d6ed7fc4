//! # Voxel World Entry Point
//!
//! Calls into the library's `run()` and turns a setup failure into exit status 1.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- --world-size 8,1,8 --frames 3
//! ```

fn main() {
    if let Err(err) = voxel_world::run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
