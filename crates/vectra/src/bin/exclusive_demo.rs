//! # Exclusive Ownership Demo
//!
//! Constructs a vector, copies it, moves it, and prints each owner.
//!
//! ```bash
//! ./exclusive_demo
//! # Vector3D(1, 2, 3)
//! # Vector3D(1, 2, 3)
//! # Vector3D(1, 2, 3)
//! ```
//!
//! The final print of the moved-from vector is refused and logged on stderr.

use std::process::ExitCode;

use vectra::{app, config::EMBEDDED_CONFIG, Demo};

fn main() -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    ExitCode::from(app::run(Demo::Exclusive, EMBEDDED_CONFIG, &mut stdout))
}
