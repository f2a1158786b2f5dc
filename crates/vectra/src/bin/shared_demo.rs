//! # Shared Ownership Demo
//!
//! Constructs a vector, aliases it, normalizes through a passed handle, and
//! shows the buffer outliving an inner alias.
//!
//! ```bash
//! ./shared_demo
//! # Vector3D(1, 2, 3)
//! # Vector3D(1, 2, 3)
//! # Vector3D(0.267261, 0.534522, 0.801784)
//! # Vector3D(0.267261, 0.534522, 0.801784)
//! # Vector3D(0.267261, 0.534522, 0.801784)
//! # Vector3D(0, 0, 0)
//! ```

use std::process::ExitCode;

use vectra::{app, config::EMBEDDED_CONFIG, Demo};

fn main() -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    ExitCode::from(app::run(Demo::Shared, EMBEDDED_CONFIG, &mut stdout))
}
