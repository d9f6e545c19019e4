//! Forward the EmailJS credentials to the compiler.
//!
//! Values come from the build environment, or from a `.env` file at the
//! workspace root. Missing values are fine here; the contact form reports
//! them at submit time.

const VARS: [&str; 3] = ["EMAILJS_SERVICE_ID", "EMAILJS_TEMPLATE_ID", "EMAILJS_PUBLIC_KEY"];

fn main() {
    // Load .env if present (doesn't override the real environment)
    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    for var in VARS {
        println!("cargo:rerun-if-env-changed={}", var);
        if let Ok(value) = std::env::var(var) {
            println!("cargo:rustc-env={}={}", var, value);
        }
    }
}
