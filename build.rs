//! Forwards the identity-provider publishable key to the compiler.
//!
//! The browser build has no process environment, so the key is baked in at
//! compile time. `.env.local` wins over `.env`, and both lose to a variable
//! already exported in the shell.

const KEY_VAR: &str = "PORTAL_CLERK_PUBLISHABLE_KEY";

fn main() {
    for file in [".env.local", ".env"] {
        println!("cargo:rerun-if-changed={file}");
        // Missing files are fine: mock mode covers an unconfigured checkout.
        let _ = dotenvy::from_filename(file);
    }
    println!("cargo:rerun-if-env-changed={KEY_VAR}");

    if let Ok(value) = std::env::var(KEY_VAR) {
        println!("cargo:rustc-env={KEY_VAR}={value}");
    }
}
