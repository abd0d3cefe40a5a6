// File: crates/chart-core/build.rs
// Summary: Links the Windows system library Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used when enumerating system fonts.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
