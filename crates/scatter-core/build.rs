// File: crates/scatter-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs for PNG output.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ... used by Skia's font lookup
        println!("cargo:rustc-link-lib=advapi32");
    }
}
