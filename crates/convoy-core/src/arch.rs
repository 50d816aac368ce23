//! Host-architecture naming.
//!
//! Consul's makefile drops the built binary under `pkg/bin/linux_<arch>/`,
//! where `<arch>` is the Go toolchain's name for the architecture. Rust and Go
//! disagree on several of these, so the mapping is explicit.

/// The Go-style architecture name for the machine running this process.
pub fn host_arch() -> &'static str {
    go_arch(std::env::consts::ARCH)
}

/// Translate a Rust `target_arch` string into the Go toolchain's `GOARCH`
/// equivalent. Names the two toolchains agree on pass through unchanged.
pub fn go_arch(rust_arch: &str) -> &str {
    match rust_arch {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_rust_names_to_go_names() {
        assert_eq!(go_arch("x86_64"), "amd64");
        assert_eq!(go_arch("aarch64"), "arm64");
        assert_eq!(go_arch("x86"), "386");
        assert_eq!(go_arch("powerpc64"), "ppc64");
    }

    #[test]
    fn shared_names_pass_through() {
        assert_eq!(go_arch("riscv64"), "riscv64");
        assert_eq!(go_arch("s390x"), "s390x");
        assert_eq!(go_arch("arm"), "arm");
    }
}
