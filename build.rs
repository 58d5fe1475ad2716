//! Build script for termblock - embeds the git commit hash for dev builds
//!
//! Without the `release` feature, `VERGEN_GIT_SHA` is set so `-v` logs can
//! name the exact commit. With `release`, nothing is emitted.

fn main() {
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = match GitclBuilder::default().sha(true).build() {
            Ok(git) => git,
            Err(e) => {
                println!("cargo:warning=Failed to configure git info: {}", e);
                println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
                return;
            }
        };

        let emitted = Emitter::default()
            .add_instructions(&git)
            .and_then(|emitter| emitter.emit());
        if let Err(e) = emitted {
            // Not a git checkout (e.g. a source tarball)
            println!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
