//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dirconsole_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use dirconsole_core::plugins::sudocmd;
use dirconsole_core::{Console, DirectoryMetadata};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let metadata = DirectoryMetadata::new().with_object("sudocmd", "SUDO Commands");
    let mut console = Console::new(Arc::new(metadata));

    if let Err(err) = sudocmd::register(&mut console) {
        eprintln!("dirconsole_core registration failed: {err}");
        return ExitCode::FAILURE;
    }

    println!("dirconsole_core version={}", dirconsole_core::core_version());
    for name in console.registry().entity_names() {
        match console.init_entity(&name) {
            Ok(()) => {}
            Err(err) => {
                eprintln!("dirconsole_core init failed for `{name}`: {err}");
                return ExitCode::FAILURE;
            }
        }
        let entity = match console.registry().get(&name) {
            Some(entity) => entity,
            None => continue,
        };
        println!(
            "entity={name} facets={} dialogs={}",
            entity.facet_names().join(","),
            entity.dialog_names().join(",")
        );
    }

    ExitCode::SUCCESS
}
