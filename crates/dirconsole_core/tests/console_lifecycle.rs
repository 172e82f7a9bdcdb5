use dirconsole_core::plugins::sudocmd;
use dirconsole_core::{
    Console, ConsoleError, DirectoryMetadata, Entity, EntityRegistryError, NavState,
};
use std::sync::Arc;

fn empty_console() -> Console {
    Console::new(Arc::new(DirectoryMetadata::new()))
}

#[test]
fn init_entity_is_idempotent() {
    let mut console = empty_console();
    sudocmd::register(&mut console).expect("panel should register");

    console
        .init_entity("sudocmd")
        .expect("first init should succeed");
    console
        .init_entity("sudocmd")
        .expect("repeated init should be a no-op");

    let entity = console
        .registry()
        .get("sudocmd")
        .expect("entity should be registered");
    assert!(entity.is_initialized());
}

#[test]
fn unknown_names_surface_specific_errors() {
    let mut console = empty_console();

    let err = console
        .init_entity("hbacrule")
        .expect_err("unknown entity must fail");
    assert_eq!(
        err,
        ConsoleError::Registry(EntityRegistryError::EntityNotFound(
            "hbacrule".to_string()
        ))
    );

    console
        .register_entity(Entity::new("hbacrule"))
        .expect("bare entity should register");
    let err = console
        .open_dialog("hbacrule", "add")
        .expect_err("unknown dialog must fail");
    assert_eq!(
        err,
        ConsoleError::DialogNotFound {
            entity: "hbacrule".to_string(),
            dialog: "add".to_string(),
        }
    );
}

#[test]
fn teardown_clears_registry_but_keeps_history() {
    let mut console = empty_console();
    sudocmd::register(&mut console).expect("panel should register");
    console.push_state(NavState::with_entry("sudorule-entity", "sudorule"));

    console.teardown();

    assert!(console.registry().is_empty());
    assert_eq!(console.nav().depth(), 1);
}

#[test]
fn registration_validates_entity_names() {
    let mut console = empty_console();
    let err = console
        .register_entity(Entity::new("SUDO Command"))
        .expect_err("malformed name must fail");
    assert_eq!(
        err,
        ConsoleError::Registry(EntityRegistryError::InvalidEntityName(
            "SUDO Command".to_string()
        ))
    );
}
