use knob_core::commands::{ConfigCommand, ConfigOptions, ConfigOutput};
use knob_core::context::AppContext;
use knob_core::types::{ConfigScope, StoreScope};
use tempfile::TempDir;

#[test]
fn app_context_creates_from_paths() {
    let temp = TempDir::new().unwrap();
    let user_dir = temp.path().join("config");
    let project = temp.path().join("project");

    let ctx = AppContext::new(user_dir.clone(), project.clone(), "nano -w");

    assert_eq!(ctx.user_config_dir(), &user_dir);
    assert_eq!(ctx.project_root(), &project);
    assert_eq!(ctx.editor_command(), "nano -w");
    assert_eq!(ctx.editor().command(), "nano -w");
}

#[test]
fn app_context_provides_config_stores() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    std::fs::create_dir_all(&project).unwrap();

    let ctx = AppContext::new(temp.path().join("config"), project.clone(), "vi");

    let store = ctx.config_store(StoreScope::Project);
    assert_eq!(store.config_path(), project.join("knob.json"));
    // Should load without error (empty store is fine)
    assert!(store.load().unwrap().is_empty());

    let user = ctx.config_store(StoreScope::User);
    assert_eq!(user.config_path(), temp.path().join("config").join("config.toml"));
}

#[test]
fn config_command_from_context_uses_its_paths() {
    let temp = TempDir::new().unwrap();
    let ctx = AppContext::new(
        temp.path().join("config"),
        temp.path().join("project"),
        "vi",
    );
    let cmd = ConfigCommand::from_context(&ctx);

    let output = cmd
        .run(
            &["location".to_string()],
            &ConfigOptions::new().with_scope(ConfigScope::User),
        )
        .unwrap();

    assert_eq!(
        output,
        ConfigOutput::Location(temp.path().join("config").join("config.toml"))
    );
}
