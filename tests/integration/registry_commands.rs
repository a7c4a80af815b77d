use std::fs;

use anyhow::Result;

use crate::common::{stderr_of, stdout_of, Sandbox};

#[test]
fn no_subcommand_prints_help_and_fails() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let output = sandbox.run(&[], "")?;

    assert_eq!(output.status.code(), Some(1), "status: {:?}", output.status);
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Usage"), "help expected: {stdout}");
    assert!(stdout.contains("choose"), "help lists commands: {stdout}");
    Ok(())
}

#[test]
fn unknown_subcommand_is_a_usage_error() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let output = sandbox.run(&["switch"], "")?;

    assert!(!output.status.success());
    assert!(!sandbox.registry_path().exists());
    Ok(())
}

#[test]
fn list_on_fresh_home_creates_nothing() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let output = sandbox.run(&["list"], "")?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "No configurations found.\n");
    assert!(!sandbox.config_home().join("nv-config").exists());
    Ok(())
}

#[test]
fn add_then_list_round_trips_through_the_file() -> Result<()> {
    let sandbox = Sandbox::new()?;

    let output = sandbox.run(&["add"], "lazy\nnvim-lazyvim\n")?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).ends_with("Configuration 'lazy' added.\n"));

    let written = fs::read_to_string(sandbox.registry_path())?;
    assert_eq!(written, "{\n    \"lazy\": \"nvim-lazyvim\"\n}");

    let output = sandbox.run(&["list"], "")?;
    assert_eq!(stdout_of(&output), "1. lazy: nvim-lazyvim\n");
    Ok(())
}

#[test]
fn remove_out_of_range_keeps_file_intact() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.run(&["add"], "lazy\nnvim-lazyvim\n")?;
    sandbox.run(&["add"], "chad\nnvim-chad\n")?;
    let before = fs::read(sandbox.registry_path())?;

    let output = sandbox.run(&["remove"], "5\n")?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).ends_with("Invalid selection.\n"));
    assert_eq!(fs::read(sandbox.registry_path())?, before);

    let output = sandbox.run(&["remove"], "2\n")?;
    assert!(stdout_of(&output).ends_with("Configuration 'chad' removed.\n"));
    let output = sandbox.run(&["list"], "")?;
    assert_eq!(stdout_of(&output), "1. lazy: nvim-lazyvim\n");
    Ok(())
}

#[test]
fn init_registers_nvim_folders_only() -> Result<()> {
    let sandbox = Sandbox::new()?;
    sandbox.mkdir("nvim-lazyvim")?;
    sandbox.mkdir("tmux")?;
    sandbox.mkdir("NVIM-custom")?;

    let output = sandbox.run(&["init"], "")?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let output = sandbox.run(&["list"], "")?;
    assert_eq!(
        stdout_of(&output),
        "1. NVIM-custom: NVIM-custom\n2. nvim-lazyvim: nvim-lazyvim\n"
    );
    Ok(())
}

#[test]
fn malformed_registry_is_fatal() -> Result<()> {
    let sandbox = Sandbox::new()?;
    fs::create_dir_all(sandbox.config_home().join("nv-config"))?;
    fs::write(sandbox.registry_path(), "{\"lazy\": ")?;

    let output = sandbox.run(&["list"], "")?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(
        stderr_of(&output).contains("Failed to parse registry file"),
        "stderr: {}",
        stderr_of(&output)
    );
    Ok(())
}

#[test]
fn registry_flag_overrides_default_location() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let custom = sandbox.root().join("elsewhere").join("registry.json");
    let custom_arg = custom.to_string_lossy().into_owned();

    let output = sandbox.run(&["add", "--registry", &custom_arg], "base\nnvim\n")?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(custom.exists());
    assert!(!sandbox.registry_path().exists());
    Ok(())
}

#[test]
fn closed_stdin_during_add_fails() -> Result<()> {
    let sandbox = Sandbox::new()?;
    let output = sandbox.run(&["add"], "")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!sandbox.registry_path().exists());
    Ok(())
}
