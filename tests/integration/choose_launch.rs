#![cfg(unix)]

use std::{fs, os::unix::fs::PermissionsExt, path::PathBuf};

use anyhow::{Context, Result};

use crate::common::{run_with_input, stderr_of, stdout_of, Sandbox};

/// Write a stub editor that records `NVIM_APPNAME` and its arguments.
fn stub_editor(sandbox: &Sandbox) -> Result<(PathBuf, PathBuf)> {
    let script = sandbox.root().join("stub-editor.sh");
    let log = sandbox.root().join("stub-editor.log");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\nprintf '%s\\n' \"$NVIM_APPNAME\" \"$@\" > '{}'\nexit \"${{STUB_EXIT:-0}}\"\n",
            log.display()
        ),
    )
    .context("failed to write stub editor")?;
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
        .context("failed to mark stub editor executable")?;
    Ok((script, log))
}

fn seeded(entries: &[(&str, &str)]) -> Result<Sandbox> {
    let sandbox = Sandbox::new()?;
    for (name, folder) in entries {
        let output = sandbox.run(&["add"], &format!("{name}\n{folder}\n"))?;
        assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    }
    Ok(sandbox)
}

#[test]
fn choose_with_number_sets_app_name_for_the_child() -> Result<()> {
    let sandbox = seeded(&[("lazy", "nvim-lazyvim")])?;
    let (editor, log) = stub_editor(&sandbox)?;

    let output = run_with_input(
        sandbox
            .command()
            .env("NVCS_EDITOR", &editor)
            .args(["choose", "my notes/today.md", "-n", "1"]),
        "",
    )?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let recorded = fs::read_to_string(&log).context("stub editor should have run")?;
    assert_eq!(recorded, "nvim-lazyvim\nmy notes/today.md\n");
    Ok(())
}

#[test]
fn choose_prompts_when_no_number_is_given() -> Result<()> {
    let sandbox = seeded(&[("lazy", "nvim-lazyvim"), ("chad", "nvim-chad")])?;
    let (editor, log) = stub_editor(&sandbox)?;

    let output = run_with_input(
        sandbox
            .command()
            .env("NVCS_EDITOR", &editor)
            .args(["choose", "."]),
        "2\n",
    )?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).ends_with("Choose configuration by number: "));
    assert_eq!(fs::read_to_string(&log)?, "nvim-chad\n.\n");
    Ok(())
}

#[test]
fn out_of_bounds_number_spawns_nothing() -> Result<()> {
    let sandbox = seeded(&[("lazy", "nvim-lazyvim"), ("chad", "nvim-chad")])?;
    let (editor, log) = stub_editor(&sandbox)?;

    let output = run_with_input(
        sandbox
            .command()
            .env("NVCS_EDITOR", &editor)
            .args(["choose", ".", "-n", "7"]),
        "",
    )?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output)
        .starts_with("Invalid configuration number. Please choose between 1 and 2\n"));
    assert!(!log.exists(), "editor must not run");
    Ok(())
}

#[test]
fn editor_failure_fails_the_invocation() -> Result<()> {
    let sandbox = seeded(&[("lazy", "nvim-lazyvim")])?;
    let (editor, _log) = stub_editor(&sandbox)?;

    let output = run_with_input(
        sandbox
            .command()
            .env("NVCS_EDITOR", &editor)
            .env("STUB_EXIT", "3")
            .args(["choose", ".", "-n", "1"]),
        "",
    )?;
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("exited abnormally (exit=Some(3))"),
        "stderr: {}",
        stderr_of(&output)
    );
    Ok(())
}

#[test]
fn editor_from_settings_file_is_used() -> Result<()> {
    let sandbox = seeded(&[("lazy", "nvim-lazyvim")])?;
    let (editor, log) = stub_editor(&sandbox)?;
    fs::write(
        sandbox
            .config_home()
            .join("nv-config")
            .join("settings.toml"),
        format!("editor = \"{}\"\n", editor.display()),
    )?;

    let output = sandbox.run(&["choose", "README.md", "--number", "1"], "")?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(fs::read_to_string(&log)?, "nvim-lazyvim\nREADME.md\n");
    Ok(())
}
