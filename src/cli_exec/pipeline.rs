use tuxedo_edit::edit::derive_list_from_command;
use tuxedo_edit::emit::{extract_code, serialize_manifest};
use tuxedo_edit::export::write_atomic;
use tuxedo_edit::parse::parse_manifest;

use super::*;

pub(super) fn handle_generate_command(
    config: &EditorConfig,
    file: Option<&Path>,
    out: Option<&Path>,
) -> Result<()> {
    let raw = read_source(file)?;
    let manifest = parse_manifest(&raw, config.profile)?.context("input is empty")?;
    let output = serialize_manifest(&manifest)?;

    match out {
        Some(path) => {
            write_atomic(path, output.as_bytes())
                .with_context(|| format!("write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}

pub(super) fn handle_new_command(config: &EditorConfig) -> Result<()> {
    let manifest = config.profile.default_manifest();
    println!("{}", serialize_manifest(&manifest)?);
    Ok(())
}

pub(super) fn handle_extract_code_command(file: Option<&Path>) -> Result<()> {
    let raw = read_source(file)?;
    let code = extract_code(&raw)?;
    print!("{}", code);
    if !code.ends_with('\n') {
        println!();
    }
    Ok(())
}

pub(super) fn handle_deps_command(command: &[String], json: bool) -> Result<()> {
    let deps = derive_list_from_command(&command.join(" "));
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&deps).context("serialize deps json")?
        );
    } else {
        for dep in deps {
            println!("{}", dep);
        }
    }
    Ok(())
}
