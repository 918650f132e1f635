use crate::Cli;
use anyhow::Context;
use runconv_core::action::Action;
use runconv_core::convert::{convert_action, ConvertOptions};
use runconv_core::filter::ActionFilter;
use runconv_core::io::write_rendered;
use runconv_core::render::Renderer;
use std::path::{Path, PathBuf};

/// Transform every matching action; returns the number transformed.
///
/// A conversion failure (an action without goals) aborts the whole run
/// rather than skipping the action.
pub fn run(cli: &Cli) -> anyhow::Result<u64> {
    let actions = Action::load_all(&cli.input)
        .with_context(|| format!("failed to load actions from {}", cli.input.display()))?;

    let filter = ActionFilter::new(&cli.action_filter)
        .with_context(|| format!("invalid --action-filter pattern '{}'", cli.action_filter))?;

    let templates_dir = resolve_templates_dir(cli.templates_dir.as_deref())?;
    let renderer = Renderer::from_dir(&templates_dir)
        .with_context(|| format!("failed to load template from {}", templates_dir.display()))?;

    let opts = ConvertOptions {
        name_prefix: cli.name_prefix.clone(),
        project_dir: cli.project_dir.clone().unwrap_or_default(),
    };
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let to_stdout = output_dir.as_os_str() == "-";

    tracing::debug!(pattern = %cli.action_filter, "transforming matching actions");
    let mut num_transformed = 0u64;
    for action in &actions {
        if !filter.matches(&action.display_name) {
            tracing::debug!(action = %action.display_name, "skipping action (pattern mismatch)");
            continue;
        }
        tracing::debug!(action = %action.display_name, "converting action");
        let record = convert_action(action, &opts)
            .with_context(|| format!("failed to convert action '{}'", action.display_name))?;
        let output = renderer
            .render(&record)
            .with_context(|| format!("failed to render action '{}'", action.display_name))?;
        if to_stdout {
            println!("{output}");
        } else {
            let path = write_rendered(&output_dir, &record.basename, &output)
                .with_context(|| format!("failed to write output for '{}'", record.name))?;
            tracing::debug!(len = output.len(), path = %path.display(), "wrote rendered template");
        }
        num_transformed += 1;
    }
    tracing::debug!(count = num_transformed, "transformed actions");
    Ok(num_transformed)
}

fn resolve_templates_dir(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    let exe = std::env::current_exe()
        .context("cannot locate this executable to resolve the default --templates-dir")?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
