use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use pixview_core::command::ViewerCommand;
use pixview_core::engine::ViewportEngine;
use pixview_core::geometry::{ImageSize, Vec2, ViewportRect};
use pixview_core::input::{WheelEvent, WheelNormalizer};

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file, one command per line
    pub script: PathBuf,

    /// Natural size of the image
    #[arg(long, value_parser = super::parse_size)]
    pub image: (f32, f32),

    /// Initial viewport size
    #[arg(long, value_parser = super::parse_size, default_value = "1280x800")]
    pub viewport: (f32, f32),

    /// Viewer config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// One line of a replay script.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    Command(ViewerCommand),
    Resize(f32, f32),
    Wheel(f32),
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    for row in replay(args)? {
        println!("{row}");
    }
    Ok(())
}

/// Run the script and return one formatted row per step, starting with the
/// initial fit.
fn replay(args: &ReplayArgs) -> Result<Vec<String>> {
    let config = super::load_config(args.config.as_deref())?;
    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read {}", args.script.display()))?;
    let steps = parse_script(&script)?;

    let Some(image) = ImageSize::new(args.image.0, args.image.1) else {
        bail!("Invalid image size {}x{}", args.image.0, args.image.1);
    };

    let wheel = WheelNormalizer::new(config.wheel_multiplier);
    let mut engine = ViewportEngine::new(&config);
    engine.set_viewport_rect(ViewportRect::new(args.viewport.0, args.viewport.1));
    engine.on_image_ready(image);

    let mut rows = vec![format!("{:>4}  {:<24}{}", 0, "load", engine.placement())];
    for (line, step) in steps {
        match step {
            Step::Command(cmd) => engine.apply(cmd),
            Step::Resize(w, h) => engine.set_viewport_rect(ViewportRect::new(w, h)),
            Step::Wheel(dy) => engine.zoom_by(wheel.normalize(WheelEvent::pixels(dy)).zoom_delta),
        }
        rows.push(format!("{line:>4}  {:<24}{}", describe(&step), engine.placement()));
    }
    Ok(rows)
}

fn describe(step: &Step) -> String {
    match step {
        Step::Command(cmd) => cmd.to_string(),
        Step::Resize(w, h) => format!("Resize {w}x{h}"),
        Step::Wheel(dy) => format!("Wheel {dy}"),
    }
}

/// Parse a script into `(line number, step)` pairs, skipping blank lines and
/// `#` comments.
fn parse_script(script: &str) -> Result<Vec<(usize, Step)>> {
    let mut steps = Vec::new();
    for (index, raw) in script.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let step = parse_line(line).with_context(|| format!("line {}: '{line}'", index + 1))?;
        steps.push((index + 1, step));
    }
    Ok(steps)
}

fn parse_line(line: &str) -> Result<Step> {
    let mut parts = line.split_whitespace();
    let Some(name) = parts.next() else {
        bail!("empty command");
    };
    let args: Vec<f32> = parts
        .map(|p| p.parse::<f32>().with_context(|| format!("invalid number '{p}'")))
        .collect::<Result<_>>()?;

    let arity = |n: usize| -> Result<()> {
        if args.len() != n {
            bail!("'{name}' takes {n} argument(s), got {}", args.len());
        }
        Ok(())
    };

    let step = match name {
        "pan" => {
            arity(2)?;
            Step::Command(ViewerCommand::Pan(Vec2::new(args[0], args[1])))
        }
        "zoom-by" => {
            arity(1)?;
            Step::Command(ViewerCommand::ZoomBy(args[0]))
        }
        "zoom-to" => {
            arity(1)?;
            Step::Command(ViewerCommand::ZoomTo(args[0]))
        }
        "zoom-in" => {
            arity(0)?;
            Step::Command(ViewerCommand::ZoomIn)
        }
        "zoom-out" => {
            arity(0)?;
            Step::Command(ViewerCommand::ZoomOut)
        }
        "fit" => {
            arity(0)?;
            Step::Command(ViewerCommand::Fit)
        }
        "actual-size" => {
            arity(0)?;
            Step::Command(ViewerCommand::ActualSize)
        }
        "resize" => {
            arity(2)?;
            Step::Resize(args[0], args[1])
        }
        "wheel" => {
            arity(1)?;
            Step::Wheel(args[0])
        }
        other => bail!("unknown command '{other}'"),
    };
    Ok(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_skips_comments_and_blank_lines() {
        let script = "# warm up\nfit\n\npan 10 -5  # drag left\nwheel -120\nresize 640 480\n";
        let steps = parse_script(script).unwrap();
        assert_eq!(
            steps,
            vec![
                (2, Step::Command(ViewerCommand::Fit)),
                (4, Step::Command(ViewerCommand::Pan(Vec2::new(10.0, -5.0)))),
                (5, Step::Wheel(-120.0)),
                (6, Step::Resize(640.0, 480.0)),
            ]
        );
    }

    #[test]
    fn test_parse_error_names_line() {
        let err = parse_script("fit\nzoom-to\n").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 2"), "got: {msg}");
        assert!(msg.contains("takes 1 argument"), "got: {msg}");
    }

    #[test]
    fn test_unknown_command_rejected() {
        let err = parse_line("rotate 90").unwrap_err();
        assert!(err.to_string().contains("unknown command 'rotate'"));
    }

    fn args_for(script: PathBuf) -> ReplayArgs {
        ReplayArgs {
            script,
            image: (400.0, 100.0),
            viewport: (200.0, 200.0),
            config: None,
        }
    }

    #[test]
    fn test_replay_script_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("steps.txt");
        std::fs::write(&script, "# zoom then refit\nactual-size\nfit\n").unwrap();

        let rows = replay(&args_for(script)).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("load"));
        assert!(rows[1].starts_with("   2  Actual Size"), "got: {}", rows[1]);
        assert_eq!(rows[0].split_at(4).0, "   0");
        // fit restores the initial placement
        assert_eq!(rows[0].split_at(30).1, rows[2].split_at(30).1);
    }

    #[test]
    fn test_replay_missing_script_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("missing.txt");
        let err = replay(&args_for(script)).unwrap_err();
        assert!(err.to_string().contains("missing.txt"), "got: {err}");
    }

    #[test]
    fn test_invalid_number_rejected() {
        assert!(parse_line("pan 1 two").is_err());
    }
}
