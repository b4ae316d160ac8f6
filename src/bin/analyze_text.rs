use anyhow::{bail, Context};
use std::io::Read;
use text_origin_lib::models::AnalysisOutcome;
use text_origin_lib::services::{get_api_key, render_text, Analyzer};

/// Value following `key`; a flag given without one is an error.
fn parse_arg_value(args: &[String], key: &str) -> anyhow::Result<Option<String>> {
    let Some(i) = args.iter().position(|a| a == key) else {
        return Ok(None);
    };
    match args.get(i + 1) {
        Some(v) if !v.starts_with("--") && !v.trim().is_empty() => Ok(Some(v.clone())),
        _ => bail!("{} requires a value", key),
    }
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

/// First argument that is neither a flag nor a flag's value.
fn input_path(args: &[String]) -> Option<String> {
    const VALUED: [&str; 3] = ["--model", "--ai-label", "--out"];
    let mut iter = args.iter().skip(1);
    while let Some(a) = iter.next() {
        if VALUED.contains(&a.as_str()) {
            iter.next();
            continue;
        }
        if a.starts_with("--") {
            continue;
        }
        return Some(a.clone());
    }
    None
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read stdin failed")?;
            Ok(text)
        }
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read file failed: {}", p)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if has_flag(&args, "--help") || has_flag(&args, "-h") {
        eprintln!(
            "Usage:\n  analyze_text [<path>|-] [--model <name>] [--ai-label <label>] [--json] [--out <json_path>]\n\nNotes:\n  - Without a path (or with `-`) the text is read from stdin.\n  - The API token is read from HF_TOKEN / HUGGINGFACE_API_TOKEN / TEXTORIGIN_HF_TOKEN or the config file."
        );
        return Ok(());
    }

    text_origin_lib::init_cli_logging();

    let path = input_path(&args);
    let as_json = has_flag(&args, "--json");
    let out_path = parse_arg_value(&args, "--out")?;

    let model = parse_arg_value(&args, "--model")?;
    let ai_label = parse_arg_value(&args, "--ai-label")?;

    let (store, mut config) = text_origin_lib::load_config();
    if let Some(model) = model {
        config.classifier.model = model;
    }
    if let Some(label) = ai_label {
        config.classifier.ai_label = label;
    }

    let text = read_input(path.as_deref())?;
    let analyzer = Analyzer::from_config(&config, get_api_key(store.as_ref()))
        .context("classifier setup failed")?;

    let outcome = analyzer.analyze(&text).await.context("analysis failed")?;

    let report = match &outcome {
        AnalysisOutcome::EmptyInput { warning } => {
            eprintln!("{}", warning);
            return Ok(());
        }
        AnalysisOutcome::Report(report) => report,
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("Model: {}", report.model);
        println!();
        print!("{}", render_text(report));
    }

    if let Some(out_path) = out_path {
        let json = serde_json::to_string_pretty(&outcome)?;
        std::fs::write(&out_path, json).with_context(|| format!("write out failed: {}", out_path))?;
        eprintln!("Wrote JSON: {}", out_path);
    }

    Ok(())
}
