//! # Beam Diagram CLI
//!
//! Terminal front end for the configuration catalog: pick a figure,
//! enter its parameters, get the shear and moment diagrams as JSON
//! point series ready for any line-chart renderer.

use std::collections::HashMap;
use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use beam_core::catalog;
use serde::Serialize;

#[derive(Serialize)]
struct DiagramOutput<'a> {
    id: &'a str,
    title: &'a str,
    parameters: Vec<(&'a str, f64)>,
    shear: beam_core::DiagramSeries,
    moment: beam_core::DiagramSeries,
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn list_configurations() {
    println!("Available beam configurations:");
    println!();
    for config in catalog::catalog() {
        println!("  {:<6} {}", config.id, config.title);
    }
}

fn main() -> ExitCode {
    println!("Beam Diagram Calculator");
    println!("=======================");
    println!();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--list") {
        list_configurations();
        return ExitCode::SUCCESS;
    }

    let id = match args.first() {
        Some(id) => id.clone(),
        None => {
            print!("Configuration id [fig1]: ");
            if io::stdout().flush().is_err() {
                return ExitCode::FAILURE;
            }
            let mut input = String::new();
            if io::stdin().lock().read_line(&mut input).is_err() {
                return ExitCode::FAILURE;
            }
            let trimmed = input.trim();
            if trimmed.is_empty() {
                "fig1".to_string()
            } else {
                trimmed.to_string()
            }
        }
    };

    let config = match catalog::find(&id) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --list to see the available ids.");
            return ExitCode::FAILURE;
        }
    };

    println!();
    println!("{}", config.title);
    println!();

    let mut overrides = HashMap::new();
    for spec in config.parameters {
        let value = prompt_f64(
            &format!("{} ({}) [{}]: ", spec.label, spec.unit, spec.default),
            spec.default,
        );
        overrides.insert(spec.name.to_string(), value);
    }

    let params = config.resolve(&overrides);

    println!();
    println!("Equations:");
    for (_, formula) in config.equations {
        println!("  {}", formula);
    }

    let shear = config.shear_diagram(&params);
    let moment = config.moment_diagram(&params);

    println!();
    println!("Shear:  {} ({} points)", shear.axis_label, shear.points.len());
    println!("Moment: {} ({} points)", moment.axis_label, moment.points.len());

    let failed = shear.is_error() || moment.is_error();

    let output = DiagramOutput {
        id: config.id,
        title: config.title,
        parameters: params.entries().to_vec(),
        shear,
        moment,
    };

    println!();
    println!("JSON Output (for renderer/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
