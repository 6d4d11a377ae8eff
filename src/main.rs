// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;

use anyhow::{bail, Context};
use calc_planner::backends::{InMemoryExampleRepository, InMemoryTaskQueue};
use calc_planner::config::{check_config, load_config, Config};
use calc_planner::observability::init_tracing;
use calc_planner::service::{CalculationRequest, CalculatorService};

struct Args {
    config_file: Option<String>,
    expression: String,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    match args {
        [_, flag, path, expression] if flag == "--config" => Ok(Args {
            config_file: Some(path.clone()),
            expression: expression.clone(),
        }),
        [_, expression] => Ok(Args {
            config_file: None,
            expression: expression.clone(),
        }),
        _ => bail!("expected an expression, optionally preceded by --config <file>"),
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--config <config.yaml>] <expression>", program);
    eprintln!("Example: {} \"2 + 3 * 4\"", program);
    eprintln!("Example: {} --config configs/sequential.yaml \"~(1.5^2)/(4-5*6)\"", program);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let raw: Vec<String> = env::args().collect();
    let program = raw.first().map(String::as_str).unwrap_or("calc-planner");

    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("❌ {}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };

    // Subscriber first, so the config validation outcome is visible.
    let config = match &args.config_file {
        Some(path) => {
            let loaded = load_config(path)
                .with_context(|| format!("failed to load config '{}'", path))?;
            init_tracing(&loaded.logging);
            check_config(loaded, path)
                .with_context(|| format!("invalid config '{}'", path))?
        }
        None => {
            let config = Config::default();
            init_tracing(&config.logging);
            config
        }
    };

    println!("🧮 Distributed Calculator Planner");
    println!("═══════════════════════════════════");
    println!("Service: {}", config.service_name);
    println!("Expression: \"{}\"", args.expression);
    println!("Variables: {:?}", config.variables.strategy);
    println!();

    let (queue, mut receiver) = InMemoryTaskQueue::channel();
    let service = CalculatorService::from_config(
        &config,
        Arc::new(InMemoryExampleRepository::new()),
        Arc::new(queue),
    );

    let record = service
        .calculate(CalculationRequest::new(args.expression.as_str()))
        .await
        .context("planning failed")?;

    if let Some(error) = &record.error {
        println!("❌ Rejected: {}", error);
        println!("   Example ID: {}", record.id);
        std::process::exit(2);
    }

    if let Some(postfix) = &record.postfix {
        println!("🔁 Postfix: {}", postfix);
        println!();
    }

    println!("📋 Tasks ({}):", record.tasks.len());
    for task in &record.tasks {
        println!("   {}", task);
    }
    if let Some(response) = &record.response {
        println!("   Result variable: {}", response);
    }
    println!();

    let levels = record
        .plan()
        .map(|plan| plan.dependency_levels())
        .unwrap_or_default();
    println!("🪜 Dependency levels ({}):", levels.len());
    for (level, indices) in levels.iter().enumerate() {
        let names: Vec<String> = indices.iter().map(|i| format!("#{}", i)).collect();
        println!("   Level {}: {}", level, names.join(", "));
    }
    println!();

    println!("📨 Queue messages:");
    while let Some(message) = receiver.try_recv() {
        let task = message?;
        println!("   {}", serde_json::to_string(&task)?);
    }

    println!("\n✅ Example {} planned", record.id);
    Ok(())
}
