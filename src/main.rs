//! ccp-novation CLI
//!
//! Print the data behind each page of the CCP novation explainer.
//!
//! # Usage
//!
//! ```bash
//! # Bilateral vs CCP link counts
//! ccp-novation links --intermediaries 5
//!
//! # The novation walkthrough, or a single step
//! ccp-novation steps --step 3
//!
//! # Hypothetical risk trend as JSON
//! ccp-novation risk --periods 24 --format json
//!
//! # Node and edge sets for a topology
//! ccp-novation topology --intermediaries 6 --kind star
//!
//! # Everything a page shows, with widget clamping applied
//! ccp-novation page network --intermediaries 8
//! ```

use ccp_novation::core::error::NovationError;
use ccp_novation::core::link_math::LinkCount;
use ccp_novation::graph::topology::{build_complete_topology, build_star_topology};
use ccp_novation::narrative::novation::{generate_novation_steps, novation_step};
use ccp_novation::series::risk_exposure::generate_hypothetical_risk_exposure;
use ccp_novation::shell::inputs::{ShellInputs, INTERMEDIARIES, PERIODS};
use ccp_novation::shell::page::{render_page, Page};
use serde::Serialize;
use std::process;

fn print_usage() {
    eprintln!(
        r#"ccp-novation — central clearing and novation, as data

USAGE:
    ccp-novation <COMMAND> [OPTIONS]

COMMANDS:
    links       Bilateral vs CCP link counts for N intermediaries
    steps       The four-step novation walkthrough
    risk        Hypothetical risk exposure series
    topology    Node and edge sets of the complete or star network
    page        Data shown by one page (overview, novation, network, trends)
    help        Show this message

OPTIONS:
    --intermediaries <N>   Number of intermediaries (links, topology, page)
    --periods <P>          Number of monthly observations (risk, page)
    --step <K>             Novation step 1-4 (steps, page)
    --kind <KIND>          complete (default) or star (topology)
    --format <FORMAT>      Output format: text (default) or json

EXAMPLES:
    ccp-novation links --intermediaries 5
    ccp-novation steps --format json
    ccp-novation risk --periods 36
    ccp-novation topology --intermediaries 4 --kind star
    ccp-novation page trends --periods 12 --format json"#
    );
}

#[derive(Debug, Default)]
struct Options {
    intermediaries: Option<i64>,
    periods: Option<i64>,
    step: Option<i64>,
    kind: Option<String>,
    json: bool,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn parse_number(flag: &str, value: Option<&String>) -> i64 {
    value
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| fail(format!("{} requires an integer", flag)))
}

fn parse_options(args: &[String]) -> Options {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--intermediaries" | "-n" => {
                i += 1;
                options.intermediaries = Some(parse_number("--intermediaries", args.get(i)));
            }
            "--periods" => {
                i += 1;
                options.periods = Some(parse_number("--periods", args.get(i)));
            }
            "--step" => {
                i += 1;
                options.step = Some(parse_number("--step", args.get(i)));
            }
            "--kind" => {
                i += 1;
                options.kind = Some(
                    args.get(i)
                        .cloned()
                        .unwrap_or_else(|| fail("--kind requires 'complete' or 'star'")),
                );
            }
            "--format" => {
                i += 1;
                options.json = match args.get(i).map(String::as_str) {
                    Some("json") => true,
                    Some("text") => false,
                    _ => fail("--format requires 'text' or 'json'"),
                };
            }
            other => fail(format!("Unknown option: {}", other)),
        }
        i += 1;
    }
    options
}

fn or_exit<T>(result: Result<T, NovationError>) -> T {
    result.unwrap_or_else(|e| fail(e))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(format!("serializing output: {}", e)),
    }
}

fn cmd_links(options: &Options) {
    let n = options.intermediaries.unwrap_or(INTERMEDIARIES.default);
    let links = or_exit(LinkCount::for_intermediaries(n));
    if options.json {
        print_json(&links);
    } else {
        println!("Intermediaries: {}", links.intermediaries);
        println!("{}", links);
        println!(
            "Links saved:    {} ({:.1}%)",
            links.links_saved(),
            links.reduction_percent()
        );
    }
}

fn cmd_steps(options: &Options) {
    let steps = match options.step {
        Some(k) => vec![or_exit(novation_step(k))],
        None => generate_novation_steps(),
    };
    if options.json {
        print_json(&steps);
    } else {
        for step in &steps {
            println!("{}\n", step);
        }
    }
}

fn cmd_risk(options: &Options) {
    let periods = options.periods.unwrap_or(PERIODS.default);
    let series = or_exit(generate_hypothetical_risk_exposure(periods));
    if options.json {
        print_json(&series);
    } else {
        println!("Idx  Date        Score");
        for obs in &series {
            println!("{}", obs);
        }
    }
}

fn cmd_topology(options: &Options) {
    let n = options.intermediaries.unwrap_or(INTERMEDIARIES.default);
    let topology = match options.kind.as_deref().unwrap_or("complete") {
        "complete" | "bilateral" => or_exit(build_complete_topology(n)),
        "star" | "ccp" => or_exit(build_star_topology(n)),
        other => fail(format!("Unknown topology kind: {}", other)),
    };
    if options.json {
        print_json(&topology.data());
    } else {
        print!("{}", topology);
    }
}

fn cmd_page(args: &[String]) {
    let Some(name) = args.first() else {
        fail("page requires a name: overview, novation, network or trends");
    };
    let page: Page = or_exit(name.parse());
    let options = parse_options(&args[1..]);

    let defaults = ShellInputs::default();
    let inputs = ShellInputs {
        intermediaries: options.intermediaries.unwrap_or(defaults.intermediaries),
        periods: options.periods.unwrap_or(defaults.periods),
        novation_step: options.step.unwrap_or(defaults.novation_step),
    };
    let content = or_exit(render_page(page, &inputs));
    if options.json {
        print_json(&content);
    } else {
        print!("{}", content);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "links" => cmd_links(&parse_options(rest)),
        "steps" => cmd_steps(&parse_options(rest)),
        "risk" => cmd_risk(&parse_options(rest)),
        "topology" => cmd_topology(&parse_options(rest)),
        "page" => cmd_page(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
