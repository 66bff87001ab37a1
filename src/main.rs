//! Landing Sections CLI
//!
//! Entry point for the `landing` command-line tool.

use clap::{Args, Parser, Subcommand, ValueEnum};
use landing_sections::config::parse_cli_overrides;
use landing_sections::edit::{override_for_edit, EditRequest};
use landing_sections::navigation::mock::RecordingHost;
use landing_sections::navigation::SmartNavigator;
use landing_sections::render::{render_page, Reveal};
use landing_sections::{
    init_tracing, BillingPeriod, EffectiveConfig, FieldPath, Hero, Pricing, Section, SectionKind,
};
use serde_json::Value;
use std::path::PathBuf;
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(name = "landing")]
#[command(about = "Render and edit configurable landing-page sections", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OverrideArgs {
    /// Overrides file with [hero] / [pricing] tables (TOML, or JSON by extension)
    #[arg(long, short = 'o')]
    overrides: Option<PathBuf>,

    /// Top-level override, KEY=VALUE (VALUE parsed as JSON, else a string)
    #[arg(long = "set", short = 's')]
    set: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum RenderTarget {
    Hero,
    Pricing,
    All,
}

#[derive(Subcommand)]
enum Commands {
    /// Render section markup to stdout
    Render {
        target: RenderTarget,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// Render the pricing table with yearly billing
        #[arg(long)]
        yearly: bool,

        /// Render in the pre-entrance (hidden) state
        #[arg(long)]
        hidden: bool,
    },

    /// List every editable field a section renders
    Fields {
        section: SectionKind,

        #[command(flatten)]
        overrides: OverrideArgs,

        #[arg(long)]
        yearly: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Resolve a field path against the merged configuration
    Get {
        section: SectionKind,

        /// Field path, e.g. plans[1].features[2]
        path: String,

        #[command(flatten)]
        overrides: OverrideArgs,
    },

    /// Print the override that applies an inline edit
    Edit {
        section: SectionKind,

        /// Field path to edit
        path: String,

        /// New value (parsed as JSON, else a string)
        value: String,

        #[command(flatten)]
        overrides: OverrideArgs,
    },

    /// Explain how a destination would be navigated
    Nav {
        /// Destination string; omit to simulate an undefined destination
        destination: Option<String>,

        /// Element id present on the simulated page (repeatable)
        #[arg(long)]
        anchor: Vec<String>,

        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "landing_sections=warn,smart_nav=warn",
        1 => "landing_sections=debug,smart_nav=debug",
        _ => "landing_sections=trace,smart_nav=trace",
    };
    init_tracing(default_filter);

    match cli.command {
        Commands::Render {
            target,
            overrides,
            yearly,
            hidden,
        } => run_render(target, &overrides, yearly, hidden),
        Commands::Fields {
            section,
            overrides,
            yearly,
            json,
        } => run_fields(section, &overrides, yearly, json),
        Commands::Get {
            section,
            path,
            overrides,
        } => run_get(section, &path, &overrides),
        Commands::Edit {
            section,
            path,
            value,
            overrides,
        } => run_edit(section, &path, &value, &overrides),
        Commands::Nav {
            destination,
            anchor,
            human,
        } => run_nav(destination, anchor, human),
    }
}

fn load_effective(section: SectionKind, args: &OverrideArgs) -> EffectiveConfig {
    let cli = if args.set.is_empty() {
        None
    } else {
        match parse_cli_overrides(&args.set) {
            Ok(value) => Some(value),
            Err(e) => {
                eprintln!("Error parsing --set: {}", e);
                process::exit(1);
            }
        }
    };

    match EffectiveConfig::build(section, args.overrides.as_deref(), cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading overrides: {}", e);
            process::exit(1);
        }
    }
}

fn build_section(effective: EffectiveConfig, yearly: bool, hidden: bool) -> Box<dyn Section> {
    let reveal = if hidden { Reveal::default() } else { Reveal::visible() };
    match effective.section {
        SectionKind::Hero => Box::new(Hero::from_config(effective.config).with_reveal(reveal)),
        SectionKind::Pricing => {
            let mut pricing = Pricing::from_config(effective.config);
            if yearly {
                pricing.set_billing(BillingPeriod::Yearly);
            }
            Box::new(pricing)
        }
    }
}

fn parse_path(raw: &str) -> FieldPath {
    match raw.parse() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Invalid field path '{}': {}", raw, e);
            process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn run_render(target: RenderTarget, args: &OverrideArgs, yearly: bool, hidden: bool) {
    let kinds: &[SectionKind] = match target {
        RenderTarget::Hero => &[SectionKind::Hero],
        RenderTarget::Pricing => &[SectionKind::Pricing],
        RenderTarget::All => &SectionKind::ALL,
    };

    let sections: Vec<Box<dyn Section>> = kinds
        .iter()
        .map(|kind| build_section(load_effective(*kind, args), yearly, hidden))
        .collect();
    let refs: Vec<&dyn Section> = sections.iter().map(|s| s.as_ref()).collect();

    print!("{}", render_page(&refs));
}

fn run_fields(section: SectionKind, args: &OverrideArgs, yearly: bool, json_output: bool) {
    let effective = load_effective(section, args);
    let rendered = build_section(effective, yearly, false).render();

    if json_output {
        print_json(&rendered.fields);
        return;
    }

    for field in &rendered.fields {
        let role = format!("{:?}", field.role).to_lowercase();
        println!("{:<28} {:<5} {}", field.path.to_string(), role, field.value);
    }
}

fn run_get(section: SectionKind, raw_path: &str, args: &OverrideArgs) {
    let path = parse_path(raw_path);
    let effective = load_effective(section, args);

    let Some(value) = effective.config.get(&path) else {
        eprintln!("Path '{}' does not resolve in the {} configuration", path, section);
        process::exit(1);
    };

    let origin = path.top_level_key().and_then(|key| effective.origin_of(key));
    debug!(path = %path, ?origin, "resolved field");
    print_json(value);
}

fn run_edit(section: SectionKind, raw_path: &str, raw_value: &str, args: &OverrideArgs) {
    let path = parse_path(raw_path);
    let value: Value =
        serde_json::from_str(raw_value).unwrap_or_else(|_| Value::String(raw_value.to_string()));
    let effective = load_effective(section, args);

    let edit = EditRequest::new(path, value);
    match override_for_edit(&effective.config, effective.override_value(), &edit) {
        Ok(overrides) => print_json(&overrides),
        Err(e) => {
            eprintln!("Edit rejected: {}", e);
            process::exit(1);
        }
    }
}

fn run_nav(destination: Option<String>, anchors: Vec<String>, human: bool) {
    let host = anchors
        .into_iter()
        .fold(RecordingHost::new(), |host, id| host.with_anchor(id));
    let mut navigator = SmartNavigator::new(host);
    let resolution = navigator.navigate_explained(destination.as_deref());
    let host = navigator.into_host();

    if human {
        println!("Destination: {}", destination.as_deref().unwrap_or("<undefined>"));
        println!("Decision: {}", resolution.describe());
        for call in host.calls() {
            println!("  host: {:?}", call);
        }
        return;
    }

    print_json(&serde_json::json!({
        "input": destination,
        "resolution": resolution,
        "calls": host.calls(),
    }));
}
