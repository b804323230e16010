//! Clinigraph CLI: inspect the profile network and export charts offline
//!
//! Runs the same render cycle as the dashboard, without a server.

use clap::{Parser, Subcommand};
use clinigraph::graph::{build_graph, filter_categories, Category};
use clinigraph::{Dashboard, DashboardConfig, Dataset, Selection};
use comfy_table::{ContentArrangement, Table};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "clinigraph", version, about = "Clinigraph profile network CLI")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "CLINIGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(clap::Args)]
struct SelectionArgs {
    /// Comma-separated profile names (default: all)
    #[arg(long)]
    profiles: Option<String>,

    /// Comma-separated categories: Profils, Symptômes, Comorbidités (default: all)
    #[arg(long)]
    categories: Option<String>,
}

impl SelectionArgs {
    fn resolve(&self, dataset: &Dataset) -> clinigraph::DashboardResult<Selection> {
        Selection::parse(dataset, self.profiles.as_deref(), self.categories.as_deref())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the nodes and edges of the filtered network
    Graph {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Print the radar scores per axis
    Radar {
        /// Comma-separated profile names (default: all)
        #[arg(long)]
        profiles: Option<String>,
    },
    /// Write radar.svg and network.svg
    Export {
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// List the available profiles, axes and categories
    Options,
}

fn main() {
    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| {
        let dashboard = Dashboard::new(Arc::new(Dataset::builtin()), config);
        match &cli.command {
            Commands::Graph { selection } => run_graph(&dashboard, selection, &cli.format),
            Commands::Radar { profiles } => run_radar(&dashboard, profiles.as_deref(), &cli.format),
            Commands::Export { out, selection } => run_export(&dashboard, selection, out),
            Commands::Options => run_options(&dashboard, &cli.format),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<DashboardConfig, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    })
}

fn run_graph(
    dashboard: &Dashboard,
    args: &SelectionArgs,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = dashboard.dataset();
    let selection = args.resolve(dataset)?;
    let graph = build_graph(dataset, selection.profiles())?;
    let graph = filter_categories(&graph, selection.categories());

    match format {
        OutputFormat::Json => {
            let nodes: Vec<serde_json::Value> = graph
                .nodes()
                .map(|k| {
                    serde_json::json!({
                        "label": k.label,
                        "category": k.category,
                        "degree": graph.degree(k),
                    })
                })
                .collect();
            let edges: Vec<serde_json::Value> = graph
                .edges()
                .map(|(a, b)| serde_json::json!({ "source": a, "target": b }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "nodes": nodes, "edges": edges }))?
            );
        }
        OutputFormat::Csv => {
            println!("source,source_category,target,target_category");
            for (a, b) in graph.edges() {
                println!(
                    "{},{},{},{}",
                    format_csv_value(&a.label),
                    a.category.slug(),
                    format_csv_value(&b.label),
                    b.category.slug()
                );
            }
        }
        OutputFormat::Table => {
            if graph.is_empty() {
                println!("(empty network)");
                return Ok(());
            }

            let mut nodes = Table::new();
            nodes.set_content_arrangement(ContentArrangement::Dynamic);
            nodes.set_header(vec!["Node", "Category", "Degree"]);
            for key in graph.nodes() {
                nodes.add_row(vec![
                    key.label.clone(),
                    key.category.to_string(),
                    graph.degree(key).to_string(),
                ]);
            }
            println!("{}", nodes);

            let mut edges = Table::new();
            edges.set_content_arrangement(ContentArrangement::Dynamic);
            edges.set_header(vec!["From", "To"]);
            for (a, b) in graph.edges() {
                edges.add_row(vec![a.to_string(), b.to_string()]);
            }
            println!("{}", edges);
            println!("{} node(s), {} edge(s)", graph.node_count(), graph.edge_count());
        }
    }

    Ok(())
}

fn run_radar(
    dashboard: &Dashboard,
    profiles: Option<&str>,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = dashboard.dataset();
    let selection = Selection::parse(dataset, profiles, None)?;
    let radar = clinigraph::RadarView::new(dataset, selection.profiles())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&radar)?);
        }
        OutputFormat::Csv => {
            let mut header = vec!["axis".to_string()];
            header.extend(radar.series.iter().map(|s| format_csv_value(&s.profile)));
            println!("{}", header.join(","));
            for (i, axis) in radar.axes.iter().enumerate() {
                let mut row = vec![format_csv_value(axis)];
                row.extend(radar.series.iter().map(|s| s.scores[i].to_string()));
                println!("{}", row.join(","));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            let mut header = vec!["Axe".to_string()];
            header.extend(radar.series.iter().map(|s| s.profile.clone()));
            table.set_header(header);
            for (i, axis) in radar.axes.iter().enumerate() {
                let mut row = vec![axis.clone()];
                row.extend(radar.series.iter().map(|s| s.scores[i].to_string()));
                table.add_row(row);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn run_export(
    dashboard: &Dashboard,
    args: &SelectionArgs,
    out: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let selection = args.resolve(dashboard.dataset())?;
    let view = dashboard.render(&selection)?;

    std::fs::create_dir_all(out)?;
    let radar_path = out.join("radar.svg");
    let network_path = out.join("network.svg");
    std::fs::write(&radar_path, dashboard.radar_svg(&view))?;
    std::fs::write(&network_path, dashboard.network_svg(&view))?;

    println!("✅ Saved {}", radar_path.display());
    println!("✅ Saved {}", network_path.display());
    Ok(())
}

fn run_options(dashboard: &Dashboard, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = dashboard.dataset();

    match format {
        OutputFormat::Json => {
            let categories: Vec<&str> = Category::ALL.iter().map(|c| c.display_name()).collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "profiles": dataset.profile_names(),
                    "axes": dataset.axes(),
                    "categories": categories,
                }))?
            );
        }
        _ => {
            println!("Profiles:   {}", dataset.profile_names().join(", "));
            println!("Axes:       {}", dataset.axes().join(", "));
            println!(
                "Categories: {}",
                Category::ALL
                    .iter()
                    .map(|c| c.display_name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }

    Ok(())
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_csv_value() {
        assert_eq!(format_csv_value("TPB"), "TPB");
        assert_eq!(
            format_csv_value("Phase maniaque : humeur élevée/irritable, énergie excessive"),
            "\"Phase maniaque : humeur élevée/irritable, énergie excessive\""
        );
        assert_eq!(format_csv_value("dit \"non\""), "\"dit \"\"non\"\"\"");
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "clinigraph",
            "--format",
            "csv",
            "graph",
            "--profiles",
            "TPB",
            "--categories",
            "Symptômes",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Csv));
        match cli.command {
            Commands::Graph { selection } => {
                assert_eq!(selection.profiles.as_deref(), Some("TPB"));
                assert_eq!(selection.categories.as_deref(), Some("Symptômes"));
            }
            _ => panic!("expected graph command"),
        }
    }
}
