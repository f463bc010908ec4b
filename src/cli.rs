use crate::arrows::dependency_arrows;
use crate::config::{load_config, Config};
use crate::dump::{
    slot_dump, write_dump, ArrowDump, GraphDump, NavigationDump, OrderDump, TreeDump,
};
use crate::highlight::HighlightColors;
use crate::ir::Direction;
use crate::snapshot::{parse_workspace, Workspace};
use crate::sort::SpatialSorter;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "panenav",
    version,
    about = "Spatial ordering and navigation for panes on a canvas"
)]
pub struct Args {
    /// Workspace snapshot (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (theme and navigation settings)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// What to compute
    #[arg(short = 'm', long = "mode", value_enum, default_value = "order")]
    pub mode: Mode,

    /// Navigation steps for next/previous
    #[arg(short = 'n', long = "steps", default_value_t = 1)]
    pub steps: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Flat navigation order with digit slots
    Order,
    /// Top-level row/column grouping
    Tree,
    Next,
    Previous,
    /// Aggregated relationship graph
    Graph,
    /// Dependency arrow geometry
    Arrows,
    /// Digit keys bound to visible panes
    Slots,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.input.as_deref())?;
    let workspace = parse_workspace(&input)?;
    execute(&args, &config, workspace)
}

/// Runs one `mode` against `workspace` and writes the resulting dump.
pub fn execute(args: &Args, config: &Config, workspace: Workspace) -> Result<()> {
    let Workspace {
        panes,
        viewport,
        selection,
        relationships,
    } = workspace;

    let mut sorter = SpatialSorter::new(config.navigation.clone());
    sorter.should_regenerate_relationships(panes);
    let output = args.output.as_deref();

    match args.mode {
        Mode::Order => write_dump(output, &OrderDump::from_sorter(&mut sorter, &viewport)),
        Mode::Tree => write_dump(output, &TreeDump::from_forest(&sorter.forest())),
        Mode::Next | Mode::Previous => {
            let direction = if args.mode == Mode::Next {
                Direction::Next
            } else {
                Direction::Previous
            };
            let steps = (0..args.steps)
                .map(|_| {
                    sorter
                        .next(direction, &viewport, &selection)
                        .map(|pane| pane.id.clone())
                })
                .collect();
            let dump = NavigationDump {
                direction: format!("{direction:?}").to_lowercase(),
                steps,
            };
            write_dump(output, &dump)
        }
        Mode::Graph => {
            let graph = sorter.build_relationship_graph(&relationships);
            write_dump(output, &GraphDump::from_graph(graph))
        }
        Mode::Arrows => {
            sorter.build_relationship_graph(&relationships);
            let mut colors = HighlightColors::new(&config.theme);
            colors.assign(sorter.relationships(), sorter.panes());
            let arrows: Vec<ArrowDump> = dependency_arrows(
                sorter.relationships(),
                sorter.panes(),
                &colors,
                &config.theme,
            )
            .iter()
            .map(ArrowDump::from_arrow)
            .collect();
            write_dump(output, &arrows)
        }
        Mode::Slots => write_dump(output, &slot_dump(&mut sorter, &viewport)),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .map_err(|err| anyhow::anyhow!("failed to read {}: {err}", path.display()));
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
