use clap::{Args, Parser, Subcommand};

use crate::core::{
    bounds::{fit_width, terminal_geometry},
    config::Config,
};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "linegraph",
    about = "Line charts in the terminal, drawn with box-drawing glyphs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// Emit debug diagnostics (timings, scaling) on stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot numbers read from a file or stdin
    Plot(PlotArgs),
    /// Plot a seeded random walk
    Demo(DemoArgs),
    /// Print example invocations
    Examples,
}

/// Options shared by every command that draws a chart.
#[derive(Args, Debug, Clone, Default)]
pub struct ChartArgs {
    /// Rows of the chart (derived from the data range if omitted)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Resample the series to this many columns
    #[arg(short, long, conflicts_with = "fit")]
    pub width: Option<usize>,

    /// Columns reserved for labels and the tick
    #[arg(short, long, default_value_t = crate::core::DEFAULT_OFFSET)]
    pub offset: usize,

    /// Baseline decimal digits in labels
    #[arg(short, long, default_value_t = crate::core::DEFAULT_PRECISION)]
    pub precision: usize,

    /// Caption centred under the chart
    #[arg(short, long)]
    pub caption: Option<String>,

    /// Resample to fill the terminal width
    #[arg(long)]
    pub fit: bool,

    /// Clear the screen before drawing
    #[arg(long)]
    pub clear: bool,
}

impl ChartArgs {
    #[must_use]
    pub fn config(&self) -> Config {
        let mut b = Config::builder()
            .offset(self.offset)
            .precision(self.precision)
            .caption_opt(self.caption.as_deref());
        if let Some(h) = self.height {
            b = b.height(h);
        }
        if let Some(w) = self.width {
            b = b.width(w);
        } else if self.fit {
            b = b.width(fit_width(terminal_geometry().0, self.offset));
        }
        b.build()
    }
}

/// `linegraph plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[command(flatten)]
    pub chart: ChartArgs,
}

/// `linegraph demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 60)]
    pub samples: usize,
    /// RNG seed (clock-seeded if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = 1.0)]
    pub sigma: f64,

    #[command(flatten)]
    pub chart: ChartArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_flags_map_onto_config() {
        let cli = Cli::parse_from([
            "linegraph", "plot", "data.txt", "-H", "8", "-w", "40", "-o", "5", "-p", "1", "-c",
            "latency",
        ]);
        let Command::Plot(a) = cli.cmd else {
            panic!("expected plot");
        };
        assert_eq!(a.file, "data.txt");
        let cfg = a.chart.config();
        assert_eq!(cfg.height, Some(8));
        assert_eq!(cfg.width, Some(40));
        assert_eq!(cfg.offset, 5);
        assert_eq!(cfg.precision, 1);
        assert_eq!(cfg.caption, "latency");
    }

    #[test]
    fn defaults_match_library_defaults() {
        let cli = Cli::parse_from(["linegraph", "plot"]);
        let Command::Plot(a) = cli.cmd else {
            panic!("expected plot");
        };
        assert_eq!(a.file, "-");
        assert_eq!(a.chart.config(), Config::default());
    }

    #[test]
    fn global_debug_after_subcommand() {
        let cli = Cli::parse_from(["linegraph", "demo", "--seed", "7", "--debug"]);
        assert!(cli.debug);
        let Command::Demo(a) = cli.cmd else {
            panic!("expected demo");
        };
        assert_eq!(a.seed, Some(7));
        assert_eq!(a.samples, 60);
    }

    #[test]
    fn width_and_fit_conflict() {
        assert!(Cli::try_parse_from(["linegraph", "plot", "-w", "10", "--fit"]).is_err());
    }
}
