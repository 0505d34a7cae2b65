use std::{
    io::{Write, stdout},
    time::Instant,
};

use tracing::debug;

use crate::{
    core::{data::read_series_from_path, error::GraphError, rng::Lcg},
    render::render,
};

use super::{
    parse::{ChartArgs, DemoArgs, PlotArgs},
    screen::ClearScreen,
};

pub fn plot(a: &PlotArgs, screen: ClearScreen) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let series = read_series_from_path(&a.file)?;
    debug!(
        samples = series.len(),
        elapsed_us = t_ingest.elapsed().as_micros() as u64,
        "series ingested"
    );
    draw(&series, &a.chart, screen)
}

pub fn demo(a: &DemoArgs, screen: ClearScreen) -> Result<(), GraphError> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let series = rng.random_walk(a.samples, a.sigma);
    draw(&series, &a.chart, screen)
}

fn draw(series: &[f64], chart: &ChartArgs, screen: ClearScreen) -> Result<(), GraphError> {
    let cfg = chart.config();

    let t_render = Instant::now();
    let text = render(series, &cfg)?;
    debug!(
        elapsed_us = t_render.elapsed().as_micros() as u64,
        "chart rendered"
    );

    let mut out = stdout().lock();
    if chart.clear {
        screen.clear(&mut out)?;
    }
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "linegraph";
    println!(
        "
Example invocations
-------------------
• From a file       : {bin} plot samples.txt
• From a pipe       : seq 1 20 | {bin} plot
• Fixed height      : {bin} plot samples.txt -H 10
• Resample to width : {bin} plot samples.txt -w 60
• Fill the terminal : {bin} plot samples.txt --fit
• With a caption    : {bin} plot samples.txt -c \"requests / s\"
• Gaps              : echo '1 2 nan 4 5' | {bin} plot
• Random walk       : {bin} demo --samples 120 --seed 7 --clear
• Diagnostics       : {bin} plot samples.txt --debug
"
    );
}
