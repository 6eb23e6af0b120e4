// Interactive shell driving the pipeline and the region selector
use crate::application::production_repository::FetchError;
use crate::application::region_selector::{RegionSelector, Selection, ALL_REGIONS_LABEL};
use crate::application::render_pipeline::{RenderOutcome, RenderPipeline};
use crate::domain::season::Season;
use crate::presentation::console::{ConsoleChart, ConsoleLegend, ConsoleMap};
use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str =
    "Commands: season <tag>, regions, find <text>, pick <name|all>, close, help, quit";

type Pipeline = RenderPipeline<ConsoleMap, ConsoleChart, ConsoleLegend>;
type PendingRender = LocalBoxFuture<'static, (Season, Result<RenderOutcome, FetchError>)>;

pub struct Shell {
    pipeline: Arc<Pipeline>,
    selector: RegionSelector,
    default_season: Season,
}

impl Shell {
    pub fn new(pipeline: Arc<Pipeline>, default_season: Season) -> Self {
        Self {
            pipeline,
            selector: RegionSelector::new(),
            default_season,
        }
    }

    /// Read commands from stdin while renders run as pending futures, so a
    /// new `season` command genuinely supersedes one still in flight.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut pending: FuturesUnordered<PendingRender> = FuturesUnordered::new();
        pending.push(Self::render(self.pipeline.clone(), self.default_season));

        println!("{HELP}");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        None => break,
                        Some(line) => {
                            if !self.handle_command(line.trim(), &mut pending).await {
                                break;
                            }
                        }
                    }
                }
                Some((season, result)) = pending.next(), if !pending.is_empty() => {
                    report_render(season, result);
                }
            }
        }
        Ok(())
    }

    fn render(pipeline: Arc<Pipeline>, season: Season) -> PendingRender {
        async move {
            let result = pipeline.render_season(season).await;
            (season, result)
        }
        .boxed_local()
    }

    async fn handle_command(
        &mut self,
        line: &str,
        pending: &mut FuturesUnordered<PendingRender>,
    ) -> bool {
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "season" => match rest.parse::<Season>() {
                Ok(season) => pending.push(Self::render(self.pipeline.clone(), season)),
                Err(e) => println!("{e} (one of: annual, winter, spring, summer, autumn)"),
            },
            "regions" => {
                if self.selector.toggle() {
                    self.print_entries().await;
                } else {
                    println!("[selector] closed");
                }
            }
            "find" => {
                if self.selector.is_open() {
                    self.selector.set_filter(rest);
                    self.print_entries().await;
                } else {
                    println!("[selector] not open; use 'regions' first");
                }
            }
            "pick" => {
                if !self.selector.is_open() {
                    println!("[selector] not open; use 'regions' first");
                    return true;
                }
                let label = if rest.eq_ignore_ascii_case("all") {
                    ALL_REGIONS_LABEL
                } else {
                    rest
                };
                let regions = self.pipeline.region_names().await;
                match self.selector.select(label, &regions) {
                    Some(Selection::AllRegions) => self.pipeline.focus_all_regions().await,
                    Some(Selection::Region(name)) => self.pipeline.focus_region(&name).await,
                    None => println!("[selector] no region named '{rest}'"),
                }
            }
            "close" => self.selector.close(),
            "help" => println!("{HELP}"),
            "quit" | "exit" => return false,
            _ => println!("Unknown command '{command}'; try 'help'"),
        }
        true
    }

    async fn print_entries(&self) {
        let regions = self.pipeline.region_names().await;
        let focused = self.pipeline.focused_region().await;
        for entry in self.selector.entries(&regions, &focused) {
            let marker = if entry.active { "* " } else { "  " };
            println!("  {marker}{}", entry.label);
        }
    }
}

fn report_render(season: Season, result: Result<RenderOutcome, FetchError>) {
    match result {
        Ok(RenderOutcome::Rendered { regions, features }) => {
            println!("[render] {season}: {features} shapes, {regions} regions");
        }
        Ok(RenderOutcome::Superseded) => {
            tracing::debug!(%season, "render superseded, nothing to report");
        }
        Err(e) => {
            tracing::error!(%season, error = %e, "season fetch failed");
            println!("Could not load data for season '{season}'. Previous view kept.");
        }
    }
}
