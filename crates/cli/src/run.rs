// Command implementations: load grid, run the engine, write the payload

use std::io::{self, Read, Write};
use std::path::Path;

use tintgrid_config::{HighlightMode, Settings, DEFAULT_CONFIG};
use tintgrid_engine::{
    apply_preset, conditional_format, highlight, parse_prompt, ColorPair, Condition, Grid,
    PresetAction, StyleGrid,
};
use tintgrid_io::{FormattedSheet, GridFormat};

use crate::{CliError, FormatArg, IoArgs, ModeArg};

pub(crate) struct Context {
    settings: Settings,
    compact: bool,
}

impl Context {
    /// An explicit `--config` must load cleanly; the default location falls
    /// back to defaults on any problem.
    pub fn new(config: Option<&Path>, compact: bool) -> Result<Self, CliError> {
        let settings = match config {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load(),
        };
        Ok(Self { settings, compact })
    }

    pub fn highlight(&self, instruction: &str, mode: Option<ModeArg>, io: &IoArgs) -> Result<(), CliError> {
        let grid = self.load_grid(io)?;
        let mode = match mode {
            Some(ModeArg::Literal) => HighlightMode::Literal,
            Some(ModeArg::Prompt) => HighlightMode::Prompt,
            None => self.settings.highlight.mode,
        };
        log::info!("highlight ({mode}): {:?} over {} rows", instruction, grid.len());

        let styles = match mode {
            HighlightMode::Literal => highlight(instruction, &grid),
            HighlightMode::Prompt => parse_prompt(instruction, &grid).unwrap_or_else(|| {
                log::warn!("not a highlighting request (no \"highlight\" in prompt); nothing styled");
                StyleGrid::empty_like(&grid)
            }),
        };
        self.emit(grid, styles, io)
    }

    pub fn preset(&self, tag: &str, io: &IoArgs) -> Result<(), CliError> {
        let action: PresetAction = tag.parse().map_err(|e: tintgrid_engine::EngineError| {
            CliError::from(e).with_hint("run `tintgrid presets` for the list")
        })?;
        let grid = self.load_grid(io)?;
        log::info!("preset {action} over {} rows", grid.len());

        let styles = apply_preset(action, &grid);
        self.emit(grid, styles, io)
    }

    pub fn where_cmd(
        &self,
        column: &str,
        condition: &str,
        color: Option<&str>,
        io: &IoArgs,
    ) -> Result<(), CliError> {
        let condition = Condition::parse(condition)?;
        let pair = match color {
            Some(name) => ColorPair::by_name(name).ok_or_else(|| {
                let known: Vec<&str> = ColorPair::names().collect();
                CliError::args(format!("unknown color '{name}'"))
                    .with_hint(format!("one of: {}", known.join(", ")))
            })?,
            None => self.settings.condition_pair(),
        };

        let grid = self.load_grid(io)?;
        log::info!("where {column:?} {condition} over {} rows", grid.len());

        let styles = conditional_format(&grid, column, &condition, pair).map_err(|e| {
            let headers: Vec<String> = grid
                .first()
                .map(|h| h.iter().map(|c| c.raw_display()).collect())
                .unwrap_or_default();
            CliError::from(e).with_hint(format!("headers: {}", headers.join(", ")))
        })?;
        self.emit(grid, styles, io)
    }

    pub fn show_config(&self, default: bool) -> Result<(), CliError> {
        if default {
            print!("{}", DEFAULT_CONFIG);
            return Ok(());
        }
        println!("# {}", Settings::config_path().display());
        print!("{}", self.settings.to_toml()?);
        Ok(())
    }

    fn load_grid(&self, io: &IoArgs) -> Result<Grid, CliError> {
        let delimiter = match io.delimiter {
            Some(c) if c.is_ascii() => Some(c as u8),
            Some(c) => return Err(CliError::args(format!("delimiter must be ASCII, got {c:?}"))),
            None => self.settings.delimiter(),
        };

        match &io.input {
            Some(path) => {
                let format = io.from.map(grid_format).unwrap_or_else(|| GridFormat::from_path(path));
                tintgrid_io::load(path, format, delimiter).map_err(CliError::input)
            }
            None => {
                let format = io.from.map(grid_format).ok_or_else(|| {
                    CliError::args("reading from stdin requires --from")
                        .with_hint("e.g. cat data.csv | tintgrid highlight 'top 5' -f csv")
                })?;
                let mut bytes = Vec::new();
                io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(|e| CliError::input(format!("stdin: {e}")))?;
                let content = tintgrid_io::csv::decode(bytes);
                tintgrid_io::parse(&content, format, delimiter).map_err(CliError::input)
            }
        }
    }

    fn emit(&self, grid: Grid, styles: StyleGrid, io: &IoArgs) -> Result<(), CliError> {
        log::debug!("{} styled cells in {} rows", styles.styled_cells(), styles.styled_rows().len());

        let payload = if self.settings.output.include_data && !io.no_data {
            FormattedSheet::new(grid, styles)
        } else {
            FormattedSheet::formatting_only(styles)
        };
        let pretty = self.settings.output.pretty && !self.compact;

        match &io.output {
            Some(path) => payload.write(path, pretty).map_err(CliError::io),
            None => {
                let json = payload.to_json(pretty).map_err(CliError::io)?;
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", json).map_err(|e| CliError::io(e.to_string()))
            }
        }
    }
}

pub(crate) fn list_presets() -> Result<(), CliError> {
    for action in PresetAction::ALL {
        println!("{:<22}{}", action.tag(), action.label());
    }
    Ok(())
}

fn grid_format(arg: FormatArg) -> GridFormat {
    match arg {
        FormatArg::Csv => GridFormat::Csv,
        FormatArg::Tsv => GridFormat::Tsv,
        FormatArg::Json => GridFormat::Json,
    }
}
