use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{InquireError, Text};
use weather_core::{
    OpenMeteoProvider, UiState, WeatherCategory, WeatherLookup, city::supported_cities, icon,
};

use crate::surface::{Format, TerminalSurface};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "Current weather for a handful of cities")]
pub struct Cli {
    /// Log filter directive, e.g. "debug" or "weather_core=trace".
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Defaults to `search` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for city names until Esc or Ctrl-C.
    Search,

    /// Show current weather for one city.
    Show {
        /// City name; several words are joined with a space, e.g. `show new york`.
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the supported cities.
    Cities,

    /// Print the generated icon for a weather category.
    Icon {
        #[arg(value_enum)]
        category: CategoryArg,

        /// Print raw SVG markup instead of a data URI.
        #[arg(long)]
        svg: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
}

impl From<CategoryArg> for WeatherCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Clear => WeatherCategory::Clear,
            CategoryArg::PartlyCloudy => WeatherCategory::PartlyCloudy,
            CategoryArg::Fog => WeatherCategory::Fog,
            CategoryArg::Rain => WeatherCategory::Rain,
            CategoryArg::Snow => WeatherCategory::Snow,
            CategoryArg::Thunderstorm => WeatherCategory::Thunderstorm,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command.unwrap_or(Command::Search) {
            Command::Search => search().await,
            Command::Show { city, json } => {
                let format = if json { Format::Json } else { Format::Plain };
                show(&city.join(" "), format).await
            }
            Command::Cities => {
                for city in supported_cities() {
                    println!(
                        "{:<20} {:>9.4} {:>9.4}",
                        city.display_name, city.latitude, city.longitude
                    );
                }
                Ok(ExitCode::SUCCESS)
            }
            Command::Icon { category, svg } => {
                let category = WeatherCategory::from(category);
                if svg {
                    println!("{}", icon::svg_for(category));
                } else {
                    println!("{}", icon::icon_for(category).data_uri);
                }
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

async fn show(city: &str, format: Format) -> anyhow::Result<ExitCode> {
    let mut lookup = WeatherLookup::new(OpenMeteoProvider::new(), TerminalSurface::new(format));

    match lookup.submit(city).await {
        UiState::Result(_) => Ok(ExitCode::SUCCESS),
        _ => Ok(ExitCode::FAILURE),
    }
}

async fn search() -> anyhow::Result<ExitCode> {
    let names: Vec<_> = supported_cities().map(|c| c.display_name).collect();
    println!("Supported cities: {}", names.join("; "));

    let mut lookup =
        WeatherLookup::new(OpenMeteoProvider::new(), TerminalSurface::new(Format::Plain));

    loop {
        let prompt = Text::new("City:").with_help_message("Enter to search, Esc to quit");
        let input = match prompt.prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city name"),
        };

        tokio::select! {
            _ = lookup.submit(&input) => {}
            _ = tokio::signal::ctrl_c() => eprintln!("Search cancelled."),
        }
    }

    Ok(ExitCode::SUCCESS)
}
