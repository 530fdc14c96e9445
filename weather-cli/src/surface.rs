use weather_core::{DisplayModel, ResultView, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Plain,
    Json,
}

/// Prints search state to the terminal. Results go to stdout, everything
/// else to stderr.
#[derive(Debug)]
pub struct TerminalSurface {
    format: Format,
}

impl TerminalSurface {
    pub fn new(format: Format) -> Self {
        Self { format }
    }
}

impl Surface for TerminalSurface {
    fn render(&mut self, display: &DisplayModel) {
        if display.loading {
            eprintln!("Looking up weather...");
        }
        if let Some(message) = &display.error {
            eprintln!("{message}");
        }
        if let Some(view) = &display.result {
            match self.format {
                Format::Plain => println!("{}", plain_result(view)),
                Format::Json => match serde_json::to_string_pretty(view) {
                    Ok(json) => println!("{json}"),
                    Err(e) => tracing::error!(error = %e, "failed to serialize result"),
                },
            }
        }
    }
}

fn plain_result(view: &ResultView) -> String {
    let mut lines = vec![
        view.city.clone(),
        format!("  Temperature: {} °C", view.temperature),
        format!("  Wind speed:  {} km/h", view.wind_speed),
        format!("  Conditions:  {}", view.icon_alt),
    ];
    if let Some(observed_at) = &view.observed_at {
        lines.push(format!("  Observed:    {observed_at}"));
    }
    lines.push(format!("  Icon:        {}", view.icon_uri));
    lines.join("\n")
}
