use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use irrigation_core::{Config, ErrorBody, PredictionRequest, Predictor};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "irrigation", version, about = "Irrigation predictor CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Predict the required irrigation water volume for a field.
    Predict {
        /// City name for location lookup.
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,

        /// Latitude in [-90, 90]; requires --lon.
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Longitude in [-180, 180]; requires --lat.
        #[arg(long, requires = "lat")]
        lon: Option<f64>,

        /// Field area in square meters, must be positive.
        #[arg(long)]
        area: f64,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Predict { city, lat, lon, area } => {
                let request = validated_request(city, lat, lon, area)?;

                let config = Config::load()?;
                let predictor = Predictor::from_config(&config)?;

                match predictor.predict(request).await {
                    Ok(prediction) => {
                        let json = serde_json::to_string_pretty(&prediction)
                            .context("Failed to serialize prediction")?;
                        println!("{json}");
                        Ok(())
                    }
                    Err(err) => {
                        let body = ErrorBody::from(&err);
                        let json = serde_json::to_string_pretty(&body)
                            .context("Failed to serialize error")?;
                        eprintln!("{json}");
                        std::process::exit(1);
                    }
                }
            }
        }
    }
}

fn configure() -> Result<()> {
    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    let mut config = Config::load()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Range and presence checks for inbound values. The core re-derives the
/// location-presence error, but rejecting here keeps network calls off the
/// obviously-invalid paths.
fn validated_request(
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    area: f64,
) -> Result<PredictionRequest> {
    let has_city = city.as_deref().is_some_and(|c| !c.trim().is_empty());

    if !has_city && (lat.is_none() || lon.is_none()) {
        bail!("Must provide either --city or both --lat and --lon.");
    }

    if let Some(lat) = lat
        && !(-90.0..=90.0).contains(&lat)
    {
        bail!("Latitude must be within [-90, 90], got {lat}.");
    }

    if let Some(lon) = lon
        && !(-180.0..=180.0).contains(&lon)
    {
        bail!("Longitude must be within [-180, 180], got {lon}.");
    }

    if !(area.is_finite() && area > 0.0) {
        bail!("Field area must be positive, got {area}.");
    }

    Ok(PredictionRequest {
        city: city.filter(|c| !c.trim().is_empty()),
        latitude: lat,
        longitude: lon,
        field_size_sq_meter: area,
    })
}
