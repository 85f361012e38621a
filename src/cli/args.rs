use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vakit", version, about = "Prayer times for Turkish provinces in the terminal")]
pub struct Cli {
    /// Latitude to use instead of looking up the position
    #[arg(long, global = true, allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude to use instead of looking up the position
    #[arg(long, global = true, allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<f64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayer times and the countdown to the next one
    Times {
        /// Province name, e.g. Ankara
        city: String,
    },
    /// Print the 30-day Ramadan imsakiye
    Ramadan {
        /// Province name, e.g. İzmir
        city: String,
    },
    /// Find the province closest to a position
    Nearest {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Show or set the colour theme
    Theme {
        /// dark or light
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["vakit"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.lat.is_none());
    }

    #[test]
    fn position_override_is_global() {
        let cli = Cli::try_parse_from(["vakit", "--lat", "41.0", "--lon", "29.0"]).unwrap();
        assert_eq!(cli.lat, Some(41.0));
        assert_eq!(cli.lon, Some(29.0));
    }

    #[test]
    fn latitude_alone_is_rejected() {
        assert!(Cli::try_parse_from(["vakit", "--lat", "41.0"]).is_err());
    }

    #[test]
    fn nearest_takes_two_numbers() {
        let cli = Cli::try_parse_from(["vakit", "nearest", "38.42", "27.14"]).unwrap();
        match cli.command {
            Some(Commands::Nearest { lat, lon }) => {
                assert_eq!(lat, 38.42);
                assert_eq!(lon, 27.14);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn theme_value_is_optional() {
        let cli = Cli::try_parse_from(["vakit", "theme"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Theme { value: None })));
    }
}
