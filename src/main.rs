use clap::{Parser, Subcommand};
use geostamp::capture::{FileCapture, GeoFix};
use geostamp::export::{ExportSink, GalleryDir, write_jpeg};
use geostamp::permissions::{Capability, HostProbe, PermissionProbe, ensure};
use geostamp::{config, stamp};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geostamp")]
#[command(about = "Stamp photos with GPS coordinates and capture time")]
#[command(long_about = "\
Stamp photos with GPS coordinates and capture time

Composites two lines of text into the bottom-right corner of a photo:

  Location: 37.7749, -122.4194
  Time: 14:05:30

and optionally exports the result as a quality-100 JPEG named
IMG_<yyyyMMdd_HHmmss>.jpg into a gallery directory.

Without --lat/--lon the location line falls back to the placeholder
'Location: null, null', matching the camera app this tool mirrors.

Style and gallery settings come from geostamp.toml in the working
directory; run 'geostamp gen-config' for a documented starting point.")]
#[command(version)]
struct Cli {
    /// Config file (default: ./geostamp.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Stamp a photo and optionally export it to the gallery
    Stamp {
        /// The captured photo to stamp
        image: PathBuf,
        /// Latitude of the location fix
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        /// Longitude of the location fix
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        /// Export the stamped image into the gallery directory
        #[arg(long)]
        save: bool,
        /// Write the stamped image to this path instead of the gallery
        #[arg(long, conflicts_with = "save")]
        out: Option<PathBuf>,
        /// Gallery directory (overrides config)
        #[arg(long)]
        gallery: Option<PathBuf>,
    },
    /// Report the capability checks for a photo without stamping it
    Check {
        image: PathBuf,
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        #[arg(long)]
        gallery: Option<PathBuf>,
    },
    /// Print a stock geostamp.toml with all options documented
    GenConfig,
}

fn load_config(cli_config: Option<&PathBuf>) -> Result<config::Config, config::ConfigError> {
    match cli_config {
        Some(path) => config::Config::load(path),
        None => config::Config::load_or_default(std::path::Path::new(".")),
    }
}

fn make_fix(lat: Option<f64>, lon: Option<f64>) -> Option<GeoFix> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Some(GeoFix { lat, lon }),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Stamp {
            image,
            lat,
            lon,
            save,
            out,
            gallery,
        } => {
            let cfg = load_config(cli.config.as_ref())?;
            let gallery_dir = gallery.unwrap_or_else(|| PathBuf::from(&cfg.gallery.dir));
            let mut fix = make_fix(lat, lon);

            let probe = HostProbe {
                input: image.clone(),
                gallery: gallery_dir.clone(),
                has_fix: fix.is_some(),
            };
            if !ensure(&probe, Capability::Camera) {
                return Err(format!("camera denied: cannot read {}", image.display()).into());
            }
            if !ensure(&probe, Capability::Location) {
                // Same fallback the camera app made: stamp the placeholder.
                println!("No location fix; stamping placeholder coordinates");
                fix = None;
            }
            if save && !ensure(&probe, Capability::Storage) {
                return Err(format!(
                    "storage denied: cannot write {}",
                    gallery_dir.display()
                )
                .into());
            }

            let source = FileCapture::new(&image, fix);
            let sink = GalleryDir::new(&gallery_dir);
            let sink_ref: Option<&dyn ExportSink> = save.then_some(&sink as &dyn ExportSink);

            let (report, stamped) = stamp::stamp_photo(&source, sink_ref, &cfg.text_style())?;

            println!(
                "Stamped {} ({}x{})",
                image.display(),
                report.width,
                report.height
            );
            println!("  {}", report.location_line);
            println!("  {}", report.time_line);
            if let Some(path) = &report.exported {
                println!("Saved to gallery: {}", path.display());
            }
            if let Some(out) = out {
                write_jpeg(&stamped, &out)?;
                println!("Wrote {}", out.display());
            }
        }
        Command::Check {
            image,
            lat,
            lon,
            gallery,
        } => {
            let cfg = load_config(cli.config.as_ref())?;
            let gallery_dir = gallery.unwrap_or_else(|| PathBuf::from(&cfg.gallery.dir));
            let probe = HostProbe {
                input: image,
                gallery: gallery_dir,
                has_fix: make_fix(lat, lon).is_some(),
            };
            let mut all_granted = true;
            for capability in [Capability::Camera, Capability::Storage, Capability::Location] {
                let granted = probe.check(capability);
                all_granted &= granted;
                println!(
                    "{:<10} {}",
                    capability.to_string(),
                    if granted { "granted" } else { "denied" }
                );
            }
            if !all_granted {
                std::process::exit(1);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
