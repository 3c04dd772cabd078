use anyhow::{Context, Result};

use mentorflow::cli::{self, Commands};
use mentorflow::export;
use mentorflow::mock;
use mentorflow::tui::{App, run_tui};

fn main() -> Result<()> {
    let args = cli::parse_args();

    match args.command {
        Some(Commands::Export(export_args)) => {
            let report = mock::upload_report();
            let path = export::write_report(&export_args.out, &report)
                .context("Failed to export report")?;
            println!("Отчет сохранен: {}", path.display());
        }
        None => {
            let export_dir = match args.export_dir {
                Some(dir) => dir,
                None => std::env::current_dir().context("Failed to resolve current directory")?,
            };

            let app = match args.demo {
                Some(role) => App::logged_in(mock::demo_profile(role.into()), export_dir),
                None => App::new(export_dir),
            };
            run_tui(app)?;
        }
    }

    Ok(())
}
