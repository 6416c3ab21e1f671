use crate::cli::AnalyzeArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::ui;
use helixwatch::core::helix::HelixStats;
use helixwatch::engine::extractor::DsspExtractor;
use helixwatch::engine::leaderboard::display_name;
use helixwatch::workflows;
use tracing::info;

pub async fn run(args: AnalyzeArgs, app_config: &AppConfig) -> Result<()> {
    let stats = analyze(&args, app_config)?;
    println!("{}", display_name(&args.path));
    for line in ui::render_stats(&stats) {
        println!("{}", line);
    }
    Ok(())
}

fn analyze(args: &AnalyzeArgs, app_config: &AppConfig) -> Result<HelixStats> {
    if !args.path.is_file() {
        return Err(CliError::Argument(format!(
            "Not a file: {}",
            args.path.display()
        )));
    }

    let stats = if args.dssp_output {
        info!("Reading saved DSSP output from {:?}", &args.path);
        workflows::analyze::analyze_dssp_output(&args.path)?
    } else {
        let extractor = DsspExtractor::new(app_config.dssp_binary.clone(), app_config.dssp_timeout);
        info!("Running {:?} on {:?}", extractor.binary(), &args.path);
        tokio::task::block_in_place(|| workflows::analyze::analyze_file(&args.path, &extractor))?
    };
    Ok(stats)
}
