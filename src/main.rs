//! Chisel's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration resolution,
//! and wires the content store, renderer and walker together.

use chisel::{
    cli::{get_args, Args},
    config::get_config,
    content::ContentStore,
    error::{default_error_handler, Result},
    logger::init_logger,
    renderer::MiniJinjaRenderer,
    walker::Walker,
};
use log::debug;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves configuration from defaults, chisel.json and CLI flags
/// 2. Builds the content store and the MiniJinja renderer
/// 3. Performs one full traversal-and-render pass of the site tree
fn run(args: Args) -> Result<()> {
    let config = get_config(&args)?;
    debug!(
        "Generating site from {} with content from {} into {}",
        config.site_dir.display(),
        config.content_dir.display(),
        config.output_dir.display()
    );

    let content = ContentStore::new(&config.content_dir);
    let renderer =
        MiniJinjaRenderer::new(&config.site_dir, content.clone(), &config.load_prefix);

    let walker = Walker::new(&config, &content, &renderer);
    walker.run()?;

    println!("Site generation completed successfully in {}.", config.output_dir.display());
    Ok(())
}
