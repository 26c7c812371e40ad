use std::{io::Read, path::Path};

use clap::Parser;
use miette::IntoDiagnostic;
use tagword::{cli::Options, Image, RenderOptions};

fn main() -> miette::Result<()> {
    // Install the panic handler.
    bupropion::install(bupropion::BupropionHandlerOpts::new).into_diagnostic()?;

    // Parse the command line arguments.
    let options = Options::parse();

    // Logs go to stderr, stdout only ever holds the printed value.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(options.log_filter().parse().into_diagnostic()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let render_options = RenderOptions {
        max_depth: options.max_depth,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    #[cfg(feature = "linked")]
    if options.image.is_none() {
        let program = tagword::runtime::primitives::Linked;
        tagword::run(program, options.heap_words, &render_options, &mut out)?;
        return Ok(());
    }

    let image = read_image(options.image.as_deref())?;
    image.fits(options.heap_words)?;

    tagword::run(image, options.heap_words, &render_options, &mut out)?;

    Ok(())
}

fn read_image(path: Option<&Path>) -> tagword::Result<Image> {
    let source = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            source
        }
    };

    Image::parse(&source)
}
