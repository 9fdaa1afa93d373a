mod cmd_args;

use std::process::ExitCode;

use anyhow::Context;
use clap::ArgMatches;
use heightmap_packer::image_pipeline::{
    HeightMapPackPipeline, HeightMapUnpackPipeline, PackConfig, TiffCompression, TiffPredictor,
    UnpackConfig, PngCompression,
};
use heightmap_packer::logger;

use tracing::{error, info};

use crate::cmd_args::{PngLevel, PredictorArg, TiffLevel};

fn paths(args: &ArgMatches) -> anyhow::Result<(&String, &String)> {
    let input = args.get_one::<String>("in").context("missing input path")?;
    let output = args.get_one::<String>("out").context("missing output path")?;
    Ok((input, output))
}

fn pack(args: &ArgMatches) -> anyhow::Result<()> {
    let (input, output) = paths(args)?;
    let compression = args
        .get_one::<PngLevel>("compression")
        .copied()
        .map(PngCompression::from)
        .unwrap_or(PngCompression::Default);

    let config = PackConfig::builder()
        .compression(compression)
        .parallel(args.get_flag("parallel"))
        .build();
    let pipeline = HeightMapPackPipeline::new(config);

    info!("Compression: {:?}", pipeline.config().compression);
    info!(
        "Row splitting: {}",
        if pipeline.config().parallel {
            "parallel"
        } else {
            "sequential"
        }
    );

    pipeline
        .convert_file(input, output)
        .with_context(|| format!("packing {} into {}", input, output))
}

fn unpack(args: &ArgMatches) -> anyhow::Result<()> {
    let (input, output) = paths(args)?;
    let compression = args
        .get_one::<TiffLevel>("compression")
        .copied()
        .map(TiffCompression::from)
        .unwrap_or(TiffCompression::DeflateBalanced);

    let predictor = args
        .get_one::<PredictorArg>("predictor")
        .copied()
        .map(TiffPredictor::from)
        .unwrap_or(TiffPredictor::None);

    let config = UnpackConfig::builder()
        .compression(compression)
        .predictor(predictor)
        .build();
    let pipeline = HeightMapUnpackPipeline::new(config);

    info!("Compression: {:?}", pipeline.config().compression);
    info!("Predictor: {:?}", pipeline.config().predictor);

    pipeline
        .convert_file(input, output)
        .with_context(|| format!("unpacking {} into {}", input, output))
}

fn main() -> ExitCode {
    let matches = cmd_args::create_cmd_args().get_matches();

    if matches.get_flag("trace") {
        logger::init_with_default("trace");
    } else if matches.get_flag("debug") {
        logger::init_with_default("debug");
    } else {
        logger::init();
    }

    info!("Starting heightmap_packer...");

    let result = match matches.subcommand() {
        Some(("pack", sub)) => pack(sub),
        Some(("unpack", sub)) => unpack(sub),
        _ => Err(anyhow::anyhow!("no subcommand given")),
    };

    match result {
        Ok(()) => {
            info!("Conversion successful!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
