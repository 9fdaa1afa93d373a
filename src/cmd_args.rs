use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};

use heightmap_packer::image_pipeline::{PngCompression, TiffCompression, TiffPredictor};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum PngLevel {
    Fast,
    Default,
    Best,
}

impl ValueEnum for PngLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Fast, Self::Default, Self::Best]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Fast => PossibleValue::new("fast"),
            Self::Default => PossibleValue::new("default"),
            Self::Best => PossibleValue::new("best"),
        })
    }
}

impl From<PngLevel> for PngCompression {
    fn from(level: PngLevel) -> Self {
        match level {
            PngLevel::Fast => PngCompression::Fast,
            PngLevel::Default => PngCompression::Default,
            PngLevel::Best => PngCompression::Best,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum TiffLevel {
    None,
    Lzw,
    DeflateFast,
    Deflate,
    DeflateBest,
}

impl ValueEnum for TiffLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::None, Self::Lzw, Self::DeflateFast, Self::Deflate, Self::DeflateBest]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::None => PossibleValue::new("none"),
            Self::Lzw => PossibleValue::new("lzw"),
            Self::DeflateFast => PossibleValue::new("deflate-fast"),
            Self::Deflate => PossibleValue::new("deflate"),
            Self::DeflateBest => PossibleValue::new("deflate-best"),
        })
    }
}

impl From<TiffLevel> for TiffCompression {
    fn from(level: TiffLevel) -> Self {
        match level {
            TiffLevel::None => TiffCompression::None,
            TiffLevel::Lzw => TiffCompression::Lzw,
            TiffLevel::DeflateFast => TiffCompression::DeflateFast,
            TiffLevel::Deflate => TiffCompression::DeflateBalanced,
            TiffLevel::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum PredictorArg {
    None,
    Horizontal,
}

impl ValueEnum for PredictorArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::None, Self::Horizontal]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::None => PossibleValue::new("none"),
            Self::Horizontal => PossibleValue::new("horizontal"),
        })
    }
}

impl From<PredictorArg> for TiffPredictor {
    fn from(arg: PredictorArg) -> Self {
        match arg {
            PredictorArg::None => TiffPredictor::None,
            PredictorArg::Horizontal => TiffPredictor::Horizontal,
        }
    }
}

fn input_arg() -> Arg {
    Arg::new("in")
        .short('i')
        .long("input")
        .help("Input file to read data from")
        .required(true)
}

fn output_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("output")
        .help("Output file to write the data to")
        .required(true)
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("heightmap_packer")
        .about("Split 16-bit height maps into the green and red channels of an 8-bit PNG")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .subcommand(Command::new("pack")
            .about("Pack a 16-bit single-channel image into an 8-bit RGB PNG")
            .arg(input_arg())
            .arg(output_arg()
                .help("Output PNG file; the output is always PNG, so the name must end in .png or have no extension"))
            .arg(Arg::new("compression")
                .long("compression")
                .help("PNG compression level")
                .value_parser(value_parser!(PngLevel))
                .default_value("default"))
            .arg(Arg::new("parallel")
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("Split rows on all cores")))
        .subcommand(Command::new("unpack")
            .about("Rebuild a 16-bit TIFF height map from a packed PNG")
            .arg(input_arg())
            .arg(output_arg())
            .arg(Arg::new("compression")
                .long("compression")
                .help("TIFF compression method")
                .value_parser(value_parser!(TiffLevel))
                .default_value("deflate"))
            .arg(Arg::new("predictor")
                .long("predictor")
                .help("TIFF sample predictor")
                .value_parser(value_parser!(PredictorArg))
                .default_value("none")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_args() {
        let matches = create_cmd_args()
            .try_get_matches_from(["heightmap_packer", "pack", "-i", "in.png", "-o", "out.png", "--parallel"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();

        assert_eq!(name, "pack");
        assert_eq!(sub.get_one::<String>("in").unwrap(), "in.png");
        assert_eq!(sub.get_one::<String>("out").unwrap(), "out.png");
        assert_eq!(*sub.get_one::<PngLevel>("compression").unwrap(), PngLevel::Default);
        assert!(sub.get_flag("parallel"));
    }

    #[test]
    fn test_paths_are_required() {
        let result = create_cmd_args().try_get_matches_from(["heightmap_packer", "pack", "-i", "in.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unpack_compression() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "heightmap_packer", "unpack", "-i", "a.png", "-o", "b.tiff", "--compression", "lzw",
                "--predictor", "horizontal",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        assert_eq!(*sub.get_one::<TiffLevel>("compression").unwrap(), TiffLevel::Lzw);
        assert_eq!(
            TiffPredictor::from(*sub.get_one::<PredictorArg>("predictor").unwrap()),
            TiffPredictor::Horizontal
        );
    }

    #[test]
    fn test_unpack_predictor_defaults_to_none() {
        let matches = create_cmd_args()
            .try_get_matches_from(["heightmap_packer", "unpack", "-i", "a.png", "-o", "b.tiff"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        assert_eq!(*sub.get_one::<PredictorArg>("predictor").unwrap(), PredictorArg::None);
    }
}
