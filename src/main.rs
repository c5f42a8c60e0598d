//! Command line colour converter.
//!
//! Usage: `rwcolour <space> <value> [<target space>...]`
//! Numeric values are comma separated, e.g. `rwcolour hsv 200,50,75 hex cmyk`.

use anyhow::{Context, Result};
use clap::Parser;
use rwcolour::{Colour, ColourDescriptor, ColourModel, ColourSpace, InvalidInput, Value};

#[derive(Parser, Debug)]
#[command(name = "rwcolour")]
#[command(about = "Convert a colour between colour spaces", long_about = None)]
struct Args {
    /// Colour space of the input (rgb, rgbfull, hsv, hex, hexlong, cmy, cmyk)
    space: ColourSpace,
    /// Comma separated channels, or hex text for the hex spaces
    #[arg(allow_hyphen_values = true)]
    value: String,
    /// Spaces to print; every space when omitted
    targets: Vec<ColourSpace>,
}

/// Interpret a command line value for `space`.
fn parse_value(space: ColourSpace, text: &str) -> Result<Value> {
    if space.is_hex() {
        return Ok(Value::from(text));
    }
    let channels = text
        .split(',')
        .map(|channel| {
            channel
                .trim()
                .parse::<f64>()
                .with_context(|| format!("\"{channel}\" is not a number"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::from(channels))
}

/// Convert the input colour and format one `space: value` line per target.
fn run(args: &Args) -> Result<Vec<String>> {
    let descriptor = ColourDescriptor {
        colour: parse_value(args.space, &args.value)?,
        colour_space: args.space,
        on_invalid: InvalidInput::Report,
        ..Default::default()
    };
    let colour = Colour::new(&descriptor)
        .with_context(|| format!("cannot read \"{}\" as {}", args.value, args.space))?;

    let targets = if args.targets.is_empty() {
        ColourSpace::ALL.to_vec()
    } else {
        args.targets.clone()
    };
    Ok(targets
        .into_iter()
        .map(|target| format!("{target}: {}", colour.get_in(target)))
        .collect())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    for line in run(&args)? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(argv: &[&str]) -> Result<Vec<String>> {
        let args = Args::try_parse_from(std::iter::once("rwcolour").chain(argv.iter().copied()))?;
        run(&args)
    }

    #[test]
    fn test_parses_positionals() {
        let args = Args::try_parse_from(["rwcolour", "HSV", "200,50,75", "hex", "cmyk"]).unwrap();
        assert_eq!(args.space, ColourSpace::Hsv);
        assert_eq!(args.value, "200,50,75");
        assert_eq!(args.targets, vec![ColourSpace::Hex, ColourSpace::Cmyk]);
    }

    #[test]
    fn test_named_targets() {
        assert_eq!(
            lines(&["hex", "#FF8800", "rgbfull", "hexlong"]).unwrap(),
            vec!["rgbfull: [255, 136, 0, 1]", "hexlong: ff8800ff"]
        );
    }

    #[test]
    fn test_every_space_without_targets() {
        let out = lines(&["rgb", "1,0,0"]).unwrap();
        assert_eq!(out.len(), ColourSpace::ALL.len());
        for (line, space) in out.iter().zip(ColourSpace::ALL) {
            assert!(line.starts_with(&format!("{space}: ")), "{line}");
        }
        assert_eq!(out[3], "hex: ff0000");
    }

    #[test]
    fn test_negative_channels() {
        let args = Args::try_parse_from(["rwcolour", "rgb", "-0.5,0,0", "rgb"]).unwrap();
        assert_eq!(args.value, "-0.5,0,0");
        assert_eq!(run(&args).unwrap(), vec!["rgb: [0, 0, 0, 1]"]);
    }

    #[test]
    fn test_rejected_colour() {
        let err = lines(&["hex", "zz"]).unwrap_err();
        assert_eq!(err.to_string(), "cannot read \"zz\" as hex");
        assert!(lines(&["rgb", "1,x,0"]).is_err());
        assert!(lines(&["rgb", "1"]).is_err());
    }

    #[test]
    fn test_unknown_space() {
        assert!(Args::try_parse_from(["rwcolour", "lab", "1,2,3"]).is_err());
        assert!(Args::try_parse_from(["rwcolour", "rgb", "1,0,0", "xyz"]).is_err());
        assert!(Args::try_parse_from(["rwcolour", "rgb"]).is_err());
    }
}
