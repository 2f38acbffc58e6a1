//! CLI to Config conversion utilities

use crate::config::cli::{self, Cli};
use crate::config::{DistributionConfig, OutputFormat};
use crate::distribution::function::NamedFunction;
use anyhow::Result;

/// Convert CLI FunctionName to NamedFunction
pub fn convert_function_name(cli_name: cli::FunctionName) -> NamedFunction {
    match cli_name {
        cli::FunctionName::Linear => NamedFunction::Linear,
        cli::FunctionName::Square => NamedFunction::Square,
        cli::FunctionName::Cube => NamedFunction::Cube,
        cli::FunctionName::Sqrt => NamedFunction::Sqrt,
        cli::FunctionName::Exp => NamedFunction::Exp,
        cli::FunctionName::Ln => NamedFunction::Ln,
        cli::FunctionName::Tanh => NamedFunction::Tanh,
        cli::FunctionName::Sinh => NamedFunction::Sinh,
        cli::FunctionName::Atan => NamedFunction::Atan,
    }
}

/// Convert CLI FormatType to OutputFormat
pub fn convert_format_type(cli_format: cli::FormatType) -> OutputFormat {
    match cli_format {
        cli::FormatType::Text => OutputFormat::Text,
        cli::FormatType::Csv => OutputFormat::Csv,
        cli::FormatType::Json => OutputFormat::Json,
    }
}

/// Distribution type the CLI asks for
///
/// An explicit `--distribution` wins. Otherwise geometric options select the
/// geometric distribution, function options the function distribution, and
/// with neither the configuration file's choice stands.
pub fn resolve_distribution_type(cli: &Cli, base: &DistributionConfig) -> cli::DistributionType {
    if let Some(kind) = cli.distribution {
        return kind;
    }
    if cli.growth_factor.is_some() || cli.centered || cli.no_centered || cli.scaling_factor.is_some() {
        return cli::DistributionType::Geometric;
    }
    if cli.function.is_some() || cli.arg_first.is_some() || cli.arg_last.is_some() {
        return cli::DistributionType::Function;
    }
    match base {
        DistributionConfig::Uniform => cli::DistributionType::Uniform,
        DistributionConfig::Geometric { .. } => cli::DistributionType::Geometric,
        DistributionConfig::Function { .. } => cli::DistributionType::Function,
    }
}

/// Merge CLI distribution options over `base`
///
/// Parameters not given on the command line are taken from `base` when it is
/// of the same type, and from the defaults otherwise.
pub fn merge_distribution(cli: &Cli, base: &DistributionConfig) -> Result<DistributionConfig> {
    match resolve_distribution_type(cli, base) {
        cli::DistributionType::Uniform => Ok(DistributionConfig::Uniform),
        cli::DistributionType::Geometric => {
            let (growth_factor, centered, scaling_factor) = match *base {
                DistributionConfig::Geometric {
                    growth_factor,
                    centered,
                    scaling_factor,
                } => (growth_factor, centered, scaling_factor),
                _ => (1.0, false, 1.0),
            };
            Ok(DistributionConfig::Geometric {
                growth_factor: cli.growth_factor.unwrap_or(growth_factor),
                centered: resolve_centered(cli, centered),
                scaling_factor: cli.scaling_factor.unwrap_or(scaling_factor),
            })
        }
        cli::DistributionType::Function => {
            let (function, argument_first, argument_last) = match *base {
                DistributionConfig::Function {
                    function,
                    argument_first,
                    argument_last,
                } => (Some(function), argument_first, argument_last),
                _ => (None, 0.0, 1.0),
            };
            let function = cli
                .function
                .map(convert_function_name)
                .or(function)
                .ok_or_else(|| anyhow::anyhow!("--function is required for the function distribution"))?;
            Ok(DistributionConfig::Function {
                function,
                argument_first: cli.arg_first.unwrap_or(argument_first),
                argument_last: cli.arg_last.unwrap_or(argument_last),
            })
        }
    }
}

/// `--centered` / `--no-centered` override the configured value
fn resolve_centered(cli: &Cli, configured: bool) -> bool {
    if cli.centered {
        true
    } else if cli.no_centered {
        false
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gridgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_convert_function_name() {
        assert_eq!(convert_function_name(cli::FunctionName::Ln), NamedFunction::Ln);
        assert_eq!(convert_function_name(cli::FunctionName::Sinh), NamedFunction::Sinh);
    }

    #[test]
    fn test_convert_format_type() {
        assert_eq!(convert_format_type(cli::FormatType::Json), OutputFormat::Json);
        assert_eq!(convert_format_type(cli::FormatType::Csv), OutputFormat::Csv);
    }

    #[test]
    fn test_resolve_inferred_type() {
        let base = DistributionConfig::Uniform;
        assert_eq!(resolve_distribution_type(&parse(&[]), &base), cli::DistributionType::Uniform);
        assert_eq!(
            resolve_distribution_type(&parse(&["--centered"]), &base),
            cli::DistributionType::Geometric
        );
        assert_eq!(
            resolve_distribution_type(&parse(&["-f", "exp"]), &base),
            cli::DistributionType::Function
        );
    }

    #[test]
    fn test_merge_keeps_base_parameters() {
        let base = DistributionConfig::Geometric {
            growth_factor: 1.5,
            centered: true,
            scaling_factor: 2.0,
        };
        let merged = merge_distribution(&parse(&["-g", "3"]), &base).unwrap();
        assert_eq!(
            merged,
            DistributionConfig::Geometric {
                growth_factor: 3.0,
                centered: true,
                scaling_factor: 2.0,
            }
        );
    }

    #[test]
    fn test_merge_no_centered_overrides_config() {
        let base = DistributionConfig::Geometric {
            growth_factor: 1.5,
            centered: true,
            scaling_factor: 1.0,
        };
        let merged = merge_distribution(&parse(&["--no-centered"]), &base).unwrap();
        assert_eq!(
            merged,
            DistributionConfig::Geometric {
                growth_factor: 1.5,
                centered: false,
                scaling_factor: 1.0,
            }
        );

        // Without either flag the configured value stands
        let merged = merge_distribution(&parse(&[]), &base).unwrap();
        assert_eq!(merged, base);

        assert_eq!(
            resolve_distribution_type(&parse(&["--no-centered"]), &DistributionConfig::Uniform),
            cli::DistributionType::Geometric
        );
    }

    #[test]
    fn test_merge_switches_type() {
        let base = DistributionConfig::Function {
            function: NamedFunction::Exp,
            argument_first: 0.0,
            argument_last: 2.0,
        };
        let merged = merge_distribution(&parse(&["-d", "geometric"]), &base).unwrap();
        assert_eq!(
            merged,
            DistributionConfig::Geometric {
                growth_factor: 1.0,
                centered: false,
                scaling_factor: 1.0,
            }
        );

        let merged = merge_distribution(&parse(&["-d", "uniform"]), &base).unwrap();
        assert_eq!(merged, DistributionConfig::Uniform);
    }

    #[test]
    fn test_merge_function_requires_name() {
        let base = DistributionConfig::Uniform;
        assert!(merge_distribution(&parse(&["-d", "function"]), &base).is_err());

        let merged = merge_distribution(&parse(&["-d", "function", "-f", "sqrt", "--arg-last", "4"]), &base).unwrap();
        assert_eq!(
            merged,
            DistributionConfig::Function {
                function: NamedFunction::Sqrt,
                argument_first: 0.0,
                argument_last: 4.0,
            }
        );
    }
}
