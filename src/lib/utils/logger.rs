use color_eyre::{
    eyre::{bail, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Sets up `env_logger` for the level chosen with the verbosity flag. Directives given
/// through `RUST_LOG` are applied on top of it
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let level = match verbose_level {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => bail!("hxmlgen maximum allowed verbosity level is: '-v'"),
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_target(false)
        .format_timestamp_millis()
        .try_init()
        .with_context(|| "hxmlgen wasn't able to set up the logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_above_debug_is_rejected() {
        assert!(config_logger(2, Target::Stderr).is_err());
    }
}
