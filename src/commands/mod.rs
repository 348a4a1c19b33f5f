pub type CmdResult<T> = kotlinbridge::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod config;
pub mod demo;

pub(crate) fn run_raw(
    command: crate::Commands,
    _global: &GlobalArgs,
) -> kotlinbridge::Result<(String, i32)> {
    match command {
        crate::Commands::Demo(args) => demo::run_raw(args),
        _ => Err(kotlinbridge::Error::validation_invalid_argument(
            "output_mode",
            "Command does not support raw output",
            None,
        )),
    }
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (kotlinbridge::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Demo(args) => dispatch!(args, global, demo),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
