//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r#"# bobthetiler configuration
# Only override what you want to change -- missing fields use defaults.

[ids]
# "timestamp" seeds container ids from the clock when a tree is created,
# "fixed" starts every tree at `start`.
seed = "timestamp"
# start = 1              # >= 1

[logging]
# tracing EnvFilter directive
filter = "bob=info"
"#
}
