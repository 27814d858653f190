//! Default TOML config template with inline documentation comments.

use crate::schema::CONFIG_SCHEMA_VERSION;

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    format!(
        r##"# colorfield configuration
# Schema version {CONFIG_SCHEMA_VERSION}
# Only override what you want to change -- missing fields use defaults.

[field]
# notation = "hex"                 # hex, rgb, rgba
# initial_color = "rgb(0,180,240)" # any notation
# default_color = "#ffffff"        # shown when the field is empty

[logging]
# level = "info"                   # trace, debug, info, warn, error
"##
    )
}
