//! Response formatting on top of path resolution.
mod localizer;
mod template;

pub use localizer::{
    DEFAULT_EMBED_COLOR,
    EmbedKind,
    LocalizedEmbed,
    Localizer,
    locale_flag,
    parse_hex_color,
};
pub use template::{
    FormatArg,
    FormatError,
    format_template,
};
