use std::fmt::Write as _;

use super::catalog::{
    COMMANDS,
    reference_catalog,
    response_paths,
};
use crate::format::Localizer;

/// Renders a Markdown overview of every loaded locale.
///
/// Each locale lists the catalog commands (`/name - description`) and the
/// catalog responses as they currently resolve, misses included.
#[must_use]
pub fn generate_translation_report(localizer: &Localizer) -> String {
    let catalog = reference_catalog();
    let locales = localizer.available_locales();
    let mut report = String::from("# Translation System Report\n\n");

    let _ = writeln!(report, "## Available Locales: {}\n", locales.join(", "));

    for locale in &locales {
        let _ = writeln!(report, "## Locale: {}\n", locale.to_uppercase());

        report.push_str("### Commands\n");
        for command in COMMANDS {
            let name = localizer.get_command_name(command, locale);
            let description = localizer.get_command_description(command, locale);
            let _ = writeln!(report, "- **{command}**: `/{name}` - {description}");
        }
        report.push('\n');

        report.push_str("### Responses\n");
        for path in response_paths(&catalog) {
            let message = localizer.get_response(path, locale, &[]);
            let _ = writeln!(report, "- **{path}**: {message}");
        }
        report.push('\n');
    }

    report
}
